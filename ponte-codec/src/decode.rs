//! Parsing a wire document into a [`FieldTree`].
//!
//! Decoding reproduces the conventions of the decoder running inside the
//! legacy registry, so both ends of the bridge see identical structure:
//!
//! - the root element maps directly to its value;
//! - every child value is wrapped in a single-element list, and repeated
//!   sibling tags accumulate into that list;
//! - element attributes merge into the child map as wrapped text values;
//! - non-whitespace text alongside child elements is kept under `"_"`.
//!
//! Malformed markup fails with [`CodecError::Malformed`] and produces no
//! partial tree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{CodecError, CodecResult};
use crate::tree::{FieldTree, Value};

struct Frame {
    name: String,
    children: FieldTree,
    text: String,
}

/// Parses a document into a field tree.
pub fn decode(xml: &str) -> CodecResult<FieldTree> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        match reader.read_event() {
            Err(e) => return Err(CodecError::Malformed(e.to_string())),
            Ok(Event::Eof) => break,
            Ok(Event::Start(start)) => stack.push(open_frame(&start)?),
            Ok(Event::Empty(start)) => {
                let frame = open_frame(&start)?;
                close_frame(frame, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                // Tag mismatches already fail inside read_event.
                let frame = stack
                    .pop()
                    .ok_or_else(|| CodecError::Malformed("unexpected closing tag".to_string()))?;
                close_frame(frame, &mut stack, &mut root)?;
            }
            Ok(Event::Text(text)) => {
                let text = text
                    .unescape()
                    .map_err(|e| CodecError::Malformed(e.to_string()))?;
                match stack.last_mut() {
                    Some(frame) => frame.text.push_str(&text),
                    None => {
                        return Err(CodecError::Malformed(
                            "text outside the root element".to_string(),
                        ));
                    }
                }
            }
            Ok(Event::CData(data)) => {
                let text = String::from_utf8(data.into_inner().into_owned())
                    .map_err(|e| CodecError::Utf8(e.to_string()))?;
                match stack.last_mut() {
                    Some(frame) => frame.text.push_str(&text),
                    None => {
                        return Err(CodecError::Malformed(
                            "character data outside the root element".to_string(),
                        ));
                    }
                }
            }
            // Declarations, comments, processing instructions and doctypes
            // carry no fields.
            Ok(_) => {}
        }
    }

    if !stack.is_empty() {
        return Err(CodecError::Malformed(format!(
            "unterminated element <{}>",
            stack.last().expect("non-empty stack").name
        )));
    }

    match root {
        Some((name, value)) => {
            let mut tree = FieldTree::new();
            tree.insert(name, value);
            Ok(tree)
        }
        None => Err(CodecError::Empty),
    }
}

fn open_frame(start: &BytesStart<'_>) -> CodecResult<Frame> {
    let name = String::from_utf8(start.name().as_ref().to_vec())
        .map_err(|e| CodecError::Utf8(e.to_string()))?;

    let mut children = FieldTree::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| CodecError::Malformed(e.to_string()))?;
        let key = String::from_utf8(attr.key.as_ref().to_vec())
            .map_err(|e| CodecError::Utf8(e.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| CodecError::Malformed(e.to_string()))?
            .into_owned();
        children.push(key, Value::Text(value));
    }

    Ok(Frame {
        name,
        children,
        text: String::new(),
    })
}

fn close_frame(
    frame: Frame,
    stack: &mut Vec<Frame>,
    root: &mut Option<(String, Value)>,
) -> CodecResult<()> {
    let value = if frame.children.is_empty() {
        Value::Text(frame.text)
    } else {
        let mut tree = frame.children;
        if !frame.text.is_empty() {
            tree.insert("_", Value::Text(frame.text));
        }
        Value::Tree(tree)
    };

    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(frame.name, value);
            Ok(())
        }
        None if root.is_some() => Err(CodecError::Malformed(
            "multiple root elements".to_string(),
        )),
        None => {
            *root = Some((frame.name, value));
            Ok(())
        }
    }
}
