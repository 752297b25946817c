//! Rendering a [`FieldTree`] as a wire document.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{CodecError, CodecResult};
use crate::tree::{FieldTree, Value};

/// Renders a tree as an indented, human-readable document.
///
/// The tree must contain exactly one root field. Output declares UTF-8 and
/// indents nested elements by two spaces; scalar elements stay on one line.
pub fn encode(tree: &FieldTree) -> CodecResult<String> {
    render(tree, Some(2))
}

/// Renders a tree without indentation, for compact transmission.
pub fn encode_compact(tree: &FieldTree) -> CodecResult<String> {
    render(tree, None)
}

fn render(tree: &FieldTree, indent: Option<usize>) -> CodecResult<String> {
    if tree.len() != 1 {
        return Err(CodecError::InvalidRoot(tree.len()));
    }

    let mut writer = match indent {
        Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
        None => Writer::new(Vec::new()),
    };

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| CodecError::Malformed(e.to_string()))?;

    let (root, value) = tree.iter().next().expect("checked single root");
    write_value(&mut writer, root, value)?;

    String::from_utf8(writer.into_inner()).map_err(|e| CodecError::Utf8(e.to_string()))
}

fn emit<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> CodecResult<()> {
    writer
        .write_event(event)
        .map_err(|e| CodecError::Malformed(e.to_string()))
}

fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &Value,
) -> CodecResult<()> {
    match value {
        Value::Text(s) if s.is_empty() => emit(writer, Event::Empty(BytesStart::new(name))),
        Value::Text(s) => {
            emit(writer, Event::Start(BytesStart::new(name)))?;
            emit(writer, Event::Text(BytesText::new(s)))?;
            emit(writer, Event::End(BytesEnd::new(name)))
        }
        Value::Tree(tree) if tree.is_empty() => emit(writer, Event::Empty(BytesStart::new(name))),
        Value::Tree(tree) => {
            emit(writer, Event::Start(BytesStart::new(name)))?;
            for (child, value) in tree.iter() {
                write_value(writer, child, value)?;
            }
            emit(writer, Event::End(BytesEnd::new(name)))
        }
        // Repeated elements share the parent-assigned tag.
        Value::List(items) => {
            for item in items {
                write_value(writer, name, item)?;
            }
            Ok(())
        }
    }
}
