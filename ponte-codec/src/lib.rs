//! Wire codec for the legacy registry's tagged-element format.
//!
//! The legacy side of the bridge speaks nested XML. This crate converts
//! between that text and an ordered field tree:
//!
//! - [`encode`] renders a [`FieldTree`] as an XML document (UTF-8 declared,
//!   two-space indented; [`encode_compact`] for single-line output).
//! - [`decode`] parses XML back into a tree, reproducing the legacy peer's
//!   own decoding conventions: every child value arrives wrapped in a
//!   single-element list, repeated sibling tags accumulate into that list,
//!   and element attributes merge into the child map.
//!
//! The singleton-list wrapping means `decode(encode(t))` is not literally
//! `t`; callers recover each leaf through [`Value::first`]. Keeping the
//! quirk, rather than flattening it away, keeps this codec byte-compatible
//! with the decoder running inside the legacy registry itself.

mod decode;
mod encode;
mod error;
mod tree;

pub use decode::decode;
pub use encode::{encode, encode_compact};
pub use error::{CodecError, CodecResult};
pub use tree::{FieldTree, Value};
