//! Multi-document YAML input: read, decode, classify.

pub mod classify;
pub mod decode;

pub use classify::Classification;
pub use decode::{Document, DocumentStream, read_input};
