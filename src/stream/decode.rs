use crate::error::FlattenError;
use crate::stream::Classification;
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// One decoded document from the input stream.
///
/// `raw` keeps the full document for re-serialization; `classification` is
/// projected from it once and never outlives it.
#[derive(Debug)]
pub struct Document {
    /// 1-based position in the stream.
    pub index: usize,
    pub raw: Value,
    pub classification: Classification,
}

/// Read the whole input file into memory.
pub fn read_input(path: &Path) -> Result<Vec<u8>, FlattenError> {
    fs::read(path).map_err(|source| FlattenError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Lazy, single-pass iterator over the documents of a YAML stream.
///
/// A document that was read in full but did not form a valid value (a
/// duplicate mapping key) is yielded as `Err` and iteration moves on. Any
/// other decode failure can stop the loader partway through a document, so
/// it is yielded once and the stream ends.
pub struct DocumentStream<'a> {
    docs: serde_yaml::Deserializer<'a>,
    index: usize,
    done: bool,
}

impl<'a> DocumentStream<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            docs: serde_yaml::Deserializer::from_slice(bytes),
            index: 0,
            done: false,
        }
    }
}

impl Iterator for DocumentStream<'_> {
    type Item = Result<Document, FlattenError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let de = self.docs.next()?;
        self.index += 1;

        match Value::deserialize(de) {
            Ok(raw) => {
                let classification = Classification::from_value(&raw);
                Some(Ok(Document {
                    index: self.index,
                    raw,
                    classification,
                }))
            }
            Err(source) => {
                self.done = !is_resumable(&source);
                Some(Err(FlattenError::Decode {
                    index: self.index,
                    source,
                }))
            }
        }
    }
}

/// serde_yaml has no error kinds; duplicate keys are the only failure raised
/// after the whole document has been loaded. Nested ones carry a path prefix.
fn is_resumable(err: &serde_yaml::Error) -> bool {
    err.to_string().contains("duplicate entry")
}
