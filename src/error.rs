//! Failure kinds raised while flattening a document stream.
//!
//! `Read` is fatal for a run. Everything else is scoped to one document and
//! is collected into the run report while the pipeline moves on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("yaml file {} could not be read: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("document #{index} could not be decoded: {source}")]
    Decode {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("document #{index} could not be serialized: {source}")]
    Serialize {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
