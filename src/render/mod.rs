//! Output side: re-serialize documents and persist them.

pub mod yaml;

pub use yaml::write_document;
