//! Map a document classification to its place in the output tree.
//!
//! Layout: `<output_base>/<schema with '/' -> '.'>/<name>-<layer>`

use crate::stream::Classification;
use std::path::{Path, PathBuf};

/// Folder used when a document declares no schema.
pub const UNKNOWN_SCHEMA_FOLDER: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub dir: PathBuf,
    pub file_name: String,
}

impl OutputTarget {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

pub fn route(output_base: &Path, doc: &Classification) -> OutputTarget {
    OutputTarget {
        dir: output_base.join(schema_to_folder(&doc.schema)),
        file_name: doc_file_name(&doc.name, &doc.layer),
    }
}

/// `a/b/c` => `a.b.c`; blank schema => `unknown`. Nothing else is escaped.
pub fn schema_to_folder(schema: &str) -> String {
    if schema.trim().is_empty() {
        UNKNOWN_SCHEMA_FOLDER.to_string()
    } else {
        schema.replace('/', ".")
    }
}

pub fn doc_file_name(name: &str, layer: &str) -> String {
    format!("{}-{}", name, layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn schema_folder_names() {
        assert_eq!(schema_to_folder(""), "unknown");
        assert_eq!(schema_to_folder("  "), "unknown");
        assert_eq!(schema_to_folder("a/b"), "a.b");
        assert_eq!(schema_to_folder("deckhand/LayeringPolicy/v1"), "deckhand.LayeringPolicy.v1");
        assert_eq!(schema_to_folder("no-slashes here"), "no-slashes here");
    }

    #[test]
    fn file_names_join_with_a_single_dash() {
        assert_eq!(doc_file_name("doc1", "site"), "doc1-site");
        assert_eq!(doc_file_name("", ""), "-");
        assert_eq!(doc_file_name("a-b", "c"), "a-b-c");
    }

    #[test]
    fn route_builds_directory_and_path() {
        let target = route(
            Path::new("/out/report"),
            &Classification {
                schema: "pegleg/CommonAddresses/v1".into(),
                name: "common-addresses".into(),
                layer: "site".into(),
            },
        );
        assert_eq!(target.dir, PathBuf::from("/out/report/pegleg.CommonAddresses.v1"));
        assert_eq!(target.file_name, "common-addresses-site");
        assert_eq!(
            target.path(),
            PathBuf::from("/out/report/pegleg.CommonAddresses.v1/common-addresses-site")
        );
    }

    #[test]
    fn unclassified_document_routes_to_unknown_dash() {
        let target = route(Path::new("/out/base"), &Classification::default());
        assert_eq!(target.path(), PathBuf::from("/out/base/unknown/-"));
    }
}
