use crate::error::FlattenError;
use crate::route::OutputTarget;
use crate::stream::Document;
use std::fs::{self, DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const DOC_START: &[u8] = b"---\n";
const DOC_END: &[u8] = b"...\n";

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o664;

/// Serialize a document and wrap it in `---` / `...` markers.
///
/// The wrapped bytes are not re-parsed.
pub fn render_document(doc: &Document) -> Result<Vec<u8>, FlattenError> {
    let body = serde_yaml::to_string(&doc.raw).map_err(|source| FlattenError::Serialize {
        index: doc.index,
        source,
    })?;

    let mut out = Vec::with_capacity(DOC_START.len() + body.len() + DOC_END.len());
    out.extend_from_slice(DOC_START);
    out.extend_from_slice(body.as_bytes());
    out.extend_from_slice(DOC_END);
    Ok(out)
}

/// Write a document at its routed location and return the file path.
///
/// Missing directories are created first. An existing file is truncated and
/// overwritten, so the last document routed to a path wins.
pub fn write_document(target: &OutputTarget, doc: &Document) -> Result<PathBuf, FlattenError> {
    create_dirs(&target.dir)?;

    let bytes = render_document(doc)?;
    let path = target.path();
    let mut file = open_for_overwrite(&path).map_err(|source| FlattenError::Write {
        path: path.clone(),
        source,
    })?;
    file.write_all(&bytes).map_err(|source| FlattenError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

fn create_dirs(dir: &Path) -> Result<(), FlattenError> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(dir).map_err(|source| FlattenError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn open_for_overwrite(path: &Path) -> std::io::Result<fs::File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options.open(path)
}
