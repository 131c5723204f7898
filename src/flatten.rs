//! The flatten pipeline: resolve paths, stream documents, route, write.
//!
//! Per-document failures are collected in [`FlattenReport::errors`] and the
//! loop continues; only an unreadable input stops the run.

use crate::Result;
use crate::error::FlattenError;
use crate::render::write_document;
use crate::resolve::{ResolvedPaths, resolve_paths};
use crate::route::route;
use crate::stream::{DocumentStream, read_input};
use std::path::PathBuf;

/// Inputs for one flatten run.
#[derive(Debug, Clone)]
pub struct FlattenConfig {
    pub input: PathBuf,
    /// `None` means the current working directory.
    pub output_root: Option<PathBuf>,
}

#[derive(Debug)]
pub struct FlattenReport {
    pub input: PathBuf,
    pub output_base: PathBuf,
    /// Files written, in document order. A path may repeat when documents collide.
    pub written: Vec<PathBuf>,
    pub errors: Vec<FlattenError>,
}

impl FlattenReport {
    /// Every decoded or failed document produces exactly one outcome.
    pub fn documents_seen(&self) -> usize {
        self.written.len() + self.errors.len()
    }
}

pub fn flatten(config: &FlattenConfig) -> Result<FlattenReport> {
    let paths = resolve_paths(&config.input, config.output_root.as_deref())?;
    flatten_resolved(paths)
}

pub fn flatten_resolved(paths: ResolvedPaths) -> Result<FlattenReport> {
    let ResolvedPaths { input, output_base } = paths;
    println!("Flatten Input is {}", input.display());
    println!("Flatten Output is {}", output_base.display());

    let bytes = read_input(&input)?;
    tracing::debug!(bytes = bytes.len(), "read input");

    let mut report = FlattenReport {
        input,
        output_base,
        written: Vec::new(),
        errors: Vec::new(),
    };

    for doc in DocumentStream::new(&bytes) {
        let doc = match doc {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!("{}", err);
                report.errors.push(err);
                continue;
            }
        };

        println!("{}", doc.classification);
        let target = route(&report.output_base, &doc.classification);

        match write_document(&target, &doc) {
            Ok(path) => {
                println!("Wrote {}", path.display());
                report.written.push(path);
            }
            Err(err) => {
                tracing::warn!(document = doc.index, "{}", err);
                report.errors.push(err);
            }
        }
    }

    println!(
        "Done. {} file(s) written, {} error(s).",
        report.written.len(),
        report.errors.len()
    );
    Ok(report)
}
