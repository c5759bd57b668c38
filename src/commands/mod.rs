pub mod merge;
pub mod split;

use crate::source;
use crate::workflow::Output;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where an operation's output ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Written {
    pub output_path: PathBuf,
    pub page_count: usize,
}

async fn load_sources(inputs: &[PathBuf]) -> Result<Vec<source::SourceFile>> {
    let paths = source::collect_pdf_paths(inputs)?;
    source::read_all(&paths).await
}

/// `output` is either a directory to drop the fixed filename into, or a file path.
fn resolve_output(output: &Path, filename: &str) -> PathBuf {
    if output.is_dir() {
        output.join(filename)
    } else {
        output.to_path_buf()
    }
}

async fn write_output(output: &Path, result: Output) -> Result<Written> {
    let path = resolve_output(output, result.filename);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    tokio::fs::write(&path, &result.bytes)
        .await
        .with_context(|| format!("Failed to save PDF: {}", path.display()))?;

    Ok(Written {
        output_path: path,
        page_count: result.page_count,
    })
}
