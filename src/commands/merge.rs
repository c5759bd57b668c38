use super::{load_sources, write_output, Written};
use crate::pdf::LopdfAdapter;
use crate::workflow::{self, Request};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Concatenate all selected files, in selection order.
pub async fn run(inputs: &[PathBuf], output: &Path) -> Result<Written> {
    let sources = load_sources(inputs).await?;

    let result = tokio::task::spawn_blocking(move || {
        workflow::run(&LopdfAdapter, Request::Merge { files: &sources })
    })
    .await??;

    write_output(output, result).await
}
