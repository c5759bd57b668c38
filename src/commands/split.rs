use super::{load_sources, write_output, Written};
use crate::pdf::LopdfAdapter;
use crate::workflow::{self, Request};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Extract the pages listed in `pages` from the single selected file.
pub async fn run(inputs: &[PathBuf], pages: &str, output: &Path) -> Result<Written> {
    let sources = load_sources(inputs).await?;
    let pages = pages.to_owned();

    let result = tokio::task::spawn_blocking(move || {
        workflow::run(
            &LopdfAdapter,
            Request::Split {
                files: &sources,
                pages: &pages,
            },
        )
    })
    .await??;

    write_output(output, result).await
}
