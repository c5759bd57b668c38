use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A selected input file: its display name and raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    bytes: Vec<u8>,
}

impl SourceFile {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        SourceFile {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub async fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(SourceFile { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Turn the paths a user picked into the ordered list of files to use.
///
/// Files are kept as given, in the given order. A directory contributes every
/// `.pdf` file beneath it, sorted by path.
pub fn collect_pdf_paths<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        let metadata = std::fs::metadata(input)
            .with_context(|| format!("Failed to access: {}", input.display()))?;

        if !metadata.is_dir() {
            paths.push(input.to_path_buf());
            continue;
        }

        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("Failed to read directory: {}", input.display()))?;
            if entry.file_type().is_file() && has_pdf_extension(entry.path()) {
                paths.push(entry.into_path());
            }
        }
    }

    Ok(paths)
}

/// Read every selected file, keeping the selection order
pub async fn read_all(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        sources.push(SourceFile::read(path).await?);
    }
    Ok(sources)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
