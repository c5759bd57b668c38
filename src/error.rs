use std::fmt;

/// Something wrong with what was asked for, caught before any page is copied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("No PDF file selected")]
    NoFileSelected,

    #[error("Split takes exactly one PDF file, but {0} were selected")]
    TooManyFiles(usize),

    #[error("At least two PDF files are required to merge (got {0})")]
    NotEnoughFiles(usize),

    #[error("No pages specified")]
    NoPagesSpecified,

    #[error("Invalid page token: '{0}'")]
    InvalidToken(String),

    #[error("Invalid page number: {0}")]
    InvalidPageNumber(i64),

    /// A whole number outside the `i64` range, kept as typed.
    #[error("Invalid page number: {0}")]
    PageNumberOverflow(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Split,
    Merge,
}

impl Operation {
    /// Name the output is delivered under
    pub fn filename(self) -> &'static str {
        match self {
            Operation::Split => "split.pdf",
            Operation::Merge => "merged.pdf",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Split => f.write_str("splitting the PDF"),
            Operation::Merge => f.write_str("merging the PDFs"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    /// The document library failed. Callers only ever see the generic message;
    /// the cause stays reachable through `source()` for logs.
    #[error("An error occurred while {operation}.")]
    Processing {
        operation: Operation,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub fn processing<E>(operation: Operation, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Processing {
            operation,
            source: Box::new(source),
        }
    }
}
