//! Page selection and document assembly.
//!
//! Every function here is a pure function of its inputs and a
//! [`DocumentAdapter`]; the target document is created, filled and serialized
//! inside a single call and never escapes it unless the whole call succeeds.

use crate::error::{Error, InputError, Operation};
use crate::page_selector::PageSelector;
use crate::pdf::DocumentAdapter;
use crate::source::SourceFile;
use tracing::debug;

/// A finished document, ready to be delivered under `filename`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub filename: &'static str,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

pub type OperationResult = Result<Output, Error>;

/// What a host asks for: the files the user selected and, for a split, the
/// page list exactly as typed.
#[derive(Debug, Clone, Copy)]
pub enum Request<'a> {
    Split {
        files: &'a [SourceFile],
        pages: &'a str,
    },
    Merge {
        files: &'a [SourceFile],
    },
}

/// Validate a request and run it.
///
/// Checks that need no document (file count, page list syntax) happen before
/// anything is loaded.
pub fn run<A: DocumentAdapter>(adapter: &A, request: Request<'_>) -> OperationResult {
    match request {
        Request::Split { files, pages } => {
            let source = match files {
                [] => return Err(InputError::NoFileSelected.into()),
                [source] => source,
                _ => return Err(InputError::TooManyFiles(files.len()).into()),
            };
            let selector = PageSelector::parse(pages)?;
            split(adapter, source, &selector)
        }
        Request::Merge { files } => merge(adapter, files),
    }
}

/// Build a document from the pages of `source` listed in `selector`, in that
/// order, repeats included.
pub fn split<A: DocumentAdapter>(
    adapter: &A,
    source: &SourceFile,
    selector: &PageSelector,
) -> OperationResult {
    let failed = |err: A::Error| {
        debug!(file = source.name(), error = %err, "split failed");
        Error::processing(Operation::Split, err)
    };

    let doc = adapter.load(source.bytes()).map_err(failed)?;
    let indices = selector.resolve(adapter.page_count(&doc))?;
    debug!(file = source.name(), pages = %selector, "splitting");

    let mut target = adapter.create_empty();
    for &index in &indices {
        adapter.copy_page(&doc, index, &mut target).map_err(failed)?;
    }
    let bytes = adapter.serialize(&mut target).map_err(failed)?;

    Ok(Output {
        filename: Operation::Split.filename(),
        bytes,
        page_count: indices.len(),
    })
}

/// Concatenate every page of every source, in the order given.
pub fn merge<A: DocumentAdapter>(adapter: &A, sources: &[SourceFile]) -> OperationResult {
    if sources.len() < 2 {
        return Err(InputError::NotEnoughFiles(sources.len()).into());
    }

    let failed = |err: A::Error| {
        debug!(error = %err, "merge failed");
        Error::processing(Operation::Merge, err)
    };

    let docs = sources
        .iter()
        .map(|source| {
            debug!(file = source.name(), "loading");
            adapter.load(source.bytes())
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(failed)?;

    let mut target = adapter.create_empty();
    let mut page_count = 0;
    for doc in &docs {
        adapter.copy_all_pages(doc, &mut target).map_err(failed)?;
        page_count += adapter.page_count(doc);
    }
    debug!(files = docs.len(), pages = page_count, "merged");
    let bytes = adapter.serialize(&mut target).map_err(failed)?;

    Ok(Output {
        filename: Operation::Merge.filename(),
        bytes,
        page_count,
    })
}
