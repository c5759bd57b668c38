use super::adapter::DocumentAdapter;
use super::copy::PageCopier;
use lopdf::{Dictionary, Document, Object, ObjectId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("Page index {index} is out of range (document has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    #[error("Failed to copy page: {0}")]
    Copy(String),

    #[error("Document has no usable page tree: {0}")]
    PageTree(String),

    #[error("Failed to save PDF: {0}")]
    Save(String),
}

/// A parsed PDF plus its page object ids in reading order.
pub struct PdfDocument {
    doc: Document,
    page_ids: Vec<ObjectId>,
}

impl PdfDocument {
    pub fn load(bytes: &[u8]) -> Result<Self, PdfError> {
        let doc = Document::load_mem(bytes).map_err(|e| PdfError::Parse(e.to_string()))?;
        let page_ids = doc.get_pages().into_values().collect();
        Ok(PdfDocument { doc, page_ids })
    }

    /// An empty document: a catalog and a page tree root with no kids
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(Vec::new())),
            ("Count", Object::Integer(0)),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]);
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        PdfDocument {
            doc,
            page_ids: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Copy the pages at `indices` (0-based) from `src`, appending them in the
    /// given order. Objects shared between those pages are copied once.
    pub fn copy_pages_from<I>(&mut self, src: &PdfDocument, indices: I) -> Result<(), PdfError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut copied = Vec::new();
        {
            let mut copier = PageCopier::new(&src.doc, &mut self.doc);
            for index in indices {
                let page_id = src.page_ids.get(index).copied().ok_or(PdfError::PageOutOfRange {
                    index,
                    count: src.page_count(),
                })?;
                let copy = copier
                    .copy_page(page_id)
                    .map_err(|e| PdfError::Copy(e.to_string()))?;
                copied.push(copy);
            }
        }

        for page_id in copied {
            self.append_page(page_id)?;
        }
        Ok(())
    }

    pub fn to_bytes(&mut self) -> Result<Vec<u8>, PdfError> {
        self.doc.compress();

        let mut buffer = Vec::new();
        self.doc
            .save_to(&mut buffer)
            .map_err(|e| PdfError::Save(e.to_string()))?;
        Ok(buffer)
    }

    fn pages_root(&self) -> Result<ObjectId, PdfError> {
        self.doc
            .catalog()
            .and_then(|catalog| catalog.get(b"Pages"))
            .and_then(Object::as_reference)
            .map_err(page_tree_error)
    }

    /// Hang a copied page directly off the page tree root.
    fn append_page(&mut self, page_id: ObjectId) -> Result<(), PdfError> {
        let root_id = self.pages_root()?;

        self.doc
            .get_dictionary_mut(page_id)
            .map_err(page_tree_error)?
            .set("Parent", Object::Reference(root_id));

        let root = self
            .doc
            .get_dictionary_mut(root_id)
            .map_err(page_tree_error)?;

        let count = root.get(b"Count").and_then(Object::as_i64).unwrap_or(0);
        root.set("Count", Object::Integer(count + 1));

        if !matches!(root.get(b"Kids"), Ok(Object::Array(_))) {
            root.set("Kids", Object::Array(Vec::new()));
        }
        if let Ok(Object::Array(kids)) = root.get_mut(b"Kids") {
            kids.push(Object::Reference(page_id));
        }

        self.page_ids.push(page_id);
        Ok(())
    }
}

fn page_tree_error(err: lopdf::Error) -> PdfError {
    PdfError::PageTree(err.to_string())
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// [`DocumentAdapter`] backed by `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfAdapter;

impl DocumentAdapter for LopdfAdapter {
    type Document = PdfDocument;
    type Error = PdfError;

    fn load(&self, bytes: &[u8]) -> Result<PdfDocument, PdfError> {
        PdfDocument::load(bytes)
    }

    fn create_empty(&self) -> PdfDocument {
        PdfDocument::new()
    }

    fn page_count(&self, doc: &PdfDocument) -> usize {
        doc.page_count()
    }

    fn copy_page(
        &self,
        src: &PdfDocument,
        index: usize,
        dst: &mut PdfDocument,
    ) -> Result<(), PdfError> {
        dst.copy_pages_from(src, [index])
    }

    fn copy_all_pages(&self, src: &PdfDocument, dst: &mut PdfDocument) -> Result<(), PdfError> {
        dst.copy_pages_from(src, 0..src.page_count())
    }

    fn serialize(&self, doc: &mut PdfDocument) -> Result<Vec<u8>, PdfError> {
        doc.to_bytes()
    }
}
