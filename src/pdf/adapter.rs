/// The document operations the split/merge workflow needs from a PDF library.
///
/// Page indices are 0-based. Implementations own parsing, object copying and
/// serialization; the workflow only decides which pages go where.
pub trait DocumentAdapter {
    /// A parsed, in-memory document
    type Document;
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(&self, bytes: &[u8]) -> Result<Self::Document, Self::Error>;

    /// A new document with no pages
    fn create_empty(&self) -> Self::Document;

    fn page_count(&self, doc: &Self::Document) -> usize;

    /// Append a copy of page `index` of `src` to the end of `dst`.
    fn copy_page(
        &self,
        src: &Self::Document,
        index: usize,
        dst: &mut Self::Document,
    ) -> Result<(), Self::Error>;

    /// Append copies of every page of `src`, in order, to `dst`.
    fn copy_all_pages(
        &self,
        src: &Self::Document,
        dst: &mut Self::Document,
    ) -> Result<(), Self::Error> {
        for index in 0..self.page_count(src) {
            self.copy_page(src, index, dst)?;
        }
        Ok(())
    }

    fn serialize(&self, doc: &mut Self::Document) -> Result<Vec<u8>, Self::Error>;
}
