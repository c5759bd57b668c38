pub mod adapter;
mod copy;
pub mod document;
#[cfg(test)]
pub(crate) mod testing;

pub use adapter::DocumentAdapter;
pub use document::LopdfAdapter;
