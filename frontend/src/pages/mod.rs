pub mod gallery;
pub mod page_preview;
