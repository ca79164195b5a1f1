pub mod use_page;

pub use use_page::*;
