pub mod pdf_merger;

pub use pdf_merger::{merge_pdfs, try_merge};
