//! Markdown structure passes

mod blocks;
mod scanner;

pub use blocks::{CodeRegions, FencedBlock, FENCE_LEN};
pub use scanner::{MarkdownScanner, Scan};
