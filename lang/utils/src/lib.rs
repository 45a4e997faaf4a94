//! Source locations shared by the BLOG crates.

pub mod span;
