//! CLI command handlers, one per file.

mod build;
mod parse;
mod rewrite;

pub use build::run_build;
pub use parse::run_parse;
pub use rewrite::run_rewrite;
