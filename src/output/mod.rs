//! Result record and its output formats

pub mod formatter;
pub mod report;

pub use formatter::{formatter_for, JsonFormatter, MarkdownFormatter, OutputFormatter};
pub use report::ResultSet;
