pub mod markdown_formatter;

pub use markdown_formatter::MarkdownFormatter;
