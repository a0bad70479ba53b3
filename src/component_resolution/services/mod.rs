pub mod aligner;
pub mod extractor;
pub mod text_repair;

pub use aligner::build_comparison_table;
pub use extractor::{extract_json, ExtractError};
pub use text_repair::{clean_alternative, clean_component, clean_text, to_safe_url};
