//! Text utilities shared by the analyzers
//!
//! - `count_words` - language-aware word counting over HTML bodies

mod words;

pub use words::{count_words, normalize_language, strip_html};
