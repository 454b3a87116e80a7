//! Tokenizers, registered under `settings.analysis.tokenizer`.

mod ngram;
mod nori;
mod path;
mod pattern;
mod word;

pub use ngram::{EdgeNGram, NGram};
pub use nori::Nori;
pub use path::PathHierarchy;
pub use pattern::{CharGroup, Pattern, SimplePattern, SimplePatternSplit};
pub use word::{Classic, Keyword, Letter, Lowercase, Standard, Thai, UaxUrlEmail, Whitespace};
