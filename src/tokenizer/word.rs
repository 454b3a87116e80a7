use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, Tokenizer};

plain_component! {
    Tokenizer;
    /// Splits on non-letters.
    Letter => "letter",
    /// Splits on non-letters and lowercases.
    Lowercase => "lowercase",
    /// Splits Thai text into words.
    Thai => "thai",
}

// Word oriented tokenizers whose only option is the token length cap.
macro_rules! max_token_length_tokenizer {
    ($($(#[$attr:meta])* $ty:ident => $kind:expr),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $ty {
                name: String,
                max_token_length: Option<i64>,
            }

            impl $ty {
                pub fn new(name: impl Into<String>) -> Self {
                    Self {
                        name: name.into(),
                        ..Self::default()
                    }
                }

                setters! {
                    max_token_length: i64,
                }
            }

            impl Source for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn source(&self, include_name: bool) -> Result<Value> {
                    let mut options = Map::new();
                    options.insert("type".into(), $kind.into());
                    optional_add!(options, self.max_token_length => "max_token_length");
                    Ok(wrap(&self.name, include_name, options.into()))
                }
            }

            impl Tokenizer for $ty {}
        )*
    };
}

max_token_length_tokenizer! {
    /// Unicode text segmentation.
    Standard => "standard",
    /// Splits on whitespace.
    Whitespace => "whitespace",
    /// Like `standard`, but keeps URLs and email addresses whole.
    UaxUrlEmail => "uax_url_email",
    /// Grammar based tokenizer for English.
    Classic => "classic",
}

/// The `keyword` tokenizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keyword {
    name: String,
    buffer_size: Option<i64>,
}

impl Keyword {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        buffer_size: i64,
    }
}

impl Source for Keyword {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "keyword".into());
        optional_add!(options, self.buffer_size => "buffer_size");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Tokenizer for Keyword {}
