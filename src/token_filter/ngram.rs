use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, TokenFilter};

macro_rules! gram_filter {
    ($($(#[$attr:meta])* $ty:ident => $kind:expr),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $ty {
                name: String,
                min_gram: Option<i64>,
                max_gram: Option<i64>,
                preserve_original: Option<bool>,
            }

            impl $ty {
                pub fn new(name: impl Into<String>) -> Self {
                    Self {
                        name: name.into(),
                        ..Self::default()
                    }
                }

                setters! {
                    min_gram: i64,
                    max_gram: i64,
                    preserve_original: bool,
                }
            }

            impl Source for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn source(&self, include_name: bool) -> Result<Value> {
                    let mut options = Map::new();
                    options.insert("type".into(), $kind.into());
                    optional_add!(options,
                        self.min_gram => "min_gram",
                        self.max_gram => "max_gram",
                        self.preserve_original => "preserve_original",
                    );
                    Ok(wrap(&self.name, include_name, options.into()))
                }
            }

            impl TokenFilter for $ty {}
        )*
    };
}

gram_filter! {
    /// The `ngram` token filter.
    NGram => "ngram",
    /// The `edge_ngram` token filter.
    EdgeNGram => "edge_ngram",
}

/// The `shingle` filter, emitting word n-grams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shingle {
    name: String,
    max_shingle_size: Option<i64>,
    min_shingle_size: Option<i64>,
    output_unigrams: Option<bool>,
    output_unigrams_if_no_shingles: Option<bool>,
    token_separator: Option<String>,
    filler_token: Option<String>,
}

impl Shingle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        max_shingle_size: i64,
        min_shingle_size: i64,
        output_unigrams: bool,
        output_unigrams_if_no_shingles: bool,
        token_separator: String,
        filler_token: String,
    }
}

impl Source for Shingle {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "shingle".into());
        optional_add!(options,
            self.max_shingle_size => "max_shingle_size",
            self.min_shingle_size => "min_shingle_size",
            self.output_unigrams => "output_unigrams",
            self.output_unigrams_if_no_shingles => "output_unigrams_if_no_shingles",
            self.token_separator => "token_separator",
            self.filler_token => "filler_token",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl TokenFilter for Shingle {}
