use serde_json::{Map, Value};

use crate::analyzer::DECOMPOUND_MODES;
use crate::error::Result;
use crate::source::{wrap, Source, Tokenizer, Validation};

/// The `nori_tokenizer` from the analysis-nori plugin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nori {
    name: String,
    decompound_mode: Option<String>,
    discard_punctuation: Option<bool>,
    user_dictionary: Option<String>,
    user_dictionary_rules: Vec<String>,
}

impl Nori {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        decompound_mode: String,
        discard_punctuation: bool,
        user_dictionary: String,
    }

    appenders! {
        /// Inline dictionary entries such as `c++` or `세종시 세종 시`.
        user_dictionary_rules,
    }
}

impl Source for Nori {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "nori_tokenizer".into());
        optional_add!(options,
            self.decompound_mode => "decompound_mode",
            self.discard_punctuation => "discard_punctuation",
            self.user_dictionary => "user_dictionary",
        );
        many_add!(options, self.user_dictionary_rules => "user_dictionary_rules");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name).one_of(
            "decompound_mode",
            self.decompound_mode.as_deref(),
            DECOMPOUND_MODES,
        );
        v.finish()
    }
}

impl Tokenizer for Nori {}
