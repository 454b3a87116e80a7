use serde_json::{Map, Value};

use super::DECOMPOUND_MODES;
use crate::error::Result;
use crate::source::{wrap, Analyzer, Source, Validation};

/// The `nori` analyzer from the analysis-nori plugin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nori {
    name: String,
    decompound_mode: Option<String>,
    stoptags: Vec<String>,
    user_dictionary: Option<String>,
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
        user_dictionary: String,
    }

    appenders! {
        /// Part-of-speech tags to drop, such as `SP` or `E`.
        stoptags,
    }
}

impl Source for Nori {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "nori".into());
        optional_add!(options,
            self.decompound_mode => "decompound_mode",
            self.user_dictionary => "user_dictionary",
        );
        many_add!(options, self.stoptags => "stoptags");
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

impl Analyzer for Nori {}
