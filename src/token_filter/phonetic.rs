use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, TokenFilter, Validation};

const ENCODERS: &[&str] = &[
    "metaphone",
    "double_metaphone",
    "soundex",
    "refined_soundex",
    "caverphone1",
    "caverphone2",
    "cologne",
    "nysiis",
    "koelnerphonetik",
    "haasephonetik",
    "beider_morse",
    "daitch_mokotoff",
];

const RULE_TYPES: &[&str] = &["approx", "exact"];

const NAME_TYPES: &[&str] = &["generic", "ashkenazi", "sephardic"];

const LANGUAGE_SET: &[&str] = &[
    "any",
    "common",
    "cyrillic",
    "english",
    "french",
    "german",
    "hebrew",
    "hungarian",
    "polish",
    "romanian",
    "russian",
    "spanish",
];

/// The `phonetic` filter from the analysis-phonetic plugin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Phonetic {
    name: String,
    encoder: Option<String>,
    replace: Option<bool>,
    max_code_len: Option<i64>,
    rule_type: Option<String>,
    name_type: Option<String>,
    languageset: Vec<String>,
}

impl Phonetic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        encoder: String,
        /// Replace the original token instead of adding the encoded one.
        replace: bool,
        /// Only used by `double_metaphone`.
        max_code_len: i64,
        /// Only used by `beider_morse`.
        rule_type: String,
        /// Only used by `beider_morse`.
        name_type: String,
    }

    appenders! {
        /// Only used by `beider_morse`.
        languageset,
    }
}

impl Source for Phonetic {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "phonetic".into());
        optional_add!(options,
            self.encoder => "encoder",
            self.replace => "replace",
            self.max_code_len => "max_code_len",
            self.rule_type => "rule_type",
            self.name_type => "name_type",
        );
        many_add!(options, self.languageset => "languageset");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .one_of("encoder", self.encoder.as_deref(), ENCODERS)
            .one_of("rule_type", self.rule_type.as_deref(), RULE_TYPES)
            .one_of("name_type", self.name_type.as_deref(), NAME_TYPES)
            .each_one_of("languageset", &self.languageset, LANGUAGE_SET);
        v.finish()
    }
}

impl TokenFilter for Phonetic {}
