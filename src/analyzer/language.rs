use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Analyzer, Source, Validation};

/// Languages with a built-in analyzer.
pub const LANGUAGES: &[&str] = &[
    "arabic",
    "armenian",
    "basque",
    "bengali",
    "brazilian",
    "bulgarian",
    "catalan",
    "cjk",
    "czech",
    "danish",
    "dutch",
    "english",
    "estonian",
    "finnish",
    "french",
    "galician",
    "german",
    "greek",
    "hindi",
    "hungarian",
    "indonesian",
    "irish",
    "italian",
    "latvian",
    "lithuanian",
    "norwegian",
    "persian",
    "portuguese",
    "romanian",
    "russian",
    "sorani",
    "spanish",
    "swedish",
    "turkish",
    "thai",
];

/// A built-in language analyzer; its `type` is the language name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Language {
    name: String,
    language: String,
    stopwords: Vec<String>,
    stopwords_path: Option<String>,
    stem_exclusion: Vec<String>,
}

impl Language {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            ..Self::default()
        }
    }

    setters! {
        stopwords_path: String,
    }

    appenders! {
        stopwords,
        /// Words that are not stemmed.
        stem_exclusion,
    }
}

impl Source for Language {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), self.language.clone().into());
        optional_add!(options, self.stopwords_path => "stopwords_path");
        many_add!(options,
            self.stopwords => "stopwords",
            self.stem_exclusion => "stem_exclusion",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .one_of("language", Some(self.language.as_str()), LANGUAGES);
        v.finish()
    }
}

impl Analyzer for Language {}
