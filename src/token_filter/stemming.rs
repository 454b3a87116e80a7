use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, TokenFilter, Validation};

const STEMMER_LANGUAGES: &[&str] = &[
    "arabic",
    "armenian",
    "basque",
    "bengali",
    "brazilian",
    "bulgarian",
    "catalan",
    "czech",
    "danish",
    "dutch",
    "dutch_kp",
    "english",
    "light_english",
    "lovins",
    "minimal_english",
    "porter2",
    "possessive_english",
    "estonian",
    "finnish",
    "light_finnish",
    "french",
    "light_french",
    "minimal_french",
    "galician",
    "minimal_galician",
    "german",
    "german2",
    "light_german",
    "minimal_german",
    "greek",
    "hindi",
    "hungarian",
    "light_hungarian",
    "indonesian",
    "irish",
    "italian",
    "light_italian",
    "sorani",
    "latvian",
    "lithuanian",
    "norwegian",
    "light_norwegian",
    "minimal_norwegian",
    "light_nynorsk",
    "minimal_nynorsk",
    "portuguese",
    "light_portuguese",
    "minimal_portuguese",
    "portuguese_rslp",
    "romanian",
    "russian",
    "light_russian",
    "spanish",
    "light_spanish",
    "swedish",
    "light_swedish",
    "turkish",
];

const SNOWBALL_LANGUAGES: &[&str] = &[
    "Arabic",
    "Armenian",
    "Basque",
    "Catalan",
    "Danish",
    "Dutch",
    "English",
    "Estonian",
    "Finnish",
    "French",
    "German",
    "German2",
    "Hungarian",
    "Italian",
    "Irish",
    "Kp",
    "Lithuanian",
    "Lovins",
    "Norwegian",
    "Porter",
    "Portuguese",
    "Romanian",
    "Russian",
    "Spanish",
    "Swedish",
    "Turkish",
];

/// The `stemmer` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stemmer {
    name: String,
    language: Option<String>,
}

impl Stemmer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        language: String,
    }
}

impl Source for Stemmer {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "stemmer".into());
        optional_add!(options, self.language => "language");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .one_of("language", self.language.as_deref(), STEMMER_LANGUAGES);
        v.finish()
    }
}

impl TokenFilter for Stemmer {}

/// The `snowball` filter; languages are capitalized, e.g. `English`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snowball {
    name: String,
    language: Option<String>,
}

impl Snowball {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        language: String,
    }
}

impl Source for Snowball {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "snowball".into());
        optional_add!(options, self.language => "language");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .one_of("language", self.language.as_deref(), SNOWBALL_LANGUAGES);
        v.finish()
    }
}

impl TokenFilter for Snowball {}

/// The `hunspell` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hunspell {
    name: String,
    locale: Option<String>,
    dictionary: Vec<String>,
    dedup: Option<bool>,
    longest_only: Option<bool>,
}

impl Hunspell {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        /// Dictionary directory under `config/hunspell`, e.g. `en_US`.
        locale: String,
        dedup: bool,
        longest_only: bool,
    }

    appenders! {
        /// `.dic` files to use instead of every file in the locale directory.
        dictionary,
    }
}

impl Source for Hunspell {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "hunspell".into());
        optional_add!(options,
            self.locale => "locale",
            self.dedup => "dedup",
            self.longest_only => "longest_only",
        );
        many_add!(options, self.dictionary => "dictionary");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("locale", self.locale.is_some());
        v.finish()
    }
}

impl TokenFilter for Hunspell {}
