use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, TokenFilter, Validation};

const FORMATS: &[&str] = &["solr", "wordnet"];

macro_rules! synonym_filter {
    ($($(#[$attr:meta])* $ty:ident => $kind:expr),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $ty {
                name: String,
                synonyms: Vec<String>,
                synonyms_path: Option<String>,
                expand: Option<bool>,
                lenient: Option<bool>,
                format: Option<String>,
                updateable: Option<bool>,
            }

            impl $ty {
                pub fn new(name: impl Into<String>) -> Self {
                    Self {
                        name: name.into(),
                        ..Self::default()
                    }
                }

                setters! {
                    synonyms_path: String,
                    expand: bool,
                    lenient: bool,
                    /// `solr` (the default) or `wordnet`.
                    format: String,
                    /// Allow reloading the synonyms through the reload analyzers API.
                    updateable: bool,
                }

                appenders! {
                    /// Append rules such as `i-pod, i pod => ipod`.
                    synonyms,
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
                        self.synonyms_path => "synonyms_path",
                        self.expand => "expand",
                        self.lenient => "lenient",
                        self.format => "format",
                        self.updateable => "updateable",
                    );
                    many_add!(options, self.synonyms => "synonyms");
                    Ok(wrap(&self.name, include_name, options.into()))
                }

                fn validate(&self, include_name: bool) -> Result<()> {
                    let mut v = Validation::of::<Self>();
                    v.name(&self.name, include_name)
                        .require(
                            "synonyms",
                            !self.synonyms.is_empty() || self.synonyms_path.is_some(),
                        )
                        .one_of("format", self.format.as_deref(), FORMATS);
                    v.finish()
                }
            }

            impl TokenFilter for $ty {}
        )*
    };
}

synonym_filter! {
    /// The `synonym` filter.
    Synonym => "synonym",
    /// The `synonym_graph` filter, correct for multi-word synonyms at search time.
    SynonymGraph => "synonym_graph",
}
