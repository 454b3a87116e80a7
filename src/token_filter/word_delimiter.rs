use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, TokenFilter};

// Both variants share every option; the graph variant adds a few of its own.
macro_rules! word_delimiter_filter {
    ($(#[$attr:meta])* $ty:ident => $kind:expr, { $($extra:ident: $t:tt),* $(,)? }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $ty {
            name: String,
            catenate_all: Option<bool>,
            catenate_numbers: Option<bool>,
            catenate_words: Option<bool>,
            generate_number_parts: Option<bool>,
            generate_word_parts: Option<bool>,
            preserve_original: Option<bool>,
            protected_words: Vec<String>,
            protected_words_path: Option<String>,
            split_on_case_change: Option<bool>,
            split_on_numerics: Option<bool>,
            stem_english_possessive: Option<bool>,
            type_table: Vec<String>,
            type_table_path: Option<String>,
            $($extra: Option<$t>,)*
        }

        impl $ty {
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    ..Self::default()
                }
            }

            setters! {
                catenate_all: bool,
                catenate_numbers: bool,
                catenate_words: bool,
                generate_number_parts: bool,
                generate_word_parts: bool,
                preserve_original: bool,
                protected_words_path: String,
                split_on_case_change: bool,
                split_on_numerics: bool,
                stem_english_possessive: bool,
                type_table_path: String,
                $($extra: $t,)*
            }

            appenders! {
                /// Tokens never split.
                protected_words,
                /// Custom character types, e.g. `$ => DIGIT`.
                type_table,
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
                    self.catenate_all => "catenate_all",
                    self.catenate_numbers => "catenate_numbers",
                    self.catenate_words => "catenate_words",
                    self.generate_number_parts => "generate_number_parts",
                    self.generate_word_parts => "generate_word_parts",
                    self.preserve_original => "preserve_original",
                    self.protected_words_path => "protected_words_path",
                    self.split_on_case_change => "split_on_case_change",
                    self.split_on_numerics => "split_on_numerics",
                    self.stem_english_possessive => "stem_english_possessive",
                    self.type_table_path => "type_table_path",
                    $(self.$extra => stringify!($extra),)*
                );
                many_add!(options,
                    self.protected_words => "protected_words",
                    self.type_table => "type_table",
                );
                Ok(wrap(&self.name, include_name, options.into()))
            }
        }

        impl TokenFilter for $ty {}
    };
}

word_delimiter_filter! {
    /// The `word_delimiter` filter.
    WordDelimiter => "word_delimiter", {}
}

word_delimiter_filter! {
    /// The `word_delimiter_graph` filter.
    WordDelimiterGraph => "word_delimiter_graph", {
        adjust_offsets: bool,
        ignore_keywords: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(vec![], json!({"type": "word_delimiter"}))]
    #[case(vec!["C++"], json!({"type": "word_delimiter", "protected_words": "C++"}))]
    #[case(vec!["C++", "Wi-Fi"], json!({"type": "word_delimiter", "protected_words": ["C++", "Wi-Fi"]}))]
    fn test_protected_words(#[case] words: Vec<&str>, #[case] expected: Value) {
        let filter = WordDelimiter::new("wd").protected_words(words);
        assert_eq!(filter.source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "word_delimiter_graph"}))]
    #[case(vec!["$ => DIGIT"], json!({"type": "word_delimiter_graph", "type_table": "$ => DIGIT"}))]
    #[case(
        vec!["$ => DIGIT", "% => DIGIT"],
        json!({"type": "word_delimiter_graph", "type_table": ["$ => DIGIT", "% => DIGIT"]})
    )]
    fn test_type_table(#[case] table: Vec<&str>, #[case] expected: Value) {
        let filter = WordDelimiterGraph::new("wdg").type_table(table);
        assert_eq!(filter.source(false).unwrap(), expected);
    }

    #[test]
    fn test_graph_only_options() {
        let filter = WordDelimiterGraph::new("wdg")
            .catenate_words(true)
            .adjust_offsets(false)
            .ignore_keywords(true)
            .split_on_case_change(false);
        assert_eq!(
            filter.source(true).unwrap(),
            json!({"wdg": {
                "type": "word_delimiter_graph",
                "catenate_words": true,
                "adjust_offsets": false,
                "ignore_keywords": true,
                "split_on_case_change": false
            }})
        );
    }
}
