//! Token filters, registered under `settings.analysis.filter`.

mod conditional;
mod decompound;
mod ngram;
mod nori;
mod pattern;
mod phonetic;
mod stemming;
mod synonym;
mod token;
mod word_delimiter;
mod words;

pub use conditional::{Condition, Multiplexer, PredicateTokenFilter};
pub use decompound::{DictionaryDecompounder, HyphenationDecompounder};
pub use ngram::{EdgeNGram, NGram, Shingle};
pub use nori::NoriPartOfSpeech;
pub use pattern::{PatternCapture, PatternReplace};
pub use phonetic::Phonetic;
pub use stemming::{Hunspell, Snowball, Stemmer};
pub use synonym::{Synonym, SynonymGraph};
pub use token::{
    AsciiFolding, CjkBigram, DelimitedPayload, Fingerprint, Length, Limit, Lowercase, MinHash,
    Truncate, Unique,
};
pub use word_delimiter::{WordDelimiter, WordDelimiterGraph};
pub use words::{CommonGrams, Elision, Keep, KeepTypes, KeywordMarker, StemmerOverride, Stop};

plain_component! {
    TokenFilter;
    /// Strips everything after an apostrophe.
    Apostrophe => "apostrophe",
    /// Normalizes full and half width CJK characters.
    CjkWidth => "cjk_width",
    /// Removes English possessives and dots from acronyms.
    Classic => "classic",
    /// Converts Unicode digits to `0-9`.
    DecimalDigit => "decimal_digit",
    /// Flattens a token graph for indexing.
    FlattenGraph => "flatten_graph",
    /// Emits each token twice, once marked as a keyword.
    KeywordRepeat => "keyword_repeat",
    /// KStem stemming for English.
    KStem => "kstem",
    /// Porter stemming for English.
    PorterStem => "porter_stem",
    /// Removes duplicate tokens at the same position.
    RemoveDuplicates => "remove_duplicates",
    /// Reverses each token.
    Reverse => "reverse",
    /// Trims surrounding whitespace.
    Trim => "trim",
    /// Uppercases tokens.
    Uppercase => "uppercase",
    /// Normalizes Korean numbers to Arabic numerals.
    NoriNumber => "nori_number",
    /// Rewrites Hanja to Hangul.
    NoriReadingform => "nori_readingform",
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_plain_filters() {
        assert_eq!(
            Apostrophe::new("apos").source(true).unwrap(),
            json!({"apos": {"type": "apostrophe"}})
        );
        assert_eq!(
            NoriReadingform::new("hanja").source(false).unwrap(),
            json!({"type": "nori_readingform"})
        );
        assert_eq!(KStem::new("k").source(false).unwrap(), json!({"type": "kstem"}));
    }

    #[test]
    fn test_plain_filter_name_check() {
        assert!(Trim::new("").validate(true).is_err());
        assert!(Trim::new("").validate(false).is_ok());
    }
}
