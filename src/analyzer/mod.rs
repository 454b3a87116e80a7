//! Analyzers, registered under `settings.analysis.analyzer`, and normalizers.

mod builtin;
mod custom;
mod language;
mod nori;

pub use builtin::{Fingerprint, Keyword, Pattern, Simple, Standard, Stop, Whitespace};
pub use custom::{Custom, CustomNormalizer};
pub use language::Language;
pub use nori::Nori;

/// Java regular expression flags accepted by pattern based components.
pub(crate) const REGEX_FLAGS: &[&str] = &[
    "CANON_EQ",
    "CASE_INSENSITIVE",
    "COMMENTS",
    "DOTALL",
    "LITERAL",
    "MULTILINE",
    "UNICODE_CASE",
    "UNICODE_CHARACTER_CLASS",
    "UNIX_LINES",
];

/// Korean decompounding modes of the analysis-nori plugin.
pub(crate) const DECOMPOUND_MODES: &[&str] = &["none", "discard", "mixed"];
