//! Field datatypes declared in a mapping's `properties`.
//!
//! Datatypes that accept sub-fields (`fields`) or child properties hold them
//! as boxed [`Datatype`](crate::source::Datatype) values and render them keyed
//! by each child's name.

mod date;
mod geo;
mod join;
mod keyword;
mod numeric;
mod object;
mod special;
mod text;

pub use date::{Date, DateFormat, DateNanos};
pub use geo::{GeoPoint, GeoShape, Point, Shape};
pub use join::{Join, Relation};
pub use keyword::{ConstantKeyword, Keyword, Wildcard};
pub use numeric::{Numeric, NumericType, Range, RangeType};
pub use object::{Flattened, Nested, Object};
pub use special::{
    Alias, Binary, Boolean, DenseVector, Histogram, Ip, Percolator, RankFeature, RankFeatures,
};
pub use text::{Completion, FielddataFrequencyFilter, IndexPrefixes, SearchAsYouType, Text, TokenCount};

use serde_json::Value;

pub(crate) const TEXT_INDEX_OPTIONS: &[&str] = &["docs", "freqs", "positions", "offsets"];

pub(crate) const KEYWORD_INDEX_OPTIONS: &[&str] = &["docs", "freqs"];

pub(crate) const TERM_VECTORS: &[&str] = &[
    "no",
    "yes",
    "with_positions",
    "with_offsets",
    "with_positions_offsets",
    "with_positions_payloads",
    "with_positions_offsets_payloads",
];

pub(crate) const ORIENTATIONS: &[&str] = &[
    "right",
    "ccw",
    "counterclockwise",
    "left",
    "cw",
    "clockwise",
];

/// How unmapped fields found in a document are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dynamic {
    /// Add new fields to the mapping.
    True,
    /// Keep new fields in `_source` without indexing them.
    False,
    /// Reject documents containing new fields.
    Strict,
}

impl From<Dynamic> for Value {
    fn from(dynamic: Dynamic) -> Self {
        match dynamic {
            Dynamic::True => Value::Bool(true),
            Dynamic::False => Value::Bool(false),
            Dynamic::Strict => Value::from("strict"),
        }
    }
}
