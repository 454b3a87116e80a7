//! Typed builders for Elasticsearch index templates.
//!
//! Every analysis component, field datatype, similarity model and meta-field
//! has a constructor and chainable setters. Nothing is rendered until
//! [`Source::source`] is called, which turns the options that were set into a
//! [`serde_json::Value`] shaped like the index-template API expects.
//!
//! ```
//! use estemplate::{analyzer, datatype, IndexTemplate, Mappings, Settings, Analysis, Source};
//!
//! let template = IndexTemplate::new("library")
//!     .index_patterns(["library-*"])
//!     .settings(
//!         Settings::new().analysis(
//!             Analysis::new().analyzer(analyzer::Custom::new("folded").tokenizer("standard")),
//!         ),
//!     )
//!     .mappings(
//!         Mappings::new()
//!             .property(datatype::Keyword::new("libCode"))
//!             .property(datatype::Text::new("libName").analyzer("folded")),
//!     );
//! let body = template.source(false).unwrap();
//! assert_eq!(body["template"]["mappings"]["properties"]["libCode"]["type"], "keyword");
//! ```

#[macro_use]
mod macros;

pub mod analyzer;
pub mod char_filter;
pub mod datatype;
pub mod error;
pub mod mapping;
pub mod meta_field;
pub mod script;
pub mod settings;
pub mod similarity;
pub mod source;
pub mod template;
pub mod token_filter;
pub mod tokenizer;

pub use error::{Error, Result};
pub use mapping::{DynamicTemplate, Mappings};
pub use script::Script;
pub use settings::{Analysis, RoutingAllocation, Settings, SlowlogThreshold};
pub use source::{
    Analyzer, CharFilter, Datatype, MetaField, Normalizer, Similarity, Source, TokenFilter,
    Tokenizer,
};
pub use template::IndexTemplate;
