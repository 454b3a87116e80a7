use std::fmt;

use itertools::Itertools;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{keyed, validate_all, wrap, Datatype, Source, Validation};

/// A date format: a built-in name such as `epoch_millis` or a custom pattern
/// such as `yyyy-MM-dd`.
///
/// ```
/// use estemplate::datatype::DateFormat;
///
/// let format = DateFormat::new("epoch_millis").strict(true);
/// assert_eq!(format.source().unwrap(), "strict_epoch_millis");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateFormat {
    format: String,
    strict: Option<bool>,
}

impl DateFormat {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            strict: None,
        }
    }

    setters! {
        /// Prefix the format with `strict_`, rejecting non zero-padded input.
        strict: bool,
    }

    /// Render the format string.
    pub fn source(&self) -> Result<Value> {
        self.render().map(Value::from)
    }

    pub(crate) fn render(&self) -> Result<String> {
        let mut v = Validation::of::<Self>();
        v.require("format", !self.format.is_empty());
        v.finish()?;
        if self.strict == Some(true) {
            Ok(format!("strict_{}", self.format))
        } else {
            Ok(self.format.clone())
        }
    }

    /// Render several formats as one `||` separated string.
    pub(crate) fn join(formats: &[DateFormat]) -> Result<Option<String>> {
        if formats.is_empty() {
            return Ok(None);
        }
        let rendered = formats
            .iter()
            .map(DateFormat::render)
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(rendered.iter().join("||")))
    }
}

impl From<&str> for DateFormat {
    fn from(format: &str) -> Self {
        DateFormat::new(format)
    }
}

impl From<String> for DateFormat {
    fn from(format: String) -> Self {
        DateFormat::new(format)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.strict == Some(true) {
            write!(f, "strict_")?;
        }
        write!(f, "{}", self.format)
    }
}

macro_rules! date_datatype {
    ($($(#[$attr:meta])* $ty:ident => $kind:expr),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Default)]
            pub struct $ty {
                name: String,
                boost: Option<f64>,
                copy_to: Vec<String>,
                doc_values: Option<bool>,
                format: Vec<DateFormat>,
                locale: Option<String>,
                ignore_malformed: Option<bool>,
                index: Option<bool>,
                null_value: Option<String>,
                store: Option<bool>,
                fields: Vec<Box<dyn Datatype>>,
            }

            impl $ty {
                pub fn new(name: impl Into<String>) -> Self {
                    Self {
                        name: name.into(),
                        ..Self::default()
                    }
                }

                setters! {
                    boost: f64,
                    doc_values: bool,
                    locale: String,
                    ignore_malformed: bool,
                    index: bool,
                    /// Date string indexed in place of explicit nulls.
                    null_value: String,
                    store: bool,
                }

                appenders! {
                    copy_to,
                }

                /// Append accepted formats; several render joined with `||`.
                pub fn format<I, F>(mut self, formats: I) -> Self
                where
                    I: IntoIterator<Item = F>,
                    F: Into<DateFormat>,
                {
                    self.format.extend(formats.into_iter().map(Into::into));
                    self
                }

                /// Add a multi-field indexing the same value another way.
                pub fn field(mut self, field: impl Datatype + 'static) -> Self {
                    self.fields.push(Box::new(field));
                    self
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
                        self.boost => "boost",
                        self.doc_values => "doc_values",
                        self.locale => "locale",
                        self.ignore_malformed => "ignore_malformed",
                        self.index => "index",
                        self.null_value => "null_value",
                        self.store => "store",
                    );
                    many_add!(options, self.copy_to => "copy_to");
                    if let Some(format) = DateFormat::join(&self.format)? {
                        options.insert("format".into(), format.into());
                    }
                    if let Some(fields) = keyed(&self.fields)? {
                        options.insert("fields".into(), fields);
                    }
                    Ok(wrap(&self.name, include_name, options.into()))
                }

                fn validate(&self, include_name: bool) -> Result<()> {
                    validate_all(&self.fields)?;
                    let mut v = Validation::of::<Self>();
                    v.name(&self.name, include_name).require(
                        "format",
                        self.format.iter().all(|format| !format.format.is_empty()),
                    );
                    v.finish()
                }
            }

            impl Datatype for $ty {}
        )*
    };
}

date_datatype! {
    /// The `date` datatype, millisecond resolution.
    Date => "date",
    /// The `date_nanos` datatype, nanosecond resolution.
    DateNanos => "date_nanos",
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::Keyword;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(DateFormat::new("epoch_millis").strict(true), "strict_epoch_millis")]
    #[case(DateFormat::new("epoch_millis").strict(false), "epoch_millis")]
    #[case(DateFormat::new("yyyy-MM-dd"), "yyyy-MM-dd")]
    fn test_date_format(#[case] format: DateFormat, #[case] expected: &str) {
        assert_eq!(format.source().unwrap(), json!(expected));
        assert_eq!(format.to_string(), expected);
    }

    #[test]
    fn test_empty_date_format_cannot_render() {
        let err = DateFormat::new("").source().unwrap_err();
        assert_eq!(err.fields(), ["format"]);
    }

    #[test]
    fn test_formats_join() {
        let date = Date::new("created").format([DateFormat::new("a"), DateFormat::new("b")]);
        assert_eq!(date.source(false).unwrap(), json!({"type": "date", "format": "a||b"}));
    }

    #[test]
    fn test_single_format() {
        let date = Date::new("regDate").format(["yyyy-MM-dd"]);
        assert_eq!(
            date.source(true).unwrap(),
            json!({"regDate": {"type": "date", "format": "yyyy-MM-dd"}})
        );
    }

    #[test]
    fn test_mixed_strict_formats() {
        let date = DateNanos::new("ts")
            .format([DateFormat::new("date_optional_time").strict(true)])
            .format(["epoch_millis"]);
        assert_eq!(
            date.source(false).unwrap(),
            json!({"type": "date_nanos", "format": "strict_date_optional_time||epoch_millis"})
        );
    }

    #[test]
    fn test_nested_format_failure_propagates() {
        let date = Date::new("d").format(["yyyy", ""]);
        let err = date.source(false).unwrap_err();
        assert_eq!(err.fields(), ["format"]);
        assert!(date.validate(true).is_err());
    }

    #[test]
    fn test_date_options_and_fields() {
        let date = Date::new("published")
            .locale("ko_KR")
            .ignore_malformed(true)
            .null_value("1970-01-01")
            .copy_to(["all_dates"])
            .field(Keyword::new("raw"));
        assert_eq!(
            date.source(false).unwrap(),
            json!({
                "type": "date",
                "locale": "ko_KR",
                "ignore_malformed": true,
                "null_value": "1970-01-01",
                "copy_to": "all_dates",
                "fields": {"raw": {"type": "keyword"}}
            })
        );
    }

    #[rstest]
    #[case(vec![], json!({"type": "date"}))]
    #[case(vec!["all_dates"], json!({"type": "date", "copy_to": "all_dates"}))]
    #[case(vec!["all_dates", "search"], json!({"type": "date", "copy_to": ["all_dates", "search"]}))]
    fn test_date_copy_to(#[case] targets: Vec<&str>, #[case] expected: Value) {
        assert_eq!(Date::new("d").copy_to(targets).source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "date_nanos"}))]
    #[case(vec!["all_dates"], json!({"type": "date_nanos", "copy_to": "all_dates"}))]
    #[case(vec!["all_dates", "search"], json!({"type": "date_nanos", "copy_to": ["all_dates", "search"]}))]
    fn test_date_nanos_copy_to(#[case] targets: Vec<&str>, #[case] expected: Value) {
        assert_eq!(DateNanos::new("d").copy_to(targets).source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "date"}))]
    #[case(vec!["epoch_second"], json!({"type": "date", "format": "epoch_second"}))]
    #[case(vec!["yyyy-MM-dd", "epoch_millis"], json!({"type": "date", "format": "yyyy-MM-dd||epoch_millis"}))]
    fn test_date_format_count(#[case] formats: Vec<&str>, #[case] expected: Value) {
        assert_eq!(Date::new("d").format(formats).source(false).unwrap(), expected);
    }
}
