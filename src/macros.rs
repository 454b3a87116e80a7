// Builder plumbing shared by every component.
//
// Setter names match the struct field they fill, so `setters! { boost: f64 }`
// expects a `boost: Option<f64>` field on the surrounding type.

/// Chainable setters for optional scalar fields.
macro_rules! setters {
    (@one $(#[$attr:meta])* $field:ident: String) => {
        $(#[$attr])*
        pub fn $field(mut self, value: impl Into<String>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
    (@one $(#[$attr:meta])* $field:ident: $t:tt) => {
        $(#[$attr])*
        pub fn $field(mut self, value: $t) -> Self {
            self.$field = Some(value);
            self
        }
    };
    ($($(#[$attr:meta])* $field:ident: $t:tt),* $(,)?) => {
        $( setters!(@one $(#[$attr])* $field: $t); )*
    };
}

/// Chainable setters for append-only string list fields.
macro_rules! appenders {
    ($($(#[$attr:meta])* $field:ident),* $(,)?) => {
        $(
            $(#[$attr])*
            pub fn $field<I, S>(mut self, values: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.$field.extend(values.into_iter().map(Into::into));
                self
            }
        )*
    };
}

/// Copy every set optional field into `$map` under its external key.
///
/// Values with no JSON form, such as non-finite floats, are skipped.
macro_rules! optional_add {
    ($map:ident, $($field:expr => $key:expr),* $(,)?) => {
        $(
            if let Some(ref value) = $field {
                match serde_json::Value::from(value.clone()) {
                    serde_json::Value::Null => {
                        log::debug!("[options] {} has no JSON value, skipped", $key);
                    }
                    value => {
                        $map.insert($key.to_string(), value);
                    }
                }
            }
        )*
    };
}

/// Copy every non-empty list field into `$map`, scalar when it holds one value.
macro_rules! many_add {
    ($map:ident, $($field:expr => $key:expr),* $(,)?) => {
        $(
            if let Some(value) = $crate::source::one_or_many(&$field) {
                $map.insert($key.to_string(), value);
            }
        )*
    };
}

/// Components with no options beyond their `type`.
macro_rules! plain_component {
    ($family:ident; $($(#[$attr:meta])* $ty:ident => $kind:expr),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $ty {
                name: String,
            }

            impl $ty {
                pub fn new(name: impl Into<String>) -> Self {
                    Self { name: name.into() }
                }
            }

            impl $crate::source::Source for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn source(&self, include_name: bool) -> $crate::error::Result<serde_json::Value> {
                    let mut options = serde_json::Map::new();
                    options.insert("type".into(), $kind.into());
                    Ok($crate::source::wrap(&self.name, include_name, options.into()))
                }
            }

            impl $crate::source::$family for $ty {}
        )*
    };
}
