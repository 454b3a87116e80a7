use serde_json::{Map, Value};

use super::ORIENTATIONS;
use crate::error::Result;
use crate::source::{wrap, Datatype, Source, Validation};

/// The `geo_point` datatype.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoPoint {
    name: String,
    ignore_malformed: Option<bool>,
    ignore_z_value: Option<bool>,
    null_value: Option<Value>,
}

impl GeoPoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        ignore_malformed: bool,
        ignore_z_value: bool,
    }

    /// Point indexed in place of explicit nulls, in any accepted geo-point form:
    /// an object with `lat`/`lon`, a `[lon, lat]` array, a `"lat,lon"` string
    /// or a geohash.
    pub fn null_value(mut self, value: impl Into<Value>) -> Self {
        self.null_value = Some(value.into());
        self
    }
}

impl Source for GeoPoint {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "geo_point".into());
        optional_add!(options,
            self.ignore_malformed => "ignore_malformed",
            self.ignore_z_value => "ignore_z_value",
            self.null_value => "null_value",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Datatype for GeoPoint {}

/// The `point` datatype for arbitrary cartesian geometries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    name: String,
    ignore_malformed: Option<bool>,
    ignore_z_value: Option<bool>,
    null_value: Option<String>,
}

impl Point {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        ignore_malformed: bool,
        ignore_z_value: bool,
        /// WKT point or `"x,y"` string.
        null_value: String,
    }
}

impl Source for Point {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "point".into());
        optional_add!(options,
            self.ignore_malformed => "ignore_malformed",
            self.ignore_z_value => "ignore_z_value",
            self.null_value => "null_value",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Datatype for Point {}

macro_rules! shape_datatype {
    ($($(#[$attr:meta])* $ty:ident => $kind:expr),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $ty {
                name: String,
                orientation: Option<String>,
                ignore_malformed: Option<bool>,
                ignore_z_value: Option<bool>,
                coerce: Option<bool>,
            }

            impl $ty {
                pub fn new(name: impl Into<String>) -> Self {
                    Self {
                        name: name.into(),
                        ..Self::default()
                    }
                }

                setters! {
                    /// Vertex order of polygons: `right`/`ccw` or `left`/`cw`.
                    orientation: String,
                    ignore_malformed: bool,
                    ignore_z_value: bool,
                    /// Close unclosed polygons automatically.
                    coerce: bool,
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
                        self.orientation => "orientation",
                        self.ignore_malformed => "ignore_malformed",
                        self.ignore_z_value => "ignore_z_value",
                        self.coerce => "coerce",
                    );
                    Ok(wrap(&self.name, include_name, options.into()))
                }

                fn validate(&self, include_name: bool) -> Result<()> {
                    let orientation = self.orientation.as_deref().map(str::to_lowercase);
                    let mut v = Validation::of::<Self>();
                    v.name(&self.name, include_name)
                        .one_of("orientation", orientation.as_deref(), ORIENTATIONS);
                    v.finish()
                }
            }

            impl Datatype for $ty {}
        )*
    };
}

shape_datatype! {
    /// The `geo_shape` datatype.
    GeoShape => "geo_shape",
    /// The `shape` datatype for cartesian geometries.
    Shape => "shape",
}
