use estemplate::datatype::{GeoPoint, Keyword, Numeric, Text};
use estemplate::meta_field::Meta;
use estemplate::{IndexTemplate, Mappings, Settings};
use serde_json::json;

use super::{nori_analysis, nori_field};

pub fn template() -> IndexTemplate {
    IndexTemplate::new("library")
        .index_patterns(["library-*"])
        .settings(Settings::new().analysis(nori_analysis()))
        .mappings(
            Mappings::new()
                .property(Keyword::new("libCode"))
                .property(Text::new("libName").field(nori_field()))
                .property(Keyword::new("address").field(nori_field()))
                .property(GeoPoint::new("location"))
                .property(Keyword::new("tel"))
                .property(Keyword::new("fax"))
                .property(Keyword::new("homepage"))
                .property(Numeric::long("BookCount"))
                .property(Keyword::new("operatingTime"))
                .property(Keyword::new("closed")),
        )
        .version(1)
        .meta(Meta::new().value(json!({"description": "Index template for library"})))
}
