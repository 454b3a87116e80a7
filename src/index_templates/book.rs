use estemplate::datatype::{Date, Keyword, Numeric, Text};
use estemplate::meta_field::Meta;
use estemplate::{IndexTemplate, Mappings, Settings};
use serde_json::json;

use super::{nori_analysis, nori_field};

pub fn template() -> IndexTemplate {
    IndexTemplate::new("book")
        .index_patterns(["book-*"])
        .settings(
            Settings::new()
                .refresh_interval("300s")
                .analysis(nori_analysis()),
        )
        .mappings(
            Mappings::new()
                .property(Text::new("title").field(nori_field()))
                .property(Text::new("authors").field(nori_field()))
                .property(Text::new("publisher").field(nori_field()))
                .property(Keyword::new("publicationYear"))
                .property(Keyword::new("isbn"))
                .property(Keyword::new("setIsbn"))
                .property(Keyword::new("additionSymbol"))
                .property(Keyword::new("vol"))
                .property(Keyword::new("kdc"))
                .property(Numeric::integer("bookCount"))
                .property(Numeric::integer("loanCount"))
                .property(Date::new("regDate").format(["yyyy-MM-dd"]))
                .property(Keyword::new("libCode")),
        )
        .version(1)
        .meta(Meta::new().value(json!({"description": "Index template for book"})))
}
