mod book;
mod library;

use estemplate::analyzer::Custom;
use estemplate::datatype::Text;
use estemplate::token_filter::NoriPartOfSpeech;
use estemplate::tokenizer::Nori;
use estemplate::{Analysis, IndexTemplate};

use crate::cli::TemplateName;

/// Analyzer used by every Korean text sub-field.
const NORI_ANALYZER: &str = "nori-default";

pub fn template(name: TemplateName) -> IndexTemplate {
    match name {
        TemplateName::Book => book::template(),
        TemplateName::Library => library::template(),
    }
}

/// Korean analysis keeping punctuation and dropping spaces.
fn nori_analysis() -> Analysis {
    Analysis::new()
        .analyzer(
            Custom::new(NORI_ANALYZER)
                .tokenizer("tokenizer_discard_puncuation_false")
                .filter(["part_of_speech_stop_sp", "nori_number", "nori_readingform"]),
        )
        .tokenizer(Nori::new("tokenizer_discard_puncuation_false").discard_punctuation(false))
        .filter(NoriPartOfSpeech::new("part_of_speech_stop_sp").stoptags(["SP"]))
}

/// Sub-field `nori` analyzed with [`NORI_ANALYZER`].
fn nori_field() -> Text {
    Text::new("nori").analyzer(NORI_ANALYZER)
}
