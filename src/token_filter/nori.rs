use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, TokenFilter};

/// The `nori_part_of_speech` filter from the analysis-nori plugin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoriPartOfSpeech {
    name: String,
    stoptags: Vec<String>,
}

impl NoriPartOfSpeech {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    appenders! {
        stoptags,
    }
}

impl Source for NoriPartOfSpeech {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "nori_part_of_speech".into());
        many_add!(options, self.stoptags => "stoptags");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl TokenFilter for NoriPartOfSpeech {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_single_stoptag_is_scalar() {
        let filter = NoriPartOfSpeech::new("part_of_speech_stop_sp").stoptags(["SP"]);
        assert_eq!(
            filter.source(true).unwrap(),
            json!({"part_of_speech_stop_sp": {"type": "nori_part_of_speech", "stoptags": "SP"}})
        );
    }

    #[test]
    fn test_many_stoptags() {
        let filter = NoriPartOfSpeech::new("pos").stoptags(["E", "IC"]).stoptags(["J"]);
        assert_eq!(
            filter.source(false).unwrap(),
            json!({"type": "nori_part_of_speech", "stoptags": ["E", "IC", "J"]})
        );
    }

    #[rstest]
    #[case(vec![], json!({"type": "nori_part_of_speech"}))]
    #[case(vec!["SP"], json!({"type": "nori_part_of_speech", "stoptags": "SP"}))]
    #[case(vec!["E", "IC", "J"], json!({"type": "nori_part_of_speech", "stoptags": ["E", "IC", "J"]}))]
    fn test_part_of_speech_stoptags(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = NoriPartOfSpeech::new("pos").stoptags(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }
}
