//! Parsing of the tool's machine-readable capability report

use serde::Deserialize;

/// Subset of the `-E capabilities` JSON document this crate consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct CapabilityReport {
    #[serde(default)]
    pub generators: Vec<GeneratorEntry>,
}

/// One generator entry. Other keys the tool reports are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorEntry {
    pub name: String,
}

impl CapabilityReport {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn generator_names(&self) -> Vec<String> {
        self.generators.iter().map(|g| g.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "fileApi": {"requests": []},
        "generators": [
            {"extraGenerators": ["CodeBlocks", "Kate"], "name": "Unix Makefiles", "platformSupport": false, "toolsetSupport": false},
            {"extraGenerators": [], "name": "Ninja", "platformSupport": false, "toolsetSupport": false},
            {"name": "Visual Studio 17 2022", "platformSupport": true, "toolsetSupport": true}
        ],
        "serverMode": false,
        "version": {"isDirty": false, "major": 3, "minor": 28, "patch": 3, "string": "3.28.3", "suffix": ""}
    }"#;

    #[test]
    fn test_parse_generators() {
        let report = CapabilityReport::from_json(SAMPLE).unwrap();
        assert_eq!(
            report.generator_names(),
            vec!["Unix Makefiles", "Ninja", "Visual Studio 17 2022"]
        );
    }

    #[test]
    fn test_missing_generators_key_is_empty() {
        let report = CapabilityReport::from_json(r#"{"serverMode": false}"#).unwrap();
        assert!(report.generator_names().is_empty());
    }

    #[test]
    fn test_entry_without_name_is_rejected() {
        assert!(CapabilityReport::from_json(r#"{"generators": [{"platformSupport": true}]}"#).is_err());
    }

    #[test]
    fn test_non_json_is_rejected() {
        assert!(CapabilityReport::from_json("CMake Error: unknown option").is_err());
    }
}
