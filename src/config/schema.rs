//! JSON Schema generation for the settings file.
//!
//! This module generates a JSON Schema (Draft-07) for `.cronlint.yml`,
//! enabling editor autocomplete and validation.

use serde_json::{json, Value};

use crate::config::settings::REQUIRED_RULES;
use crate::lint::RuleRegistry;

/// Generates JSON Schema for cronlint settings.
pub struct SchemaGenerator {
    rule_ids: Vec<String>,
}

impl SchemaGenerator {
    /// Create a generator that knows the rule IDs that may be disabled.
    pub fn new(registry: &RuleRegistry) -> Self {
        Self {
            rule_ids: registry
                .iter()
                .map(|r| r.id().0)
                .filter(|id| !REQUIRED_RULES.contains(&id.as_str()))
                .collect(),
        }
    }

    /// Generate the complete JSON Schema for `.cronlint.yml`.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "cronlint settings",
            "description": "Settings for validating crontab files with cronlint",
            "type": "object",
            "properties": {
                "check_scripts": {
                    "type": "boolean",
                    "default": false,
                    "description": "Check that each entry's script or command exists"
                },
                "strict": {
                    "type": "boolean",
                    "default": false,
                    "description": "Fail on warnings as well as errors"
                },
                "allow_environment": {
                    "type": "boolean",
                    "default": false,
                    "description": "Accept NAME=value environment lines"
                },
                "format": {
                    "type": "string",
                    "enum": ["human", "json", "sarif"],
                    "default": "human",
                    "description": "Report format"
                },
                "disabled_rules": {
                    "type": "array",
                    "items": { "type": "string", "enum": self.rule_ids },
                    "uniqueItems": true,
                    "description": "Rule IDs to skip"
                },
                "search_path": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Extra directories searched for commands, after PATH"
                }
            },
            "additionalProperties": false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> SchemaGenerator {
        SchemaGenerator::new(&RuleRegistry::catalog())
    }

    #[test]
    fn schema_is_draft_07_object() {
        let schema = generator().generate();
        assert_eq!(schema["$schema"], "http://json-schema.org/draft-07/schema#");
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn schema_lists_every_setting() {
        let schema = generator().generate();
        let properties = schema["properties"].as_object().unwrap();
        for key in [
            "check_scripts",
            "strict",
            "allow_environment",
            "format",
            "disabled_rules",
            "search_path",
        ] {
            assert!(properties.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn disabled_rules_enumerates_optional_rule_ids() {
        let schema = generator().generate();
        let ids = schema["properties"]["disabled_rules"]["items"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(
            ids,
            &vec![json!("absolute-command-path"), json!("command-exists")]
        );
    }
}
