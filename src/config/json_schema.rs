//! JSON Schema generation for the configuration file.
//!
//! Point an editor's YAML language server at the output of
//! `glsl-lint schema` to get completion and validation in `.glsl-lint.yml`.

use serde_json::{json, Value};

use super::schema::LinterConfig;

/// Generates JSON Schema for glsl-lint configuration.
#[derive(Debug, Default)]
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for `.glsl-lint.yml`.
    pub fn generate(&self) -> Value {
        let mut schema = schemars::schema_for!(LinterConfig);
        schema.insert("title".to_string(), json!("glsl-lint configuration"));
        schema.insert(
            "description".to_string(),
            json!("Validator and shader stage settings for glsl-lint"),
        );
        schema.to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_title() {
        let schema = SchemaGenerator::new().generate();
        assert_eq!(schema["title"], "glsl-lint configuration");
    }

    #[test]
    fn schema_lists_config_fields() {
        let schema = SchemaGenerator::new().generate();
        let props = schema["properties"].as_object().unwrap();
        for field in [
            "validator_path",
            "validator_args",
            "args_position",
            "stages",
            "usage_error_code",
            "timeout",
        ] {
            assert!(props.contains_key(field), "missing {}", field);
        }
    }

    #[test]
    fn args_position_is_an_enum() {
        let schema = SchemaGenerator::new().generate();
        let text = schema.to_string();
        assert!(text.contains("prepend"));
        assert!(text.contains("append"));
    }
}
