//! The persisted texture document type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DocumentError;

/// A persisted procedural texture document.
///
/// Documents are flat JSON objects. The `custom_type` tag identifies the
/// concrete texture variant and drives parse dispatch; the base fields are
/// shared by every variant; everything else is collected into `params` and
/// interpreted by the variant named in the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDocument {
    /// Tag identifying the concrete texture variant (e.g. `texture.brick_v1`).
    pub custom_type: String,

    /// Texture name.
    pub name: String,

    /// Square texture size in pixels.
    pub size: u32,

    /// Whether the texture renders a mipmap chain.
    #[serde(default, skip_serializing_if = "is_false")]
    pub generate_mip_maps: bool,

    /// Re-render cadence: 0 renders once, n renders every n-th frame.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub refresh_rate: u32,

    /// Name of the texture shown while this one is unavailable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_texture: Option<String>,

    /// Variant-specific parameters, kept flat in the JSON object.
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl TextureDocument {
    /// Creates a new document with empty params.
    pub fn new(custom_type: impl Into<String>, name: impl Into<String>, size: u32) -> Self {
        Self {
            custom_type: custom_type.into(),
            name: name.into(),
            size,
            generate_mip_maps: false,
            refresh_rate: 0,
            fallback_texture: None,
            params: Map::new(),
        }
    }

    /// Sets the mipmap flag.
    pub fn with_generate_mip_maps(mut self, generate: bool) -> Self {
        self.generate_mip_maps = generate;
        self
    }

    /// Sets the refresh rate.
    pub fn with_refresh_rate(mut self, rate: u32) -> Self {
        self.refresh_rate = rate;
        self
    }

    /// Sets the fallback texture name.
    pub fn with_fallback_texture(mut self, name: impl Into<String>) -> Self {
        self.fallback_texture = Some(name.into());
        self
    }

    /// Adds a variant parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Parses a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a document from a JSON value.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serializes the document to a JSON string.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the document to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the document to a JSON value.
    pub fn to_value(&self) -> Result<Value, DocumentError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Deserializes the variant params into a typed struct.
    pub fn parse_params<'de, T: Deserialize<'de>>(&self) -> Result<T, DocumentError> {
        Ok(T::deserialize(Value::Object(self.params.clone()))?)
    }

    /// Checks the base fields. Variant params are not range-checked here;
    /// the variant named by `custom_type` owns their interpretation.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.custom_type.is_empty() {
            return Err(DocumentError::InvalidField {
                field: "custom_type",
                reason: "must not be empty".to_string(),
            });
        }
        if self.name.is_empty() {
            return Err(DocumentError::InvalidField {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.size == 0 {
            return Err(DocumentError::InvalidField {
                field: "size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_round_trip() {
        let doc = TextureDocument::new("texture.brick_v1", "wall-01", 512)
            .with_generate_mip_maps(true)
            .with_refresh_rate(2)
            .with_fallback_texture("flat_gray")
            .with_param("number_of_bricks_width", 5.0)
            .with_param("joint_color", serde_json::json!([0.72, 0.72, 0.72]));

        let json = doc.to_json().unwrap();
        let parsed = TextureDocument::from_json(&json).unwrap();
        assert_eq!(doc, parsed);
    }

    #[test]
    fn test_params_stay_flat_in_json() {
        let doc = TextureDocument::new("texture.brick_v1", "wall", 64)
            .with_param("number_of_bricks_height", 15.0);

        let value = doc.to_value().unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["custom_type"], "texture.brick_v1");
        assert_eq!(obj["number_of_bricks_height"], 15.0);
        assert!(obj.get("params").is_none());
    }

    #[test]
    fn test_defaults_omitted_from_json() {
        let doc = TextureDocument::new("texture.brick_v1", "wall", 64);
        let json = doc.to_json().unwrap();
        assert!(!json.contains("generate_mip_maps"));
        assert!(!json.contains("refresh_rate"));
        assert!(!json.contains("fallback_texture"));
    }

    #[test]
    fn test_extra_fields_collected_as_params() {
        let json = r#"{
            "custom_type": "texture.brick_v1",
            "name": "wall",
            "size": 256,
            "number_of_bricks_height": 15.0,
            "brick_color": [0.77, 0.47, 0.4]
        }"#;

        let doc = TextureDocument::from_json(json).unwrap();
        assert_eq!(doc.size, 256);
        assert_eq!(doc.params.len(), 2);
        assert!(doc.params.contains_key("brick_color"));
    }

    #[test]
    fn test_parse_params_typed() {
        #[derive(serde::Deserialize)]
        struct Params {
            number_of_bricks_height: f64,
        }

        let doc = TextureDocument::new("texture.brick_v1", "wall", 64)
            .with_param("number_of_bricks_height", 15.0);

        let params: Params = doc.parse_params().unwrap();
        assert_eq!(params.number_of_bricks_height, 15.0);
    }

    #[test]
    fn test_validate_rejects_bad_base_fields() {
        let doc = TextureDocument::new("", "wall", 64);
        assert!(doc.validate().is_err());

        let doc = TextureDocument::new("texture.brick_v1", "", 64);
        assert!(doc.validate().is_err());

        let doc = TextureDocument::new("texture.brick_v1", "wall", 0);
        assert!(doc.validate().is_err());

        let doc = TextureDocument::new("texture.brick_v1", "wall", 64);
        assert!(doc.validate().is_ok());
    }
}
