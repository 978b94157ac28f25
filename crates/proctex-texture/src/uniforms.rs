//! Shader uniform slots for procedural textures.
//!
//! The host renderer binds these by name when the fragment program runs on
//! the GPU; the CPU evaluator in this crate reads them the same way. Typed
//! getters fail on a missing name or a type mismatch rather than guessing
//! a default, so a variant that forgot to upload a uniform surfaces as an
//! error instead of a silently wrong pixel.

use std::collections::HashMap;

use crate::color::Color3;
use crate::error::TextureError;

/// A single uniform slot value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f64),
    Int(i32),
    Vector2([f64; 2]),
    Color3(Color3),
}

/// Name-keyed uniform storage for one texture.
#[derive(Debug, Clone, Default)]
pub struct UniformStore {
    values: HashMap<String, UniformValue>,
}

impl UniformStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload a float uniform, replacing any previous value under the name.
    pub fn set_float(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), UniformValue::Float(value));
    }

    /// Upload an integer uniform.
    pub fn set_int(&mut self, name: impl Into<String>, value: i32) {
        self.values.insert(name.into(), UniformValue::Int(value));
    }

    /// Upload a 2-component vector uniform.
    pub fn set_vector2(&mut self, name: impl Into<String>, value: [f64; 2]) {
        self.values
            .insert(name.into(), UniformValue::Vector2(value));
    }

    /// Upload a color uniform.
    pub fn set_color3(&mut self, name: impl Into<String>, value: Color3) {
        self.values.insert(name.into(), UniformValue::Color3(value));
    }

    /// Look up a raw uniform value.
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    /// Read a float uniform.
    pub fn float(&self, name: &str) -> Result<f64, TextureError> {
        match self.get(name) {
            Some(UniformValue::Float(v)) => Ok(*v),
            Some(other) => Err(TextureError::UniformType {
                name: name.to_string(),
                expected: "float",
                actual: other.type_name(),
            }),
            None => Err(TextureError::MissingUniform(name.to_string())),
        }
    }

    /// Read an integer uniform.
    pub fn int(&self, name: &str) -> Result<i32, TextureError> {
        match self.get(name) {
            Some(UniformValue::Int(v)) => Ok(*v),
            Some(other) => Err(TextureError::UniformType {
                name: name.to_string(),
                expected: "int",
                actual: other.type_name(),
            }),
            None => Err(TextureError::MissingUniform(name.to_string())),
        }
    }

    /// Read a 2-component vector uniform.
    pub fn vector2(&self, name: &str) -> Result<[f64; 2], TextureError> {
        match self.get(name) {
            Some(UniformValue::Vector2(v)) => Ok(*v),
            Some(other) => Err(TextureError::UniformType {
                name: name.to_string(),
                expected: "vector2",
                actual: other.type_name(),
            }),
            None => Err(TextureError::MissingUniform(name.to_string())),
        }
    }

    /// Read a color uniform.
    pub fn color3(&self, name: &str) -> Result<Color3, TextureError> {
        match self.get(name) {
            Some(UniformValue::Color3(v)) => Ok(*v),
            Some(other) => Err(TextureError::UniformType {
                name: name.to_string(),
                expected: "color3",
                actual: other.type_name(),
            }),
            None => Err(TextureError::MissingUniform(name.to_string())),
        }
    }

    /// Names of all uploaded uniforms.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    /// Number of uploaded uniforms.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl UniformValue {
    fn type_name(&self) -> &'static str {
        match self {
            UniformValue::Float(_) => "float",
            UniformValue::Int(_) => "int",
            UniformValue::Vector2(_) => "vector2",
            UniformValue::Color3(_) => "color3",
        }
    }
}
