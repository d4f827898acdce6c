use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::paint::PaintValue;
use crate::source::SourceSpec;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Fill,
    Line,
}

/// Where a layer reads features from: a registered source id, or a source
/// declared inline with the layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LayerSource {
    Named(String),
    Inline(SourceSpec),
}

/// One-shot layer declaration handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub source: LayerSource,
    pub paint: BTreeMap<String, PaintValue>,
}

impl LayerSpec {
    pub fn new(id: impl Into<String>, kind: LayerKind, source: LayerSource) -> Self {
        Self {
            id: id.into(),
            kind,
            source,
            paint: BTreeMap::new(),
        }
    }

    pub fn fill(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(id, LayerKind::Fill, LayerSource::Named(source.into()))
    }

    pub fn line(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(id, LayerKind::Line, LayerSource::Named(source.into()))
    }

    pub fn with_paint(mut self, property: impl Into<String>, value: impl Into<PaintValue>) -> Self {
        self.paint.insert(property.into(), value.into());
        self
    }

    pub fn paint_value(&self, property: &str) -> Option<&PaintValue> {
        self.paint.get(property)
    }

    /// The source id this layer draws from, if it is not inline.
    pub fn source_id(&self) -> Option<&str> {
        match &self.source {
            LayerSource::Named(id) => Some(id.as_str()),
            LayerSource::Inline(_) => None,
        }
    }

    pub fn to_value(&self) -> Value {
        // Only string keys and JSON-native values; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
