//! Recording fakes of the surface and display seams.

use std::collections::BTreeMap;

use formats::Feature;
use layers::{LayerSpec, PaintValue, SourceSpec};
use serde_json::Value;

use crate::display::{DisplayError, DisplaySink, Field};
use crate::surface::{Cursor, MapSurface, MarkerSpec, ScreenPoint, SurfaceError};

/// Layers a freshly loaded basemap style already has.
const BASE_LAYERS: [&str; 3] = ["land", "water", "waterway-label"];

#[derive(Debug)]
pub struct RecordingSurface {
    /// Layer ids bottom to top.
    pub layers: Vec<String>,
    pub layer_specs: BTreeMap<String, LayerSpec>,
    pub sources: BTreeMap<String, SourceSpec>,
    /// Last data pushed to each source through `set_source_data`.
    pub source_data: BTreeMap<String, Value>,
    pub set_data_calls: usize,
    pub paint_overrides: Vec<(String, String, PaintValue)>,
    pub cursor: Cursor,
    pub markers: Vec<MarkerSpec>,
    /// Features "rendered" on screen, topmost first, tagged with their layer.
    pub rendered: Vec<(String, Feature)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            layers: BASE_LAYERS.iter().map(|s| s.to_string()).collect(),
            layer_specs: BTreeMap::new(),
            sources: BTreeMap::new(),
            source_data: BTreeMap::new(),
            set_data_calls: 0,
            paint_overrides: Vec::new(),
            cursor: Cursor::Default,
            markers: Vec::new(),
            rendered: Vec::new(),
        }
    }

    /// Puts `features` under the pointer in `layer`, replacing what was there.
    pub fn show(&mut self, layer: &str, features: Vec<Feature>) {
        self.rendered = features
            .into_iter()
            .map(|f| (layer.to_string(), f))
            .collect();
    }

    pub fn layer_index(&self, id: &str) -> Option<usize> {
        self.layers.iter().position(|l| l == id)
    }

    fn reject(call: &'static str, message: String) -> SurfaceError {
        SurfaceError::Rejected { call, message }
    }
}

impl MapSurface for RecordingSurface {
    fn set_paint_property(
        &mut self,
        layer_id: &str,
        property: &str,
        value: &PaintValue,
    ) -> Result<(), SurfaceError> {
        if self.layer_index(layer_id).is_none() {
            return Err(Self::reject(
                "setPaintProperty",
                format!("layer {layer_id} does not exist"),
            ));
        }
        self.paint_overrides
            .push((layer_id.to_string(), property.to_string(), value.clone()));
        Ok(())
    }

    fn add_source(&mut self, id: &str, source: &SourceSpec) -> Result<(), SurfaceError> {
        if self.sources.contains_key(id) {
            return Err(Self::reject("addSource", format!("source {id} already exists")));
        }
        self.sources.insert(id.to_string(), source.clone());
        Ok(())
    }

    fn add_layer(
        &mut self,
        layer: &LayerSpec,
        before_id: Option<&str>,
    ) -> Result<(), SurfaceError> {
        if let Some(source) = layer.source_id()
            && !self.sources.contains_key(source)
        {
            return Err(Self::reject(
                "addLayer",
                format!("source {source} does not exist"),
            ));
        }
        if self.layer_index(&layer.id).is_some() {
            return Err(Self::reject(
                "addLayer",
                format!("layer {} already exists", layer.id),
            ));
        }
        match before_id {
            Some(before) => {
                let Some(idx) = self.layer_index(before) else {
                    return Err(Self::reject(
                        "addLayer",
                        format!("before layer {before} does not exist"),
                    ));
                };
                self.layers.insert(idx, layer.id.clone());
            }
            None => self.layers.push(layer.id.clone()),
        }
        self.layer_specs.insert(layer.id.clone(), layer.clone());
        Ok(())
    }

    fn set_source_data(&mut self, source_id: &str, data: &Value) -> Result<(), SurfaceError> {
        if !self.sources.contains_key(source_id) {
            return Err(Self::reject(
                "setData",
                format!("source {source_id} does not exist"),
            ));
        }
        self.set_data_calls += 1;
        self.source_data.insert(source_id.to_string(), data.clone());
        Ok(())
    }

    fn query_rendered_features(
        &self,
        _point: ScreenPoint,
        layer_ids: &[&str],
    ) -> Result<Vec<Feature>, SurfaceError> {
        Ok(self
            .rendered
            .iter()
            .filter(|(layer, _)| layer_ids.contains(&layer.as_str()))
            .map(|(_, f)| f.clone())
            .collect())
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Result<(), SurfaceError> {
        self.cursor = cursor;
        Ok(())
    }

    fn add_marker(&mut self, marker: &MarkerSpec) -> Result<(), SurfaceError> {
        self.markers.push(marker.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub fields: BTreeMap<Field, String>,
    pub fragments: Vec<(String, String)>,
    pub writes: usize,
    /// Field whose element is reported missing.
    pub fail_on: Option<Field>,
}

impl RecordingDisplay {
    pub fn text(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }
}

impl DisplaySink for RecordingDisplay {
    fn set_text(&mut self, field: Field, text: &str) -> Result<(), DisplayError> {
        if self.fail_on == Some(field) {
            return Err(DisplayError::MissingElement(format!("#{}", field.element_id())));
        }
        self.writes += 1;
        self.fields.insert(field, text.to_string());
        Ok(())
    }

    fn append_fragment(&mut self, container: &str, html: &str) -> Result<(), DisplayError> {
        self.fragments.push((container.to_string(), html.to_string()));
        Ok(())
    }
}
