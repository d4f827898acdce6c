//! The rendering surface the tour draws on.
//!
//! Basemap rendering, projection, tiling and hit-testing all live behind
//! [`MapSurface`]; this crate only hands it declarations and reads back the
//! features it reports under the pointer.

use formats::Feature;
use foundation::{LngLat, Rgb};
use layers::{LayerSpec, PaintValue, SourceSpec};
use serde_json::Value;

/// Pointer position in CSS pixels relative to the map container.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupSpec {
    /// Pixel offset from the marker anchor.
    pub offset: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: LngLat,
    pub color: Rgb,
    pub popup: Option<PopupSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The surface rejected a call (the library threw).
    Rejected { call: &'static str, message: String },
    /// The surface answered with something that could not be decoded.
    Decode { call: &'static str, message: String },
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceError::Rejected { call, message } => {
                write!(f, "map surface rejected {call}: {message}")
            }
            SurfaceError::Decode { call, message } => {
                write!(f, "could not decode {call} result: {message}")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

pub trait MapSurface {
    fn set_paint_property(
        &mut self,
        layer_id: &str,
        property: &str,
        value: &PaintValue,
    ) -> Result<(), SurfaceError>;

    fn add_source(&mut self, id: &str, source: &SourceSpec) -> Result<(), SurfaceError>;

    /// Adds `layer` below `before_id`, or on top when `None`.
    fn add_layer(&mut self, layer: &LayerSpec, before_id: Option<&str>)
    -> Result<(), SurfaceError>;

    /// Replaces the data of a registered GeoJSON source.
    fn set_source_data(&mut self, source_id: &str, data: &Value) -> Result<(), SurfaceError>;

    /// Rendered features at `point`, topmost first, drawn only from `layer_ids`.
    fn query_rendered_features(
        &self,
        point: ScreenPoint,
        layer_ids: &[&str],
    ) -> Result<Vec<Feature>, SurfaceError>;

    fn set_cursor(&mut self, cursor: Cursor) -> Result<(), SurfaceError>;

    fn add_marker(&mut self, marker: &MarkerSpec) -> Result<(), SurfaceError>;
}
