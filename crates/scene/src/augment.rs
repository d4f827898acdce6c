//! Parcel and highlight layers added on top of the basemap style.
//!
//! Must run after the base style has loaded: the surface rejects source and
//! layer registration before that, and the fill is positioned relative to a
//! basemap label layer.

use formats::FeatureCollection;
use foundation::Rgb;
use layers::symbology::{self, FALLBACK};
use layers::{Categorical, LayerSpec, PaintValue, SourceSpec, ZoomStops};
use tracing::info;

use crate::config::TourConfig;
use crate::surface::{MapSurface, SurfaceError};

pub const WATER_LAYER: &str = "water";
pub const PARCEL_SOURCE: &str = "pluto-gowanus";
pub const PARCEL_FILL_LAYER: &str = "gowanus-lots-fill";
pub const PARCEL_LINE_LAYER: &str = "gowanus-lots-line";
pub const HIGHLIGHT_SOURCE: &str = "highlight-feature";
pub const HIGHLIGHT_LAYER: &str = "highlight-line";

/// Zoom range over which parcel outlines fade in.
pub const OUTLINE_FADE: [(f64, f64); 2] = [(14.0, 0.0), (14.8, 1.0)];

pub fn parcel_fill_layer() -> LayerSpec {
    let by_landuse =
        Categorical::new("landuse", symbology::fill_color_stops()).with_default(FALLBACK.color);
    LayerSpec::fill(PARCEL_FILL_LAYER, PARCEL_SOURCE)
        .with_paint("fill-opacity", 0.7)
        .with_paint("fill-color", by_landuse)
}

pub fn parcel_outline_layer() -> LayerSpec {
    LayerSpec::line(PARCEL_LINE_LAYER, PARCEL_SOURCE)
        .with_paint("line-color", Rgb::GRAY)
        .with_paint("line-opacity", ZoomStops(OUTLINE_FADE.to_vec()))
}

pub fn highlight_layer() -> LayerSpec {
    LayerSpec::line(HIGHLIGHT_LAYER, HIGHLIGHT_SOURCE)
        .with_paint("line-width", 3.0)
        .with_paint("line-opacity", 0.9)
        .with_paint("line-color", Rgb::BLACK)
}

/// Registers the parcel and highlight sources and their layers, in order.
pub fn augment_style<S: MapSurface>(
    surface: &mut S,
    config: &TourConfig,
) -> Result<(), SurfaceError> {
    surface.set_paint_property(
        WATER_LAYER,
        "fill-color",
        &PaintValue::Color(config.water_color),
    )?;

    surface.add_source(PARCEL_SOURCE, &SourceSpec::geojson_url(&config.parcels_url))?;
    // Below the label layer so basemap labels stay readable over the fill.
    surface.add_layer(&parcel_fill_layer(), Some(config.label_layer.as_str()))?;
    surface.add_layer(&parcel_outline_layer(), None)?;

    surface.add_source(
        HIGHLIGHT_SOURCE,
        &SourceSpec::geojson_inline(&FeatureCollection::empty()),
    )?;
    surface.add_layer(&highlight_layer(), None)?;

    info!(
        parcels = %config.parcels_url,
        below = %config.label_layer,
        "parcel and highlight layers registered"
    );
    Ok(())
}
