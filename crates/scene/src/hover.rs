use layers::symbology::{self, LandUseCategory};
use serde_json::{Map, Value};
use tracing::trace;

use crate::augment::{HIGHLIGHT_SOURCE, PARCEL_FILL_LAYER};
use crate::display::{DisplaySink, Field};
use crate::error::TourError;
use crate::selection::Highlight;
use crate::surface::{Cursor, MapSurface, ScreenPoint};

/// What the side panel shows for a hovered parcel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelDetails {
    pub address: String,
    /// Borough-Block-Lot id, as the dataset spells it.
    pub bbl: String,
    pub land_use: &'static LandUseCategory,
}

impl ParcelDetails {
    pub fn from_properties(properties: &Map<String, Value>) -> Self {
        Self {
            address: property_text(properties, "address"),
            bbl: property_text(properties, "bbl"),
            land_use: symbology::lookup_property(properties.get("landuse")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverOutcome {
    Parcel(ParcelDetails),
    Miss,
}

/// Mirrors the topmost parcel under `point` into the side panel and the
/// highlight source, or clears the highlight when there is none.
///
/// On a miss the text fields keep their last values.
pub fn handle_pointer_move<S, D>(
    surface: &mut S,
    display: &mut D,
    highlight: &mut Highlight,
    point: ScreenPoint,
) -> Result<HoverOutcome, TourError>
where
    S: MapSurface,
    D: DisplaySink,
{
    let mut hits = surface.query_rendered_features(point, &[PARCEL_FILL_LAYER])?;

    if hits.is_empty() {
        surface.set_cursor(Cursor::Default)?;
        let cleared = Highlight::Empty;
        surface.set_source_data(HIGHLIGHT_SOURCE, &cleared.to_source_data())?;
        *highlight = cleared;
        trace!(x = point.x, y = point.y, "no parcel under pointer");
        return Ok(HoverOutcome::Miss);
    }

    // Topmost rendered feature wins.
    let lot = hits.swap_remove(0);
    surface.set_cursor(Cursor::Pointer)?;

    let details = ParcelDetails::from_properties(&lot.properties);

    // Map state first: a failing panel write must not leave a stale outline.
    let selected = Highlight::Parcel(lot.geometry);
    surface.set_source_data(HIGHLIGHT_SOURCE, &selected.to_source_data())?;
    *highlight = selected;

    display.set_text(Field::Address, &details.address)?;
    display.set_text(Field::Bbl, &details.bbl)?;
    display.set_text(Field::LandUse, details.land_use.label)?;

    trace!(
        bbl = %details.bbl,
        land_use = details.land_use.label,
        "parcel under pointer"
    );
    Ok(HoverOutcome::Parcel(details))
}

/// Text for a raw property value. Missing and null render blank; whole
/// numbers print without a fractional part.
fn property_text(properties: &Map<String, Value>, key: &str) -> String {
    match properties.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}
