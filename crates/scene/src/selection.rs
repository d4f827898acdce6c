use formats::{FeatureCollection, Geometry};
use serde_json::Value;

/// The single hovered-parcel outline.
///
/// Holds at most one geometry and no history: every pointer move either
/// replaces it or clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Highlight {
    #[default]
    Empty,
    Parcel(Geometry),
}

impl Highlight {
    pub fn is_empty(&self) -> bool {
        matches!(self, Highlight::Empty)
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        match self {
            Highlight::Empty => None,
            Highlight::Parcel(g) => Some(g),
        }
    }

    /// Data for the highlight source: the bare parcel geometry, or an empty
    /// FeatureCollection when nothing is highlighted.
    pub fn to_source_data(&self) -> Value {
        match self {
            Highlight::Empty => FeatureCollection::empty().to_value(),
            Highlight::Parcel(g) => g.to_value(),
        }
    }
}
