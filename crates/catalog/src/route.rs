use formats::{Feature, FeatureCollection, Geometry};
use foundation::{LngLat, Rgb};
use serde::{Deserialize, Serialize};

/// Ordered walking route, drawn as a single line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    pub color: Rgb,
    pub coordinates: Vec<LngLat>,
}

impl RoutePath {
    /// One LineString feature carrying the route color as its `color` property.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let feature = Feature::new(Geometry::LineString(self.coordinates.clone()))
            .with_property("color", self.color.to_hex());
        FeatureCollection::new(vec![feature])
    }
}
