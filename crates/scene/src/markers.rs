use catalog::{RoutePath, SiteKind, TourSite};
use foundation::Rgb;
use layers::{LayerKind, LayerSource, LayerSpec, PaintValue, SourceSpec};
use tracing::info;

use crate::surface::{MapSurface, MarkerSpec, PopupSpec, SurfaceError};

pub const REQUIRED_COLOR: Rgb = Rgb::from_u32(0xd95f0e);
pub const OPTIONAL_COLOR: Rgb = Rgb::from_u32(0x8c96c6);
pub const DEFAULT_COLOR: Rgb = Rgb::STEELBLUE;

pub const POPUP_OFFSET: f64 = 40.0;
pub const ROUTE_LAYER: &str = "route";

pub fn marker_color(kind: SiteKind) -> Rgb {
    match kind {
        SiteKind::Required => REQUIRED_COLOR,
        SiteKind::Optional => OPTIONAL_COLOR,
        SiteKind::Other => DEFAULT_COLOR,
    }
}

pub fn popup_text(site: &TourSite) -> String {
    format!(
        "Site {} is located at {}, {}.",
        site.site, site.name, site.address
    )
}

pub fn site_marker(site: &TourSite) -> MarkerSpec {
    MarkerSpec {
        position: site.position(),
        color: marker_color(site.kind()),
        popup: Some(PopupSpec {
            offset: POPUP_OFFSET,
            text: popup_text(site),
        }),
    }
}

/// Route line with its data declared inline; color comes from the feature.
pub fn route_layer(route: &RoutePath) -> LayerSpec {
    let source = SourceSpec::geojson_inline(&route.to_feature_collection());
    LayerSpec::new(ROUTE_LAYER, LayerKind::Line, LayerSource::Inline(source))
        .with_paint("line-width", 7.0)
        .with_paint("line-opacity", 0.6)
        .with_paint("line-color", PaintValue::get("color"))
}

pub fn place_sites<S: MapSurface>(surface: &mut S, sites: &[TourSite]) -> Result<(), SurfaceError> {
    for site in sites {
        surface.add_marker(&site_marker(site))?;
    }
    info!(count = sites.len(), "tour site markers placed");
    Ok(())
}

pub fn add_route<S: MapSurface>(surface: &mut S, route: &RoutePath) -> Result<(), SurfaceError> {
    surface.add_layer(&route_layer(route), None)?;
    info!(points = route.coordinates.len(), "route overlay added");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;
    use foundation::LngLat;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn site(n: u64, site_type: Option<&str>) -> TourSite {
        TourSite {
            site: n.into(),
            name: "Gowanus Canal".to_string(),
            address: "Union St & Bond St".to_string(),
            lon: -73.9925,
            lat: 40.6785,
            site_type: site_type.map(str::to_string),
        }
    }

    #[test]
    fn marker_color_follows_site_type() {
        assert_eq!(site_marker(&site(1, Some("required"))).color, REQUIRED_COLOR);
        assert_eq!(site_marker(&site(2, Some("optional"))).color, OPTIONAL_COLOR);
        assert_eq!(site_marker(&site(3, Some("social"))).color, DEFAULT_COLOR);
        assert_eq!(site_marker(&site(4, None)).color, Rgb::from_u32(0x4682b4));
    }

    #[test]
    fn popup_uses_sentence_template() {
        let marker = site_marker(&site(7, Some("required")));
        assert_eq!(marker.position, LngLat::new(-73.9925, 40.6785));
        assert_eq!(
            marker.popup,
            Some(PopupSpec {
                offset: 40.0,
                text: "Site 7 is located at Gowanus Canal, Union St & Bond St.".to_string(),
            })
        );

        let labelled = TourSite {
            site: "3a".into(),
            ..site(3, None)
        };
        assert_eq!(
            popup_text(&labelled),
            "Site 3a is located at Gowanus Canal, Union St & Bond St."
        );
    }

    #[test]
    fn route_layer_reads_color_from_feature() {
        let route = RoutePath {
            color: Rgb::from_u32(0xd95f0e),
            coordinates: vec![LngLat::new(-73.99, 40.679), LngLat::new(-73.98, 40.68)],
        };
        assert_eq!(
            route_layer(&route).to_value(),
            json!({
                "id": "route",
                "type": "line",
                "source": {
                    "type": "geojson",
                    "data": {
                        "type": "FeatureCollection",
                        "features": [{
                            "type": "Feature",
                            "properties": {"color": "#d95f0e"},
                            "geometry": {
                                "type": "LineString",
                                "coordinates": [[-73.99, 40.679], [-73.98, 40.68]]
                            }
                        }]
                    }
                },
                "paint": {
                    "line-color": ["get", "color"],
                    "line-opacity": 0.6,
                    "line-width": 7.0
                }
            })
        );
    }

    #[test]
    fn places_every_site_and_the_route() {
        let mut surface = RecordingSurface::new();
        let sites = vec![site(1, Some("required")), site(2, Some("optional"))];
        place_sites(&mut surface, &sites).expect("markers");
        assert_eq!(surface.markers.len(), 2);

        let route = RoutePath {
            color: Rgb::from_u32(0xd95f0e),
            coordinates: vec![LngLat::new(-73.99, 40.679), LngLat::new(-73.98, 40.68)],
        };
        add_route(&mut surface, &route).expect("route");
        assert_eq!(surface.layers.last().map(String::as_str), Some(ROUTE_LAYER));
    }
}
