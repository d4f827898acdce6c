//! Lifecycle controller tying the map surface, side panel and highlight
//! together.
//!
//! The host delivers three kinds of events: the base style finished loading
//! (once), the pointer moved (repeatedly), and the map finished loading
//! (once). Everything the tour does happens in response to one of them.

use catalog::{RoutePath, TourSite};
use tracing::{debug, info};

use crate::augment::augment_style;
use crate::config::TourConfig;
use crate::display::DisplaySink;
use crate::error::TourError;
use crate::hover::{HoverOutcome, handle_pointer_move};
use crate::legend::build_legend;
use crate::markers::{add_route, place_sites};
use crate::selection::Highlight;
use crate::surface::{MapSurface, ScreenPoint};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MapEvent {
    StyleLoaded,
    PointerMoved(ScreenPoint),
    Loaded,
}

/// What handling one event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    StyleAugmented,
    Hover(HoverOutcome),
    OverlaysPlaced,
    Ignored,
}

pub struct TourMap<S, D> {
    surface: S,
    display: D,
    config: TourConfig,
    sites: Vec<TourSite>,
    route: RoutePath,
    highlight: Highlight,
    style_ready: bool,
    overlays_placed: bool,
    legend_built: bool,
}

impl<S: MapSurface, D: DisplaySink> TourMap<S, D> {
    /// Controller over the embedded tour content.
    pub fn new(surface: S, display: D, config: TourConfig) -> Result<Self, TourError> {
        let sites = catalog::tour_sites()?;
        let route = catalog::route_path()?;
        Ok(Self::with_content(surface, display, config, sites, route))
    }

    pub fn with_content(
        surface: S,
        display: D,
        config: TourConfig,
        sites: Vec<TourSite>,
        route: RoutePath,
    ) -> Self {
        Self {
            surface,
            display,
            config,
            sites,
            route,
            highlight: Highlight::Empty,
            style_ready: false,
            overlays_placed: false,
            legend_built: false,
        }
    }

    /// Builds the legend and clears the highlight. Safe to call again; the
    /// legend is only appended the first time.
    pub fn start(&mut self) -> Result<(), TourError> {
        self.highlight = Highlight::Empty;
        if !self.legend_built {
            build_legend(&mut self.display)?;
            self.legend_built = true;
        }
        info!(sites = self.sites.len(), "tour map started");
        Ok(())
    }

    pub fn handle(&mut self, event: MapEvent) -> Result<EventOutcome, TourError> {
        match event {
            MapEvent::StyleLoaded => {
                if self.style_ready {
                    debug!("style reloaded; parcel layers already registered");
                    return Ok(EventOutcome::Ignored);
                }
                augment_style(&mut self.surface, &self.config)?;
                self.style_ready = true;
                Ok(EventOutcome::StyleAugmented)
            }
            MapEvent::PointerMoved(point) => {
                if !self.style_ready {
                    return Ok(EventOutcome::Ignored);
                }
                let outcome = handle_pointer_move(
                    &mut self.surface,
                    &mut self.display,
                    &mut self.highlight,
                    point,
                )?;
                Ok(EventOutcome::Hover(outcome))
            }
            MapEvent::Loaded => {
                if self.overlays_placed {
                    debug!("map loaded again; overlays already placed");
                    return Ok(EventOutcome::Ignored);
                }
                place_sites(&mut self.surface, &self.sites)?;
                add_route(&mut self.surface, &self.route)?;
                self.overlays_placed = true;
                Ok(EventOutcome::OverlaysPlaced)
            }
        }
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    pub fn sites(&self) -> &[TourSite] {
        &self.sites
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn is_style_ready(&self) -> bool {
        self.style_ready
    }
}

#[cfg(test)]
mod tests {
    use super::{EventOutcome, MapEvent, TourMap};
    use crate::augment::{HIGHLIGHT_SOURCE, PARCEL_FILL_LAYER};
    use crate::config::TourConfig;
    use crate::display::Field;
    use crate::hover::HoverOutcome;
    use crate::markers::{DEFAULT_COLOR, OPTIONAL_COLOR, REQUIRED_COLOR, ROUTE_LAYER};
    use crate::selection::Highlight;
    use crate::surface::ScreenPoint;
    use crate::testing::{RecordingDisplay, RecordingSurface};
    use formats::{Feature, Geometry};
    use foundation::LngLat;
    use serde_json::json;

    fn tour() -> TourMap<RecordingSurface, RecordingDisplay> {
        TourMap::new(
            RecordingSurface::new(),
            RecordingDisplay::default(),
            TourConfig::default(),
        )
        .expect("embedded catalog")
    }

    fn lot(code: &str) -> (Geometry, Feature) {
        let geom = Geometry::Polygon(vec![vec![
            LngLat::new(-73.99, 40.679),
            LngLat::new(-73.989, 40.679),
            LngLat::new(-73.989, 40.68),
            LngLat::new(-73.99, 40.679),
        ]]);
        let feature = Feature::new(geom.clone())
            .with_property("landuse", code)
            .with_property("address", "300 3 AVENUE")
            .with_property("bbl", "3004580001");
        (geom, feature)
    }

    const AT: ScreenPoint = ScreenPoint::new(10.0, 10.0);

    #[test]
    fn full_lifecycle() {
        let mut map = tour();
        map.start().expect("start");
        assert_eq!(map.display().fragments.len(), 11);
        assert_eq!(map.highlight(), &Highlight::Empty);

        assert_eq!(
            map.handle(MapEvent::StyleLoaded).expect("style"),
            EventOutcome::StyleAugmented
        );
        assert!(map.is_style_ready());

        let (geom, feature) = lot("05");
        map.surface_mut().show(PARCEL_FILL_LAYER, vec![feature]);
        let outcome = map.handle(MapEvent::PointerMoved(AT)).expect("hover");
        assert!(matches!(outcome, EventOutcome::Hover(HoverOutcome::Parcel(_))));
        assert_eq!(map.highlight(), &Highlight::Parcel(geom));
        assert_eq!(
            map.display().text(Field::LandUse),
            Some("Commercial & Office")
        );

        assert_eq!(
            map.handle(MapEvent::Loaded).expect("loaded"),
            EventOutcome::OverlaysPlaced
        );
        let sites = map.sites().len();
        assert_eq!(map.surface().markers.len(), sites);
        assert_eq!(
            map.surface().layers.last().map(String::as_str),
            Some(ROUTE_LAYER)
        );

        map.surface_mut().show(PARCEL_FILL_LAYER, Vec::new());
        map.handle(MapEvent::PointerMoved(AT)).expect("miss");
        assert_eq!(map.highlight(), &Highlight::Empty);
        assert_eq!(
            map.surface().source_data[HIGHLIGHT_SOURCE],
            json!({"type": "FeatureCollection", "features": []})
        );
    }

    #[test]
    fn pointer_moves_before_style_load_are_ignored() {
        let mut map = tour();
        let (_, feature) = lot("05");
        map.surface_mut().show(PARCEL_FILL_LAYER, vec![feature]);

        assert_eq!(
            map.handle(MapEvent::PointerMoved(AT)).expect("early hover"),
            EventOutcome::Ignored
        );
        assert_eq!(map.highlight(), &Highlight::Empty);
        assert!(map.display().fields.is_empty());
        assert_eq!(map.surface().set_data_calls, 0);
    }

    #[test]
    fn one_shot_events_run_once() {
        let mut map = tour();
        map.start().expect("start");
        map.start().expect("restart");
        assert_eq!(map.display().fragments.len(), 11);

        map.handle(MapEvent::StyleLoaded).expect("style");
        assert_eq!(
            map.handle(MapEvent::StyleLoaded).expect("style again"),
            EventOutcome::Ignored
        );
        map.handle(MapEvent::Loaded).expect("loaded");
        let markers = map.surface().markers.len();
        assert_eq!(
            map.handle(MapEvent::Loaded).expect("loaded again"),
            EventOutcome::Ignored
        );
        assert_eq!(map.surface().markers.len(), markers);
    }

    #[test]
    fn embedded_sites_use_all_marker_colors() {
        let mut map = tour();
        map.handle(MapEvent::StyleLoaded).expect("style");
        map.handle(MapEvent::Loaded).expect("loaded");

        let colors: Vec<_> = map.surface().markers.iter().map(|m| m.color).collect();
        assert!(colors.contains(&REQUIRED_COLOR));
        assert!(colors.contains(&OPTIONAL_COLOR));
        assert!(colors.contains(&DEFAULT_COLOR));
    }

    #[test]
    fn surface_failures_surface_as_errors() {
        let config = TourConfig {
            label_layer: "missing-label".to_string(),
            ..TourConfig::default()
        };
        let mut map = TourMap::new(RecordingSurface::new(), RecordingDisplay::default(), config)
            .expect("embedded catalog");
        assert!(map.handle(MapEvent::StyleLoaded).is_err());
        assert!(!map.is_style_ready());
    }
}
