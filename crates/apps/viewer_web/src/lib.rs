use console_error_panic_hook::set_once;
use scene::{MapEvent, TourConfig, TourError, TourMap};
use std::cell::RefCell;
use tracing::{error, info, trace, warn};
use wasm_bindgen::prelude::*;

mod dom;
mod logging;
mod mapbox;

use dom::DomDisplay;
use mapbox::{MapboxSurface, create_map, event_point, set_access_token};

type Tour = TourMap<MapboxSurface, DomDisplay>;

thread_local! {
    static TOUR: RefCell<Option<Tour>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

/// Builds the map and wires its lifecycle events.
///
/// `config_json` is a (possibly partial) JSON object of tour settings;
/// `None` uses the defaults.
#[wasm_bindgen]
pub fn start_tour(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json.as_deref() {
        Some(payload) => TourConfig::from_json_str(payload).map_err(to_js_error)?,
        None => TourConfig::default(),
    };
    logging::init(&config.log_filter);

    set_access_token(&config.access_token)?;
    let map = create_map(&config)?;
    let display = DomDisplay::from_window().map_err(to_js_error)?;

    let mut tour =
        TourMap::new(MapboxSurface::new(map.clone()), display, config).map_err(to_js_error)?;
    tour.start().map_err(to_js_error)?;
    TOUR.with(|slot| *slot.borrow_mut() = Some(tour));

    let on_style = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
        dispatch(MapEvent::StyleLoaded);
    });
    map.on("style.load", &on_style);
    on_style.forget();

    let on_move = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        match event_point(&event) {
            Some(point) => dispatch(MapEvent::PointerMoved(point)),
            None => trace!("mousemove without a point"),
        }
    });
    map.on("mousemove", &on_move);
    on_move.forget();

    let on_load = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
        dispatch(MapEvent::Loaded);
    });
    map.on("load", &on_load);
    on_load.forget();

    info!("tour map created");
    Ok(())
}

fn dispatch(event: MapEvent) {
    TOUR.with(|slot| {
        // A callback fired from inside another handler finds the slot taken.
        let Ok(mut slot) = slot.try_borrow_mut() else {
            warn!(?event, "map event dropped; another handler is running");
            return;
        };
        let Some(tour) = slot.as_mut() else {
            return;
        };
        if let Err(err) = tour.handle(event) {
            error!(?event, %err, "map event failed");
        }
    });
}

fn to_js_error(err: impl Into<TourError>) -> JsValue {
    JsValue::from_str(&err.into().to_string())
}
