//! Bindings to the `mapboxgl` global and the [`MapSurface`] built on them.

use formats::Feature;
use foundation::LngLat;
use js_sys::{Array, JSON, Reflect};
use layers::{LayerSpec, PaintValue, SourceSpec};
use scene::{Cursor, MapSurface, MarkerSpec, ScreenPoint, SurfaceError, TourConfig};
use serde_json::{Value, json};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, extends = js_sys::Object)]
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, catch)]
    fn new(options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(method, js_name = addControl)]
    fn add_control(this: &Map, control: &NavigationControl);

    #[wasm_bindgen(method, catch, js_name = setPaintProperty)]
    fn set_paint_property(
        this: &Map,
        layer: &str,
        property: &str,
        value: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = addSource)]
    fn add_source(this: &Map, id: &str, source: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = addLayer)]
    fn add_layer(this: &Map, layer: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = addLayer)]
    fn add_layer_before(this: &Map, layer: &JsValue, before_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getSource)]
    fn get_source(this: &Map, id: &str) -> JsValue;

    #[wasm_bindgen(method, catch, js_name = queryRenderedFeatures)]
    fn query_rendered_features(
        this: &Map,
        point: &JsValue,
        options: &JsValue,
    ) -> Result<Array, JsValue>;

    #[wasm_bindgen(method, js_name = getCanvas)]
    fn get_canvas(this: &Map) -> web_sys::HtmlElement;

    #[wasm_bindgen(js_namespace = mapboxgl, extends = js_sys::Object)]
    type GeoJsonSource;

    #[wasm_bindgen(method, catch, js_name = setData)]
    fn set_data(this: &GeoJsonSource, data: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = mapboxgl)]
    type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    fn new() -> NavigationControl;

    #[wasm_bindgen(js_namespace = mapboxgl)]
    type Marker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, catch)]
    fn new(options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = setLngLat)]
    fn set_lng_lat(this: &Marker, position: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setPopup)]
    fn set_popup(this: &Marker, popup: &Popup) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(js_namespace = mapboxgl)]
    type Popup;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, catch)]
    fn new(options: &JsValue) -> Result<Popup, JsValue>;

    #[wasm_bindgen(method, js_name = setText)]
    fn set_text(this: &Popup, text: &str) -> Popup;
}

/// Installs the access token on the `mapboxgl` namespace. Must run before
/// the first map is constructed.
pub fn set_access_token(token: &str) -> Result<(), JsValue> {
    let namespace = Reflect::get(&js_sys::global(), &JsValue::from_str("mapboxgl"))?;
    if namespace.is_undefined() {
        return Err(JsValue::from_str("mapboxgl is not loaded"));
    }
    Reflect::set(
        &namespace,
        &JsValue::from_str("accessToken"),
        &JsValue::from_str(token),
    )?;
    Ok(())
}

/// Constructs the map described by `config` inside its container element.
pub fn create_map(config: &TourConfig) -> Result<Map, JsValue> {
    let options = to_js(
        "Map",
        &json!({
            "container": config.container,
            "style": config.style,
            "center": config.center,
            "zoom": config.zoom,
        }),
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let map = Map::new(&options)?;
    if config.navigation_control {
        map.add_control(&NavigationControl::new());
    }
    Ok(map)
}

/// Pointer position carried by a mapboxgl mouse event.
pub fn event_point(event: &JsValue) -> Option<ScreenPoint> {
    let point = Reflect::get(event, &JsValue::from_str("point")).ok()?;
    let x = Reflect::get(&point, &JsValue::from_str("x")).ok()?.as_f64()?;
    let y = Reflect::get(&point, &JsValue::from_str("y")).ok()?.as_f64()?;
    Some(ScreenPoint::new(x, y))
}

pub struct MapboxSurface {
    map: Map,
}

impl MapboxSurface {
    pub fn new(map: Map) -> Self {
        Self { map }
    }
}

impl MapSurface for MapboxSurface {
    fn set_paint_property(
        &mut self,
        layer_id: &str,
        property: &str,
        value: &PaintValue,
    ) -> Result<(), SurfaceError> {
        let value = to_js("setPaintProperty", &value.to_value())?;
        self.map
            .set_paint_property(layer_id, property, &value)
            .map_err(|e| rejected("setPaintProperty", &e))
    }

    fn add_source(&mut self, id: &str, source: &SourceSpec) -> Result<(), SurfaceError> {
        let source = to_js("addSource", &source.to_value())?;
        self.map
            .add_source(id, &source)
            .map_err(|e| rejected("addSource", &e))
    }

    fn add_layer(
        &mut self,
        layer: &LayerSpec,
        before_id: Option<&str>,
    ) -> Result<(), SurfaceError> {
        let spec = to_js("addLayer", &layer.to_value())?;
        let added = match before_id {
            Some(before) => self.map.add_layer_before(&spec, before),
            None => self.map.add_layer(&spec),
        };
        added.map_err(|e| rejected("addLayer", &e))
    }

    fn set_source_data(&mut self, source_id: &str, data: &Value) -> Result<(), SurfaceError> {
        let source = self.map.get_source(source_id);
        if source.is_undefined() || source.is_null() {
            return Err(SurfaceError::Rejected {
                call: "setData",
                message: format!("source {source_id} does not exist"),
            });
        }
        let data = to_js("setData", data)?;
        source
            .unchecked_into::<GeoJsonSource>()
            .set_data(&data)
            .map_err(|e| rejected("setData", &e))
    }

    fn query_rendered_features(
        &self,
        point: ScreenPoint,
        layer_ids: &[&str],
    ) -> Result<Vec<Feature>, SurfaceError> {
        const CALL: &str = "queryRenderedFeatures";
        let at = to_js(CALL, &json!([point.x, point.y]))?;
        let options = to_js(CALL, &json!({ "layers": layer_ids }))?;
        let hits = self
            .map
            .query_rendered_features(&at, &options)
            .map_err(|e| rejected(CALL, &e))?;

        // Rendered features serialize themselves to GeoJSON via toJSON.
        let text: String = JSON::stringify(&hits)
            .map_err(|e| rejected(CALL, &e))?
            .into();
        let parsed: Vec<Value> = serde_json::from_str(&text).map_err(|e| decode(CALL, e))?;
        parsed
            .iter()
            .map(|v| Feature::from_value(v).map_err(|e| decode(CALL, e)))
            .collect()
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Result<(), SurfaceError> {
        self.map
            .get_canvas()
            .style()
            .set_property("cursor", cursor.as_css())
            .map_err(|e| rejected("setCursor", &e))
    }

    fn add_marker(&mut self, marker: &MarkerSpec) -> Result<(), SurfaceError> {
        let options = to_js("Marker", &json!({ "color": marker.color }))?;
        let pin = Marker::new(&options).map_err(|e| rejected("Marker", &e))?;
        pin.set_lng_lat(&lng_lat(marker.position)?);
        if let Some(spec) = &marker.popup {
            let options = to_js("Popup", &json!({ "offset": spec.offset }))?;
            let popup = Popup::new(&options).map_err(|e| rejected("Popup", &e))?;
            popup.set_text(&spec.text);
            pin.set_popup(&popup);
        }
        pin.add_to(&self.map);
        Ok(())
    }
}

fn lng_lat(position: LngLat) -> Result<JsValue, SurfaceError> {
    to_js("setLngLat", &json!(position.to_array()))
}

fn to_js(call: &'static str, value: &Value) -> Result<JsValue, SurfaceError> {
    let text = serde_json::to_string(value).map_err(|e| decode(call, e))?;
    JSON::parse(&text).map_err(|e| rejected(call, &e))
}

fn rejected(call: &'static str, err: &JsValue) -> SurfaceError {
    SurfaceError::Rejected {
        call,
        message: js_message(err),
    }
}

fn decode(call: &'static str, err: impl std::fmt::Display) -> SurfaceError {
    SurfaceError::Decode {
        call,
        message: err.to_string(),
    }
}

pub(crate) fn js_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
