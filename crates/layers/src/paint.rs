use foundation::Rgb;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// A paint property value in the mapping library's style JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintValue {
    Color(Rgb),
    Number(f64),
    Categorical(Categorical),
    Zoom(ZoomStops),
    /// Per-feature property read, `["get", name]`.
    Get(String),
}

/// Exact-match color function over one feature property.
#[derive(Debug, Clone, PartialEq)]
pub struct Categorical {
    pub property: String,
    pub stops: Vec<(String, Rgb)>,
    pub default: Option<Rgb>,
}

/// Zoom-keyed stops, linearly interpolated by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomStops(pub Vec<(f64, f64)>);

impl PaintValue {
    pub fn get(property: impl Into<String>) -> Self {
        PaintValue::Get(property.into())
    }

    pub fn to_value(&self) -> Value {
        match self {
            PaintValue::Color(c) => Value::String(c.to_hex()),
            PaintValue::Number(n) => json!(n),
            PaintValue::Categorical(cat) => cat.to_value(),
            PaintValue::Zoom(stops) => stops.to_value(),
            PaintValue::Get(property) => json!(["get", property]),
        }
    }
}

impl From<Rgb> for PaintValue {
    fn from(c: Rgb) -> Self {
        PaintValue::Color(c)
    }
}

impl From<f64> for PaintValue {
    fn from(n: f64) -> Self {
        PaintValue::Number(n)
    }
}

impl From<Categorical> for PaintValue {
    fn from(cat: Categorical) -> Self {
        PaintValue::Categorical(cat)
    }
}

impl From<ZoomStops> for PaintValue {
    fn from(stops: ZoomStops) -> Self {
        PaintValue::Zoom(stops)
    }
}

impl Serialize for PaintValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl Categorical {
    pub fn new(property: impl Into<String>, stops: Vec<(String, Rgb)>) -> Self {
        Self {
            property: property.into(),
            stops,
            default: None,
        }
    }

    pub fn with_default(mut self, default: Rgb) -> Self {
        self.default = Some(default);
        self
    }

    /// Color the renderer will pick for a feature with these properties.
    ///
    /// Matching is exact on string values; `None` means the layer's own
    /// default applies.
    pub fn resolve(&self, properties: &Map<String, Value>) -> Option<Rgb> {
        let matched = properties
            .get(&self.property)
            .and_then(|v| v.as_str())
            .and_then(|key| {
                self.stops
                    .iter()
                    .find(|(stop, _)| stop == key)
                    .map(|(_, c)| *c)
            });
        matched.or(self.default)
    }

    fn to_value(&self) -> Value {
        let stops: Vec<Value> = self
            .stops
            .iter()
            .map(|(key, color)| json!([key, color.to_hex()]))
            .collect();
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!("categorical"));
        obj.insert("property".to_string(), json!(self.property));
        obj.insert("stops".to_string(), Value::Array(stops));
        if let Some(default) = self.default {
            obj.insert("default".to_string(), json!(default.to_hex()));
        }
        Value::Object(obj)
    }
}

impl ZoomStops {
    /// Value at `zoom`: clamped outside the stop range, linear in between.
    pub fn evaluate(&self, zoom: f64) -> Option<f64> {
        let (first, last) = (self.0.first()?, self.0.last()?);
        if zoom <= first.0 {
            return Some(first.1);
        }
        if zoom >= last.0 {
            return Some(last.1);
        }
        self.0.windows(2).find_map(|w| {
            let ((z0, v0), (z1, v1)) = (w[0], w[1]);
            if zoom < z0 || zoom > z1 {
                return None;
            }
            if z1 <= z0 {
                return Some(v1);
            }
            let t = (zoom - z0) / (z1 - z0);
            Some(v0 + (v1 - v0) * t)
        })
    }

    fn to_value(&self) -> Value {
        let stops: Vec<Value> = self.0.iter().map(|(z, v)| json!([z, v])).collect();
        json!({ "stops": stops })
    }
}
