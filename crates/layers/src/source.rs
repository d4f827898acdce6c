use formats::FeatureCollection;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};

/// GeoJSON payload of a source: fetched by the renderer from a URL, or inline.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJsonData {
    Url(String),
    Inline(Value),
}

impl Serialize for GeoJsonData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GeoJsonData::Url(url) => serializer.serialize_str(url),
            GeoJsonData::Inline(value) => value.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SourceSpec {
    #[serde(rename = "geojson")]
    GeoJson { data: GeoJsonData },
}

impl SourceSpec {
    pub fn geojson_url(url: impl Into<String>) -> Self {
        SourceSpec::GeoJson {
            data: GeoJsonData::Url(url.into()),
        }
    }

    pub fn geojson_inline(collection: &FeatureCollection) -> Self {
        SourceSpec::GeoJson {
            data: GeoJsonData::Inline(collection.to_value()),
        }
    }

    pub fn data(&self) -> &GeoJsonData {
        match self {
            SourceSpec::GeoJson { data } => data,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            SourceSpec::GeoJson { data } => json!({ "type": "geojson", "data": data }),
        }
    }
}
