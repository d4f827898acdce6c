use foundation::{LngLat, Rgb};
use serde::{Deserialize, Serialize};

/// Map construction and style settings.
///
/// Every field has a default, so a partial JSON object only overrides the
/// keys it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub access_token: String,
    /// Element id the map is mounted into.
    pub container: String,
    pub style: String,
    pub center: LngLat,
    pub zoom: f64,
    pub parcels_url: String,
    pub water_color: Rgb,
    /// Basemap layer the parcel fill is inserted beneath.
    pub label_layer: String,
    pub navigation_control: bool,
    pub log_filter: String,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            container: "mapContainer".to_string(),
            style: "mapbox://styles/mapbox/light-v10".to_string(),
            // Frames only the part of Gowanus the tour covers.
            center: LngLat::new(-73.99, 40.679),
            zoom: 15.5,
            parcels_url: "./data/pluto-gowanus.geojson".to_string(),
            water_color: Rgb::from_u32(0xa4bee8),
            label_layer: "waterway-label".to_string(),
            navigation_control: true,
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid tour config JSON: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "invalid tour config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl TourConfig {
    pub fn from_json_str(payload: &str) -> Result<Self, ConfigError> {
        let config: TourConfig =
            serde_json::from_str(payload).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.container.trim().is_empty() {
            return Err(ConfigError::Invalid("container must not be empty".to_string()));
        }
        if self.style.trim().is_empty() {
            return Err(ConfigError::Invalid("style must not be empty".to_string()));
        }
        if self.parcels_url.trim().is_empty() {
            return Err(ConfigError::Invalid("parcels_url must not be empty".to_string()));
        }
        if !(0.0..=24.0).contains(&self.zoom) {
            return Err(ConfigError::Invalid(format!(
                "zoom {} outside 0..=24",
                self.zoom
            )));
        }
        let LngLat { lon_deg, lat_deg } = self.center;
        if !(-180.0..=180.0).contains(&lon_deg) || !(-90.0..=90.0).contains(&lat_deg) {
            return Err(ConfigError::Invalid(format!(
                "center [{lon_deg}, {lat_deg}] is not a valid position"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, TourConfig};
    use foundation::{LngLat, Rgb};

    #[test]
    fn empty_object_yields_defaults() {
        let config = TourConfig::from_json_str("{}").expect("parse config");
        assert_eq!(config, TourConfig::default());
        assert_eq!(config.center, LngLat::new(-73.99, 40.679));
        assert_eq!(config.zoom, 15.5);
        assert_eq!(config.label_layer, "waterway-label");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = TourConfig::from_json_str(
            r##"{"access_token": "pk.test", "zoom": 14, "water_color": "#112233"}"##,
        )
        .expect("parse config");
        assert_eq!(config.access_token, "pk.test");
        assert_eq!(config.zoom, 14.0);
        assert_eq!(config.water_color, Rgb::from_u32(0x112233));
        assert_eq!(config.container, "mapContainer");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            TourConfig::from_json_str(r#"{"water_color": "blue"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            TourConfig::from_json_str(r#"{"zoom": 40}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            TourConfig::from_json_str(r#"{"center": [-200, 40]}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            TourConfig::from_json_str(r#"{"container": " "}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            TourConfig::from_json_str("[1, 2"),
            Err(ConfigError::Parse(_))
        ));
    }
}
