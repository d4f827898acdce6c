use std::fmt;

use foundation::LngLat;
use serde::{Deserialize, Serialize};

/// Site identifier as the record spells it: a number (`3`) or a label (`"3a"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SiteId {
    Number(u64),
    Label(String),
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteId::Number(n) => write!(f, "{n}"),
            SiteId::Label(s) => f.write_str(s),
        }
    }
}

impl From<u64> for SiteId {
    fn from(n: u64) -> Self {
        SiteId::Number(n)
    }
}

impl From<&str> for SiteId {
    fn from(s: &str) -> Self {
        SiteId::Label(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSite {
    pub site: SiteId,
    pub name: String,
    pub address: String,
    pub lon: f64,
    pub lat: f64,
    /// Free-form stop type. Only `required` and `optional` carry meaning.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub site_type: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SiteKind {
    Required,
    Optional,
    Other,
}

impl SiteKind {
    /// Exact, case-sensitive match; anything unrecognized (or absent) is `Other`.
    pub fn classify(site_type: Option<&str>) -> Self {
        match site_type {
            Some("required") => SiteKind::Required,
            Some("optional") => SiteKind::Optional,
            _ => SiteKind::Other,
        }
    }
}

impl TourSite {
    pub fn position(&self) -> LngLat {
        LngLat::new(self.lon, self.lat)
    }

    pub fn kind(&self) -> SiteKind {
        SiteKind::classify(self.site_type.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::{SiteId, SiteKind, TourSite};
    use foundation::LngLat;

    #[test]
    fn classifies_site_types() {
        assert_eq!(SiteKind::classify(Some("required")), SiteKind::Required);
        assert_eq!(SiteKind::classify(Some("optional")), SiteKind::Optional);
        assert_eq!(SiteKind::classify(Some("social")), SiteKind::Other);
        assert_eq!(SiteKind::classify(Some("Required")), SiteKind::Other);
        assert_eq!(SiteKind::classify(None), SiteKind::Other);
    }

    #[test]
    fn missing_type_deserializes_as_none() {
        let site: TourSite = serde_json::from_str(
            r#"{"site": 4, "name": "Lavender Lake", "address": "Bond St", "lon": -73.99, "lat": 40.68}"#,
        )
        .expect("parse site");
        assert_eq!(site.site_type, None);
        assert_eq!(site.kind(), SiteKind::Other);
        assert_eq!(site.position(), LngLat::new(-73.99, 40.68));
    }

    #[test]
    fn site_ids_may_be_numbers_or_labels() {
        let site: TourSite = serde_json::from_str(
            r#"{"site": "3a", "name": "Salt Lot", "address": "2nd Ave", "lon": -73.99, "lat": 40.67, "type": "optional"}"#,
        )
        .expect("parse labelled site");
        assert_eq!(site.site, SiteId::from("3a"));
        assert_eq!(site.site.to_string(), "3a");

        let site: TourSite = serde_json::from_str(
            r#"{"site": 12, "name": "Salt Lot", "address": "2nd Ave", "lon": -73.99, "lat": 40.67}"#,
        )
        .expect("parse numbered site");
        assert_eq!(site.site, SiteId::Number(12));
        assert_eq!(site.site.to_string(), "12");
    }
}
