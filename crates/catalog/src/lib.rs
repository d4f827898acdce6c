//! Static tour content compiled into the binary: the site list and the
//! walking route.

pub mod route;
pub mod sites;

pub use route::*;
pub use sites::*;

const TOUR_SITES_JSON: &str = include_str!("../assets/tour_sites.json");
const ROUTE_JSON: &str = include_str!("../assets/route.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Corrupt { asset: &'static str, reason: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Corrupt { asset, reason } => {
                write!(f, "embedded asset {asset} is corrupt: {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// The embedded tour stops, in file order.
pub fn tour_sites() -> Result<Vec<TourSite>, CatalogError> {
    serde_json::from_str(TOUR_SITES_JSON).map_err(|e| CatalogError::Corrupt {
        asset: "tour_sites.json",
        reason: e.to_string(),
    })
}

/// The embedded walking route.
pub fn route_path() -> Result<RoutePath, CatalogError> {
    serde_json::from_str(ROUTE_JSON).map_err(|e| CatalogError::Corrupt {
        asset: "route.json",
        reason: e.to_string(),
    })
}
