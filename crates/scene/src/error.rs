use catalog::CatalogError;

use crate::config::ConfigError;
use crate::display::DisplayError;
use crate::surface::SurfaceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    Surface(SurfaceError),
    Display(DisplayError),
    Config(ConfigError),
    Catalog(CatalogError),
}

impl std::fmt::Display for TourError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TourError::Surface(e) => write!(f, "{e}"),
            TourError::Display(e) => write!(f, "{e}"),
            TourError::Config(e) => write!(f, "{e}"),
            TourError::Catalog(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TourError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TourError::Surface(e) => Some(e),
            TourError::Display(e) => Some(e),
            TourError::Config(e) => Some(e),
            TourError::Catalog(e) => Some(e),
        }
    }
}

impl From<SurfaceError> for TourError {
    fn from(e: SurfaceError) -> Self {
        TourError::Surface(e)
    }
}

impl From<DisplayError> for TourError {
    fn from(e: DisplayError) -> Self {
        TourError::Display(e)
    }
}

impl From<ConfigError> for TourError {
    fn from(e: ConfigError) -> Self {
        TourError::Config(e)
    }
}

impl From<CatalogError> for TourError {
    fn from(e: CatalogError) -> Self {
        TourError::Catalog(e)
    }
}
