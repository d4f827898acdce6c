pub mod augment;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod hover;
pub mod legend;
pub mod markers;
pub mod selection;
pub mod surface;

#[cfg(test)]
mod testing;

pub use config::*;
pub use controller::*;
pub use display::*;
pub use error::*;
pub use selection::*;
pub use surface::*;
