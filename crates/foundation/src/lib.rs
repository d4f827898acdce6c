pub mod color;
pub mod lnglat;

// Foundation crate: small, well-tested primitives only.
pub use color::*;
pub use lnglat::*;
