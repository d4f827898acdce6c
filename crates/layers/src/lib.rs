pub mod layer;
pub mod legend;
pub mod paint;
pub mod source;
pub mod symbology;

pub use layer::*;
pub use legend::*;
pub use paint::*;
pub use source::*;
