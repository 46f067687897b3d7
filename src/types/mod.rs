mod bounding_box;
mod lat_lng;
mod polygon;

pub use bounding_box::*;
pub use lat_lng::*;
pub use polygon::*;
