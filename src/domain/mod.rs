// Domain types and value objects
mod area;
mod coords;
mod travel;

// Re-export commonly used types to the world
pub use area::AreaRecord;
pub use coords::LatLng;
pub use travel::{OriginPoint, TravelResult};
