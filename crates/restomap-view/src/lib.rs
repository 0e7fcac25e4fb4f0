//! Derived presentations of the loaded record set: the searchable list and
//! the map markers with their camera framing.

pub mod geo;
pub mod search;
pub mod session;
pub mod state;

pub use geo::{frame_camera, geocoded, BoundingBox, CameraInstruction, EdgePadding, MapView};
pub use search::{filter_records, SearchQuery};
pub use session::ViewSession;
pub use state::ViewState;
