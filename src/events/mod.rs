pub mod layout;
pub mod measurement;

pub use layout::{LayoutEvent, Orientation, Rect};
pub use measurement::Measurement;
