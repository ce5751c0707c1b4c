pub mod bar_metrics;
pub mod event_source;
pub mod frame_classifier;
pub mod keyboard_tracker;
pub mod provider;

pub use bar_metrics::{FixedBarMetrics, SystemBarMetrics};
pub use event_source::{create_event_source, LayoutEventSource};
pub use frame_classifier::{classify, Classification, ClassificationResult, KEYBOARD_MIN_HEIGHT};
pub use keyboard_tracker::{KeyboardHeightObserver, KeyboardHeightTracker, KeyboardState};
pub use provider::{KeyboardHeightProvider, ProviderState};
