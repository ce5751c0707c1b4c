//! Определение экранной клавиатуры поверх окна хоста и её высоты.
//!
//! Хост не сообщает высоту клавиатуры напрямую, поэтому она выводится из
//! разницы между видимой областью окна и его полной высотой с учётом
//! строки состояния и панели навигации. Высота кэшируется отдельно для
//! портретной и ландшафтной ориентации.

pub mod config;
pub mod error;
pub mod events;
pub mod services;
pub mod utils;

pub use error::{KbdError, Result};
pub use events::{LayoutEvent, Measurement, Orientation, Rect};
pub use services::{
    ClassificationResult, KeyboardHeightObserver, KeyboardHeightProvider, KeyboardHeightTracker,
    KeyboardState,
};
