use crate::config::SystemBarsConfig;

/// Источник высот системных панелей хоста. Значения запрашиваются заново
/// на каждое событие раскладки; 0 означает "неизвестно".
pub trait SystemBarMetrics: Send {
    fn status_bar_height(&self) -> i32;
    fn navigation_bar_height(&self) -> i32;
}

/// Фиксированные высоты панелей (из конфигурации или известные заранее)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedBarMetrics {
    status_bar_height: i32,
    navigation_bar_height: i32,
}

impl FixedBarMetrics {
    pub fn new(status_bar_height: i32, navigation_bar_height: i32) -> Self {
        Self {
            status_bar_height: status_bar_height.max(0),
            navigation_bar_height: navigation_bar_height.max(0),
        }
    }
}

impl From<&SystemBarsConfig> for FixedBarMetrics {
    fn from(config: &SystemBarsConfig) -> Self {
        Self::new(config.status_bar_height, config.navigation_bar_height)
    }
}

impl SystemBarMetrics for FixedBarMetrics {
    fn status_bar_height(&self) -> i32 {
        self.status_bar_height
    }

    fn navigation_bar_height(&self) -> i32 {
        self.navigation_bar_height
    }
}
