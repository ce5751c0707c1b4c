use super::layout::{LayoutEvent, Orientation, Rect};
use std::fmt;

/// Измерение, которое получает классификатор: геометрия окна и высоты системных панелей
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub visible_frame: Rect,
    pub full_width: i32,
    pub full_height: i32,
    /// Высота строки состояния, 0 если неизвестна
    pub status_bar_height: i32,
    /// Высота панели навигации, 0 если неизвестна
    pub navigation_bar_height: i32,
}

impl Measurement {
    pub fn new(visible_frame: Rect, full_width: i32, full_height: i32) -> Self {
        Self {
            visible_frame,
            full_width,
            full_height,
            status_bar_height: 0,
            navigation_bar_height: 0,
        }
    }

    /// Отрицательные значения панелей трактуются как "неизвестно" (0)
    pub fn with_status_bar(mut self, height: i32) -> Self {
        self.status_bar_height = height.max(0);
        self
    }

    pub fn with_navigation_bar(mut self, height: i32) -> Self {
        self.navigation_bar_height = height.max(0);
        self
    }

    pub fn from_event(event: &LayoutEvent, status_bar_height: i32, navigation_bar_height: i32) -> Self {
        Self::new(event.visible_frame, event.full_width, event.full_height)
            .with_status_bar(status_bar_height)
            .with_navigation_bar(navigation_bar_height)
    }

    /// Ориентация пересчитывается для каждого измерения
    pub fn orientation(&self) -> Orientation {
        Orientation::from_size(self.full_width, self.full_height)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame={} window={}x{} status_bar={} nav_bar={}",
            self.visible_frame,
            self.full_width,
            self.full_height,
            self.status_bar_height,
            self.navigation_bar_height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_from_event_clamps_bars() {
        let event = LayoutEvent::new(Rect::vertical(24, 900), 1000, 600);
        let measurement = Measurement::from_event(&event, -5, 48);

        assert_eq!(measurement.status_bar_height, 0);
        assert_eq!(measurement.navigation_bar_height, 48);
        assert_eq!(measurement.visible_frame, Rect::vertical(24, 900));
        assert_eq!(measurement.orientation(), Orientation::Landscape);
    }
}
