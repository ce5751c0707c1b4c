use serde::{Deserialize, Serialize};
use std::fmt;

/// Ориентация окна хоста
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Ориентация по размерам окна: ширина меньше высоты - портрет, иначе ландшафт
    pub fn from_size(width: i32, height: i32) -> Self {
        if width < height {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    pub fn is_portrait(&self) -> bool {
        matches!(self, Orientation::Portrait)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Видимая область содержимого окна (координаты в пикселях)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Прямоугольник, у которого известны только верхняя и нижняя границы
    pub fn vertical(top: i32, bottom: i32) -> Self {
        Self::new(0, top, 0, bottom)
    }

    /// Высота в i64: разность любых i32 помещается без переполнения
    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }

    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{}][{},{}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Сырое событие изменения раскладки от поверхности измерения
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEvent {
    pub visible_frame: Rect,
    pub full_width: i32,
    pub full_height: i32,
    pub timestamp: std::time::Instant,
}

impl LayoutEvent {
    pub fn new(visible_frame: Rect, full_width: i32, full_height: i32) -> Self {
        Self {
            visible_frame,
            full_width,
            full_height,
            timestamp: std::time::Instant::now(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_size(self.full_width, self.full_height)
    }
}

impl fmt::Display for LayoutEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame={} window={}x{} ({}ms ago)",
            self.visible_frame,
            self.full_width,
            self.full_height,
            self.timestamp.elapsed().as_millis()
        )
    }
}
