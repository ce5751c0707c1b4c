//! FrameClassifier: чистое вычисление "клавиатура закрыта / открыта на высоту H"
//! по видимой области окна и высотам системных панелей.
//!
//! Функции тотальны для любых i32: вся арифметика идёт в i64, а слишком большая
//! высота насыщается до `i32::MAX`. Флаг видимости панели навигации принадлежит
//! вызывающему (трекеру) и передаётся сюда как значение от предыдущего измерения.

use crate::events::{Measurement, Orientation};
use std::fmt;

/// Минимальная высота клавиатуры; всё, что меньше, считается шумом
/// (например, высотой самой панели навигации)
pub const KEYBOARD_MIN_HEIGHT: i64 = 100;

/// Результат классификации одного измерения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationResult {
    Closed,
    Open { height: i32 },
}

impl ClassificationResult {
    /// Высота для уведомления наблюдателя: 0 для закрытой клавиатуры
    pub fn height(&self) -> i32 {
        match self {
            ClassificationResult::Closed => 0,
            ClassificationResult::Open { height } => *height,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ClassificationResult::Open { .. })
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationResult::Closed => write!(f, "closed"),
            ClassificationResult::Open { height } => write!(f, "open({}px)", height),
        }
    }
}

/// Классификация вместе с новым значением флага панели навигации и ориентацией
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub result: ClassificationResult,
    /// Значение флага для следующего измерения
    pub navigation_bar_visible: bool,
    pub orientation: Orientation,
}

/// Разница между полной высотой окна и видимой областью за вычетом системных панелей.
///
/// Панель навигации вычитается только если она была видна по итогам
/// предыдущей классификации.
pub fn calculate_keyboard_height(measurement: &Measurement, navigation_bar_visible: bool) -> i64 {
    let mut height_difference =
        i64::from(measurement.full_height) - measurement.visible_frame.height();

    if measurement.status_bar_height > 0 {
        height_difference -= i64::from(measurement.status_bar_height);
    }
    if measurement.navigation_bar_height > 0 && navigation_bar_visible {
        height_difference -= i64::from(measurement.navigation_bar_height);
    }

    height_difference
}

/// Классифицировать измерение. Проверки идут по порядку, первая совпавшая побеждает.
pub fn classify(measurement: &Measurement, navigation_bar_visible: bool) -> Classification {
    let orientation = measurement.orientation();
    let bottom = i64::from(measurement.visible_frame.bottom);
    let full_height = i64::from(measurement.full_height);

    let (result, navigation_bar_visible) = if bottom == full_height {
        (ClassificationResult::Closed, false)
    } else if bottom + i64::from(measurement.navigation_bar_height) == full_height {
        // Зазор внизу занимает панель навигации
        (ClassificationResult::Closed, true)
    } else {
        let height = calculate_keyboard_height(measurement, navigation_bar_visible);
        if height < KEYBOARD_MIN_HEIGHT {
            (ClassificationResult::Closed, false)
        } else {
            let height = i32::try_from(height).unwrap_or(i32::MAX);
            (ClassificationResult::Open { height }, navigation_bar_visible)
        }
    };

    Classification {
        result,
        navigation_bar_visible,
        orientation,
    }
}
