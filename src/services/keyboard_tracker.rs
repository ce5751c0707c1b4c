use crate::debug_if_enabled;
use crate::error::{KbdError, Result};
use crate::events::{Measurement, Orientation};
use crate::services::frame_classifier::{classify, Classification, ClassificationResult};
use std::fmt;
use tracing::info;

/// Наблюдатель за высотой клавиатуры. Вызывается синхронно на каждое измерение.
pub trait KeyboardHeightObserver: Send {
    fn on_keyboard_height_changed(&mut self, height: i32, orientation: Orientation);
}

impl<F> KeyboardHeightObserver for F
where
    F: FnMut(i32, Orientation) + Send,
{
    fn on_keyboard_height_changed(&mut self, height: i32, orientation: Orientation) {
        self(height, orientation)
    }
}

/// Логическое состояние клавиатуры по итогам последнего измерения
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyboardState {
    #[default]
    Closed,
    Open {
        height: i32,
        orientation: Orientation,
    },
}

/// Трекер высоты клавиатуры: кэш по ориентациям, флаг панели навигации
/// и единственный наблюдатель.
pub struct KeyboardHeightTracker {
    portrait_height: i32,
    landscape_height: i32,
    // Выставляется измерением N, используется измерением N+1
    navigation_bar_visible: bool,
    state: KeyboardState,
    observer: Option<Box<dyn KeyboardHeightObserver>>,
}

impl KeyboardHeightTracker {
    /// Создать трекер с начальными высотами (например, из прошлой сессии хоста)
    pub fn new(seed_portrait_height: i32, seed_landscape_height: i32) -> Result<Self> {
        if seed_portrait_height < 0 {
            return KbdError::invalid_seed(Orientation::Portrait, seed_portrait_height);
        }
        if seed_landscape_height < 0 {
            return KbdError::invalid_seed(Orientation::Landscape, seed_landscape_height);
        }

        info!(
            "Инициализация KeyboardHeightTracker (portrait: {}px, landscape: {}px)",
            seed_portrait_height, seed_landscape_height
        );

        Ok(Self {
            portrait_height: seed_portrait_height,
            landscape_height: seed_landscape_height,
            navigation_bar_visible: false,
            state: KeyboardState::Closed,
            observer: None,
        })
    }

    /// Обработать одно измерение и уведомить наблюдателя (если он есть)
    pub fn process_measurement(&mut self, measurement: &Measurement) -> Classification {
        let classification = classify(measurement, self.navigation_bar_visible);
        self.navigation_bar_visible = classification.navigation_bar_visible;

        debug_if_enabled!(
            "Измерение {} -> {} ({}, nav_bar_visible: {})",
            measurement,
            classification.result,
            classification.orientation,
            classification.navigation_bar_visible
        );

        match classification.result {
            ClassificationResult::Closed => {
                self.state = KeyboardState::Closed;
            }
            ClassificationResult::Open { height } => {
                match classification.orientation {
                    Orientation::Portrait => self.portrait_height = height,
                    Orientation::Landscape => self.landscape_height = height,
                }
                self.state = KeyboardState::Open {
                    height,
                    orientation: classification.orientation,
                };
            }
        }

        self.notify(classification.result.height(), classification.orientation);
        classification
    }

    fn notify(&mut self, height: i32, orientation: Orientation) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_keyboard_height_changed(height, orientation);
        }
    }

    /// Заменить наблюдателя; `None` отсоединяет текущего
    pub fn set_observer(&mut self, observer: Option<Box<dyn KeyboardHeightObserver>>) {
        self.observer = observer;
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Последняя известная высота для ориентации (0, если не наблюдалась и не задана)
    pub fn cached_height(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Portrait => self.portrait_height,
            Orientation::Landscape => self.landscape_height,
        }
    }

    pub fn is_navigation_bar_visible(&self) -> bool {
        self.navigation_bar_visible
    }

    pub fn state(&self) -> KeyboardState {
        self.state
    }
}

impl fmt::Debug for KeyboardHeightTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardHeightTracker")
            .field("portrait_height", &self.portrait_height)
            .field("landscape_height", &self.landscape_height)
            .field("navigation_bar_visible", &self.navigation_bar_visible)
            .field("state", &self.state)
            .field("has_observer", &self.has_observer())
            .finish()
    }
}
