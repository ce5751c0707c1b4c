use crate::error::Result;
use crate::events::{LayoutEvent, Rect};
use crate::services::bar_metrics::{FixedBarMetrics, SystemBarMetrics};
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::info;

use super::r#trait::LayoutEventSource;

const SCREEN_SHORT_SIDE: i32 = 1080;
const SCREEN_LONG_SIDE: i32 = 2160;
const PORTRAIT_KEYBOARD_HEIGHT: i32 = 820;
const LANDSCAPE_KEYBOARD_HEIGHT: i32 = 540;

/// Эмуляция устройства: клавиатура открывается и закрывается, экран поворачивается
pub struct DryRunEventSource {
    frames: Vec<LayoutEvent>,
    period: Duration,
    ticker: Option<Interval>,
    index: usize,
    max_events: Option<usize>,
    delivered: usize,
}

impl DryRunEventSource {
    pub fn new(metrics: FixedBarMetrics, period: Duration) -> Self {
        Self {
            frames: Self::build_cycle(&metrics),
            period,
            ticker: None,
            index: 0,
            max_events: None,
            delivered: 0,
        }
    }

    /// Ограничить число событий; без ограничения цикл повторяется бесконечно
    pub fn with_max_events(mut self, max_events: usize) -> Self {
        self.max_events = Some(max_events);
        self
    }

    /// Кадры строятся так, чтобы видимая область заканчивалась над клавиатурой
    /// и панелью навигации, как это делает реальный хост.
    fn build_cycle(metrics: &dyn SystemBarMetrics) -> Vec<LayoutEvent> {
        let status = metrics.status_bar_height();
        let nav = metrics.navigation_bar_height();

        let frame = |width: i32, height: i32, keyboard: i32| {
            LayoutEvent::new(
                Rect::new(0, status, width, height - nav - keyboard),
                width,
                height,
            )
        };

        vec![
            frame(SCREEN_SHORT_SIDE, SCREEN_LONG_SIDE, 0),
            frame(SCREEN_SHORT_SIDE, SCREEN_LONG_SIDE, PORTRAIT_KEYBOARD_HEIGHT),
            frame(SCREEN_SHORT_SIDE, SCREEN_LONG_SIDE, 0),
            frame(SCREEN_LONG_SIDE, SCREEN_SHORT_SIDE, 0),
            frame(SCREEN_LONG_SIDE, SCREEN_SHORT_SIDE, LANDSCAPE_KEYBOARD_HEIGHT),
            frame(SCREEN_LONG_SIDE, SCREEN_SHORT_SIDE, 0),
        ]
    }
}

#[async_trait::async_trait]
impl LayoutEventSource for DryRunEventSource {
    fn is_attached(&self) -> bool {
        true
    }

    async fn next_event(&mut self) -> Result<Option<LayoutEvent>> {
        if self.max_events.is_some_and(|max| self.delivered >= max) {
            info!("Dry-run: выдано {} событий, эмуляция завершена", self.delivered);
            return Ok(None);
        }

        if !self.period.is_zero() {
            let period = self.period;
            let ticker = self.ticker.get_or_insert_with(|| {
                let mut ticker = interval(period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                ticker
            });
            ticker.tick().await;
        }

        let template = &self.frames[self.index];
        let event = LayoutEvent::new(template.visible_frame, template.full_width, template.full_height);
        self.index = (self.index + 1) % self.frames.len();
        self.delivered += 1;

        info!("Dry-run: эмулируем изменение раскладки: {}", event);
        Ok(Some(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Measurement, Orientation};
    use crate::services::frame_classifier::{classify, ClassificationResult};

    #[tokio::test]
    async fn test_dry_run_cycle_produces_expected_heights() {
        let metrics = FixedBarMetrics::new(63, 126);
        let mut source = DryRunEventSource::new(metrics, Duration::ZERO).with_max_events(6);

        let mut navigation_bar_visible = false;
        let mut results = Vec::new();
        while let Some(event) = source.next_event().await.unwrap() {
            let measurement = Measurement::from_event(&event, 63, 126);
            let classification = classify(&measurement, navigation_bar_visible);
            navigation_bar_visible = classification.navigation_bar_visible;
            results.push((classification.result, classification.orientation));
        }

        assert_eq!(
            results,
            vec![
                (ClassificationResult::Closed, Orientation::Portrait),
                (ClassificationResult::Open { height: PORTRAIT_KEYBOARD_HEIGHT }, Orientation::Portrait),
                (ClassificationResult::Closed, Orientation::Portrait),
                (ClassificationResult::Closed, Orientation::Landscape),
                (ClassificationResult::Open { height: LANDSCAPE_KEYBOARD_HEIGHT }, Orientation::Landscape),
                (ClassificationResult::Closed, Orientation::Landscape),
            ]
        );
    }

    #[tokio::test]
    async fn test_dry_run_cycle_wraps_around() {
        let mut source =
            DryRunEventSource::new(FixedBarMetrics::default(), Duration::from_millis(1)).with_max_events(7);

        let first = source.next_event().await.unwrap().unwrap();
        for _ in 0..5 {
            source.next_event().await.unwrap();
        }
        let seventh = source.next_event().await.unwrap().unwrap();

        assert_eq!(first.visible_frame, seventh.visible_frame);
        assert!(source.next_event().await.unwrap().is_none());
    }
}
