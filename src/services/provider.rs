use crate::debug_if_enabled;
use crate::error::{KbdError, Result};
use crate::events::{LayoutEvent, Measurement, Orientation};
use crate::services::bar_metrics::SystemBarMetrics;
use crate::services::event_source::LayoutEventSource;
use crate::services::keyboard_tracker::{KeyboardHeightObserver, KeyboardHeightTracker};
use tracing::{info, warn};

/// Жизненный цикл поверхности измерения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
    /// Поверхность ещё не показана, события не принимаются
    Detached,
    Running,
    /// Провайдер закрыт и больше не используется
    Closed,
}

/// Адаптер хоста: принимает события раскладки, дополняет их высотами
/// системных панелей и передаёт трекеру
pub struct KeyboardHeightProvider {
    tracker: KeyboardHeightTracker,
    metrics: Box<dyn SystemBarMetrics>,
    state: ProviderState,
}

impl KeyboardHeightProvider {
    pub fn new(tracker: KeyboardHeightTracker, metrics: Box<dyn SystemBarMetrics>) -> Self {
        Self {
            tracker,
            metrics,
            state: ProviderState::Detached,
        }
    }

    /// Запустить провайдер. Допустимо только после присоединения поверхности к окну.
    pub fn start(&mut self, source: &dyn LayoutEventSource) -> Result<()> {
        match self.state {
            ProviderState::Running => return Ok(()),
            ProviderState::Closed => {
                warn!("Попытка запустить закрытый KeyboardHeightProvider");
                return Err(KbdError::ProviderClosed);
            }
            ProviderState::Detached => {}
        }

        if !source.is_attached() {
            return Err(KbdError::SurfaceNotAttached);
        }

        self.state = ProviderState::Running;
        info!("KeyboardHeightProvider запущен");
        Ok(())
    }

    /// Обработать одно событие раскладки
    pub fn handle_layout_event(&mut self, event: &LayoutEvent) {
        if self.state != ProviderState::Running {
            debug_if_enabled!("Событие {} проигнорировано: провайдер в состоянии {:?}", event, self.state);
            return;
        }

        let measurement = Measurement::from_event(
            event,
            self.metrics.status_bar_height(),
            self.metrics.navigation_bar_height(),
        );
        self.tracker.process_measurement(&measurement);
    }

    /// Запустить и обрабатывать события, пока источник не завершится
    pub async fn run(&mut self, mut source: Box<dyn LayoutEventSource>) -> Result<()> {
        self.start(source.as_ref())?;

        while self.state == ProviderState::Running {
            match source.next_event().await? {
                Some(event) => self.handle_layout_event(&event),
                None => {
                    info!("Источник событий завершил работу");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Закрыть провайдер: наблюдатель отсоединяется, события больше не принимаются
    pub fn close(&mut self) {
        if self.state == ProviderState::Closed {
            return;
        }
        self.tracker.clear_observer();
        self.state = ProviderState::Closed;
        info!("KeyboardHeightProvider закрыт");
    }

    pub fn set_observer(&mut self, observer: Option<Box<dyn KeyboardHeightObserver>>) {
        self.tracker.set_observer(observer);
    }

    pub fn clear_observer(&mut self) {
        self.tracker.clear_observer();
    }

    pub fn cached_height(&self, orientation: Orientation) -> i32 {
        self.tracker.cached_height(orientation)
    }

    pub fn state(&self) -> ProviderState {
        self.state
    }

    pub fn tracker(&self) -> &KeyboardHeightTracker {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Rect;
    use crate::services::bar_metrics::FixedBarMetrics;
    use crate::services::event_source::{ScriptedEventSource, ScriptedFrame};
    use crate::services::keyboard_tracker::KeyboardState;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    struct DetachedSource;

    #[async_trait::async_trait]
    impl LayoutEventSource for DetachedSource {
        fn is_attached(&self) -> bool {
            false
        }

        async fn next_event(&mut self) -> Result<Option<LayoutEvent>> {
            Ok(None)
        }
    }

    fn provider() -> KeyboardHeightProvider {
        let tracker = KeyboardHeightTracker::new(0, 0).unwrap();
        KeyboardHeightProvider::new(tracker, Box::new(FixedBarMetrics::new(24, 50)))
    }

    fn recorder(provider: &mut KeyboardHeightProvider) -> Arc<Mutex<Vec<(i32, Orientation)>>> {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        provider.set_observer(Some(Box::new(move |height: i32, orientation: Orientation| {
            sink.lock().push((height, orientation));
        })));
        calls
    }

    #[test]
    fn test_start_requires_attached_surface() {
        let mut provider = provider();
        assert!(matches!(
            provider.start(&DetachedSource),
            Err(KbdError::SurfaceNotAttached)
        ));
        assert_eq!(provider.state(), ProviderState::Detached);
    }

    #[test]
    fn test_events_before_start_are_ignored() {
        let mut provider = provider();
        let calls = recorder(&mut provider);

        provider.handle_layout_event(&LayoutEvent::new(Rect::vertical(0, 600), 600, 1000));

        assert!(calls.lock().is_empty());
        assert_eq!(provider.tracker().state(), KeyboardState::Closed);
    }

    #[tokio::test]
    async fn test_run_feeds_tracker_with_bar_heights() {
        let mut provider = provider();
        let calls = recorder(&mut provider);

        let source = ScriptedEventSource::new(
            vec![
                ScriptedFrame::new(24, 950, 600, 1000),
                ScriptedFrame::new(0, 600, 600, 1000),
                ScriptedFrame::new(24, 1000, 600, 1000),
            ],
            Duration::ZERO,
        );
        provider.run(Box::new(source)).await.unwrap();

        assert_eq!(provider.state(), ProviderState::Running);
        assert_eq!(
            *calls.lock(),
            vec![
                (0, Orientation::Portrait),
                (326, Orientation::Portrait),
                (0, Orientation::Portrait),
            ]
        );
        assert_eq!(provider.cached_height(Orientation::Portrait), 326);
        assert_eq!(provider.cached_height(Orientation::Landscape), 0);
    }

    #[tokio::test]
    async fn test_close_detaches_observer_and_stops_events() {
        let mut provider = provider();
        let calls = recorder(&mut provider);
        let source = ScriptedEventSource::new(vec![ScriptedFrame::new(0, 600, 600, 1000)], Duration::ZERO);
        provider.run(Box::new(source)).await.unwrap();
        assert_eq!(calls.lock().len(), 1);

        provider.close();
        assert_eq!(provider.state(), ProviderState::Closed);
        assert!(!provider.tracker().has_observer());

        provider.handle_layout_event(&LayoutEvent::new(Rect::vertical(0, 1000), 600, 1000));
        assert_eq!(calls.lock().len(), 1);
        assert!(matches!(
            provider.start(&DetachedSource),
            Err(KbdError::ProviderClosed)
        ));
    }
}
