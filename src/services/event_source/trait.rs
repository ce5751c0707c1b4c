use crate::config::{Config, SourceMode};
use crate::error::Result;
use crate::events::LayoutEvent;
use crate::services::bar_metrics::FixedBarMetrics;
use std::time::Duration;

/// Источник событий изменения раскладки (невидимая поверхность измерения хоста)
#[async_trait::async_trait]
pub trait LayoutEventSource: Send {
    /// Присоединена ли поверхность к окну хоста. До этого события не доставляются.
    fn is_attached(&self) -> bool;

    /// Следующее событие; `None` означает, что хост завершает работу
    async fn next_event(&mut self) -> Result<Option<LayoutEvent>>;
}

/// Factory function to create an event source based on the dry_run flag and configured mode
pub fn create_event_source(config: &Config, dry_run: bool) -> Result<Box<dyn LayoutEventSource>> {
    let interval = Duration::from_millis(config.source.interval_ms);

    if dry_run || config.source.mode == SourceMode::DryRun {
        let metrics = FixedBarMetrics::from(&config.system_bars);
        Ok(Box::new(super::dry_run::DryRunEventSource::new(
            metrics, interval,
        )))
    } else {
        Ok(Box::new(super::scripted::ScriptedEventSource::load(
            &config.source.script_path,
            interval,
        )?))
    }
}
