use crate::error::Result;
use crate::events::{LayoutEvent, Rect};
use crate::kbd_error;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use super::r#trait::LayoutEventSource;

/// Один кадр сценария: видимая область и полный размер окна
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScriptedFrame {
    #[serde(default)]
    pub left: i32,
    pub top: i32,
    /// По умолчанию равна ширине окна
    #[serde(default)]
    pub right: Option<i32>,
    pub bottom: i32,
    pub full_width: i32,
    pub full_height: i32,
    /// Задержка перед кадром; по умолчанию используется интервал источника
    #[serde(default)]
    pub delay_ms: Option<u64>,
}

impl ScriptedFrame {
    pub fn new(top: i32, bottom: i32, full_width: i32, full_height: i32) -> Self {
        Self {
            left: 0,
            top,
            right: None,
            bottom,
            full_width,
            full_height,
            delay_ms: None,
        }
    }

    fn to_event(&self) -> LayoutEvent {
        let right = self.right.unwrap_or(self.full_width);
        LayoutEvent::new(
            Rect::new(self.left, self.top, right, self.bottom),
            self.full_width,
            self.full_height,
        )
    }
}

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    events: Vec<ScriptedFrame>,
}

/// Воспроизводит события раскладки из TOML-сценария (`[[events]]`)
pub struct ScriptedEventSource {
    frames: VecDeque<ScriptedFrame>,
    default_delay: Duration,
}

impl ScriptedEventSource {
    pub fn new(frames: Vec<ScriptedFrame>, default_delay: Duration) -> Self {
        Self {
            frames: frames.into(),
            default_delay,
        }
    }

    pub fn load<P: AsRef<Path>>(script_path: P, default_delay: Duration) -> Result<Self> {
        let script_path = script_path.as_ref();
        if !script_path.exists() {
            return Err(kbd_error!(script, "файл сценария не найден: {:?}", script_path));
        }

        let script: Script = Figment::from(Toml::file(script_path))
            .extract()
            .map_err(|e| kbd_error!(script, "не удалось разобрать {:?}: {}", script_path, e))?;

        if script.events.is_empty() {
            return Err(kbd_error!(script, "сценарий {:?} не содержит событий", script_path));
        }

        info!(
            "Загружен сценарий из {:?}: {} событий",
            script_path,
            script.events.len()
        );
        Ok(Self::new(script.events, default_delay))
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

#[async_trait::async_trait]
impl LayoutEventSource for ScriptedEventSource {
    fn is_attached(&self) -> bool {
        true
    }

    async fn next_event(&mut self) -> Result<Option<LayoutEvent>> {
        let Some(frame) = self.frames.pop_front() else {
            info!("Сценарий событий исчерпан");
            return Ok(None);
        };

        let delay = frame
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or(self.default_delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        Ok(Some(frame.to_event()))
    }
}
