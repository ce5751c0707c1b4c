use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub system_bars: SystemBarsConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub filter: String,
}

/// Начальные высоты клавиатуры (например, сохранённые хостом в прошлой сессии)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub portrait_height: i32,
    #[serde(default)]
    pub landscape_height: i32,
}

/// Высоты системных панелей; 0 - неизвестно
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SystemBarsConfig {
    #[serde(default)]
    pub status_bar_height: i32,
    #[serde(default)]
    pub navigation_bar_height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceMode {
    DryRun,
    Script,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    pub mode: SourceMode,
    #[serde(default = "default_script_path")]
    pub script_path: String,
    pub interval_ms: u64,
}

fn default_script_path() -> String {
    "kbd-script.toml".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
                filter: "kbd_height=info".to_string(),
            },
            seed: SeedConfig::default(),
            system_bars: SystemBarsConfig::default(),
            source: SourceConfig {
                mode: SourceMode::DryRun,
                script_path: default_script_path(),
                interval_ms: 1000,
            },
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("KBH_").split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Валидация настроек логирования
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        // Начальные высоты окончательно проверяет сам трекер, здесь - ранняя диагностика
        if self.seed.portrait_height < 0 || self.seed.landscape_height < 0 {
            anyhow::bail!(
                "Начальные высоты клавиатуры должны быть >= 0 (portrait: {}, landscape: {})",
                self.seed.portrait_height,
                self.seed.landscape_height
            );
        }

        if self.system_bars.status_bar_height < 0 || self.system_bars.navigation_bar_height < 0 {
            anyhow::bail!("Высоты системных панелей должны быть >= 0");
        }

        if self.source.interval_ms < 10 {
            anyhow::bail!("interval_ms должно быть минимум 10");
        }

        if self.source.mode == SourceMode::Script && self.source.script_path.is_empty() {
            anyhow::bail!("Для режима script требуется script_path");
        }

        Ok(())
    }
}
