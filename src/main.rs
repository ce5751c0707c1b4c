use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tracing::{error, info, warn};

use kbd_height::config::{Config, SourceMode};
use kbd_height::services::{create_event_source, FixedBarMetrics, KeyboardHeightProvider, KeyboardHeightTracker};
use kbd_height::utils::init_tracing;
use kbd_height::Orientation;

#[derive(Parser, Debug)]
#[command(name = "kbd-height")]
#[command(about = "Определение высоты экранной клавиатуры по геометрии окна")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "kbd.toml")]
    config: String,

    /// Режим сухого запуска (эмуляция событий раскладки)
    #[arg(long)]
    dry_run: bool,

    /// Сценарий событий в формате TOML (переключает источник в режим script)
    #[arg(long, conflicts_with = "dry_run")]
    script: Option<String>,

    /// Уровень логирования (переопределяет конфигурацию)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Загрузка конфигурации
    let mut config = Config::load(&args.config)?;
    if let Some(script) = &args.script {
        config.source.mode = SourceMode::Script;
        config.source.script_path = script.clone();
    }

    // Инициализация системы логирования
    let directives = args.log_level.clone().unwrap_or_else(|| config.logging.filter.clone());
    init_tracing(&directives, &config.logging.format)?;

    info!("Запуск kbd-height v{}", env!("CARGO_PKG_VERSION"));
    info!("Конфигурация загружена из: {}", args.config);

    if args.dry_run {
        warn!("Режим сухого запуска - события раскладки эмулируются");
    }

    let tracker = KeyboardHeightTracker::new(config.seed.portrait_height, config.seed.landscape_height)?;
    let metrics = FixedBarMetrics::from(&config.system_bars);
    let mut provider = KeyboardHeightProvider::new(tracker, Box::new(metrics));

    // Потребитель: просто выводит высоту, как экран хоста
    provider.set_observer(Some(Box::new(|height: i32, orientation: Orientation| {
        info!("Высота клавиатуры в пикселях: {} {}", height, orientation);
    })));

    let source = create_event_source(&config, args.dry_run)?;
    info!("Источник событий инициализирован");

    tokio::select! {
        result = provider.run(source) => {
            if let Err(e) = result {
                error!("Ошибка в KeyboardHeightProvider: {}", e);
            }
        }
        result = signal::ctrl_c() => {
            match result {
                Ok(()) => info!("Получен сигнал завершения (Ctrl+C)"),
                Err(err) => error!("Ошибка при ожидании сигнала завершения: {}", err),
            }
        }
    }

    info!("Завершение работы...");
    provider.close();

    info!(
        "Последние известные высоты клавиатуры: portrait {}px, landscape {}px",
        provider.cached_height(Orientation::Portrait),
        provider.cached_height(Orientation::Landscape)
    );

    info!("kbd-height завершил работу");
    Ok(())
}
