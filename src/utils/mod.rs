pub mod logging;

pub use logging::init_tracing;

// ✅ Условное логирование: аргументы форматируются только при включённом DEBUG
#[macro_export]
macro_rules! debug_if_enabled {
    ($($arg:tt)*) => {
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!($($arg)*);
        }
    };
}
