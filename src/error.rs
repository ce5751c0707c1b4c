use crate::events::Orientation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KbdError {
    #[error("Недопустимая начальная высота клавиатуры ({orientation}): {height}, ожидается >= 0")]
    InvalidSeedHeight {
        orientation: Orientation,
        height: i32,
    },

    #[error("Поверхность измерения не присоединена к окну хоста")]
    SurfaceNotAttached,

    #[error("KeyboardHeightProvider уже закрыт")]
    ProviderClosed,

    #[error("Ошибка сценария событий: {0}")]
    Script(String),
}

impl KbdError {
    pub fn invalid_seed<T>(orientation: Orientation, height: i32) -> Result<T> {
        Err(KbdError::InvalidSeedHeight { orientation, height })
    }
}

pub type Result<T> = std::result::Result<T, KbdError>;

// Удобный макрос для ошибок сценария
#[macro_export]
macro_rules! kbd_error {
    (script, $($arg:tt)*) => {
        $crate::error::KbdError::Script(format!($($arg)*))
    };
}
