//! Диагностическая трассировка.
//!
//! Пишется в stderr, чтобы не смешиваться с диалогом в stdout.
//! Уровень задаётся через `RUST_LOG`, иначе используется уровень по умолчанию.
//!
//! ```bash
//! RUST_LOG=interactive_calc=debug interactive_calc
//! ```

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Уровень по умолчанию для числа флагов `-v`.
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Инициализирует подписчика tracing.
///
/// `RUST_LOG`, если задан, имеет приоритет над `default_level`.
pub fn init(default_level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_ascii_lowercase()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
