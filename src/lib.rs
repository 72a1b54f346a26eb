//! # interactive_calc
//!
//! Консольный калькулятор бинарных операций над целыми числами.
//!
//! Запрашивает первое число, операцию и второе число, проверяя каждый ввод,
//! выводит результат и предлагает повторить.
//!
//! Поддерживает:
//! - Целые числа (i64), включая i64::MIN
//! - Бинарные операции: `+`, `-`, `*`, `/`
//! - Остаток `%` по флагу `--remainder`
//!
//! # Пример использования
//!
//! ```
//! use interactive_calc::{Config, run_session};
//!
//! let mut out = Vec::new();
//! let summary = run_session("6 * 7 n".as_bytes(), &mut out, std::io::sink(), Config::default()).unwrap();
//! assert_eq!(summary.completed, 1);
//! assert!(String::from_utf8(out).unwrap().contains("The result of 6 * 7 is 42."));
//! ```

pub mod config;
pub mod input;
pub mod logging;
pub mod operation;
pub mod prompt;
pub mod session;
pub mod validate;

use std::io::{self, BufRead, Write};

pub use config::Config;
pub use session::{Session, Summary};

/// Ошибка сессии калькулятора.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Ошибка чтения или записи консоли.
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),

    /// Ввод закончился до получения ответа.
    #[error("ввод закончился")]
    InputClosed,
}

/// Запускает сессию на произвольных потоках.
///
/// # Ошибки
///
/// Возвращает [`SessionError::Io`] при ошибках чтения/записи.
pub fn run_session<R: BufRead, W: Write, E: Write>(
    input: R,
    output: W,
    diagnostics: E,
    config: Config,
) -> Result<Summary, SessionError> {
    Session::new(input, output, diagnostics, config).run()
}

/// Запускает интерактивный калькулятор на stdin/stdout/stderr.
///
/// Завершается после ответа `N`/`NO` или конца ввода.
///
/// # Ошибки
///
/// Возвращает [`SessionError::Io`] при ошибках чтения/записи.
pub fn run(config: Config) -> Result<Summary, SessionError> {
    run_session(io::stdin().lock(), io::stdout(), io::stderr(), config)
}
