//! Настройки сессии калькулятора.

use crate::operation::OperatorSet;

/// Параметры, с которыми запускается [`Session`](crate::session::Session).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Операторы, которые можно выбрать в меню.
    pub operators: OperatorSet,
}

impl Config {
    /// Включает операцию остатка `%`.
    #[must_use]
    pub const fn with_remainder(mut self, enabled: bool) -> Self {
        self.operators = if enabled {
            OperatorSet::WithRemainder
        } else {
            OperatorSet::Standard
        };
        self
    }
}
