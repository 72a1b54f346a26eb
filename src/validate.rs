//! Проверка пользовательских токенов.
//!
//! Каждый валидатор принимает токен целиком и либо возвращает типизированное
//! значение, либо [`InvalidInput`] с причиной отказа. Валидаторы не паникуют.
//!
//! # Примеры
//!
//! ```
//! use interactive_calc::operation::Operator;
//! use interactive_calc::validate::{Answer, validate_integer, validate_operation, validate_yes_no_answer};
//!
//! assert_eq!(validate_integer("-7"), Ok(-7));
//! assert!(validate_integer("12abc").is_err());
//! assert_eq!(validate_operation("/"), Ok(Operator::Divide));
//! assert_eq!(validate_yes_no_answer("yes"), Ok(Answer::Continue));
//! ```

use std::num::ParseIntError;

use thiserror::Error;

use crate::operation::{Operator, OperatorSet};

/// Причина, по которой токен отвергнут.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// Токен не является целым числом из диапазона i64.
    #[error("не целое число: {0}")]
    Integer(#[from] ParseIntError),

    /// Токен не является оператором из доступного набора.
    #[error("неизвестная операция {0:?}")]
    Operator(String),

    /// Ответ не из Y, N, YES, NO.
    #[error("ожидался ответ Y или N, получено {0:?}")]
    Answer(String),
}

/// Ответ на вопрос о продолжении.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// `Y` или `YES`.
    Continue,
    /// `N` или `NO`.
    Stop,
}

/// Разбирает токен как целое число.
///
/// Принимается только весь токен целиком: необязательный знак и десятичные
/// цифры. Пустой токен, хвост после числа и переполнение отвергаются.
///
/// # Ошибки
///
/// [`InvalidInput::Integer`] с причиной от [`str::parse`].
pub fn validate_integer(token: &str) -> Result<i64, InvalidInput> {
    Ok(token.parse()?)
}

/// Разбирает токен как оператор стандартного набора `+ - * /`.
///
/// # Ошибки
///
/// [`InvalidInput::Operator`], если токен не ровно один символ из набора.
pub fn validate_operation(token: &str) -> Result<Operator, InvalidInput> {
    OperatorSet::Standard.parse(token)
}

impl OperatorSet {
    /// Разбирает токен как оператор этого набора.
    ///
    /// # Ошибки
    ///
    /// [`InvalidInput::Operator`], если токен не ровно один символ из набора.
    pub fn parse(self, token: &str) -> Result<Operator, InvalidInput> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::from_symbol(symbol)
                .filter(|&op| self.contains(op))
                .ok_or_else(|| InvalidInput::Operator(token.to_owned())),
            _ => Err(InvalidInput::Operator(token.to_owned())),
        }
    }
}

/// Разбирает ответ Y/N без учёта регистра.
///
/// # Ошибки
///
/// [`InvalidInput::Answer`] для всего, кроме `Y`, `N`, `YES`, `NO`.
pub fn validate_yes_no_answer(token: &str) -> Result<Answer, InvalidInput> {
    match token.to_ascii_uppercase().as_str() {
        "Y" | "YES" => Ok(Answer::Continue),
        "N" | "NO" => Ok(Answer::Stop),
        _ => Err(InvalidInput::Answer(token.to_owned())),
    }
}
