//! Бинарные операции над целыми числами и их вычисление.
//!
//! # Примеры
//!
//! ```
//! use interactive_calc::operation::{EvalError, Operator, perform_operation};
//!
//! assert_eq!(perform_operation(6, 3, Operator::Multiply), Ok(18));
//! assert_eq!(
//!     perform_operation(5, 0, Operator::Divide),
//!     Err(EvalError::DivisionByZero)
//! );
//! ```

use std::fmt::{self, Display};

use thiserror::Error;

/// Ошибки при вычислении операции.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Деление (или остаток) на ноль.
    #[error("деление на ноль")]
    DivisionByZero,
    /// Результат не помещается в i64.
    #[error("переполнение")]
    Overflow,
    /// Оператор не входит в набор, разрешённый движку.
    #[error("неподдерживаемый оператор '{0}'")]
    Unsupported(Operator),
}

impl EvalError {
    /// Ошибка предметной области, а не нарушение внутреннего инварианта.
    #[must_use]
    pub const fn is_domain(self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Overflow)
    }
}

/// Бинарные операторы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Сложение `+`.
    Add,
    /// Вычитание `-`.
    Subtract,
    /// Умножение `*`.
    Multiply,
    /// Целочисленное деление `/`.
    Divide,
    /// Остаток от деления `%`. Доступен только в [`OperatorSet::WithRemainder`].
    Remainder,
}

impl Operator {
    /// Символ оператора, как его вводит пользователь.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Remainder => '%',
        }
    }

    /// Оператор по символу.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Remainder),
            _ => None,
        }
    }

    const fn menu_label(self) -> &'static str {
        // после Addition в меню два пробела
        match self {
            Self::Add => "Addition ",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
            Self::Remainder => "Remainder",
        }
    }

    /// Применить оператор к операндам.
    ///
    /// Деление и остаток усекаются к нулю.
    ///
    /// # Ошибки
    ///
    /// - [`EvalError::DivisionByZero`] при нулевом делителе.
    /// - [`EvalError::Overflow`] при переполнении (включая `i64::MIN / -1`).
    pub fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
        match self {
            Self::Add => left.checked_add(right).ok_or(EvalError::Overflow),
            Self::Subtract => left.checked_sub(right).ok_or(EvalError::Overflow),
            Self::Multiply => left.checked_mul(right).ok_or(EvalError::Overflow),
            Self::Divide | Self::Remainder if right == 0 => Err(EvalError::DivisionByZero),
            Self::Divide => left.checked_div(right).ok_or(EvalError::Overflow),
            Self::Remainder => left.checked_rem(right).ok_or(EvalError::Overflow),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Набор операторов, доступных в сессии.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorSet {
    /// `+ - * /`.
    #[default]
    Standard,
    /// `+ - * / %`.
    WithRemainder,
}

impl OperatorSet {
    /// Операторы набора в порядке вывода в меню.
    #[must_use]
    pub const fn operators(self) -> &'static [Operator] {
        match self {
            Self::Standard => &[
                Operator::Add,
                Operator::Subtract,
                Operator::Multiply,
                Operator::Divide,
            ],
            Self::WithRemainder => &[
                Operator::Add,
                Operator::Subtract,
                Operator::Multiply,
                Operator::Divide,
                Operator::Remainder,
            ],
        }
    }

    #[must_use]
    pub fn contains(self, op: Operator) -> bool {
        self.operators().contains(&op)
    }

    /// Текст меню выбора операции.
    #[must_use]
    pub fn menu(self) -> String {
        let mut menu = String::from("Enter the operation to use: \n");
        for op in self.operators() {
            menu.push_str(&format!(" ({op}): {} \n", op.menu_label()));
        }
        menu.push('\n');
        menu
    }
}

/// Вычислитель операций, ограниченный набором операторов.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationEngine {
    operators: OperatorSet,
}

impl OperationEngine {
    #[must_use]
    pub const fn new(operators: OperatorSet) -> Self {
        Self { operators }
    }

    /// Вычислить `left op right`.
    ///
    /// # Ошибки
    ///
    /// Помимо ошибок [`Operator::apply`], возвращает
    /// [`EvalError::Unsupported`], если оператор не входит в набор движка.
    pub fn perform(self, left: i64, right: i64, op: Operator) -> Result<i64, EvalError> {
        if !self.operators.contains(op) {
            return Err(EvalError::Unsupported(op));
        }
        op.apply(left, right)
    }
}

/// Вычислить операцию стандартного набора `+ - * /`.
///
/// # Ошибки
///
/// См. [`OperationEngine::perform`].
pub fn perform_operation(left: i64, right: i64, op: Operator) -> Result<i64, EvalError> {
    OperationEngine::default().perform(left, right, op)
}
