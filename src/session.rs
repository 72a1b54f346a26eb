//! Сессия калькулятора: конечный автомат одного цикла вычислений.
//!
//! ```text
//! AwaitFirstOperand -> AwaitOperator -> AwaitSecondOperand -> Compute
//!     Compute --ok--> Display -> AwaitRepeatDecision -> AwaitFirstOperand | Terminated
//!     Compute --err-> AwaitFirstOperand
//! ```
//!
//! # Пример
//!
//! ```
//! use interactive_calc::config::Config;
//! use interactive_calc::session::Session;
//!
//! let mut out = Vec::new();
//! let mut diag = Vec::new();
//! Session::new("5 + 3 N".as_bytes(), &mut out, &mut diag, Config::default())
//!     .run()
//!     .unwrap();
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.contains("The result of 5 + 3 is 8.\n"));
//! assert!(out.ends_with("Goodbye!"));
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, error, info};

use crate::SessionError;
use crate::config::Config;
use crate::operation::{EvalError, OperationEngine, Operator, OperatorSet};
use crate::prompt::Prompter;
use crate::validate::{Answer, validate_integer, validate_yes_no_answer};

pub const FIRST_NUMBER_PROMPT: &str = "Enter your first number: ";
pub const SECOND_NUMBER_PROMPT: &str = "Enter your second number: ";
pub const INVALID_NUMBER: &str = "Not a valid number, try again.\n";
pub const INVALID_OPERATION: &str = "Not a valid operation, try again";
pub const UNDEFINED_RESULT: &str = "Invalid operation (e.g., division by zero).\n\n";
pub const REPEAT_PROMPT: &str = "Would you like to perform another calculation? (Y/N): \n";
pub const INVALID_ANSWER: &str = "Invalid, please enter Y or N.\n ";
pub const GOODBYE: &str = "Goodbye!";

/// Состояние сессии вместе с уже собранными значениями.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitFirstOperand,
    AwaitOperator {
        left: i64,
    },
    AwaitSecondOperand {
        left: i64,
        op: Operator,
    },
    Compute {
        left: i64,
        op: Operator,
        right: i64,
    },
    Display {
        left: i64,
        op: Operator,
        right: i64,
        value: i64,
    },
    AwaitRepeatDecision,
    Terminated,
}

/// Итоги сессии.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Вычисления, результат которых был выведен.
    pub completed: usize,
    /// Вычисления, отклонённые движком.
    pub refused: usize,
}

/// Интерактивная сессия поверх произвольных потоков.
///
/// `diagnostics` получает только сообщения о нарушении внутренних
/// инвариантов; в консольной программе это stderr.
pub struct Session<R, W, E> {
    prompter: Prompter<R, W>,
    diagnostics: E,
    operators: OperatorSet,
    engine: OperationEngine,
    summary: Summary,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    #[must_use]
    pub fn new(input: R, output: W, diagnostics: E, config: Config) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            diagnostics,
            operators: config.operators,
            engine: OperationEngine::new(config.operators),
            summary: Summary::default(),
        }
    }

    /// Выполняет сессию до ответа «нет» или конца ввода.
    ///
    /// # Ошибки
    ///
    /// [`SessionError::Io`] при ошибке чтения или записи. Конец ввода
    /// ошибкой не считается.
    pub fn run(mut self) -> Result<Summary, SessionError> {
        let mut state = State::AwaitFirstOperand;

        while state != State::Terminated {
            state = match self.step(state) {
                Ok(next) => next,
                Err(SessionError::InputClosed) => {
                    info!("input closed, ending session");
                    State::Terminated
                }
                Err(err) => return Err(err),
            };
        }

        info!(
            completed = self.summary.completed,
            refused = self.summary.refused,
            "session finished"
        );
        Ok(self.summary)
    }

    fn step(&mut self, state: State) -> Result<State, SessionError> {
        let next = match state {
            State::AwaitFirstOperand => State::AwaitOperator {
                left: self.read_number(FIRST_NUMBER_PROMPT)?,
            },
            State::AwaitOperator { left } => {
                let operators = self.operators;
                let op = self.prompter.ask(&operators.menu(), INVALID_OPERATION, |token| {
                    operators.parse(token)
                })?;
                State::AwaitSecondOperand { left, op }
            }
            State::AwaitSecondOperand { left, op } => State::Compute {
                left,
                op,
                right: self.read_number(SECOND_NUMBER_PROMPT)?,
            },
            State::Compute { left, op, right } => match self.engine.perform(left, right, op) {
                Ok(value) => State::Display {
                    left,
                    op,
                    right,
                    value,
                },
                Err(err) => {
                    self.refuse(err)?;
                    State::AwaitFirstOperand
                }
            },
            State::Display {
                left,
                op,
                right,
                value,
            } => {
                self.summary.completed += 1;
                self.prompter
                    .say(&format!("The result of {left} {op} {right} is {value}.\n"))?;
                State::AwaitRepeatDecision
            }
            State::AwaitRepeatDecision => {
                match self
                    .prompter
                    .ask(REPEAT_PROMPT, INVALID_ANSWER, validate_yes_no_answer)?
                {
                    Answer::Continue => State::AwaitFirstOperand,
                    Answer::Stop => {
                        self.prompter.say(GOODBYE)?;
                        State::Terminated
                    }
                }
            }
            State::Terminated => State::Terminated,
        };

        Ok(next)
    }

    fn read_number(&mut self, message: &str) -> Result<i64, SessionError> {
        self.prompter.ask(message, INVALID_NUMBER, validate_integer)
    }

    fn refuse(&mut self, err: EvalError) -> Result<(), SessionError> {
        self.summary.refused += 1;
        if err.is_domain() {
            debug!(%err, "calculation refused");
        } else if let EvalError::Unsupported(op) = err {
            error!(%op, "operator passed validation but is not supported by the engine");
            writeln!(self.diagnostics, "Error: Unexpected operator '{op}'")?;
        }
        self.prompter.say(UNDEFINED_RESULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Run {
        summary: Summary,
        output: String,
        diagnostics: String,
    }

    fn run_with(input: &str, config: Config) -> Run {
        let mut output = Vec::new();
        let mut diagnostics = Vec::new();
        let summary = Session::new(input.as_bytes(), &mut output, &mut diagnostics, config)
            .run()
            .unwrap();
        Run {
            summary,
            output: String::from_utf8(output).unwrap(),
            diagnostics: String::from_utf8(diagnostics).unwrap(),
        }
    }

    fn run(input: &str) -> Run {
        run_with(input, Config::default())
    }

    #[test]
    fn single_calculation_then_stop() {
        let run = run("5\n+\n3\nN\n");
        let menu = OperatorSet::Standard.menu();
        assert_eq!(
            run.output,
            format!(
                "{FIRST_NUMBER_PROMPT}{menu}{SECOND_NUMBER_PROMPT}\
                 The result of 5 + 3 is 8.\n{REPEAT_PROMPT}{GOODBYE}"
            )
        );
        assert_eq!(run.summary, Summary { completed: 1, refused: 0 });
        assert!(run.diagnostics.is_empty());
    }

    #[test]
    fn retry_messages_keep_console_layout() {
        let run = run("5 x + 3 maybe n");
        assert!(run.output.contains("try againEnter the operation to use: \n"));
        assert!(run.output.contains("Invalid, please enter Y or N.\n Would you like"));
        assert!(run.output.ends_with("Goodbye!"));
    }

    #[test]
    fn invalid_utf8_token_is_retried() {
        let mut output = Vec::new();
        let summary = Session::new(
            &b"\xff\n5 + 3 n"[..],
            &mut output,
            std::io::sink(),
            Config::default(),
        )
        .run()
        .unwrap();
        let output = String::from_utf8(output).unwrap();

        let retry = output.find(INVALID_NUMBER).unwrap();
        let result = output.find("The result of 5 + 3 is 8.").unwrap();
        assert!(retry < result);
        assert_eq!(summary.completed, 1);
    }

    #[test]
    fn division_by_zero_restarts_without_repeat_question() {
        let run = run("5 / 0 5 / 0 N");
        assert_eq!(run.output.matches(UNDEFINED_RESULT).count(), 2);
        // "N" попадает в запрос первого числа и отвергается, затем ввод кончается
        assert_eq!(run.output.matches(INVALID_NUMBER).count(), 1);
        assert_eq!(run.output.matches(FIRST_NUMBER_PROMPT).count(), 4);
        assert!(!run.output.contains(REPEAT_PROMPT));
        assert!(!run.output.contains(GOODBYE));
        assert_eq!(run.summary, Summary { completed: 0, refused: 2 });
    }

    #[test]
    fn overflow_is_a_domain_error() {
        let run = run("9223372036854775807 + 1 1 + 1 no");
        assert!(run.output.contains(UNDEFINED_RESULT));
        assert!(run.output.contains("The result of 1 + 1 is 2.\n"));
        assert!(run.output.ends_with(GOODBYE));
    }

    #[test]
    fn invalid_tokens_are_retried() {
        let run = run("abc 4 ++ % * 12x 5 maybe y 1 - 3 n");
        assert_eq!(run.output.matches(INVALID_NUMBER).count(), 2);
        assert_eq!(run.output.matches(INVALID_OPERATION).count(), 2);
        assert_eq!(run.output.matches(INVALID_ANSWER).count(), 1);
        assert!(run.output.contains("The result of 4 * 5 is 20.\n"));
        assert!(run.output.contains("The result of 1 - 3 is -2.\n"));
        assert_eq!(run.summary.completed, 2);
    }

    #[test]
    fn continue_answers_loop() {
        let run = run("1 + 1 Y 2 * 2 yes 9 / 2 NO");
        assert!(run.output.contains("The result of 2 * 2 is 4.\n"));
        assert!(run.output.contains("The result of 9 / 2 is 4.\n"));
        assert_eq!(run.output.matches(REPEAT_PROMPT).count(), 3);
        assert_eq!(run.summary.completed, 3);
    }

    #[test]
    fn closed_input_ends_quietly() {
        let run = run("5 +");
        assert!(!run.output.contains(GOODBYE));
        assert!(run.output.ends_with(SECOND_NUMBER_PROMPT));
        assert_eq!(run.summary, Summary::default());
    }

    #[test]
    fn remainder_extension() {
        let run = run_with("7 % 3 n", Config::default().with_remainder(true));
        assert!(run.output.contains(" (%): Remainder \n"));
        assert!(run.output.contains("The result of 7 % 3 is 1.\n"));
    }

    #[test]
    fn unsupported_operator_is_reported_and_restarts() {
        let mut output = Vec::new();
        let mut diagnostics = Vec::new();
        let mut session = Session::new(
            "n".as_bytes(),
            &mut output,
            &mut diagnostics,
            Config::default(),
        );

        let next = session
            .step(State::Compute {
                left: 7,
                op: Operator::Remainder,
                right: 3,
            })
            .unwrap();
        assert_eq!(next, State::AwaitFirstOperand);
        assert_eq!(session.summary.refused, 1);
        drop(session);

        assert_eq!(
            String::from_utf8(diagnostics).unwrap(),
            "Error: Unexpected operator '%'\n"
        );
        assert_eq!(String::from_utf8(output).unwrap(), UNDEFINED_RESULT);
    }
}
