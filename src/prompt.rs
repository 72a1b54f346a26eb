//! Цикл «спросить, прочитать, проверить, повторить».

use std::io::{BufRead, Write};

use tracing::debug;

use crate::SessionError;
use crate::input::TokenReader;
use crate::validate::InvalidInput;

/// Консольный диалог: читает токены из `R`, пишет сообщения в `W`.
pub struct Prompter<R, W> {
    tokens: TokenReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self {
            tokens: TokenReader::new(input),
            output,
        }
    }

    /// Запрашивает значение, пока валидатор его не примет.
    ///
    /// На каждой попытке выводит `message` и читает ровно один токен.
    /// Отвергнутый токен сопровождается `retry_message`. Число попыток
    /// не ограничено.
    ///
    /// # Ошибки
    ///
    /// - [`SessionError::InputClosed`], если ввод закончился.
    /// - [`SessionError::Io`] при ошибке чтения или записи.
    pub fn ask<T>(
        &mut self,
        message: &str,
        retry_message: &str,
        validate: impl Fn(&str) -> Result<T, InvalidInput>,
    ) -> Result<T, SessionError> {
        loop {
            self.say(message)?;

            let token = self.tokens.next_token()?.ok_or(SessionError::InputClosed)?;

            match validate(&token) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    debug!(%token, %reason, "token rejected");
                    self.say(retry_message)?;
                }
            }
        }
    }

    /// Выводит текст без ожидания ввода.
    ///
    /// # Ошибки
    ///
    /// [`SessionError::Io`] при ошибке записи.
    pub fn say(&mut self, text: &str) -> Result<(), SessionError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
