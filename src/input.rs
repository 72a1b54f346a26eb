//! Чтение токенов, разделённых пробельными символами.
//!
//! Каждый вызов [`TokenReader::next_token`] возвращает ровно один токен,
//! при необходимости дочитывая следующие строки. Несколько токенов на одной
//! строке отдаются последовательными вызовами. Невалидные байты UTF-8
//! заменяются на `U+FFFD` и остаются частью токена, который затем отвергнет
//! валидатор.
//!
//! # Пример
//!
//! ```
//! use interactive_calc::input::TokenReader;
//!
//! let tokens: Vec<String> = TokenReader::new("5 +\n 3".as_bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(tokens, ["5", "+", "3"]);
//! ```

use std::io::{self, BufRead};

/// Итератор по токенам буферизованного потока.
pub struct TokenReader<R> {
    reader: R,
    bytes: Vec<u8>,
    line: String,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Создаёт читатель поверх буферизованного потока.
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            bytes: Vec::new(),
            line: String::new(),
            pos: 0,
        }
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &str {
        let byte_len: usize = self.line[self.pos..]
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum();

        let start = self.pos;
        self.pos += byte_len;
        &self.line[start..self.pos]
    }

    /// Возвращает следующий токен или `None`, если поток исчерпан.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`io::Error`] только при ошибке чтения потока.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            self.advance_while(char::is_whitespace);

            let token = self.advance_while(|c| !c.is_whitespace());
            if !token.is_empty() {
                return Ok(Some(token.to_owned()));
            }

            self.bytes.clear();
            self.pos = 0;
            if self.reader.read_until(b'\n', &mut self.bytes)? == 0 {
                self.line.clear();
                return Ok(None);
            }
            self.line = String::from_utf8_lossy(&self.bytes).into_owned();
        }
    }
}

impl<R: BufRead> Iterator for TokenReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
