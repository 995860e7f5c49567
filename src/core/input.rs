use crate::domain::ports::InputSource;
use crate::utils::error::{QuizError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Whitespace-delimited token reader over any `BufRead`.
///
/// Tokens may share a line or be spread across several lines. Prompts go to
/// `output` and are flushed before each blocking read.
pub struct TokenReader<R: BufRead, W: Write> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> TokenReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    fn next_token(&mut self, expected: &str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut bytes = Vec::new();
            if self.input.read_until(b'\n', &mut bytes)? == 0 {
                return Err(QuizError::UnexpectedEof {
                    expected: expected.to_string(),
                });
            }

            // 非 UTF-8 的輸入屬於格式錯誤，而非終端機 I/O 錯誤
            let line = String::from_utf8(bytes).map_err(|e| QuizError::ParseError {
                token: String::from_utf8_lossy(e.as_bytes()).trim().to_string(),
                expected: expected.to_string(),
            })?;
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn read_parsed<T: FromStr>(&mut self, prompt: &str, expected: &str) -> Result<T> {
        self.prompt(prompt)?;
        let token = self.next_token(expected)?;
        tracing::debug!("Read token {:?} for {}", token, expected);
        token.parse::<T>().map_err(|_| QuizError::ParseError {
            token,
            expected: expected.to_string(),
        })
    }
}

impl<R: BufRead, W: Write> InputSource for TokenReader<R, W> {
    fn read_f64(&mut self, prompt: &str) -> Result<f64> {
        self.read_parsed(prompt, "a number")
    }

    fn read_i64(&mut self, prompt: &str) -> Result<i64> {
        self.read_parsed(prompt, "a whole number")
    }

    fn read_symbol(&mut self, prompt: &str) -> Result<char> {
        self.prompt(prompt)?;
        let token = self.next_token("an operator symbol")?;
        let mut chars = token.chars();
        // split_whitespace 保證 token 非空
        let symbol = chars.next().ok_or_else(|| QuizError::UnexpectedEof {
            expected: "an operator symbol".to_string(),
        })?;

        // 與串流擷取單一字元相同：剩餘字元留給下一次讀取
        let rest: String = chars.collect();
        if !rest.is_empty() {
            self.pending.push_front(rest);
        }

        Ok(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> TokenReader<Cursor<Vec<u8>>, Vec<u8>> {
        TokenReader::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_tokens_from_one_line() {
        let mut r = reader("2 3.5 +\n");
        assert_eq!(r.read_f64("a: ").unwrap(), 2.0);
        assert_eq!(r.read_f64("b: ").unwrap(), 3.5);
        assert_eq!(r.read_symbol("op: ").unwrap(), '+');
        assert_eq!(String::from_utf8(r.into_output()).unwrap(), "a: b: op: ");
    }

    #[test]
    fn test_skips_blank_lines() {
        let mut r = reader("\n\n   \n-4\n");
        assert_eq!(r.read_f64("> ").unwrap(), -4.0);
    }

    #[test]
    fn test_symbol_leaves_rest_of_token() {
        let mut r = reader("*7\n");
        assert_eq!(r.read_symbol("> ").unwrap(), '*');
        assert_eq!(r.read_i64("> ").unwrap(), 7);
    }

    #[test]
    fn test_malformed_number_is_parse_error() {
        let mut r = reader("abc\n");
        match r.read_f64("> ") {
            Err(QuizError::ParseError { token, .. }) => assert_eq!(token, "abc"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let mut r = TokenReader::new(Cursor::new(b"\xff\n3\n+\n".to_vec()), Vec::new());
        let err = r.read_f64("> ").unwrap_err();
        match &err {
            QuizError::ParseError { token, .. } => assert_eq!(token, "\u{FFFD}"),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_integer_rejects_fraction() {
        let mut r = reader("4.5\n");
        assert!(matches!(r.read_i64("> "), Err(QuizError::ParseError { .. })));
    }

    #[test]
    fn test_eof_is_reported() {
        let mut r = reader("1\n");
        r.read_f64("> ").unwrap();
        assert!(matches!(
            r.read_f64("> "),
            Err(QuizError::UnexpectedEof { .. })
        ));
    }
}
