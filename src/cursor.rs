use crate::error::AsmError;

pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Read position over one cleaned input line. Never mutates the text; every
/// primitive either consumes what it matched or leaves the position alone.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance by `n` bytes. Callers only pass lengths of matched ASCII text.
    pub fn bump(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.text.len());
    }

    pub fn skip_space(&mut self) {
        let rest = self.rest();
        let n = rest.len() - rest.trim_start_matches(is_space).len();
        self.pos += n;
    }

    pub fn eat_char(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skip blanks, then require `c`.
    pub fn expect_char(&mut self, c: char) -> Result<(), AsmError> {
        self.skip_space();
        if self.eat_char(c) {
            Ok(())
        } else {
            Err(AsmError::expected(format!("'{c}'"), self.rest()))
        }
    }

    pub fn starts_with_ci(&self, prefix: &str) -> bool {
        self.rest()
            .get(..prefix.len())
            .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
    }

    pub fn eat_ci(&mut self, prefix: &str) -> bool {
        if self.starts_with_ci(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    pub fn expect_ci(&mut self, prefix: &str) -> Result<(), AsmError> {
        if self.eat_ci(prefix) {
            Ok(())
        } else {
            Err(AsmError::expected(
                format!("text starting with {prefix}"),
                self.rest(),
            ))
        }
    }

    /// Mnemonic match: `word` ignoring case, and the input must end or
    /// continue with a blank right after it, so `mem` never matches `memory`.
    pub fn eat_word(&mut self, word: &str) -> bool {
        if !self.starts_with_ci(word) {
            return false;
        }
        match self.rest()[word.len()..].chars().next() {
            None => {}
            Some(c) if is_space(c) => {}
            Some(_) => return false,
        }
        self.pos += word.len();
        true
    }

    /// Text up to the next blank (or end of line).
    pub fn token(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest.find(is_space).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Text up to (not including) `stop`, a blank, or end of line.
    pub fn token_until(&mut self, stop: char) -> &'a str {
        let rest = self.rest();
        let len = rest
            .find(|c: char| c == stop || is_space(c))
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    pub fn starts_with_digit(&self) -> bool {
        self.peek().map_or(false, |c| c.is_ascii_digit())
    }

    /// Unsigned decimal that must fit in `bits` bits (at most 64). Digits
    /// too long for any integer are out of range, not malformed.
    pub fn uint_bits(&mut self, bits: u32, what: &'static str) -> Result<u64, AsmError> {
        let rest = self.rest();
        let len = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if len == 0 {
            return Err(AsmError::ExpectedNumber(rest.to_string()));
        }
        let digits = &rest[..len];
        let out_of_range = || AsmError::OutOfRange {
            what,
            text: digits.to_string(),
            bits,
        };
        let value = digits.parse::<u64>().map_err(|_| out_of_range())?;
        if bits < 64 && value >= 1u64 << bits {
            return Err(out_of_range());
        }
        self.pos += len;
        Ok(value)
    }

    /// Unsigned decimal that must fit in `bits` bits.
    pub fn uint(&mut self, bits: u32, what: &'static str) -> Result<u32, AsmError> {
        Ok(self.uint_bits(bits.min(32), what)? as u32)
    }

    /// Integer literal with the usual base prefixes: `0x`/`0X` hexadecimal,
    /// a leading `0` octal, decimal otherwise.
    pub fn integer_literal(&mut self) -> Result<u64, AsmError> {
        let rest = self.rest();
        let hex = (rest.starts_with("0x") || rest.starts_with("0X"))
            && rest[2..].starts_with(|c: char| c.is_ascii_hexdigit());
        let (radix, skip) = if hex {
            (16, 2)
        } else if rest.starts_with('0') {
            (8, 1)
        } else {
            (10, 0)
        };
        let body = &rest[skip..];
        let len = body.len() - body.trim_start_matches(|c: char| c.is_digit(radix)).len();
        if len == 0 {
            // a lone "0" is octal zero
            if radix == 8 {
                self.pos += 1;
                return Ok(0);
            }
            return Err(AsmError::ExpectedNumber(rest.to_string()));
        }
        let value = u64::from_str_radix(&body[..len], radix)
            .map_err(|_| AsmError::ExpectedNumber(rest.to_string()))?;
        self.pos += skip + len;
        Ok(value)
    }

    /// Only blanks may remain.
    pub fn expect_end(&mut self) -> Result<(), AsmError> {
        self.skip_space();
        if self.is_empty() {
            Ok(())
        } else {
            Err(AsmError::TrailingText(self.rest().to_string()))
        }
    }
}
