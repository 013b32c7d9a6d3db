// src/tokenizer.rs

/// A single command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// The token contained a quoted segment. Quoted tokens are never switches.
    pub quoted: bool,
}

impl Token {
    #[cfg(test)]
    pub(crate) fn bare(text: impl Into<String>) -> Self {
        Self { text: text.into(), quoted: false }
    }
}

/// Output of [`tokenize`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tokens {
    pub tokens: Vec<Token>,
    /// Text of the token that ran to end of input inside an open quote.
    pub unterminated: Option<String>,
}

/// Split `input` on whitespace. `"` opens a segment that runs to the matching
/// quote; the quotes are dropped and the segment joins the current token. `'`
/// quotes only at the start of a token, so `O'Brien` stays a plain word.
pub fn tokenize(input: &str) -> Tokens {
    let mut t = Tokenizer::new(input);
    let mut out = Tokens::default();
    loop {
        t.skip_ws();
        if t.eof() {
            break;
        }
        let (token, closed) = t.next_token();
        if !closed {
            out.unterminated = Some(token.text.clone());
        }
        out.tokens.push(token);
    }
    out
}

struct Tokenizer<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Read one token starting at a non-whitespace char. The flag is false when
    /// input ended inside a quote.
    fn next_token(&mut self) -> (Token, bool) {
        let mut text = String::new();
        let mut quoted = false;
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                break;
            }
            let opens_quote = c == '"' || (c == '\'' && self.i == start);
            self.i += c.len_utf8();
            if opens_quote {
                quoted = true;
                if !self.capture_quoted(c, &mut text) {
                    return (Token { text, quoted }, false);
                }
            } else {
                text.push(c);
            }
        }
        (Token { text, quoted }, true)
    }

    fn capture_quoted(&mut self, quote: char, out: &mut String) -> bool {
        while let Some(c) = self.peek_char() {
            self.i += c.len_utf8();
            if c == quote {
                return true;
            }
            out.push(c);
        }
        false
    }

    fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.i += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn eof(&self) -> bool {
        self.i >= self.s.len()
    }
}
