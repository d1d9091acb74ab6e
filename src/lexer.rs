use crate::ast::{Spanned, Token};
use crate::error::{ParseError, ParseErrorKind};

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn error(&self, kind: ParseErrorKind, position: usize) -> ParseError {
        ParseError::new(kind, position)
    }

    /// Skip whitespace and `(: ... :)` comments. Comments nest.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.current_char() {
                Some(ch) if ch.is_whitespace() => self.advance(),
                Some('(') if self.peek_char(1) == Some(':') => self.skip_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_comment(&mut self) -> Result<(), ParseError> {
        let start = self.position;
        let mut depth = 0usize;

        while let Some(ch) = self.current_char() {
            if ch == '(' && self.peek_char(1) == Some(':') {
                depth += 1;
                self.advance();
            } else if ch == ':' && self.peek_char(1) == Some(')') {
                depth -= 1;
                self.advance();
                if depth == 0 {
                    self.advance();
                    return Ok(());
                }
            }
            self.advance();
        }

        Err(self.error(
            ParseErrorKind::Expected {
                expected: "':)' to close the comment".to_string(),
                found: "end of query".to_string(),
            },
            start,
        ))
    }

    fn is_name_start(ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    fn is_name_char(ch: char) -> bool {
        ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.')
    }

    fn read_name(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if Self::is_name_char(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Reads a quoted string. A doubled delimiter is an escaped delimiter;
    /// the other quote style needs no escaping.
    fn read_string(&mut self, quote: char) -> Result<String, ParseError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            if ch == quote {
                if self.peek_char(1) == Some(quote) {
                    result.push(quote);
                    self.advance();
                    self.advance();
                    continue;
                }
                self.advance();
                return Ok(result);
            }
            result.push(ch);
            self.advance();
        }

        Err(self.error(ParseErrorKind::UnterminatedString, start))
    }

    /// Reads `-?\d*(\.\d+)?`. A leading `.` gets a `0` in front so the text
    /// is always a valid decimal.
    fn read_number(&mut self) -> String {
        let mut number = String::new();
        let mut is_decimal = false;

        if self.current_char() == Some('-') {
            number.push('-');
            self.advance();
        }
        if self.current_char() == Some('.') {
            number.push('0');
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !is_decimal
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                is_decimal = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        number
    }

    /// Single-character token: consume it and return `token`.
    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    /// Two-character token when the next char is `second`, else `one`.
    fn maybe_double(&mut self, second: char, two: Token, one: Token) -> Token {
        if self.peek_char(1) == Some(second) {
            self.advance();
            self.advance();
            two
        } else {
            self.advance();
            one
        }
    }

    pub fn next_token(&mut self) -> Result<Spanned, ParseError> {
        self.skip_trivia()?;
        let position = self.position;

        let token = match self.current_char() {
            None => Token::Eof,
            Some('/') => self.maybe_double('/', Token::DoubleSlash, Token::Slash),
            Some('[') => self.single(Token::LBracket),
            Some(']') => self.single(Token::RBracket),
            Some('(') => self.single(Token::LParen),
            Some(')') => self.single(Token::RParen),
            Some('@') => self.single(Token::At),
            Some(',') => self.single(Token::Comma),
            Some(':') => self.single(Token::Colon),
            Some('=') => self.single(Token::Eq),
            Some('<') => self.maybe_double('=', Token::LtEq, Token::Lt),
            Some('>') => self.maybe_double('=', Token::GtEq, Token::Gt),
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::NotEq
                } else {
                    return Err(self.error(ParseErrorKind::UnexpectedCharacter('!'), position));
                }
            }
            Some('.') if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                Token::Number(self.read_number())
            }
            Some('.') => self.single(Token::Dot),
            Some('-')
                if self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
                    || (self.peek_char(1) == Some('.')
                        && self.peek_char(2).is_some_and(|c| c.is_ascii_digit())) =>
            {
                Token::Number(self.read_number())
            }
            Some(q @ ('\'' | '"')) => Token::String(self.read_string(q)?),
            Some(ch) if Self::is_name_start(ch) => {
                let name = self.read_name();

                match name.as_str() {
                    "and" => Token::And,
                    "or" => Token::Or,
                    _ => Token::Name(name),
                }
            }
            Some(ch) if ch.is_ascii_digit() => Token::Number(self.read_number()),
            Some(ch) => return Err(self.error(ParseErrorKind::UnexpectedCharacter(ch), position)),
        };

        Ok(Spanned { token, position })
    }

    /// Lex the whole input. The last token is always [`Token::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Spanned>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let spanned = self.next_token()?;
            let done = spanned.token == Token::Eof;
            tokens.push(spanned);
            if done {
                return Ok(tokens);
            }
        }
    }
}

/// Lex `text` into tokens.
pub fn tokenize(text: &str) -> Result<Vec<Spanned>, ParseError> {
    Lexer::new(text).tokenize()
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("and or android");
    assert_eq!(lexer.next_token().unwrap().token, Token::And);
    assert_eq!(lexer.next_token().unwrap().token, Token::Or);
    assert_eq!(
        lexer.next_token().unwrap().token,
        Token::Name("android".to_string())
    );
}

#[test]
fn test_predicate() {
    let mut lexer = Lexer::new("/s-ramp[@x != 5]");
    assert_eq!(lexer.next_token().unwrap().token, Token::Slash);
    assert_eq!(
        lexer.next_token().unwrap().token,
        Token::Name("s-ramp".to_string())
    );
    assert_eq!(lexer.next_token().unwrap().token, Token::LBracket);
    assert_eq!(lexer.next_token().unwrap().token, Token::At);
    assert_eq!(lexer.next_token().unwrap().token, Token::Name("x".to_string()));
    assert_eq!(lexer.next_token().unwrap().token, Token::NotEq);
    assert_eq!(lexer.next_token().unwrap().token, Token::Number("5".to_string()));
    assert_eq!(lexer.next_token().unwrap().token, Token::RBracket);
    assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
}
