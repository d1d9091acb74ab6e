use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Quoted string, with doubled quotes already collapsed
    ///
    /// # Examples
    /// ```text
    /// 'foo'
    /// "it's"
    /// 'it''s'
    /// ```
    String(String),

    /// Numeric literal, kept as written so no precision is lost
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -1.50
    /// 12345678901234567890123456789012345
    /// ```
    Number(String),

    // Names
    /// NCName-like name: a letter or `_` followed by letters, digits,
    /// `_`, `-` or `.`
    ///
    /// # Examples
    /// ```text
    /// s-ramp
    /// XsdDocument
    /// maven.groupId
    /// ```
    Name(String),

    /// Logical AND (`and`)
    And,

    /// Logical OR (`or`)
    Or,

    // Punctuation
    /// Step separator (`/`)
    Slash,

    /// Type shorthand (`//`)
    DoubleSlash,

    /// Opening predicate bracket (`[`)
    LBracket,

    /// Closing predicate bracket (`]`)
    RBracket,

    /// Opening parenthesis (`(`)
    LParen,

    /// Closing parenthesis (`)`)
    RParen,

    /// Property marker (`@`)
    At,

    /// Argument separator (`,`)
    Comma,

    /// Namespace prefix separator (`:`)
    Colon,

    /// Context item (`.`)
    Dot,

    // Comparison
    /// `=`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,

    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::String(s) => write!(f, "string '{}'", s),
            Token::Number(n) => write!(f, "number {}", n),
            Token::Name(n) => write!(f, "name '{}'", n),
            Token::And => f.write_str("'and'"),
            Token::Or => f.write_str("'or'"),
            Token::Slash => f.write_str("'/'"),
            Token::DoubleSlash => f.write_str("'//'"),
            Token::LBracket => f.write_str("'['"),
            Token::RBracket => f.write_str("']'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
            Token::At => f.write_str("'@'"),
            Token::Comma => f.write_str("','"),
            Token::Colon => f.write_str("':'"),
            Token::Dot => f.write_str("'.'"),
            Token::Eq => f.write_str("'='"),
            Token::NotEq => f.write_str("'!='"),
            Token::Lt => f.write_str("'<'"),
            Token::LtEq => f.write_str("'<='"),
            Token::Gt => f.write_str("'>'"),
            Token::GtEq => f.write_str("'>='"),
            Token::Eof => f.write_str("end of query"),
        }
    }
}

/// A token and the character offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}
