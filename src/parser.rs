use crate::{
    ast::{
        AndExpr, Argument, ArtifactSet, Comparison, ComparisonOp, EqualityExpr, Expr,
        ForwardPropertyStep, FunctionCall, Literal, Operand, OrExpr, Predicate, QName, Query,
        RelationshipPath, Selector, Spanned, Step, SubartifactSet, Token,
    },
    error::{ParseError, ParseErrorKind},
    lexer::Lexer,
    schema::{QuerySchema, EXTENDED_MODEL},
    value::Number,
};

const ROOT: &str = "s-ramp";

/// How deep groups, predicates and function arguments may nest.
pub const MAX_NESTING: usize = 64;

/// Recursive-descent parser, one method per grammar production.
///
/// ```text
/// Query         := ('/' 's-ramp' ('/' model ('/' type)?)? | '//' type) Predicate? ('/' SubartifactSet)*
/// SubartifactSet:= Step Predicate?
/// Step          := FunctionCall | '@' QName | relationship
/// Predicate     := '[' Expr ']'
/// Expr          := AndExpr ('or' AndExpr)*
/// AndExpr       := EqualityExpr ('and' EqualityExpr)*
/// EqualityExpr  := '(' Expr ')'
///                | ('@' QName | FunctionCall) (op Literal)?
///                | relationship Predicate?
/// FunctionCall  := QName '(' (Argument (',' Argument)*)? ')'
/// Argument      := '.' | Literal | Expr
/// ```
pub struct Parser<'s> {
    tokens: Vec<Spanned>,
    index: usize,
    depth: usize,
    schema: &'s QuerySchema,
}

impl<'s> Parser<'s> {
    pub fn new(lexer: Lexer, schema: &'s QuerySchema) -> Result<Self, ParseError> {
        let tokens = lexer.tokenize()?;
        Ok(Parser {
            tokens,
            index: 0,
            depth: 0,
            schema,
        })
    }

    fn current(&self) -> &Spanned {
        // tokenize() always ends with Eof and advance() never moves past it
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    fn current_token(&self) -> &Token {
        &self.current().token
    }

    fn peek_token(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.index + offset).min(last)].token
    }

    fn position(&self) -> usize {
        self.current().position
    }

    fn advance(&mut self) {
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
        }
    }

    fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.current_token()) == std::mem::discriminant(token)
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.position())
    }

    fn expected(&self, expected: &str) -> ParseError {
        self.error(ParseErrorKind::Expected {
            expected: expected.to_string(),
            found: self.current_token().to_string(),
        })
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(self.expected(&expected.to_string()));
        }
        self.advance();
        Ok(())
    }

    /// Names may collide with the `and` / `or` keywords (`@or`).
    fn name_at(&self, offset: usize) -> Option<String> {
        match self.peek_token(offset) {
            Token::Name(name) => Some(name.clone()),
            Token::And => Some("and".to_string()),
            Token::Or => Some("or".to_string()),
            _ => None,
        }
    }

    fn expect_name(&mut self, what: &str) -> Result<String, ParseError> {
        match self.name_at(0) {
            Some(name) => {
                self.advance();
                Ok(name)
            }
            None => Err(self.expected(what)),
        }
    }

    /// Is a function call next (`name(` or `prefix:name(`)?
    fn at_function_call(&self) -> bool {
        self.name_at(0).is_some()
            && match self.peek_token(1) {
                Token::LParen => true,
                Token::Colon => self.name_at(2).is_some() && *self.peek_token(3) == Token::LParen,
                _ => false,
            }
    }

    pub fn parse(mut self) -> Result<Query, ParseError> {
        let query = self.parse_query()?;
        if !self.check(&Token::Eof) {
            return Err(self.error(ParseErrorKind::TrailingInput(
                self.current_token().to_string(),
            )));
        }
        Ok(query)
    }

    fn parse_query(&mut self) -> Result<Query, ParseError> {
        let artifact_set = self.parse_artifact_set()?;

        let mut subartifact_sets = vec![];
        while self.check(&Token::Slash) {
            self.advance();
            subartifact_sets.push(self.parse_subartifact_set()?);
        }

        Ok(Query {
            artifact_set,
            subartifact_sets,
        })
    }

    fn parse_artifact_set(&mut self) -> Result<ArtifactSet, ParseError> {
        let selector = match self.current_token() {
            Token::DoubleSlash => {
                self.advance();
                let artifact_type = match self.name_at(0) {
                    Some(name) => name,
                    None => return Err(self.error(ParseErrorKind::EmptyRoot)),
                };
                self.advance();
                let model = self
                    .schema
                    .model_of(&artifact_type)
                    .unwrap_or(EXTENDED_MODEL)
                    .to_string();
                Selector::Type {
                    model,
                    artifact_type,
                }
            }
            Token::Slash => {
                self.advance();
                let root = match self.name_at(0) {
                    Some(name) => name,
                    None => return Err(self.error(ParseErrorKind::EmptyRoot)),
                };
                if root != ROOT {
                    return Err(self.error(ParseErrorKind::InvalidRoot(root)));
                }
                self.advance();
                self.parse_location()?
            }
            _ => return Err(self.error(ParseErrorKind::RelativeQuery)),
        };

        let predicate = self.parse_optional_predicate()?;
        Ok(ArtifactSet {
            selector,
            predicate,
        })
    }

    /// `('/' model ('/' type)?)?` after the root. Only plain names count as
    /// model and type; anything else is left for the navigation steps.
    fn parse_location(&mut self) -> Result<Selector, ParseError> {
        if !self.is_location_step() {
            return Ok(Selector::All);
        }
        self.advance();
        let model = self.expect_name("an artifact model")?;

        if !self.is_location_step() {
            return Ok(Selector::Model(model));
        }
        self.advance();
        let artifact_type = self.expect_name("an artifact type")?;

        Ok(Selector::Type {
            model,
            artifact_type,
        })
    }

    fn is_location_step(&self) -> bool {
        self.check(&Token::Slash) && self.name_at(1).is_some() && !self.function_after_slash()
    }

    fn function_after_slash(&self) -> bool {
        matches!(self.peek_token(2), Token::LParen | Token::Colon)
    }

    fn parse_subartifact_set(&mut self) -> Result<SubartifactSet, ParseError> {
        let step = self.parse_step()?;
        let predicate = self.parse_optional_predicate()?;
        Ok(SubartifactSet { step, predicate })
    }

    fn parse_step(&mut self) -> Result<Step, ParseError> {
        if self.check(&Token::At) {
            return Ok(Step::Property(self.parse_forward_property_step()?));
        }
        if self.at_function_call() {
            return Ok(Step::Function(self.parse_function_call()?));
        }
        let relationship_type = self.expect_name("a relationship, property or function")?;
        Ok(Step::Relationship(RelationshipPath { relationship_type }))
    }

    fn parse_optional_predicate(&mut self) -> Result<Option<Predicate>, ParseError> {
        if self.check(&Token::LBracket) {
            Ok(Some(self.parse_predicate()?))
        } else {
            Ok(None)
        }
    }

    fn parse_predicate(&mut self) -> Result<Predicate, ParseError> {
        self.expect(Token::LBracket)?;
        let expr = self.parse_expr()?;
        if !self.check(&Token::RBracket) {
            return Err(self.error(ParseErrorKind::UnterminatedPredicate));
        }
        self.advance();
        Ok(Predicate { expr })
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error(ParseErrorKind::TooDeep(MAX_NESTING)));
        }
        self.depth += 1;
        let expr = self.parse_or();
        self.depth -= 1;
        expr
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;

        while self.check(&Token::Or) {
            self.advance();
            let right = self.parse_and()?;
            left = Expr::Or(OrExpr {
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        while self.check(&Token::And) {
            self.advance();
            let right = self.parse_equality()?;
            left = Expr::And(AndExpr {
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        if self.check(&Token::LParen) {
            self.advance();
            let inner = self.parse_expr()?;
            if !self.check(&Token::RParen) {
                return Err(self.error(ParseErrorKind::MissingParen));
            }
            self.advance();
            return Ok(Expr::Group(Box::new(inner)));
        }

        let left = if self.check(&Token::At) {
            Operand::Property(self.parse_forward_property_step()?)
        } else if self.at_function_call() {
            Operand::Function(self.parse_function_call()?)
        } else if let Some(relationship_type) = self.name_at(0) {
            self.advance();
            let predicate = self.parse_optional_predicate()?;
            return Ok(Expr::Subartifact(Box::new(SubartifactSet {
                step: Step::Relationship(RelationshipPath { relationship_type }),
                predicate,
            })));
        } else {
            return Err(self.expected("a property, function call or relationship"));
        };

        let comparison = match self.parse_comparison_op() {
            Some(op) => {
                let right = self.parse_literal()?;
                Some(Comparison { op, right })
            }
            None => None,
        };

        Ok(Expr::Equality(EqualityExpr { left, comparison }))
    }

    fn parse_comparison_op(&mut self) -> Option<ComparisonOp> {
        let op = match self.current_token() {
            Token::Eq => ComparisonOp::Equal,
            Token::NotEq => ComparisonOp::NotEqual,
            Token::Lt => ComparisonOp::LessThan,
            Token::LtEq => ComparisonOp::LessEqual,
            Token::Gt => ComparisonOp::GreaterThan,
            Token::GtEq => ComparisonOp::GreaterEqual,
            _ => return None,
        };
        self.advance();
        Some(op)
    }

    fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        match self.current_token().clone() {
            Token::String(s) => {
                self.advance();
                Ok(Literal::String(s))
            }
            Token::Number(text) => {
                let number = Number::parse_literal(&text)
                    .ok_or_else(|| self.error(ParseErrorKind::InvalidNumber(text)))?;
                self.advance();
                Ok(Literal::Number(number))
            }
            _ => Err(self.expected("a string or number literal")),
        }
    }

    fn parse_forward_property_step(&mut self) -> Result<ForwardPropertyStep, ParseError> {
        self.expect(Token::At)?;
        let name = self.parse_qname(ROOT)?;
        Ok(ForwardPropertyStep { name })
    }

    fn parse_function_call(&mut self) -> Result<FunctionCall, ParseError> {
        let schema = self.schema;
        let name = self.parse_qname(&schema.default_function_prefix)?;
        self.expect(Token::LParen)?;

        let mut arguments = vec![];
        if !self.check(&Token::RParen) {
            loop {
                arguments.push(self.parse_argument()?);
                if self.check(&Token::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        if !self.check(&Token::RParen) {
            return Err(self.error(ParseErrorKind::UnterminatedArgumentList));
        }
        self.advance();

        Ok(FunctionCall { name, arguments })
    }

    fn parse_argument(&mut self) -> Result<Argument, ParseError> {
        match self.current_token() {
            Token::Dot => {
                self.advance();
                Ok(Argument::ContextItem)
            }
            Token::String(_) | Token::Number(_) => Ok(Argument::Literal(self.parse_literal()?)),
            _ => Ok(Argument::Expr(self.parse_expr()?)),
        }
    }

    /// `prefix:local` or `local`. An unprefixed name takes the namespace of
    /// `default_prefix`; an undeclared prefix leaves the namespace empty.
    fn parse_qname(&mut self, default_prefix: &str) -> Result<QName, ParseError> {
        let first = self.expect_name("a name")?;

        if self.check(&Token::Colon) {
            self.advance();
            let local_part = self.expect_name("a local name after ':'")?;
            let namespace = self.schema.namespace_uri(&first);
            return Ok(QName::new(Some(&first), &local_part, namespace));
        }

        let namespace = self.schema.namespace_uri(default_prefix);
        Ok(QName::new(None, &first, namespace))
    }
}

/// Parse an already formatted query against `schema`.
pub fn parse_query(text: &str, schema: &QuerySchema) -> Result<Query, ParseError> {
    Parser::new(Lexer::new(text), schema)?.parse()
}
