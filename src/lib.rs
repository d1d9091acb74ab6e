pub mod ast;
pub mod cli;
pub mod error;
pub mod lexer;
pub mod params;
pub mod parser;
pub mod query;
pub mod schema;
pub mod serialize;
pub mod translate;
pub mod value;
pub mod visitor;

pub use ast::{Query, Token};
pub use error::{ParseError, ParseErrorKind, SchemaError, TranslationError, UserError};
pub use lexer::{tokenize, Lexer};
pub use params::{format_query, ReplacementParam};
pub use parser::{parse_query, Parser};
pub use query::{ArtifactQuery, ExecuteError, QueryBackend};
pub use schema::{PropertyKind, QuerySchema};
pub use serialize::{to_xpath, XPathSerializer};
pub use translate::{
    to_jcr_sql2, ClassificationResolver, IdentityClassifications, JcrSql2Translator, OrderBy,
};
pub use value::Number;
pub use visitor::Visitor;
