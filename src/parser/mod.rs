pub mod expr_parser;

pub use expr_parser::{tokenize, ExprParser, Rule};
