#![allow(clippy::empty_docs)]
#[derive(Parser)]
#[grammar = "parser/expr_grammar.pest"] // relative to src
pub struct ExprParser;

use pest::error::{Error, InputLocation};
use pest::iterators::Pair;
use pest::Parser;

use crate::ast::{Operator, StringSpan, Token, TokenKind};
use crate::error::{Result, SdeError};

//operand  = @{ (ASCII_ALPHANUMERIC | "_" | ".")+ }
//operator = @{ "^" | "*" | "/" | "+" | "-" | "=" | ">" | "<" }
fn parse_token(pair: Pair<'_, Rule>) -> Token<'_> {
    let span = StringSpan {
        pos_start: pair.as_span().start(),
        pos_end: pair.as_span().end(),
    };
    let kind = match pair.as_rule() {
        Rule::operand => TokenKind::Operand(pair.as_str()),
        Rule::operator => match Operator::from_symbol(pair.as_str()) {
            Some(op) => TokenKind::Operator(op),
            None => unreachable!("grammar only matches known operators, got {}", pair.as_str()),
        },
        Rule::lparen => TokenKind::LParen,
        Rule::rparen => TokenKind::RParen,
        _ => unreachable!("{:?}", pair.to_string()),
    };
    Token { kind, span }
}

fn unknown_operator(text: &str, err: Error<Rule>) -> SdeError {
    let offset = match err.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };
    let found = text
        .get(offset..)
        .and_then(|rest| rest.chars().next())
        .map(String::from)
        .unwrap_or_default();
    SdeError::UnknownOperator {
        expr: text.to_owned(),
        found,
        offset,
    }
}

/// Splits an infix expression into operands, operators and parentheses.
///
/// Operands are maximal runs of `[A-Za-z0-9_.]`, so `3.2e4` and `layer.width`
/// come out as single tokens. Whitespace is skipped; any other character is
/// reported as an unknown operator.
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>> {
    let pairs = ExprParser::parse(Rule::main, text).map_err(|err| unknown_operator(text, err))?;
    let tokens = pairs
        .flat_map(|main| main.into_inner())
        .filter(|pair| pair.as_rule() != Rule::EOI)
        .map(parse_token)
        .collect();
    Ok(tokens)
}
