//! Conversion of infix expressions into the postfix and prefix notations.
//!
//! Operators are parsed with a fixed precedence table (`^` > `*`,`/` >
//! `+`,`-`,`=`,`>`,`<`) and every operator, `^` included, associates to the
//! left, so `a^b^c` is read as `(a^b)^c`. Scripts generated from earlier
//! designs rely on that reading.

use std::iter;

use itertools::Itertools;
use log::debug;

use crate::ast::{Token, TokenKind};
use crate::error::{Result, SdeError};
use crate::parser::tokenize;

fn unbalanced(expr: &str, paren: &Token) -> SdeError {
    SdeError::UnbalancedParentheses {
        expr: expr.to_owned(),
        offset: paren.span.pos_start,
    }
}

/// Reorders the tokens of `expr` into postfix order (shunting-yard).
///
/// The result contains only operands and operators.
pub fn postfix_tokens(expr: &str) -> Result<Vec<Token<'_>>> {
    let mut stack: Vec<Token> = Vec::new();
    let mut postfix = Vec::new();

    for token in tokenize(expr)? {
        match token.kind {
            TokenKind::Operand(_) => postfix.push(token),
            TokenKind::LParen => stack.push(token),
            TokenKind::RParen => loop {
                match stack.pop() {
                    Some(Token {
                        kind: TokenKind::LParen,
                        ..
                    }) => break,
                    Some(top) => postfix.push(top),
                    None => return Err(unbalanced(expr, &token)),
                }
            },
            TokenKind::Operator(op) => {
                while stack
                    .last()
                    .is_some_and(|top| top.kind.precedence() >= op.precedence())
                {
                    postfix.extend(stack.pop());
                }
                stack.push(token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top.kind == TokenKind::LParen {
            return Err(unbalanced(expr, &top));
        }
        postfix.push(top);
    }
    Ok(postfix)
}

/// Converts an infix expression to space separated postfix notation.
///
/// ```
/// assert_eq!(sdegen::to_postfix("4*2+5*(2+1)/2").unwrap(), "4 2 * 5 2 1 + * 2 / +");
/// ```
pub fn to_postfix(expr: &str) -> Result<String> {
    Ok(postfix_tokens(expr)?.iter().join(" "))
}

/// Converts an infix expression to space separated prefix notation.
///
/// Operand structure is not validated: an operator missing an operand is
/// written with the operands it has, and dangling operands are appended in
/// order.
///
/// ```
/// assert_eq!(sdegen::to_prefix("4*2+5*(2+1)/2").unwrap(), "+ * 4 2 / * 5 + 2 1 2");
/// assert_eq!(sdegen::to_prefix("a = b").unwrap(), "= a b");
/// ```
pub fn to_prefix(expr: &str) -> Result<String> {
    let mut fragments: Vec<Vec<&str>> = Vec::new();
    for token in postfix_tokens(expr)? {
        match token.kind {
            TokenKind::Operand(name) => fragments.push(vec![name]),
            TokenKind::Operator(op) => {
                let right = fragments.pop();
                let left = fragments.pop();
                let fragment = iter::once(op.symbol())
                    .chain(left.into_iter().flatten())
                    .chain(right.into_iter().flatten())
                    .collect();
                fragments.push(fragment);
            }
            TokenKind::LParen | TokenKind::RParen => {
                unreachable!("parentheses never reach the postfix stream")
            }
        }
    }
    let prefix = fragments.into_iter().flatten().join(" ");
    debug!("prefix of `{}` is `{}`", expr, prefix);
    Ok(prefix)
}

fn infix_from<'a>(tokens: &mut impl Iterator<Item = Token<'a>>) -> Option<String> {
    let token = tokens.next()?;
    match token.kind {
        TokenKind::Operator(op) => {
            let left = infix_from(tokens).unwrap_or_default();
            let right = infix_from(tokens).unwrap_or_default();
            Some(format!("({} {} {})", left, op, right))
        }
        _ => Some(token.to_string()),
    }
}

/// Converts a prefix expression back to fully parenthesized infix notation.
///
/// ```
/// assert_eq!(sdegen::prefix_to_infix("+ * 4 2 / x 2").unwrap(), "((4 * 2) + (x / 2))");
/// ```
pub fn prefix_to_infix(prefix: &str) -> Result<String> {
    let mut tokens = tokenize(prefix)?.into_iter();
    let mut parts = Vec::new();
    while let Some(part) = infix_from(&mut tokens) {
        parts.push(part);
    }
    Ok(parts.join(" "))
}
