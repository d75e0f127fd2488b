use std::fmt;

/// Binary operators understood by the notation converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Pow,
    Mul,
    Div,
    Add,
    Sub,
    Eq,
    Gt,
    Lt,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "^" => Some(Operator::Pow),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "=" => Some(Operator::Eq),
            ">" => Some(Operator::Gt),
            "<" => Some(Operator::Lt),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Pow => "^",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Lt => "<",
        }
    }

    // `(` sits below every operator at 1
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Pow => 4,
            Operator::Mul | Operator::Div => 3,
            Operator::Add | Operator::Sub | Operator::Eq | Operator::Gt | Operator::Lt => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    Operand(&'a str),
    Operator(Operator),
    LParen,
    RParen,
}

impl<'a> TokenKind<'a> {
    /// Precedence used while the token sits on the operator stack.
    pub fn precedence(&self) -> u8 {
        match self {
            TokenKind::Operator(op) => op.precedence(),
            TokenKind::LParen => 1,
            TokenKind::Operand(_) | TokenKind::RParen => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringSpan {
    pub pos_start: usize,
    pub pos_end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub span: StringSpan,
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Operand(name) => write!(f, "{}", name),
            TokenKind::Operator(op) => write!(f, "{}", op),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
        }
    }
}
