use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while converting expressions or building a script.
///
/// All of them are fatal: the builder makes no attempt to produce a usable
/// partial script once one has been returned.
#[derive(Error, Debug)]
pub enum SdeError {
    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("unbalanced parenthesis at offset {offset} in expression `{expr}`")]
    UnbalancedParentheses { expr: String, offset: usize },

    /// A character that is neither part of an operand nor a supported operator.
    #[error("unknown operator `{found}` at offset {offset} in expression `{expr}`")]
    UnknownOperator {
        expr: String,
        found: String,
        offset: usize,
    },

    /// A region was assigned a doping type that was never defined.
    #[error("the doping type `{doping}` assigned to region `{region}` is not defined")]
    UndefinedDoping { region: String, doping: String },

    #[error("default boolean `{0}` not recognized, expected one of AB, ABA, BAB, ABiA, ABiB, XX")]
    InvalidOverlapMode(String),

    #[error("simulation type `{0}` not recognized, expected 2D or 3D")]
    InvalidDimension(String),

    #[error("doping polarity `{0}` not recognized, expected p or n")]
    InvalidPolarity(String),

    #[error("there is already a file at {}", .0.display())]
    OutputExists(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SdeError>;
