//! Error types for SSF conversion
//!
//! Every error here is fatal: a conversion either succeeds for the whole
//! document or produces nothing. [`ConvertError`] names what went wrong,
//! [`ConversionError`] adds where it went wrong.

use std::fmt;
use thiserror::Error;

/// What went wrong while converting a token or a sentence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Wrong field count, malformed `key=value` pair or malformed compound value
    #[error("format error: {0}")]
    Format(String),

    /// A token's `chunkId` disagrees with the chunk name in its `chunkType`
    #[error("consistency error: chunkId '{chunk_id}' does not match chunk name '{chunk_name}'")]
    Consistency { chunk_name: String, chunk_id: String },

    /// A token being rendered lacks `af` or `name`
    #[error("missing attribute '{attribute}' on token '{token}' in chunk '{chunk}'")]
    MissingAttribute {
        attribute: &'static str,
        token: String,
        chunk: String,
    },

    /// A `drel` parent name that no token of the sentence registered
    #[error("lookup error: drel parent '{parent}' of chunk '{chunk}' is not a registered token name")]
    Lookup { parent: String, chunk: String },
}

impl ConvertError {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        ConvertError::Format(message.into())
    }

    /// Attach the sentence and input line the error was raised on
    pub fn at(self, sentence: &SentenceRef, line: usize) -> ConversionError {
        ConversionError {
            sentence: sentence.clone(),
            line,
            kind: self,
        }
    }
}

/// Identifies a sentence in diagnostics
///
/// `ordinal` counts start markers from 1; `id` is the `id` attribute of the
/// start marker when it has one. Ordinal 0 stands for lines outside any
/// sentence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SentenceRef {
    pub ordinal: usize,
    pub id: Option<String>,
}

impl SentenceRef {
    pub fn new(ordinal: usize, id: Option<String>) -> Self {
        Self { ordinal, id }
    }

    pub fn outside() -> Self {
        Self::default()
    }

    pub fn is_outside(&self) -> bool {
        self.ordinal == 0
    }
}

impl fmt::Display for SentenceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_outside() {
            return write!(f, "outside any sentence");
        }
        match &self.id {
            Some(id) => write!(f, "sentence {} (id={})", self.ordinal, id),
            None => write!(f, "sentence {}", self.ordinal),
        }
    }
}

/// A [`ConvertError`] located in the input document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{sentence}, line {line}: {kind}")]
pub struct ConversionError {
    pub sentence: SentenceRef,
    /// 1-based line number in the input
    pub line: usize,
    #[source]
    pub kind: ConvertError,
}
