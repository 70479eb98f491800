//! Document conversion
//!
//! [`DocumentConverter`] makes one pass over the input lines:
//!
//! - blank lines are copied through
//! - a line containing the start marker is copied and opens a fresh [`SentenceState`]
//! - a line containing the end marker emits the rendered sentence, then itself
//! - any other line is ingested into the open state; outside a sentence it
//!   is still parsed and checked, then discarded
//!
//! Marker detection is a substring test, so `<Sentence id="3">` opens a
//! sentence with the default markers.

use crate::ssf::aggregation::{Ingested, SentenceState};
use crate::ssf::error::{ConversionError, SentenceRef};
use crate::ssf::rendering::render;
use crate::ssf::token::SourceLine;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

pub const DEFAULT_SENTENCE_START: &str = "<Sentence";
pub const DEFAULT_SENTENCE_END: &str = "</Sentence>";

static SENTENCE_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bid=["']?([^"'\s>]+)"#).unwrap());

/// Knobs for [`DocumentConverter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
    pub sentence_start: String,
    pub sentence_end: String,
    /// Trim surrounding whitespace from every input line
    pub trim_lines: bool,
    /// Warn about token lines dropped for lacking `chunkType`
    pub warn_dropped_tokens: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            sentence_start: DEFAULT_SENTENCE_START.to_string(),
            sentence_end: DEFAULT_SENTENCE_END.to_string(),
            trim_lines: true,
            warn_dropped_tokens: true,
        }
    }
}

/// Counters collected over one conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub sentences: usize,
    pub chunks: usize,
    pub tokens: usize,
    pub dropped_tokens: usize,
}

/// Output of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub lines: Vec<String>,
    pub stats: ConversionStats,
}

impl Conversion {
    /// Lines joined with `\n`, without a trailing newline
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Converts intra-chunk documents to inter-chunk form
#[derive(Debug, Clone, Default)]
pub struct DocumentConverter {
    options: ConverterOptions,
}

impl DocumentConverter {
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    /// Convert a whole document held in memory
    pub fn convert(&self, source: &str) -> Result<Conversion, ConversionError> {
        self.convert_lines(source.lines())
    }

    /// Convert a sequence of lines, numbered from 1
    pub fn convert_lines<I, S>(&self, lines: I) -> Result<Conversion, ConversionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut output = Vec::new();
        let mut stats = ConversionStats::default();
        let mut current: Option<SentenceState> = None;
        let mut ordinal = 0;

        for (index, raw) in lines.into_iter().enumerate() {
            let number = index + 1;
            let line = if self.options.trim_lines {
                raw.as_ref().trim()
            } else {
                raw.as_ref()
            };

            if line.trim().is_empty() {
                output.push(line.to_string());
            } else if line.contains(&self.options.sentence_start) {
                ordinal += 1;
                if let Some(unfinished) = current.take() {
                    warn!(
                        "line {}: sentence {} opened before {} ended; discarding its {} token(s)",
                        number,
                        ordinal,
                        unfinished.sentence(),
                        unfinished.chunks().token_count()
                    );
                }
                current = Some(SentenceState::new(SentenceRef::new(
                    ordinal,
                    sentence_id(line),
                )));
                output.push(line.to_string());
            } else if line.contains(&self.options.sentence_end) {
                match current.take() {
                    Some(state) => {
                        let sentence = state.sentence().clone();
                        let chunks = state.chunks().len();
                        let tokens = state.chunks().token_count();
                        stats.sentences += 1;
                        stats.chunks += chunks;
                        stats.tokens += tokens;
                        stats.dropped_tokens += state.dropped();
                        output.extend(render(state)?);
                        debug!("{}: rendered {} chunk(s), {} token(s)", sentence, chunks, tokens);
                    }
                    None => warn!("line {}: sentence end without an open sentence", number),
                }
                output.push(line.to_string());
            } else if let Some(state) = current.as_mut() {
                let outcome = state.ingest(SourceLine::new(number, line))?;
                if outcome == Ingested::Dropped && self.options.warn_dropped_tokens {
                    warn!(
                        "{}, line {}: token has no chunkType and is left out of the output",
                        state.sentence(),
                        number
                    );
                }
            } else {
                let mut stray = SentenceState::new(SentenceRef::outside());
                stray.ingest(SourceLine::new(number, line))?;
                warn!("line {}: token line outside any sentence is left out of the output", number);
            }
        }

        if let Some(unfinished) = current {
            warn!(
                "{} is never closed; discarding its {} token(s)",
                unfinished.sentence(),
                unfinished.chunks().token_count()
            );
        }

        Ok(Conversion {
            lines: output,
            stats,
        })
    }
}

/// Convert with default options, returning the joined output text
pub fn convert_str(source: &str) -> Result<String, ConversionError> {
    DocumentConverter::default()
        .convert(source)
        .map(|conversion| conversion.text())
}

fn sentence_id(marker_line: &str) -> Option<String> {
    SENTENCE_ID_REGEX
        .captures(marker_line)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}
