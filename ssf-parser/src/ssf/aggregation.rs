//! Per-sentence chunk aggregation
//!
//! [`SentenceState`] is created when a sentence starts, fed one token line at
//! a time through [`SentenceState::ingest`], and handed by value to
//! [`render`](crate::ssf::rendering::render) when the sentence ends. Nothing
//! in it outlives the sentence.

use crate::ssf::error::{ConversionError, ConvertError, SentenceRef};
use crate::ssf::features::unquote;
use crate::ssf::token::{SourceLine, TokenLine};
use std::collections::HashMap;
use tracing::warn;

/// Token lines sharing one chunk name, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    name: String,
    lines: Vec<SourceLine>,
}

impl Chunk {
    fn new(name: String) -> Self {
        Self {
            name,
            lines: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Chunks keyed by name, iterated in order of first insertion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkMap {
    chunks: Vec<Chunk>,
    index: HashMap<String, usize>,
}

impl ChunkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the named chunk, creating the chunk at the end if new
    pub fn push(&mut self, name: &str, line: SourceLine) {
        let position = match self.index.get(name) {
            Some(&position) => position,
            None => {
                self.chunks.push(Chunk::new(name.to_string()));
                self.index.insert(name.to_string(), self.chunks.len() - 1);
                self.chunks.len() - 1
            }
        };
        self.chunks[position].lines.push(line);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Total number of token lines across all chunks
    pub fn token_count(&self) -> usize {
        self.chunks.iter().map(Chunk::len).sum()
    }
}

/// What [`SentenceState::ingest`] did with a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingested {
    /// Appended to the named chunk
    Chunk(String),
    /// No `chunkType`; the line is not part of any chunk
    Dropped,
}

/// Aggregation state of one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceState {
    sentence: SentenceRef,
    chunks: ChunkMap,
    names: HashMap<String, String>,
    dropped: usize,
}

impl SentenceState {
    pub fn new(sentence: SentenceRef) -> Self {
        Self {
            sentence,
            chunks: ChunkMap::new(),
            names: HashMap::new(),
            dropped: 0,
        }
    }

    pub fn sentence(&self) -> &SentenceRef {
        &self.sentence
    }

    pub fn chunks(&self) -> &ChunkMap {
        &self.chunks
    }

    /// Chunk id registered for a token name
    pub fn chunk_for_name(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    /// Lines dropped so far for lacking `chunkType`
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Add one token line to the sentence
    pub fn ingest(&mut self, line: SourceLine) -> Result<Ingested, ConversionError> {
        let number = line.number;
        self.ingest_line(line)
            .map_err(|err| err.at(&self.sentence, number))
    }

    fn ingest_line(&mut self, line: SourceLine) -> Result<Ingested, ConvertError> {
        let features = TokenLine::parse(&line.text)?.features()?;
        let Some(chunk_type) = features.chunk_type()? else {
            self.dropped += 1;
            return Ok(Ingested::Dropped);
        };

        let chunk_name = chunk_type.chunk_name;
        if let Some(chunk_id) = features.get("chunkId").map(unquote) {
            if chunk_id != chunk_name {
                return Err(ConvertError::Consistency {
                    chunk_name,
                    chunk_id: chunk_id.to_string(),
                });
            }
            match features.get("name").map(unquote) {
                Some(name) => {
                    self.names.insert(name.to_string(), chunk_id.to_string());
                }
                None => warn!(
                    "{}, line {}: token in chunk '{}' has chunkId but no name; nothing can depend on it",
                    self.sentence, line.number, chunk_id
                ),
            }
        }

        self.chunks.push(&chunk_name, line);
        Ok(Ingested::Chunk(chunk_name))
    }
}
