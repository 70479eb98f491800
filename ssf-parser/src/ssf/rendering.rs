//! Inter-chunk rendering of one sentence
//!
//! Each chunk becomes a block:
//!
//! ```text
//! i   ((  TAG  <fs name='CHUNK' drel=REL:PARENT'>
//! i.1 tok POS  <fs af=... name=...>
//! ...
//!     ))
//! ```
//!
//! The relation descriptor on the open line comes from the chunk's head
//! token. Every head-marked token appends its own descriptor, so a chunk
//! with two heads carries two, and a chunk with none carries only the tag.

use crate::ssf::aggregation::{Chunk, SentenceState};
use crate::ssf::error::{ConversionError, ConvertError};
use crate::ssf::features::Features;
use crate::ssf::token::TokenLine;
use once_cell::sync::Lazy;
use regex::Regex;

/// Uppercase/underscore run followed by digits, e.g. `NP` in `NP12`
static CHUNK_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z_]+)\d+").unwrap());

/// Tag of a chunk name: the letter run before the numeric suffix, or the
/// whole name when there is none
pub fn chunk_tag(chunk_name: &str) -> &str {
    CHUNK_TAG_REGEX
        .captures(chunk_name)
        .and_then(|captures| captures.get(1))
        .map_or(chunk_name, |tag| tag.as_str())
}

/// Render a finished sentence into its inter-chunk lines
///
/// Markers are not included; the caller wraps the result.
pub fn render(state: SentenceState) -> Result<Vec<String>, ConversionError> {
    let chunks = state.chunks();
    let mut lines = Vec::with_capacity(chunks.token_count() + 2 * chunks.len());

    for (chunk_index, chunk) in chunks.iter().enumerate() {
        render_chunk(chunk_index + 1, chunk, &state, &mut lines)
            .map_err(|(err, line)| err.at(state.sentence(), line))?;
    }

    Ok(lines)
}

fn render_chunk(
    index: usize,
    chunk: &Chunk,
    state: &SentenceState,
    out: &mut Vec<String>,
) -> Result<(), (ConvertError, usize)> {
    let mut open = format!("{}\t((\t{}", index, chunk_tag(chunk.name()));
    let mut token_lines = Vec::with_capacity(chunk.len());

    for (token_index, source) in chunk.lines().iter().enumerate() {
        let located = |err: ConvertError| (err, source.number);
        let fields = TokenLine::parse(&source.text).map_err(located)?;
        let features = fields.features().map_err(located)?;

        let is_head = features
            .chunk_type()
            .map_err(located)?
            .is_some_and(|chunk_type| chunk_type.is_head());
        if is_head {
            open.push_str(&head_descriptor(chunk.name(), &features, state).map_err(located)?);
        }

        token_lines.push(format!(
            "{}.{}\t{}\t{}\t{}",
            index,
            token_index + 1,
            fields.token,
            fields.pos,
            reduced_features(chunk.name(), &fields, &features).map_err(located)?
        ));
    }

    out.push(open);
    out.extend(token_lines);
    out.push("\t))".to_string());
    Ok(())
}

/// `<TAB><fs name='CHUNK'>` or, for a head with `drel`,
/// `<TAB><fs name='CHUNK' drel=REL:PARENT_CHUNK'>`
fn head_descriptor(
    chunk_name: &str,
    features: &Features,
    state: &SentenceState,
) -> Result<String, ConvertError> {
    match features.drel()? {
        Some(relation) => {
            let parent_chunk = state
                .chunk_for_name(&relation.parent)
                .ok_or_else(|| ConvertError::Lookup {
                    parent: relation.parent.clone(),
                    chunk: chunk_name.to_string(),
                })?;
            Ok(format!(
                "\t<fs name='{}' drel={}:{}'>",
                chunk_name, relation.label, parent_chunk
            ))
        }
        None => Ok(format!("\t<fs name='{}'>", chunk_name)),
    }
}

/// Token feature block cut down to `af` and `name`, in that order
fn reduced_features(
    chunk_name: &str,
    fields: &TokenLine<'_>,
    features: &Features,
) -> Result<String, ConvertError> {
    let required = |attribute: &'static str| {
        features
            .get(attribute)
            .ok_or_else(|| ConvertError::MissingAttribute {
                attribute,
                token: fields.token.to_string(),
                chunk: chunk_name.to_string(),
            })
    };
    Ok(format!("<fs af={} name={}>", required("af")?, required("name")?))
}
