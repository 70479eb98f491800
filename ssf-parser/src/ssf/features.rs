//! Feature block parsing
//!
//! A feature block is the `<fs key=value ...>` text in the last column of a
//! token line. Values are kept verbatim, quoting included; callers strip
//! quotes with [`unquote`] where a bare name is needed.

use crate::ssf::error::ConvertError;
use std::collections::HashMap;

const BLOCK_OPEN: &str = "<fs";
const BLOCK_CLOSE: char = '>';

/// Key/value attributes of one token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    attrs: HashMap<String, String>,
}

impl Features {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// The parsed `chunkType` attribute, if present
    pub fn chunk_type(&self) -> Result<Option<ChunkType>, ConvertError> {
        self.get("chunkType").map(ChunkType::parse).transpose()
    }

    /// The parsed `drel` attribute, if present
    pub fn drel(&self) -> Result<Option<Relation>, ConvertError> {
        self.get("drel").map(Relation::parse).transpose()
    }
}

/// `chunkType=<role>:<chunkName>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkType {
    pub role: String,
    /// Chunk name with quoting stripped
    pub chunk_name: String,
}

impl ChunkType {
    pub fn parse(value: &str) -> Result<Self, ConvertError> {
        let (role, name) = split_pair(value, "chunkType")?;
        Ok(ChunkType {
            role: role.to_string(),
            chunk_name: unquote(name).to_string(),
        })
    }

    /// Any role mentioning `head` marks a head token, `non-head` included.
    pub fn is_head(&self) -> bool {
        self.role.contains("head")
    }
}

/// `drel=<relation>:<parentTokenName>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub label: String,
    /// Parent token name with quoting stripped
    pub parent: String,
}

impl Relation {
    pub fn parse(value: &str) -> Result<Self, ConvertError> {
        let (label, parent) = split_pair(value, "drel")?;
        Ok(Relation {
            label: label.to_string(),
            parent: unquote(parent).to_string(),
        })
    }
}

fn split_pair<'a>(value: &'a str, key: &str) -> Result<(&'a str, &'a str), ConvertError> {
    let mut parts = value.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => Ok((left, right)),
        _ => Err(ConvertError::format(format!(
            "{}='{}' must have exactly one ':'",
            key, value
        ))),
    }
}

/// Strip surrounding single quotes
pub fn unquote(value: &str) -> &str {
    value.trim_matches('\'')
}

/// Parse the interior of a feature block into attributes
///
/// Whitespace separates pairs; each pair needs exactly one `=`. Later
/// duplicates overwrite earlier ones.
pub fn parse_features(text: &str) -> Result<Features, ConvertError> {
    let mut attrs = HashMap::new();
    for pair in text.split_whitespace() {
        let mut parts = pair.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                attrs.insert(key.to_string(), value.to_string());
            }
            _ => {
                return Err(ConvertError::format(format!(
                    "feature '{}' is not a key=value pair",
                    pair
                )))
            }
        }
    }
    Ok(Features { attrs })
}

/// Strip the `<fs` … `>` delimiters of a feature block
pub fn block_interior(block: &str) -> Result<&str, ConvertError> {
    block
        .strip_prefix(BLOCK_OPEN)
        .and_then(|rest| rest.strip_suffix(BLOCK_CLOSE))
        .ok_or_else(|| {
            ConvertError::format(format!("'{}' is not an <fs ...> feature block", block))
        })
}

/// Parse a whole `<fs ...>` feature block
pub fn parse_feature_block(block: &str) -> Result<Features, ConvertError> {
    parse_features(block_interior(block)?)
}
