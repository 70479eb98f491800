//! Token lines
//!
//! A token line has exactly four tab separated fields:
//! `address <TAB> token <TAB> pos <TAB> <fs ...>`.

use crate::ssf::error::ConvertError;
use crate::ssf::features::{parse_feature_block, Features};

const FIELD_COUNT: usize = 4;

/// A borrowed view of one token line split into its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLine<'a> {
    pub address: &'a str,
    pub token: &'a str,
    pub pos: &'a str,
    pub feature_block: &'a str,
}

impl<'a> TokenLine<'a> {
    pub fn parse(line: &'a str) -> Result<Self, ConvertError> {
        let fields: Vec<&str> = line.split('\t').collect();
        match fields[..] {
            [address, token, pos, feature_block] => Ok(TokenLine {
                address,
                token,
                pos,
                feature_block,
            }),
            _ => Err(ConvertError::format(format!(
                "expected {} tab-separated fields, found {}",
                FIELD_COUNT,
                fields.len()
            ))),
        }
    }

    pub fn features(&self) -> Result<Features, ConvertError> {
        parse_feature_block(self.feature_block)
    }
}

/// An input line kept with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_four_fields() {
        let line = TokenLine::parse("1\tword\tNN\t<fs af=x name=n1>").unwrap();
        assert_eq!(line.address, "1");
        assert_eq!(line.token, "word");
        assert_eq!(line.pos, "NN");
        assert_eq!(line.features().unwrap().get("name"), Some("n1"));
    }

    #[test]
    fn wrong_field_count_is_format_error() {
        let err = TokenLine::parse("1\tword\t<fs af=x>").unwrap_err();
        assert_eq!(
            err,
            ConvertError::Format("expected 4 tab-separated fields, found 3".to_string())
        );
        assert!(TokenLine::parse("1\tword\tNN\t<fs>\textra").is_err());
    }
}
