//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading SSF source
//! text from files or strings and running a [`DocumentConverter`] over it.
//! The CLI and the integration tests both go through it.
//!
//! # Example
//!
//! ```rust
//! use ssf_parser::ssf::loader::DocumentLoader;
//! use ssf_parser::ssf::DocumentConverter;
//!
//! let loader = DocumentLoader::from_path("corpus.ssf").unwrap();
//! let conversion = loader.convert(&DocumentConverter::default()).unwrap();
//! println!("{}", conversion.text());
//! ```

use crate::ssf::conversion::{Conversion, DocumentConverter};
use crate::ssf::error::ConversionError;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error that can occur when loading or converting documents
#[derive(Debug, Error)]
pub enum LoaderError {
    /// IO error when reading the source file
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Source text ready for conversion
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path, reading the whole file into memory
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Run a converter over the loaded source
    pub fn convert(&self, converter: &DocumentConverter) -> Result<Conversion, LoaderError> {
        Ok(converter.convert(&self.source)?)
    }
}
