//! Main module for ssf library functionality

pub mod aggregation;
pub mod conversion;
pub mod error;
pub mod features;
pub mod loader;
pub mod rendering;
pub mod token;

pub use conversion::{convert_str, Conversion, ConversionStats, ConverterOptions, DocumentConverter};
pub use error::{ConversionError, ConvertError, SentenceRef};
