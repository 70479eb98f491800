//! # ssf-parser
//!
//! Conversion of SSF (Shakti Standard Format) corpora from the intra-chunk
//! representation, where every token carries its chunk membership in its
//! feature block, to the inter-chunk representation, where each chunk is an
//! explicit `((` … `))` block holding its member tokens.
//!
//! Data flows in one direction:
//!
//! ```text
//! raw lines ─▶ features ─▶ aggregation (SentenceState) ─▶ rendering ─▶ output lines
//!                              ▲                               │
//!                              └──────── conversion ───────────┘
//! ```
//!
//! The [conversion module](ssf::conversion) drives the pass over a document,
//! and the [loader](ssf::loader) wraps it for file based callers.

pub mod ssf;
