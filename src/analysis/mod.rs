//! Text analysis for search queries.
//!
//! The pipeline is deliberately small: whitespace tokenization, a naive
//! pt-BR singularizer, and a fixed domain synonym table. Product names are
//! matched by substring, so there is no need for a full token stream — each
//! query word just needs its normalized form and its synonym expansion.

pub mod normalizer;
pub mod query;
pub mod synonym;

pub use normalizer::{normalize_token, tokenize};
pub use query::{Query, QueryToken};
