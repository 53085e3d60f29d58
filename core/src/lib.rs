//! Core document model for GraphQL SDL merging.
//!
//! This crate wraps the [`graphql-parser`] schema AST with the small surface
//! the merge pipeline needs:
//!
//! - [`SchemaDocument`] — an owned, parsed SDL document: an ordered sequence
//!   of top-level definitions with parse and serialize entry points.
//! - [`concat_documents`] — order-preserving concatenation of documents. No
//!   deduplication, no conflict resolution: the merged definition count is
//!   always the sum of the inputs' counts.
//! - [`definition_kind`] / [`kind_counts`] — read-only classification of
//!   top-level definitions for summaries and logging.
//!
//! Definitions stay opaque to this crate: they are parsed, counted, moved,
//! and printed, never rewritten.
//!
//! # Example
//!
//! ```
//! use sdl_merge_core::{SchemaDocument, concat_documents};
//!
//! let first = SchemaDocument::parse("type Query { hello: String }").unwrap();
//! let second = SchemaDocument::parse("type Mutation { ping: Boolean }").unwrap();
//!
//! let merged = concat_documents(vec![first, second]).unwrap();
//! assert_eq!(merged.definition_count(), 2);
//! assert!(merged.to_sdl().contains("type Mutation"));
//! ```
//!
//! [`graphql-parser`]: https://docs.rs/graphql-parser

mod concat;
mod document;

pub use concat::concat_documents;
pub use document::{Definition, ParseError, SchemaDocument, definition_kind, kind_counts};
