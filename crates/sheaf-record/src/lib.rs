//! Storage-row adapters: map persisted sheaf rows into engine values.
//!
//! This crate does no IO. Callers load facet, list, and role rows however
//! they like and hand them over; everything here is a pure reshaping:
//!
//! - [`decode_facet`] rebuilds an engine facet from a stored row,
//!   reconstructing frozen snapshots exactly as stored and rejecting
//!   unrecognized audience shapes outright (fail-closed: an unknown kind
//!   is an error, not `Everyone`).
//! - [`LoadedLists`] and [`viewer_context`] build a viewer's evaluation
//!   context from preloaded list rows and role assignments.
//! - [`DirectoryEnv`] backs the subset prover with loaded membership
//!   tables, reporting anything absent as unresolved. Build a fresh one
//!   per re-share check; staleness here is a safety property.

#![forbid(unsafe_code)]

mod decode;
mod env;
mod viewer;

pub use decode::{decode_facet, decode_facets, encode_facet, DecodeError};
pub use env::DirectoryEnv;
pub use viewer::{viewer_context, LoadedLists};
