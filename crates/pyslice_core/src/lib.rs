#![forbid(unsafe_code)]
//! Provide shared, pure resolution and scanning semantics for Python-style grapheme subscripts.
//!
//! This crate is intentionally small and dependency-light. It contains the deterministic policy
//! that every consumer of the query surface must agree on:
//! - how signed logical indices map onto cluster positions ([`index`]),
//! - how the six range shapes resolve to half-open position pairs ([`range`]), and
//! - how pattern scans walk a sequence at cluster granularity ([`scan`]).
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, no logging. Its only dependency
//!   is `unicode-segmentation`, which owns segmentation policy (extended grapheme clusters).
//! - Everything here speaks precise [`errors::QueryError`] values. Flattening failures into
//!   absent results is consumer policy, not core policy.
//! - All helpers are total and deterministic: identical inputs resolve identically, and nothing
//!   persists between calls.

pub mod errors;
pub mod index;
pub mod range;
pub mod scan;
pub mod seq;
