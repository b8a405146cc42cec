//! parlc-util - Foundation types for the PArL front-end.
//!
//! This crate provides the utilities shared by every phase of the
//! front-end:
//!
//! - [`Symbol`] - interned strings for identifiers, lexemes, and names
//! - [`Span`] / [`FileId`] - source locations for diagnostics
//! - [`diagnostic`] - diagnostic messages, codes, and the collecting
//!   [`Handler`]
//! - [`IndexVec`] / [`Idx`] - vectors with typed indices
//!
//! None of these types know anything about PArL itself; they are the
//! substrate the lexer, parser, and semantic analyzer are built on.

pub mod diagnostic;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, Span};
pub use symbol::Symbol;

// Re-export commonly used hash collections
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
