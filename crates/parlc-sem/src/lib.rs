//! parlc-sem - Semantic analysis for PArL.
//!
//! Walks the AST and verifies declaration/use constraints: every name is
//! declared before use, no name is declared twice in the same scope, and
//! only functions (or pad builtins) are callable. The walk builds the
//! [`SymbolTable`] consumed by downstream stages.
//!
//! Richer type rules (operand types, cast legality, return-type matching)
//! belong to a later phase.
//!
//! # Examples
//!
//! ```
//! use parlc_lex::tokenize;
//! use parlc_par::parse;
//! use parlc_sem::analyze;
//!
//! let program = parse(&tokenize("fun g(x: int) -> int { return x; }")).unwrap();
//! let table = analyze(&program).unwrap();
//! assert!(table.lookup_in(parlc_sem::SymbolTable::GLOBAL,
//!     parlc_util::Symbol::intern("g")).is_some());
//! ```

pub mod analysis;
mod edge_cases;
pub mod scope;

pub use analysis::SemanticAnalyzer;
pub use scope::{Scope, ScopeId, ScopeKind, SymbolInfo, SymbolKind, SymbolTable};

use parlc_par::ast::Program;
use thiserror::Error;

/// A semantic failure, naming the offending symbol and the rule broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// The name is already bound in the current scope.
    #[error("`{name}` is already declared in this scope")]
    DuplicateDeclaration { name: String },

    /// The name is not bound in any enclosing scope.
    #[error("`{name}` is not declared")]
    Undeclared { name: String },

    /// The name is bound, but not to a function.
    #[error("`{name}` is not a function")]
    NotAFunction { name: String },
}

/// Analyze a program, returning its symbol table or the first error.
///
/// Analysis is deterministic; each run builds a fresh table.
pub fn analyze(program: &Program) -> Result<SymbolTable, SemanticError> {
    SemanticAnalyzer::new().analyze(program)
}
