//! The scope tree backing the symbol table.
//!
//! Scopes form a tree of insertion-ordered binding maps with parent
//! links. Exiting a scope moves the cursor back to the parent but never
//! deletes the scope, so the finished table still exposes every scope the
//! analysis built. Lookup walks from the current scope outward; the
//! innermost binding wins.

use crate::SemanticError;
use indexmap::IndexMap;
use parlc_par::TypeTag;
use parlc_util::{define_idx, IndexVec};
use parlc_util::Symbol;

define_idx!(
    /// Identifies a scope within one [`SymbolTable`].
    ScopeId
);

/// Which construct opened a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// The outermost scope; always present.
    Global,
    /// A function body, parameters included.
    Function,
    /// A nested block statement.
    Block,
}

/// What a name is bound to.
///
/// Parameters are recorded as `Variable` bindings carrying the parameter
/// type; there is no separate parameter kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Variable,
}

/// A binding: its kind plus a type tag.
///
/// For functions the type is the declared return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo {
    pub kind: SymbolKind,
    pub ty: TypeTag,
}

impl SymbolInfo {
    pub fn new(kind: SymbolKind, ty: TypeTag) -> Self {
        Self { kind, ty }
    }
}

/// A single scope: bindings in insertion order plus a parent link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    bindings: IndexMap<Symbol, SymbolInfo>,
    parent: Option<ScopeId>,
    kind: ScopeKind,
}

impl Scope {
    fn new(kind: ScopeKind, parent: Option<ScopeId>) -> Self {
        Self {
            bindings: IndexMap::new(),
            parent,
            kind,
        }
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Look up a name in this scope only.
    pub fn get(&self, name: Symbol) -> Option<&SymbolInfo> {
        self.bindings.get(&name)
    }

    /// Bindings in insertion order.
    pub fn bindings(&self) -> impl Iterator<Item = (Symbol, &SymbolInfo)> {
        self.bindings.iter().map(|(name, info)| (*name, info))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The symbol table: a tree of scopes with a cursor at the current one.
///
/// # Invariants
///
/// - The global scope exists for the table's whole lifetime.
/// - Names are unique within a single scope.
/// - Lookup walks scopes inner to outer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    scopes: IndexVec<ScopeId, Scope>,
    current: ScopeId,
}

impl SymbolTable {
    /// The global scope's id.
    pub const GLOBAL: ScopeId = ScopeId(0);

    /// Create a table holding only the global scope.
    pub fn new() -> Self {
        let mut scopes = IndexVec::new();
        let global = scopes.push(Scope::new(ScopeKind::Global, None));
        Self {
            scopes,
            current: global,
        }
    }

    /// Open a child of the current scope and move into it.
    pub fn enter_scope(&mut self, kind: ScopeKind) -> ScopeId {
        let child = self.scopes.push(Scope::new(kind, Some(self.current)));
        self.current = child;
        child
    }

    /// Move back to the parent scope. The scope itself is retained.
    pub fn exit_scope(&mut self) {
        if let Some(parent) = self.scopes[self.current].parent {
            self.current = parent;
        }
    }

    /// The scope the cursor is in.
    pub fn current_scope(&self) -> ScopeId {
        self.current
    }

    /// Access a scope by id.
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id]
    }

    /// All scopes in creation order.
    pub fn scopes(&self) -> impl Iterator<Item = (ScopeId, &Scope)> {
        self.scopes.iter_enumerated()
    }

    /// Bind a name in the current scope.
    ///
    /// Fails if the name is already bound there; bindings in outer scopes
    /// do not clash.
    pub fn declare(&mut self, name: Symbol, info: SymbolInfo) -> Result<(), SemanticError> {
        let scope = &mut self.scopes[self.current];
        if scope.bindings.contains_key(&name) {
            return Err(SemanticError::DuplicateDeclaration {
                name: name.as_str().to_string(),
            });
        }
        scope.bindings.insert(name, info);
        Ok(())
    }

    /// Resolve a name from the current scope outward.
    pub fn lookup(&self, name: Symbol) -> Option<&SymbolInfo> {
        let mut id = self.current;
        loop {
            let scope = &self.scopes[id];
            if let Some(info) = scope.bindings.get(&name) {
                return Some(info);
            }
            id = scope.parent?;
        }
    }

    /// Resolve a name within one specific scope.
    pub fn lookup_in(&self, id: ScopeId, name: Symbol) -> Option<&SymbolInfo> {
        self.scopes[id].get(name)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
