//! String interner implementation using DashMap for concurrent access.
//!
//! Two lock-free maps back the interner: a forward map from string to
//! index and a reverse map from index to string. Strings are leaked on
//! first insertion to get `'static` lifetimes; on the rare race where two
//! threads intern the same new spelling simultaneously, one allocation is
//! wasted but both threads observe the same symbol.

use ahash::RandomState;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::LazyLock;

use super::Symbol;

/// All spellings interned at startup, in index order.
///
/// The constants in [`super::kw`] and [`super::builtin`] index into this
/// list; the two must stay in lockstep.
pub(super) const KNOWN_SYMBOLS: &[&str] = &[
    // Keywords
    "fun", "let", "return", "if", "else", "while", "for", "true", "false", "as", "int", "float",
    "bool", "colour", "and", "or", "not",
    // Pad builtins
    "__width", "__height", "__read", "__random_int", "__delay", "__write", "__write_box",
    "__print",
];

/// First index handed out to dynamically interned strings.
///
/// Leaves headroom above the known range so new known symbols can be added
/// without renumbering.
const RESERVED_SYMBOLS_END: u32 = 64;

/// Global string table instance.
///
/// Initialized on first use; known symbols are pre-interned so they have
/// stable, predictable indices.
pub static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(|| {
    let table = StringTable::new();
    table.initialize_known_symbols();
    table
});

/// Thread-safe string table.
pub struct StringTable {
    /// Forward map: spelling to symbol index.
    forward: DashMap<&'static str, u32, RandomState>,

    /// Reverse map: symbol index to spelling.
    reverse: DashMap<u32, &'static str, RandomState>,

    /// Counter for the next dynamic index.
    next_index: AtomicU32,

    /// Number of lookups that found an existing entry.
    hits: AtomicUsize,

    /// Number of lookups that allocated a new entry.
    misses: AtomicUsize,
}

impl StringTable {
    fn new() -> Self {
        Self {
            forward: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            reverse: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            next_index: AtomicU32::new(RESERVED_SYMBOLS_END),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Pre-intern every known symbol at its fixed index.
    fn initialize_known_symbols(&self) {
        for (idx, spelling) in KNOWN_SYMBOLS.iter().copied().enumerate() {
            let idx = idx as u32;
            self.forward.insert(spelling, idx);
            self.reverse.insert(idx, spelling);
        }
    }

    /// Intern a string, returning its symbol.
    ///
    /// # Performance
    ///
    /// O(1) hash lookup on a hit; O(1) insert plus one heap allocation on
    /// a miss.
    pub fn intern(&self, string: &str) -> Symbol {
        if let Some(entry) = self.forward.get(string) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Symbol::from_index(*entry.value());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);

        let interned: &'static str = Box::leak(string.to_string().into_boxed_str());
        match self.forward.entry(interned) {
            dashmap::mapref::entry::Entry::Occupied(entry) => {
                // Lost a race with another thread; its entry wins.
                Symbol::from_index(*entry.get())
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                let idx = self.next_index.fetch_add(1, Ordering::Relaxed);
                entry.insert(idx);
                self.reverse.insert(idx, interned);
                Symbol::from_index(idx)
            }
        }
    }

    /// Get the spelling of a symbol.
    ///
    /// Returns the empty string for an index that was never handed out.
    pub fn get(&self, symbol: Symbol) -> &'static str {
        self.reverse
            .get(&symbol.as_u32())
            .map(|entry| *entry.value())
            .unwrap_or("")
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True if nothing has been interned (never the case after startup).
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Hit/miss counters for profiling.
    pub fn stats(&self) -> (usize, usize) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
