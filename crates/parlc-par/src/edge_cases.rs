//! Edge case tests for parlc-par.
