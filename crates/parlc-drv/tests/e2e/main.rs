//! End-to-end tests for the parlc driver.
//!
//! This target exercises the compiled `parlc` binary itself; the
//! library-level pipeline scenarios live in `pipeline_integration.rs`.

mod cli_tests;
