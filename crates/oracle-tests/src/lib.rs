//! Oracle End-to-End Test Infrastructure
//!
//! Drives the `oracle` command implementations against a temporary working
//! directory and checks the files they leave behind.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p oracle-tests
//! ```

pub mod harness;

pub use harness::TestHarness;
