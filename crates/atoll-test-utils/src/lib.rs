//! Shared test fixtures for Atoll development.
//!
//! Named raw grids exercising the behaviors the engines must pin down,
//! plus a proptest strategy for arbitrary valid grids. Fixtures return
//! raw `Vec<Vec<u8>>` rows so validation tests can use them too.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
