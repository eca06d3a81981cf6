//! Expose sigdoc's internal API for use in integration tests and the `xtask`
//! crate. It is not meant as a stable library interface.
pub mod cli;
pub mod config;
pub mod error;
pub mod utils;
