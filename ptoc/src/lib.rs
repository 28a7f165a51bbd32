//! Expose ptoc's internal API for use in integration tests. We do not
//! recommend using this API in production code; depend on `ptoc-outline`
//! instead.
pub mod cli;
pub mod config;
pub mod process;
