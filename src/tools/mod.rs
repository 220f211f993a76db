//! The tools module provides helper functions for rankzip.
//!
//! The tools are:
//! - cli: Command line interface for rankzip.
//!
pub mod cli;
