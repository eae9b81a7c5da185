//! # Command Implementations
//!
//! Each submodule handles one CLI command (organize, extract, info).

pub mod extract;
pub mod info;
pub mod organize;
