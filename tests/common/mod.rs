//! Common test utilities and helpers
//!
//! This module provides shared functionality used across integration tests:
//! - Binary path resolution (via `get_sitecfg_binary`)
//! - Test fixture utilities (via `helpers`)

pub(crate) mod helpers;

// Re-export get_sitecfg_binary for convenient access
pub(crate) use helpers::get_sitecfg_binary;
