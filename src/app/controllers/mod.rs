//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that turn domain state into output:
//! - Preview rendering
//! - Image export (file and clipboard)

pub mod export;
pub mod preview;
