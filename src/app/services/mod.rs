//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Syntax highlighting
//! - Source formatting
//! - Text operations

pub mod format;
pub mod syntax;
pub mod text_ops;
