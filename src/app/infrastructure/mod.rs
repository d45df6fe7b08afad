//! Infrastructure layer - error types shared by every layer.

pub mod error;
