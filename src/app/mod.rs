//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Language, Theme, EditorState, DisplayConfig, Settings, Messages)
//! - `controllers/` - Orchestration (preview rendering, export pipeline)
//! - `services/` - Business operations (syntax, format, text_ops)
//! - `infrastructure/` - Error type
//! - `state.rs` - Session coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::export::{
    Clipboard, CollaboratorError, ExportPipeline, ExportReceipt, ImageCapture, Rasterizer,
};
pub use controllers::preview::{RenderedPreview, render_preview};
pub use domain::{
    DisplayConfig, EditorState, ImageFormat, Language, Message, SnippetSettings, Theme, ThemeTokens,
};
pub use infrastructure::error::{AppError, Result};
pub use services::format::{FormatError, Formatter, ScriptFormatter};
pub use services::syntax::SyntaxHighlighter;
pub use state::{FormatJob, FormatOutcome, Notice, NoticeLevel, SnippetSession};
