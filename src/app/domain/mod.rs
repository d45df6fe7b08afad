//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Language and theme catalogs
//! - Editor state and display configuration
//! - Session settings
//! - Message types for the event system

pub mod display;
pub mod editor;
pub mod language;
pub mod messages;
pub mod settings;
pub mod theme;

pub use display::{DisplayConfig, ImageFormat};
pub use editor::EditorState;
pub use language::Language;
pub use messages::Message;
pub use settings::SnippetSettings;
pub use theme::{Theme, ThemeTokens};
