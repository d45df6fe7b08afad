//! Turn a code snippet into a styled card and export it as an image.
//!
//! The crate is the presentation core behind a snippet-to-image tool: a
//! UI shell feeds [`Message`]s into a [`SnippetSession`], shows the
//! [`RenderedPreview`] it keeps mounted, and hands its own rasterizer and
//! clipboard to an [`ExportPipeline`].

pub mod app;

pub use app::*;
