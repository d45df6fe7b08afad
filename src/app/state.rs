use std::sync::Arc;

use super::controllers::export::{Clipboard, ExportPipeline, ExportReceipt, Rasterizer};
use super::controllers::preview::{RenderedPreview, render_preview};
use super::domain::{DisplayConfig, EditorState, Language, Message, SnippetSettings};
use super::infrastructure::error::Result;
use super::services::format::{FormatError, Formatter};
use super::services::syntax::SyntaxHighlighter;

/// What a prettify request did to the editor text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Text was replaced with the canonical form.
    Formatted,
    /// Text was already canonical.
    Unchanged,
    /// The formatter does not handle the active language; it was not called.
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Text and language captured when a prettify request starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatJob {
    language: Language,
    source: String,
}

impl FormatJob {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Format the snapshot. Borrows only the job, never the session.
    pub async fn run<F: Formatter>(
        &self,
        formatter: &F,
    ) -> std::result::Result<String, FormatError> {
        formatter.format(&self.source, self.language).await
    }
}

/// Transient message for the UI to show once (toast, status line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

/// One snippet-editing session.
///
/// Owns the editor text and display settings exclusively. Every accepted
/// mutation re-renders the preview before returning, so the mounted
/// preview always reflects the current state.
pub struct SnippetSession {
    editor: EditorState,
    display: DisplayConfig,
    highlighter: SyntaxHighlighter,
    preview: Option<Arc<RenderedPreview>>,
    notice: Option<Notice>,
}

impl SnippetSession {
    pub fn new(settings: &SnippetSettings) -> Self {
        Self::with_highlighter(settings, SyntaxHighlighter::new())
    }

    pub fn with_highlighter(settings: &SnippetSettings, highlighter: SyntaxHighlighter) -> Self {
        Self {
            editor: EditorState::new(settings.language),
            display: DisplayConfig::from_settings(settings),
            highlighter,
            preview: None,
            notice: None,
        }
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// First render. Until this is called there is nothing to export.
    pub fn mount(&mut self) -> Arc<RenderedPreview> {
        let preview = Arc::new(self.render());
        self.preview = Some(Arc::clone(&preview));
        preview
    }

    pub fn unmount(&mut self) {
        self.preview = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.preview.is_some()
    }

    pub fn mounted_preview(&self) -> Option<Arc<RenderedPreview>> {
        self.preview.clone()
    }

    /// Render the current state without mounting it.
    pub fn render(&self) -> RenderedPreview {
        render_preview(&self.editor, &self.display, &self.highlighter)
    }

    fn refresh(&mut self) {
        if self.preview.is_some() {
            self.preview = Some(Arc::new(self.render()));
        }
    }

    /// Handle one UI event. A rejected event leaves state and preview as
    /// they were.
    pub fn apply(&mut self, message: Message) -> Result<()> {
        let result = match message {
            Message::SetSourceText(text) => {
                self.editor.set_source_text(text);
                Ok(())
            }
            Message::SetLanguage(id) => self.editor.set_language_id(&id),
            Message::ClearSource => {
                self.editor.clear();
                Ok(())
            }
            Message::SetTheme(id) => self.display.set_theme_id(&id),
            Message::SetFontSize(px) => {
                self.display.set_font_size(px);
                Ok(())
            }
            Message::SetPadding(px) => {
                self.display.set_padding(px);
                Ok(())
            }
            Message::SetBorderRadius(px) => {
                self.display.set_border_radius(px);
                Ok(())
            }
            Message::SetLineNumbers(show) => {
                self.display.set_show_line_numbers(show);
                Ok(())
            }
            Message::SetWindowChrome(show) => {
                self.display.set_show_window_chrome(show);
                Ok(())
            }
            Message::SetExportFormat(format) => {
                self.display.set_export_format(format);
                Ok(())
            }
        };

        match result {
            Ok(()) => {
                self.refresh();
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected UI event: {}", e);
                Err(e)
            }
        }
    }

    pub fn can_prettify<F: Formatter>(&self, formatter: &F) -> bool {
        formatter.supports(self.editor.language())
    }

    /// Snapshot the text for formatting, or `None` when the formatter does
    /// not handle the active language.
    pub fn format_job<F: Formatter>(&self, formatter: &F) -> Option<FormatJob> {
        let language = self.editor.language();
        if !formatter.supports(language) {
            log::debug!("No formatter for {}, skipping", language.display_name());
            return None;
        }
        Some(FormatJob {
            language,
            source: self.editor.source_text().to_string(),
        })
    }

    /// Apply the result of a finished [`FormatJob`].
    ///
    /// Edits that landed while the job was in flight do not cancel it: a
    /// successful result replaces the text wholesale, overwriting them. A
    /// failure leaves the text as it is and queues an error notice.
    pub fn apply_format_result(
        &mut self,
        job: &FormatJob,
        result: std::result::Result<String, FormatError>,
    ) -> Result<FormatOutcome> {
        match result {
            Ok(formatted) if formatted == job.source => Ok(FormatOutcome::Unchanged),
            Ok(formatted) => {
                if self.editor.source_text() != job.source {
                    log::debug!("Formatted text replaces edits made while formatting");
                }
                self.editor.set_source_text(formatted);
                self.refresh();
                self.notice = Some(Notice::info("Code formatted"));
                Ok(FormatOutcome::Formatted)
            }
            Err(e) => {
                log::warn!("Formatting {} failed: {}", job.language.display_name(), e);
                self.notice = Some(Notice::error(format!("Could not format code: {}", e)));
                Err(e.into())
            }
        }
    }

    /// Snapshot, format and apply in one call.
    ///
    /// Holds the session for the whole await. Hosts that keep handling
    /// input while the formatter runs use [`Self::format_job`],
    /// [`FormatJob::run`] and [`Self::apply_format_result`] instead.
    pub async fn prettify<F: Formatter>(&mut self, formatter: &F) -> Result<FormatOutcome> {
        let Some(job) = self.format_job(formatter) else {
            return Ok(FormatOutcome::Unsupported);
        };
        let result = job.run(formatter).await;
        self.apply_format_result(&job, result)
    }

    /// Latest notice, cleared on read.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Export whatever preview is mounted right now in the session's
    /// export format.
    ///
    /// The preview and format are captured before this returns; the future
    /// does not borrow the session, so edits can keep landing while it runs.
    pub fn export_to_file<'p, R: Rasterizer, C: Clipboard>(
        &self,
        pipeline: &'p ExportPipeline<R, C>,
    ) -> impl Future<Output = Result<ExportReceipt>> + use<'p, R, C> {
        let preview = self.mounted_preview();
        let format = self.display.export_format();
        async move { pipeline.export_to_file(preview.as_deref(), format).await }
    }

    pub fn copy_to_clipboard<'p, R: Rasterizer, C: Clipboard>(
        &self,
        pipeline: &'p ExportPipeline<R, C>,
    ) -> impl Future<Output = Result<ExportReceipt>> + use<'p, R, C> {
        let preview = self.mounted_preview();
        let format = self.display.export_format();
        async move { pipeline.copy_to_clipboard(preview.as_deref(), format).await }
    }
}
