use super::display::ImageFormat;

/// Synchronous UI events. Each form control or editor keystroke sends one
/// of these; `SnippetSession::apply` handles them one at a time.
///
/// Ids arrive as strings because they come straight from `<select>` values.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Editor
    SetSourceText(String),
    SetLanguage(String),
    ClearSource,

    // Customize
    SetTheme(String),
    SetFontSize(i64),
    SetPadding(i64),
    SetBorderRadius(i64),
    SetLineNumbers(bool),
    SetWindowChrome(bool),

    // Preview toolbar
    SetExportFormat(ImageFormat),
}
