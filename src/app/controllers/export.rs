use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::preview::RenderedPreview;
use crate::app::domain::ImageFormat;
use crate::app::infrastructure::error::{AppError, Result};

/// Exported images are named `snippet.png` / `snippet.jpeg`.
pub const EXPORT_BASE_NAME: &str = "snippet";

/// Error reported by a host collaborator (rasterizer or clipboard).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Turns a rendered preview into encoded image bytes.
pub trait Rasterizer {
    fn capture(
        &self,
        preview: &RenderedPreview,
        format: ImageFormat,
    ) -> impl Future<Output = std::result::Result<Vec<u8>, CollaboratorError>>;
}

/// Host clipboard that accepts a single image item.
pub trait Clipboard {
    fn write_image(
        &self,
        mime_type: &str,
        bytes: &[u8],
    ) -> impl Future<Output = std::result::Result<(), CollaboratorError>>;
}

/// Encoded image bytes of one capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCapture {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl ImageCapture {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// `data:image/png;base64,...`
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), STANDARD.encode(&self.bytes))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// Written file, or `None` for a clipboard copy.
    pub path: Option<PathBuf>,
    pub format: ImageFormat,
    pub byte_count: usize,
}

/// Captures the mounted preview and delivers it to a file or the clipboard.
///
/// Never touches editor or display state: it only sees the preview it is
/// handed, so exporting an unchanged preview twice yields the same request
/// to the rasterizer both times.
pub struct ExportPipeline<R, C> {
    rasterizer: R,
    clipboard: C,
    export_dir: PathBuf,
}

impl<R: Rasterizer, C: Clipboard> ExportPipeline<R, C> {
    pub fn new(rasterizer: R, clipboard: C, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            rasterizer,
            clipboard,
            export_dir: export_dir.into(),
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Target path for an export in `format`.
    pub fn file_path(&self, format: ImageFormat) -> PathBuf {
        self.export_dir
            .join(format!("{}.{}", EXPORT_BASE_NAME, format.extension()))
    }

    /// Rasterize the preview. Fails with `Capture` when nothing is mounted,
    /// the rasterizer rejects, or it returns no bytes.
    pub async fn capture(
        &self,
        preview: Option<&RenderedPreview>,
        format: ImageFormat,
    ) -> Result<ImageCapture> {
        let Some(preview) = preview else {
            log::warn!("Export requested before the preview was mounted");
            return Err(AppError::Capture("no preview is mounted".to_string()));
        };
        log::debug!(
            "Capturing preview {} as {}",
            preview.fingerprint(),
            format.extension()
        );

        let bytes = self.rasterizer.capture(preview, format).await.map_err(|e| {
            log::warn!("Rasterizer rejected capture: {}", e);
            AppError::Capture(e.to_string())
        })?;
        if bytes.is_empty() {
            log::warn!("Rasterizer returned an empty image");
            return Err(AppError::Capture("rasterizer returned no data".to_string()));
        }
        Ok(ImageCapture { format, bytes })
    }

    pub async fn export_to_file(
        &self,
        preview: Option<&RenderedPreview>,
        format: ImageFormat,
    ) -> Result<ExportReceipt> {
        let capture = self.capture(preview, format).await?;
        let path = self.file_path(format);

        fs::create_dir_all(&self.export_dir)?;
        if let Err(e) = fs::write(&path, &capture.bytes) {
            log::error!("Failed to write {}: {}", path.display(), e);
            return Err(e.into());
        }
        log::info!(
            "Exported {} ({} bytes)",
            path.display(),
            capture.bytes.len()
        );

        Ok(ExportReceipt {
            path: Some(path),
            format,
            byte_count: capture.bytes.len(),
        })
    }

    pub async fn copy_to_clipboard(
        &self,
        preview: Option<&RenderedPreview>,
        format: ImageFormat,
    ) -> Result<ExportReceipt> {
        let capture = self.capture(preview, format).await?;

        self.clipboard
            .write_image(capture.mime_type(), &capture.bytes)
            .await
            .map_err(|e| {
                log::warn!("Clipboard write denied: {}", e);
                AppError::ClipboardUnavailable(e.to_string())
            })?;
        log::info!(
            "Copied {} image to clipboard ({} bytes)",
            capture.mime_type(),
            capture.bytes.len()
        );

        Ok(ExportReceipt {
            path: None,
            format,
            byte_count: capture.bytes.len(),
        })
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::RefCell;

    use super::*;

    /// Encodes the preview fingerprint so captures are deterministic.
    #[derive(Default)]
    pub struct FakeRasterizer {
        pub reject: bool,
        pub empty: bool,
        pub captured: RefCell<Vec<String>>,
    }

    impl Rasterizer for FakeRasterizer {
        async fn capture(
            &self,
            preview: &RenderedPreview,
            format: ImageFormat,
        ) -> std::result::Result<Vec<u8>, CollaboratorError> {
            if self.reject {
                return Err("canvas is tainted by a cross-origin image".into());
            }
            let fingerprint = preview.fingerprint();
            self.captured.borrow_mut().push(fingerprint.clone());
            if self.empty {
                return Ok(Vec::new());
            }
            Ok(format!("{}:{}", format.extension(), fingerprint).into_bytes())
        }
    }

    #[derive(Default)]
    pub struct FakeClipboard {
        pub deny: bool,
        pub items: RefCell<Vec<(String, Vec<u8>)>>,
    }

    impl Clipboard for FakeClipboard {
        async fn write_image(
            &self,
            mime_type: &str,
            bytes: &[u8],
        ) -> std::result::Result<(), CollaboratorError> {
            if self.deny {
                return Err("clipboard-write permission denied".into());
            }
            self.items
                .borrow_mut()
                .push((mime_type.to_string(), bytes.to_vec()));
            Ok(())
        }
    }
}
