//! PNG export orchestration.
//!
//! The browser-specific pieces (DOM rasterization and triggering a download)
//! are injected through [`Rasterizer`] and [`DownloadSink`]. The controller
//! owns the busy state, the filename and the error classification.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{error, info, warn};
use shared::MoCardConfig;
use thiserror::Error;

pub const READY_LABEL: &str = "下载 PNG";
pub const EXPORTING_LABEL: &str = "导出中...";
pub const DISMISS_LABEL: &str = "关闭错误提示";

const CROSS_ORIGIN_MESSAGE: &str = "导出失败：卡片中包含外部图片，请移除后重试";
const GENERIC_MESSAGE: &str = "导出失败，请重试或尝试简化卡片内容";

/// Options passed to the rasterizer
#[derive(Debug, Clone, PartialEq)]
pub struct RasterOptions {
    pub pixel_ratio: f64,
    pub quality: f64,
    pub cache_bust: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            pixel_ratio: 2.0,
            quality: 1.0,
            cache_bust: true,
        }
    }
}

impl RasterOptions {
    pub fn from_config(config: &MoCardConfig) -> Self {
        Self {
            pixel_ratio: config.pixel_ratio,
            ..Self::default()
        }
    }
}

/// Raw failure reported by a rasterizer
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct RasterError {
    pub message: String,
}

impl RasterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turns the rendered card into a PNG data URL
#[async_trait(?Send)]
pub trait Rasterizer {
    async fn rasterize(&self, options: &RasterOptions) -> Result<String, RasterError>;
}

/// Delivers an encoded image to the user
pub trait DownloadSink {
    fn download(&self, filename: &str, data_url: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("an export is already in progress")]
    Busy,
    #[error("rasterization blocked by cross-origin content: {0}")]
    CrossOrigin(String),
    #[error("rasterization failed: {0}")]
    Rasterization(String),
    #[error("download failed: {0}")]
    Download(String),
}

impl ExportError {
    /// Message for the error alert. `Busy` is never shown.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            ExportError::Busy => None,
            ExportError::CrossOrigin(_) => Some(CROSS_ORIGIN_MESSAGE),
            ExportError::Rasterization(_) | ExportError::Download(_) => Some(GENERIC_MESSAGE),
        }
    }
}

/// Map a rasterizer failure to the error shown to the user
pub fn classify_raster_error(err: &RasterError) -> ExportError {
    let message = err.message.to_lowercase();
    let cross_origin = ["tainted", "cross-origin", "securityerror", "cors"]
        .iter()
        .any(|needle| message.contains(needle));
    if cross_origin {
        ExportError::CrossOrigin(err.message.clone())
    } else {
        ExportError::Rasterization(err.message.clone())
    }
}

pub fn export_filename(prefix: &str, theme_id: &str, timestamp_millis: i64) -> String {
    format!("{}-{}-{}.png", prefix, theme_id, timestamp_millis)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportState {
    #[default]
    Ready,
    Exporting,
}

impl ExportState {
    pub fn button_label(self) -> &'static str {
        match self {
            ExportState::Ready => READY_LABEL,
            ExportState::Exporting => EXPORTING_LABEL,
        }
    }

    pub fn is_busy(self) -> bool {
        self == ExportState::Exporting
    }
}

/// Puts the controller back to `Ready` when dropped
struct ExportGuard<'a> {
    state: &'a Cell<ExportState>,
}

impl<'a> ExportGuard<'a> {
    fn begin(state: &'a Cell<ExportState>) -> Self {
        state.set(ExportState::Exporting);
        Self { state }
    }
}

impl Drop for ExportGuard<'_> {
    fn drop(&mut self) {
        self.state.set(ExportState::Ready);
    }
}

#[derive(Debug)]
pub struct ExportController {
    state: Cell<ExportState>,
    options: RasterOptions,
    filename_prefix: String,
}

impl Default for ExportController {
    fn default() -> Self {
        Self::with_config(&MoCardConfig::default())
    }
}

impl ExportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &MoCardConfig) -> Self {
        Self {
            state: Cell::new(ExportState::Ready),
            options: RasterOptions::from_config(config),
            filename_prefix: config.filename_prefix.clone(),
        }
    }

    pub fn state(&self) -> ExportState {
        self.state.get()
    }

    pub fn options(&self) -> &RasterOptions {
        &self.options
    }

    pub fn filename(&self, theme_id: &str, timestamp_millis: i64) -> String {
        export_filename(&self.filename_prefix, theme_id, timestamp_millis)
    }

    /// Rasterize the card and hand it to `sink`. Returns the filename used.
    ///
    /// A call made while another export is pending fails with
    /// [`ExportError::Busy`]. The state is `Ready` again once this returns,
    /// whatever the outcome.
    pub async fn export<R, D>(
        &self,
        theme_id: &str,
        rasterizer: &R,
        sink: &D,
        timestamp_millis: i64,
    ) -> Result<String, ExportError>
    where
        R: Rasterizer + ?Sized,
        D: DownloadSink + ?Sized,
    {
        if self.state.get().is_busy() {
            warn!("Export requested while another export is running");
            return Err(ExportError::Busy);
        }
        let _guard = ExportGuard::begin(&self.state);

        let data_url = rasterizer.rasterize(&self.options).await.map_err(|err| {
            error!("Export failed: {}", err);
            classify_raster_error(&err)
        })?;

        let filename = self.filename(theme_id, timestamp_millis);
        sink.download(&filename, &data_url).map_err(|err| {
            error!("Export failed while saving {}: {:#}", filename, err);
            ExportError::Download(err.to_string())
        })?;

        info!("Exported card as {}", filename);
        Ok(filename)
    }
}

/// Decode a `data:<mime>;base64,<payload>` URL
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let (header, payload) = data_url
        .split_once(',')
        .ok_or_else(|| anyhow!("Not a data URL"))?;
    if !header.starts_with("data:") || !header.ends_with(";base64") {
        return Err(anyhow!("Unsupported data URL header '{}'", header));
    }
    STANDARD
        .decode(payload.trim())
        .context("Invalid base64 payload in data URL")
}

/// Writes exported images into a directory.
///
/// Library API for native hosts; the browser build downloads through an
/// anchor element instead.
#[derive(Debug, Clone)]
pub struct FileDownloadSink {
    output_dir: PathBuf,
}

impl FileDownloadSink {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir).with_context(|| {
            format!("Failed to create output directory {}", output_dir.display())
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl DownloadSink for FileDownloadSink {
    fn download(&self, filename: &str, data_url: &str) -> Result<()> {
        let bytes = decode_data_url(data_url)?;
        let path = self.output_dir.join(filename);
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved export to {}", path.display());
        Ok(())
    }
}
