//! Render module - turns a document snapshot into printable output.
//!
//! One layout model (`layout::DocumentLayout`) is built per render and
//! consumed by every backend, so section ordering and content can never
//! drift between output paths:
//! - `html` - self-contained HTML for direct display or browser print
//! - `chromium` - the same HTML rasterized to PDF by a headless browser
//! - `draw` - direct millimeter-coordinate drawing against a PDF canvas

pub mod chromium;
pub mod draw;
pub mod html;
pub mod layout;

pub use chromium::ChromiumRenderer;
pub use draw::DrawRenderer;
pub use layout::DocumentLayout;

use std::time::Duration;

use lazy_static::lazy_static;
use prometheus::IntCounterVec;
use serde::Deserialize;
use thiserror::Error;
use utoipa::ToSchema;

lazy_static! {
    /// Renders by backend and outcome, exported on /metrics.
    pub static ref RENDER_COUNTER: IntCounterVec = prometheus::register_int_counter_vec!(
        "crown_diamonds_renders_total",
        "Document renders by backend and outcome",
        &["backend", "outcome"]
    )
    .expect("render counter registers once");
}

/// Errors that can occur while producing a PDF.
///
/// Asset and recipient failures are not listed here: both degrade inside the
/// layout (placeholder logo, "not available" address block) and the render
/// succeeds. Everything below is terminal for the single request.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create temporary render directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write render input: {0}")]
    WriteInput(#[source] std::io::Error),
    #[error("failed to launch headless browser '{binary}': {source}")]
    BrowserLaunch {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed while waiting for headless browser: {0}")]
    BrowserWait(#[source] std::io::Error),
    #[error("headless browser exited with status {0}")]
    BrowserExit(i32),
    #[error("headless render exceeded {0:?} and was killed")]
    Timeout(Duration),
    #[error("failed to read rendered PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
    #[error("PDF draw error: {0}")]
    Draw(String),
}

/// Result of a successful PDF render.
#[derive(Debug)]
pub struct RenderedPdf {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A backend that turns a layout into PDF bytes.
pub trait PdfRenderer {
    /// Backend name, used in logs, metrics and error reports.
    fn name(&self) -> &'static str;

    fn render(&self, layout: &DocumentLayout) -> Result<Vec<u8>, RenderError>;
}

/// Backend selector accepted by the PDF endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PdfBackend {
    Chromium,
    Draw,
}

impl PdfBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            PdfBackend::Chromium => "chromium",
            PdfBackend::Draw => "draw",
        }
    }
}
