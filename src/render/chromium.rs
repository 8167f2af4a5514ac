//! Headless-browser backend.
//!
//! Writes the HTML rendition into a temporary directory, points a headless
//! Chromium at it with `--print-to-pdf`, and reads the PDF back. The temp
//! directory and the child process are scoped to this call: the directory is
//! removed on every exit path, and a child that outlives the configured
//! timeout is killed before the error is returned.

use std::fs;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::tempdir;

use super::html::render_html;
use super::layout::DocumentLayout;
use super::{PdfRenderer, RenderError};

const HTML_FILE: &str = "document.html";
const PDF_FILE: &str = "document.pdf";
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Budget Chromium spends settling the page (fonts, embedded images) before
/// printing. Assets are inlined as data URIs, so this is a short fallback
/// bound rather than a network wait.
const VIRTUAL_TIME_BUDGET_MS: u32 = 2000;

pub struct ChromiumRenderer {
    binary: String,
    timeout: Duration,
}

impl ChromiumRenderer {
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }
}

impl PdfRenderer for ChromiumRenderer {
    fn name(&self) -> &'static str {
        "chromium"
    }

    fn render(&self, layout: &DocumentLayout) -> Result<Vec<u8>, RenderError> {
        let html = render_html(layout);

        let temp_dir = tempdir().map_err(RenderError::TempDir)?;
        let html_path = temp_dir.path().join(HTML_FILE);
        fs::write(&html_path, html).map_err(RenderError::WriteInput)?;

        let pdf_path = temp_dir.path().join(PDF_FILE);
        let mut child = Command::new(&self.binary)
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-pdf-header-footer")
            .arg(format!("--virtual-time-budget={VIRTUAL_TIME_BUDGET_MS}"))
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(format!("file://{}", html_path.display()))
            .current_dir(temp_dir.path())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| RenderError::BrowserLaunch {
                binary: self.binary.clone(),
                source: e,
            })?;

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait().map_err(RenderError::BrowserWait)? {
                Some(status) => break status,
                None if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    log::error!(
                        "headless render of {} timed out after {:?}",
                        layout.document_number,
                        self.timeout
                    );
                    return Err(RenderError::Timeout(self.timeout));
                }
                None => thread::sleep(WAIT_POLL_INTERVAL),
            }
        };

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            return Err(RenderError::BrowserExit(code));
        }

        fs::read(&pdf_path).map_err(RenderError::ReadPdf)
    }
}
