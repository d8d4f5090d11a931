//! Browser session - owns the headless browser and its single page
//!
//! The session is acquired once per run and released exactly once,
//! whether the run completes or fails.

use std::path::Path;

use chromiumoxide::browser::Browser;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::core::config::BrowserConfig;
use crate::core::{CheckError, Result};

/// An exclusively owned browser process plus one page
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch a browser (headless unless configured otherwise) and open one
    /// blank page
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let mut builder = chromiumoxide::browser::BrowserConfig::builder();

        if config.headed {
            builder = builder.with_head();
        } else {
            builder = builder.args(vec!["--headless=new", "--hide-scrollbars", "--mute-audio"]);
        }

        if let Some(executable) = &config.executable {
            builder = builder.chrome_executable(executable.clone());
        }

        if std::env::var("DASHCHECK_DISABLE_SANDBOX")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false)
        {
            builder = builder.no_sandbox();
        }

        let browser_config = builder
            .build()
            .map_err(|e| CheckError::browser(format!("Invalid browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| CheckError::browser(format!("Failed to launch browser: {}", e)))?;

        // Drive the CDP event stream until the browser goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;
        debug!("browser launched");

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    /// Navigate the page to a URL and wait for the load to settle
    pub async fn navigate(&self, url: &str) -> Result<()> {
        self.page
            .goto(url)
            .await
            .map_err(|e| CheckError::navigation(format!("Failed to open {}: {}", url, e)))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| CheckError::navigation(format!("Load of {} did not settle: {}", url, e)))?;
        Ok(())
    }

    /// Navigate backward in the page's history (browser back button)
    ///
    /// The caller's subsequent visibility wait is the synchronization point;
    /// single-page dashboards handle this via popstate without a page load.
    pub async fn go_back(&self) -> Result<()> {
        self.page.evaluate("history.back()").await?;
        Ok(())
    }

    /// Capture a PNG screenshot of the page, overwriting `path` if present
    pub async fn screenshot(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    CheckError::screenshot(format!(
                        "Failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        self.page
            .save_screenshot(
                ScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .build(),
                path,
            )
            .await
            .map_err(|e| {
                CheckError::screenshot(format!("Failed to write {}: {}", path.display(), e))
            })?;
        Ok(())
    }

    /// The session's single page
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Release the session: close the browser, reap its process, and stop
    /// the event handler task
    pub async fn close(mut self) -> Result<()> {
        let closed = self.browser.close().await;
        if let Err(e) = self.browser.wait().await {
            warn!("browser process did not exit cleanly: {}", e);
        }
        self.handler_task.abort();
        debug!("browser released");
        closed.map(|_| ()).map_err(CheckError::from)
    }
}
