//! Visibility assertions - bounded polling waits
//!
//! A visibility assertion re-checks the page at a fixed interval until the
//! expected text is rendered or the timeout elapses. This is the only
//! suspension point in the flow.

use std::time::{Duration, Instant};

use chromiumoxide::page::Page;
use tracing::debug;

use crate::core::{CheckError, Result};

/// Default visibility assertion timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default poll interval between visibility checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Timeout and poll interval for a visibility assertion
#[derive(Debug, Clone, Copy)]
pub struct WaitConfig {
    /// Total window the condition has to become true
    pub timeout: Duration,
    /// Delay between consecutive checks
    pub interval: Duration,
}

impl WaitConfig {
    /// Create a wait config with explicit timeout and interval
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Assert that `text` becomes visible in the rendered page within the wait
/// window
///
/// Polls the DOM until a text node containing `text` sits in an element
/// that is actually rendered (non-empty client rect, not hidden via CSS).
/// On timeout the error distinguishes text that never entered the DOM from
/// text that is present but hidden.
pub async fn wait_for_text(page: &Page, text: &str, config: &WaitConfig) -> Result<()> {
    let js = text_probe_js(text)?;
    let deadline = Instant::now() + config.timeout;
    let mut present = false;

    loop {
        let probe: serde_json::Value = page.evaluate(js.clone()).await?.into_value()?;
        if probe["visible"].as_bool().unwrap_or(false) {
            debug!(text, "visibility assertion satisfied");
            return Ok(());
        }
        present = probe["present"].as_bool().unwrap_or(false);

        if Instant::now() + config.interval >= deadline {
            break;
        }
        tokio::time::sleep(config.interval).await;
    }

    let detail = if present {
        "present in the DOM but never visible"
    } else {
        "never appeared in the DOM"
    };
    Err(CheckError::timeout(format!(
        "text {:?} {} within {}ms",
        text,
        detail,
        config.timeout.as_millis()
    )))
}

/// Build the DOM probe script for a text-visibility check
///
/// The needle is embedded as a JSON string literal so arbitrary text
/// (quotes, backslashes) cannot break out of the script.
fn text_probe_js(text: &str) -> Result<String> {
    let needle = serde_json::to_string(text)?;
    Ok(format!(
        r#"(() => {{
            const needle = {needle};
            const rendered = (el) => {{
                if (!el) return false;
                const style = window.getComputedStyle(el);
                if (style.display === 'none' || style.visibility === 'hidden') return false;
                const rect = el.getBoundingClientRect();
                return rect.width > 0 && rect.height > 0;
            }};
            const walker = document.createTreeWalker(document.body, NodeFilter.SHOW_TEXT, null);
            let present = false;
            let node;
            while ((node = walker.nextNode())) {{
                if (node.textContent.includes(needle)) {{
                    present = true;
                    if (rendered(node.parentElement)) {{
                        return {{ present: true, visible: true }};
                    }}
                }}
            }}
            return {{ present: present, visible: false }};
        }})()"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WaitConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.interval, Duration::from_millis(250));
    }

    #[test]
    fn test_probe_js_embeds_needle_as_literal() {
        let js = text_probe_js("Discard changes?").unwrap();
        assert!(js.contains("\"Discard changes?\""));
    }

    #[test]
    fn test_probe_js_escapes_quotes() {
        let js = text_probe_js("say \"hi\"").unwrap();
        assert!(js.contains(r#""say \"hi\"""#));
        // The raw quote must not terminate the literal early.
        assert!(!js.contains(r#"= "say "hi"""#));
    }
}
