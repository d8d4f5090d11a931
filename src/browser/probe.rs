//! Preflight probe - checks the dashboard is reachable before a browser
//! launch is paid for
//!
//! Any HTTP response counts as reachable; only connect errors and timeouts
//! fail the probe. The dashboard is never started by this tool.

use std::time::Duration;

use tracing::debug;

use crate::core::{CheckError, Result};

/// Probe the target URL with one HTTP GET
pub async fn check_reachable(url: &str, timeout: Duration) -> Result<()> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    match client.get(url).send().await {
        Ok(response) => {
            debug!(status = %response.status(), "dashboard reachable");
            Ok(())
        }
        Err(e) => Err(CheckError::navigation(format!(
            "dashboard not reachable at {} (is it running?): {}",
            url, e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_port_fails() {
        // Port 1 is essentially never listening locally.
        let result = check_reachable("http://127.0.0.1:1", Duration::from_millis(500)).await;
        let err = result.expect_err("probe against a closed port should fail");
        assert!(matches!(err, CheckError::Navigation(_)));
        assert!(err.to_string().contains("not reachable"));
    }
}
