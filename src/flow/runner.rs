//! Flow runner - the fixed "edit expense" verification sequence
//!
//! Executes one linear script of navigation, interaction, and visibility
//! assertions against the dashboard, capturing a screenshot at each
//! checkpoint. There is exactly one path through the flow; the first
//! failure aborts it, with the browser session still released.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::browser::{locator, probe, wait, BrowserSession, WaitConfig};
use crate::core::{Config, Result};

/// The four screenshot checkpoints of the flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    /// The dashboard as first loaded
    Dashboard,
    /// The edit-expense view after clicking "Edit"
    EditExpense,
    /// The "No Changes" alert after an unmodified submit
    NoChanges,
    /// The "Discard changes?" prompt after navigating back
    DiscardChanges,
}

impl Checkpoint {
    /// Fixed file name of this checkpoint's screenshot
    pub fn file_name(&self) -> &'static str {
        match self {
            Checkpoint::Dashboard => "dashboard-page.png",
            Checkpoint::EditExpense => "edit-expense-page.png",
            Checkpoint::NoChanges => "no-changes-alert.png",
            Checkpoint::DiscardChanges => "discard-changes-alert.png",
        }
    }
}

/// Runs the edit-expense verification flow once
pub struct FlowRunner {
    config: Config,
}

impl FlowRunner {
    /// Create a runner for the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Path a checkpoint's screenshot is written to
    pub fn screenshot_path(&self, checkpoint: Checkpoint) -> PathBuf {
        self.config.output.dir.join(checkpoint.file_name())
    }

    /// Execute the full flow
    ///
    /// Acquires the browser session, drives the script to completion or
    /// first error, and releases the session on every exit path.
    pub async fn run(&self) -> Result<()> {
        self.config.validate()?;

        if self.config.target.preflight {
            probe::check_reachable(&self.config.target.url, self.config.preflight_timeout())
                .await?;
        }

        let session = BrowserSession::launch(&self.config.browser).await?;
        let outcome = self.drive(&session).await;
        let release = session.close().await;

        match (outcome, release) {
            (Err(e), Err(release_err)) => {
                warn!("browser release also failed: {}", release_err);
                Err(e)
            }
            (Err(e), Ok(())) => Err(e),
            (Ok(()), release) => release,
        }
    }

    /// The fixed step sequence, first failure aborts
    async fn drive(&self, session: &BrowserSession) -> Result<()> {
        let wait_config = WaitConfig::new(self.config.wait_timeout(), self.config.poll_interval());
        let url = &self.config.target.url;

        info!("opening dashboard at {}", url);
        session.navigate(url).await?;
        self.capture(session, Checkpoint::Dashboard).await?;

        info!("clicking the first \"Edit\" button");
        let edit = locator::find_button(session.page(), "Edit").await?;
        edit.click().await?;

        wait::wait_for_text(session.page(), "Edit Expense", &wait_config).await?;
        self.capture(session, Checkpoint::EditExpense).await?;

        info!("submitting \"Update Expense\" without changes");
        let update = locator::find_button(session.page(), "Update Expense").await?;
        update.click().await?;

        wait::wait_for_text(session.page(), "No Changes", &wait_config).await?;
        self.capture(session, Checkpoint::NoChanges).await?;

        info!("navigating back");
        session.go_back().await?;

        wait::wait_for_text(session.page(), "Discard changes?", &wait_config).await?;
        self.capture(session, Checkpoint::DiscardChanges).await?;

        info!("edit-expense flow verified");
        Ok(())
    }

    /// Capture a checkpoint screenshot, overwriting any prior file
    async fn capture(&self, session: &BrowserSession, checkpoint: Checkpoint) -> Result<()> {
        let path = self.screenshot_path(checkpoint);
        session.screenshot(&path).await?;
        info!("captured {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_file_names() {
        assert_eq!(Checkpoint::Dashboard.file_name(), "dashboard-page.png");
        assert_eq!(Checkpoint::EditExpense.file_name(), "edit-expense-page.png");
        assert_eq!(Checkpoint::NoChanges.file_name(), "no-changes-alert.png");
        assert_eq!(
            Checkpoint::DiscardChanges.file_name(),
            "discard-changes-alert.png"
        );
    }

    #[test]
    fn test_screenshot_paths_land_in_output_dir() {
        let mut config = Config::default();
        config.output.dir = PathBuf::from("shots");
        let runner = FlowRunner::new(config);

        assert_eq!(
            runner.screenshot_path(Checkpoint::Dashboard),
            PathBuf::from("shots/dashboard-page.png")
        );
        assert_eq!(
            runner.screenshot_path(Checkpoint::DiscardChanges),
            PathBuf::from("shots/discard-changes-alert.png")
        );
    }
}
