// SPDX-License-Identifier: MPL-2.0
//! Progress tracking for toasts that follow an asynchronous operation.
//!
//! The producer (a download, a save request) keeps a [`ProgressReporter`];
//! the toast keeps the matching [`ProgressTracker`]. Both ends share a
//! `tokio::sync::watch` channel so the tracker always sees the latest state.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Status of the operation a toast is tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    #[default]
    InProgress,
    Success,
    Failed,
}

impl ProgressStatus {
    /// Returns true once the operation is over, whatever its outcome.
    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, ProgressStatus::InProgress)
    }

    /// Symbol name a surface can use for the status badge.
    #[must_use]
    pub fn icon_name(self) -> &'static str {
        match self {
            ProgressStatus::InProgress => "circle",
            ProgressStatus::Success => "checkmark",
            ProgressStatus::Failed => "xmark",
        }
    }
}

/// Latest observed progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressSnapshot {
    pub status: ProgressStatus,
    /// Completed fraction in `0.0..=1.0`, when the total is known.
    pub fraction: Option<f32>,
}

/// Creates a connected reporter/tracker pair starting in progress.
#[must_use]
pub fn progress_channel() -> (ProgressReporter, ProgressTracker) {
    let (tx, rx) = watch::channel(ProgressSnapshot::default());
    (ProgressReporter { tx }, ProgressTracker { rx })
}

/// Producer side: updates status and fraction.
#[derive(Debug)]
pub struct ProgressReporter {
    tx: watch::Sender<ProgressSnapshot>,
}

impl ProgressReporter {
    pub fn set_status(&self, status: ProgressStatus) {
        self.tx.send_modify(|snapshot| snapshot.status = status);
    }

    /// Sets the completed fraction; `None` means the total is unknown.
    pub fn set_fraction(&self, fraction: Option<f32>) {
        let fraction = fraction
            .filter(|value| value.is_finite())
            .map(|value| value.clamp(0.0, 1.0));
        self.tx.send_modify(|snapshot| snapshot.fraction = fraction);
    }

    pub fn succeed(&self) {
        self.set_status(ProgressStatus::Success);
    }

    pub fn fail(&self) {
        self.set_status(ProgressStatus::Failed);
    }

    #[must_use]
    pub fn status(&self) -> ProgressStatus {
        self.tx.borrow().status
    }

    /// Creates another tracker observing this reporter.
    #[must_use]
    pub fn tracker(&self) -> ProgressTracker {
        ProgressTracker {
            rx: self.tx.subscribe(),
        }
    }
}

/// Observer side, carried by the toast.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    rx: watch::Receiver<ProgressSnapshot>,
}

impl ProgressTracker {
    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        *self.rx.borrow()
    }

    #[must_use]
    pub fn status(&self) -> ProgressStatus {
        self.rx.borrow().status
    }

    /// Waits for the next update.
    ///
    /// Returns `false` once the reporter is gone and no further update can arrive.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_channel_starts_in_progress_without_fraction() {
        let (_reporter, tracker) = progress_channel();
        assert_eq!(tracker.snapshot(), ProgressSnapshot::default());
        assert!(!tracker.status().is_finished());
    }

    #[test]
    fn tracker_sees_reporter_updates() {
        let (reporter, tracker) = progress_channel();
        reporter.set_fraction(Some(0.25));
        assert_relative_eq!(tracker.snapshot().fraction.unwrap_or_default(), 0.25);

        reporter.fail();
        assert_eq!(tracker.status(), ProgressStatus::Failed);
        assert!(tracker.status().is_finished());
    }

    #[test]
    fn fraction_is_clamped_and_sanitized() {
        let (reporter, tracker) = progress_channel();
        reporter.set_fraction(Some(3.0));
        assert_relative_eq!(tracker.snapshot().fraction.unwrap_or_default(), 1.0);
        reporter.set_fraction(Some(f32::NAN));
        assert!(tracker.snapshot().fraction.is_none());
    }

    #[test]
    fn updates_survive_without_trackers() {
        let (reporter, tracker) = progress_channel();
        drop(tracker);
        reporter.succeed();
        assert_eq!(reporter.status(), ProgressStatus::Success);
        assert_eq!(reporter.tracker().status(), ProgressStatus::Success);
    }

    #[test]
    fn icon_names_differ_per_status() {
        assert_eq!(ProgressStatus::InProgress.icon_name(), "circle");
        assert_eq!(ProgressStatus::Success.icon_name(), "checkmark");
        assert_eq!(ProgressStatus::Failed.icon_name(), "xmark");
    }

    #[tokio::test]
    async fn changed_resolves_on_update_and_reports_closed_reporter() {
        let (reporter, mut tracker) = progress_channel();
        reporter.succeed();
        assert!(tracker.changed().await);
        assert_eq!(tracker.status(), ProgressStatus::Success);

        drop(reporter);
        assert!(!tracker.changed().await);
    }
}
