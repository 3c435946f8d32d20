// SPDX-License-Identifier: MPL-2.0
//! Ready-made toasts for common browser actions.
//!
//! Each preset returns the toast and, for operations that run in the
//! background, the [`ProgressReporter`] the caller drives. Progress toasts
//! keep their auto-dismiss flag off; the queue starts their timer once the
//! tracked operation finishes.

use super::progress::{progress_channel, ProgressReporter};
use super::toast::{StateContent, Toast, ToastButton, ToastContent};

/// Plain text toast.
pub fn message(text: impl Into<String>) -> Toast {
    Toast::message(text)
}

/// Text toast shown with a checkmark badge.
pub fn checkmark(text: impl Into<String>) -> Toast {
    Toast::message(text).with_checkmark(true)
}

/// "Tab Closed" / "N Tabs Closed" with a restore button.
///
/// Returns `None` when no tab was closed.
pub fn tabs_closed(count: usize, restore: impl Fn() + Send + Sync + 'static) -> Option<Toast> {
    let text = match count {
        0 => return None,
        1 => "Tab Closed".to_string(),
        n => format!("{n} Tabs Closed"),
    };
    let normal = StateContent::text(text).with_button(ToastButton::with_action("restore", restore));
    Some(Toast::new(ToastContent::new(normal)))
}

#[must_use]
pub fn tab_pinned(pinning: bool) -> Toast {
    checkmark(if pinning { "Tab Pinned" } else { "Tab Unpinned" })
}

/// Download progress toast; enqueue it with `Placement::First`.
pub fn download(
    cancel: impl Fn() + Send + Sync + 'static,
    open: impl Fn() + Send + Sync + 'static,
) -> (Toast, ProgressReporter) {
    let (reporter, tracker) = progress_channel();
    let content = ToastContent::new(
        StateContent::text("Downloading").with_button(ToastButton::with_action("cancel", cancel)),
    )
    .with_completed(
        StateContent::text("Downloaded").with_button(ToastButton::with_action("open", open)),
    )
    .with_failed(StateContent::text("Download Failed"));

    let toast = Toast::new(content)
        .with_auto_dismiss(false)
        .with_progress(tracker);
    (toast, reporter)
}

/// Saving a page to a named collection.
///
/// `open` opens the collection, `retry` repeats a failed save.
pub fn saved_to_collection(
    name: &str,
    open: impl Fn() + Send + Sync + Clone + 'static,
    retry: impl Fn() + Send + Sync + 'static,
) -> (Toast, ProgressReporter) {
    let (reporter, tracker) = progress_channel();
    let content = ToastContent::new(
        StateContent::text(format!("Saving to \"{name}\""))
            .with_button(ToastButton::with_action("open", open.clone())),
    )
    .with_completed(
        StateContent::text(format!("Saved to \"{name}\""))
            .with_button(ToastButton::with_action("open", open)),
    )
    .with_failed(
        StateContent::text(format!("Failed to save to \"{name}\""))
            .with_button(ToastButton::with_action("try again", retry)),
    );

    let toast = Toast::new(content)
        .with_auto_dismiss(false)
        .with_progress(tracker);
    (toast, reporter)
}

/// Removing an item from a collection, with undo once removed.
pub fn removed_from_collection(
    undo: impl Fn() + Send + Sync + 'static,
    retry: impl Fn() + Send + Sync + 'static,
) -> (Toast, ProgressReporter) {
    let (reporter, tracker) = progress_channel();
    let content = ToastContent::new(StateContent::text("Removing item from collection"))
        .with_completed(
            StateContent::text("Item removed from collection")
                .with_button(ToastButton::with_action("undo", undo)),
        )
        .with_failed(
            StateContent::text("Failed to remove item from collection")
                .with_button(ToastButton::with_action("try again", retry)),
        );

    let toast = Toast::new(content)
        .with_auto_dismiss(false)
        .with_progress(tracker);
    (toast, reporter)
}

#[must_use]
pub fn feedback_submitted() -> Toast {
    Toast::message("Feedback Submitted!")
}

/// Saving the preferred provider setting.
pub fn preference_saved(retry: impl Fn() + Send + Sync + 'static) -> (Toast, ProgressReporter) {
    let (reporter, tracker) = progress_channel();
    let content = ToastContent::new(StateContent::text("Saving preference"))
        .with_completed(
            StateContent::text("Preference saved!").with_button(ToastButton::new("Got it")),
        )
        .with_failed(
            StateContent::text("Failed to save preference")
                .with_button(ToastButton::with_action("try again", retry)),
        );

    let toast = Toast::new(content)
        .with_auto_dismiss(false)
        .with_progress(tracker);
    (toast, reporter)
}
