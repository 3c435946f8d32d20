// SPDX-License-Identifier: MPL-2.0
//! Tokio driver for the queue.
//!
//! [`ToastService`] owns a [`Queue`] on a single task. Callers talk to it
//! through a cloneable [`ToastHandle`]; timers and progress updates arrive on
//! an internal channel, so every state change runs on the service task.

use crate::application::port::{PresentationSurface, Scheduler, TimerHandle};
use crate::config::Config;
use crate::diagnostics::DiagnosticsHandle;
use crate::error::{Error, Result};
use crate::notifications::{DismissOptions, Message, Placement, Queue, QueueSettings, Toast, ToastId};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

/// [`Scheduler`] spawning one sleeping task per delivery.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    sender: mpsc::UnboundedSender<Message>,
    next_handle: u64,
    tasks: HashMap<TimerHandle, AbortHandle>,
}

impl TokioScheduler {
    /// Delivers fired messages into `sender`.
    #[must_use]
    pub fn new(sender: mpsc::UnboundedSender<Message>) -> Self {
        Self {
            sender,
            next_handle: 0,
            tasks: HashMap::new(),
        }
    }

    /// Number of deliveries still sleeping.
    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, message: Message) -> TimerHandle {
        self.tasks.retain(|_, task| !task.is_finished());

        self.next_handle += 1;
        let handle = TimerHandle::from_raw(self.next_handle);
        let sender = self.sender.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the service stopped.
            let _ = sender.send(message);
        });
        self.tasks.insert(handle, task.abort_handle());
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for task in self.tasks.values() {
            task.abort();
        }
    }
}

#[derive(Debug)]
enum Command {
    Queue(Message),
    Shutdown,
}

/// Cloneable entry point to a running [`ToastService`].
#[derive(Debug, Clone)]
pub struct ToastHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl ToastHandle {
    fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| Error::ServiceClosed)
    }

    /// Sends a raw queue message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServiceClosed`] once the service task has ended.
    pub fn send_message(&self, message: Message) -> Result<()> {
        self.send(Command::Queue(message))
    }

    /// Appends a toast to the backlog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServiceClosed`] once the service task has ended.
    pub fn enqueue(&self, toast: Toast) -> Result<()> {
        self.send_message(Message::Enqueue(toast, Placement::Last))
    }

    /// Puts a toast ahead of every pending one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServiceClosed`] once the service task has ended.
    pub fn enqueue_first(&self, toast: Toast) -> Result<()> {
        self.send_message(Message::Enqueue(toast, Placement::First))
    }

    /// # Errors
    ///
    /// Returns [`Error::ServiceClosed`] once the service task has ended.
    pub fn clear_and_show(&self, toast: Toast) -> Result<()> {
        self.send_message(Message::ClearAndShow(toast))
    }

    /// # Errors
    ///
    /// Returns [`Error::ServiceClosed`] once the service task has ended.
    pub fn dismiss(&self, options: DismissOptions) -> Result<()> {
        self.send_message(Message::Dismiss(options))
    }

    /// Resumes a backlog paused by a dismissal without `move_to_next`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServiceClosed`] once the service task has ended.
    pub fn advance(&self) -> Result<()> {
        self.send_message(Message::Advance)
    }

    /// # Errors
    ///
    /// Returns [`Error::ServiceClosed`] once the service task has ended.
    pub fn dragging_updated(&self) -> Result<()> {
        self.send_message(Message::DraggingUpdated)
    }

    /// # Errors
    ///
    /// Returns [`Error::ServiceClosed`] once the service task has ended.
    pub fn dragging_ended(&self, dismissing: bool) -> Result<()> {
        self.send_message(Message::DraggingEnded { dismissing })
    }

    /// Reports the end of an entry animation the surface answered with
    /// `Presentation::Animating`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServiceClosed`] once the service task has ended.
    pub fn entry_finished(&self, id: ToastId) -> Result<()> {
        self.send_message(Message::EntryFinished(id))
    }

    /// # Errors
    ///
    /// Returns [`Error::ServiceClosed`] once the service task has ended.
    pub fn trigger_action(&self, id: ToastId) -> Result<()> {
        self.send_message(Message::ActionTriggered(id))
    }

    /// Reports that the software keyboard finished hiding, so a surface
    /// waiting on it can open its deferred toast.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServiceClosed`] once the service task has ended.
    pub fn keyboard_hidden(&self) -> Result<()> {
        self.send_message(Message::KeyboardHidden)
    }

    /// Stops the service after the messages already sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServiceClosed`] if the service already stopped.
    pub fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown)
    }
}

#[derive(Debug)]
struct ProgressWatch {
    id: ToastId,
    task: JoinHandle<()>,
}

/// Queue owner running on a tokio task.
#[derive(Debug)]
pub struct ToastService<S> {
    queue: Queue<S, TokioScheduler>,
    commands: mpsc::UnboundedReceiver<Command>,
    internal: mpsc::UnboundedReceiver<Message>,
    internal_sender: mpsc::UnboundedSender<Message>,
    progress: Option<ProgressWatch>,
}

impl<S> ToastService<S>
where
    S: PresentationSurface + Send + 'static,
{
    /// Starts the service on the current runtime.
    ///
    /// The join handle yields the surface back after shutdown, or once every
    /// [`ToastHandle`] is dropped.
    pub fn spawn(
        surface: S,
        config: &Config,
        diagnostics: Option<DiagnosticsHandle>,
    ) -> (ToastHandle, JoinHandle<S>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (internal_tx, internal_rx) = mpsc::unbounded_channel();

        let scheduler = TokioScheduler::new(internal_tx.clone());
        let mut queue = Queue::with_settings(surface, scheduler, QueueSettings::from(config));
        if let Some(handle) = diagnostics {
            queue.set_diagnostics(handle);
        }

        let service = Self {
            queue,
            commands: command_rx,
            internal: internal_rx,
            internal_sender: internal_tx,
            progress: None,
        };
        let task = tokio::spawn(service.run());
        (
            ToastHandle {
                commands: command_tx,
            },
            task,
        )
    }

    async fn run(mut self) -> S {
        tracing::debug!("toast service started");
        loop {
            tokio::select! {
                biased;
                Some(message) = self.internal.recv() => self.queue.handle_message(message),
                command = self.commands.recv() => match command {
                    Some(Command::Queue(message)) => self.queue.handle_message(message),
                    Some(Command::Shutdown) | None => break,
                },
            }
            self.sync_progress_watch();
        }

        if let Some(watch) = self.progress.take() {
            watch.task.abort();
        }
        tracing::debug!(pending = self.queue.pending_count(), "toast service stopped");
        let (surface, _scheduler) = self.queue.into_parts();
        surface
    }

    /// Keeps one progress watcher alive for the toast on screen.
    fn sync_progress_watch(&mut self) {
        let current = self.queue.current().map(|toast| (toast.id(), toast.progress()));
        let watched = self.progress.as_ref().map(|watch| watch.id);
        if current.map(|(id, _)| id) == watched {
            return;
        }

        if let Some(watch) = self.progress.take() {
            watch.task.abort();
        }
        let Some((id, Some(tracker))) = current else {
            return;
        };

        let mut tracker = tracker.clone();
        let sender = self.internal_sender.clone();
        let task = tokio::spawn(async move {
            while tracker.changed().await {
                if sender.send(Message::ProgressChanged(id)).is_err() {
                    break;
                }
            }
        });
        self.progress = Some(ProgressWatch { id, task });
    }
}
