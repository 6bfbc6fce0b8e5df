// SPDX-License-Identifier: MPL-2.0
//! Actor wrapper around [`Manager`] for multi-threaded hosts.
//!
//! One tokio task owns the manager and applies commands in the order they
//! were sent. Handles are cheap to clone and never block: `show` allocates the
//! ID itself and returns it right away. Each dismissal timer is its own
//! spawned task that sends `Expire(id)` back to the actor, and every applied
//! mutation publishes a fresh immutable snapshot for readers.

use super::manager::Manager;
use super::notification::{AlertSpec, Notification, NotificationDefaults, NotificationId};
use super::scenario::{ErrorCategory, SuccessScenario};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, oneshot, watch};

/// Immutable view of the active collection, oldest first.
pub type Snapshot = Arc<[Notification]>;

/// Commands accepted by the actor.
#[derive(Debug)]
enum Command {
    Show { id: NotificationId, spec: AlertSpec },
    Remove(NotificationId),
    Expire(NotificationId),
    ClearAll,
    /// Replies once every earlier command was applied.
    Barrier(oneshot::Sender<()>),
}

/// Spawns the notification actor.
pub struct NotificationService;

impl NotificationService {
    /// Starts the actor on the current tokio runtime and returns a handle.
    ///
    /// The actor stops once every handle is dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn spawn(defaults: NotificationDefaults) -> NotificationHandle {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel::<Snapshot>(Arc::from(Vec::new()));
        let weak_tx = command_tx.downgrade();

        tokio::spawn(async move {
            run(Manager::with_defaults(defaults), command_rx, weak_tx, snapshot_tx).await;
            tracing::debug!("notification service stopped");
        });

        NotificationHandle {
            command_tx,
            snapshot_rx,
        }
    }
}

async fn run(
    mut manager: Manager,
    mut command_rx: mpsc::UnboundedReceiver<Command>,
    timer_tx: mpsc::WeakUnboundedSender<Command>,
    snapshot_tx: watch::Sender<Snapshot>,
) {
    while let Some(command) = command_rx.recv().await {
        let changed = match command {
            Command::Show { id, spec } => {
                manager.insert(id, spec, Instant::now());
                if let Some(delay) = manager.dismiss_after(id) {
                    let timer_tx = timer_tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        // The actor may be gone by now; nothing left to expire then.
                        if let Some(tx) = timer_tx.upgrade() {
                            let _ = tx.send(Command::Expire(id));
                        }
                    });
                }
                true
            }
            Command::Remove(id) => manager.remove(id),
            Command::Expire(id) => manager.expire(id),
            Command::ClearAll => {
                let had_any = !manager.is_empty();
                manager.clear_all();
                had_any
            }
            Command::Barrier(reply) => {
                let _ = reply.send(());
                false
            }
        };

        if changed {
            snapshot_tx.send_replace(Arc::from(manager.snapshot()));
        }
    }
}

/// Cloneable handle to a running [`NotificationService`].
#[derive(Debug, Clone)]
pub struct NotificationHandle {
    command_tx: mpsc::UnboundedSender<Command>,
    snapshot_rx: watch::Receiver<Snapshot>,
}

impl NotificationHandle {
    fn send(&self, command: Command) {
        if self.command_tx.send(command).is_err() {
            tracing::warn!("notification service is not running; command dropped");
        }
    }

    /// Queues a notification and returns its ID immediately.
    pub fn show(&self, spec: AlertSpec) -> NotificationId {
        let id = NotificationId::new();
        self.send(Command::Show { id, spec });
        id
    }

    /// Queues removal of `id`. Unknown IDs are ignored by the actor.
    pub fn remove(&self, id: NotificationId) {
        self.send(Command::Remove(id));
    }

    /// Queues removal of every active notification.
    pub fn clear_all(&self) {
        self.send(Command::ClearAll);
    }

    pub fn form_success(&self, scenario: SuccessScenario) -> NotificationId {
        self.show(AlertSpec::form_success(scenario))
    }

    pub fn form_error(&self, category: ErrorCategory) -> NotificationId {
        self.show(AlertSpec::form_error(category))
    }

    pub fn loading(&self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.show(AlertSpec::loading().title(title).message(message))
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.show(AlertSpec::error().title(title).message(message))
    }

    /// Returns the latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Waits for the next published snapshot.
    ///
    /// Returns `None` once the actor has stopped.
    pub async fn changed(&mut self) -> Option<Snapshot> {
        self.snapshot_rx.changed().await.ok()?;
        Some(self.snapshot_rx.borrow_and_update().clone())
    }

    /// Waits until every command sent before this call has been applied.
    pub async fn settled(&self) {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Barrier(reply_tx));
        let _ = reply_rx.await;
    }
}
