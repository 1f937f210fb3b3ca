//! Cancellable delayed notification for search text changes.
//!
//! Each scheduled timer runs as its own tokio task and reports back through a
//! channel instead of touching controller state directly. A timer is
//! identified by a ticket so that an expiry message which was already queued
//! when its timer got cancelled can still be recognised as stale.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Message a timer task sends back when its interval elapsed uninterrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerMessage {
    Elapsed(u64),
}

/// Handle to the in-flight timer. At most one exists per controller.
#[derive(Debug)]
pub(crate) struct PendingDebounce {
    ticket: u64,
    token: CancellationToken,
}

impl PendingDebounce {
    pub(crate) fn cancel(&self) {
        self.token.cancel();
    }

    pub(crate) const fn ticket(&self) -> u64 {
        self.ticket
    }
}

/// Starts and cancels debounce timers.
pub(crate) struct DebounceTimer {
    next_ticket: u64,
    timer_tx: UnboundedSender<TimerMessage>,
}

impl DebounceTimer {
    pub(crate) const fn new(timer_tx: UnboundedSender<TimerMessage>) -> Self {
        Self {
            next_ticket: 0,
            timer_tx,
        }
    }

    /// Cancel whatever is pending in `slot`, then start a fresh timer there.
    pub(crate) fn restart(&mut self, slot: &mut Option<PendingDebounce>, interval: Duration) {
        Self::cancel(slot);

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let token = CancellationToken::new();

        let task_token = token.clone();
        let timer_tx = self.timer_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                () = task_token.cancelled() => {
                    trace!(ticket, "Debounce timer cancelled");
                }
                () = tokio::time::sleep(interval) => {
                    let _ = timer_tx.send(TimerMessage::Elapsed(ticket));
                }
            }
        });

        trace!(ticket, ?interval, "Debounce timer started");
        *slot = Some(PendingDebounce { ticket, token });
    }

    /// Cancel the pending timer, if any. Cancelling nothing is a no-op.
    pub(crate) fn cancel(slot: &mut Option<PendingDebounce>) {
        if let Some(pending) = slot.take() {
            pending.cancel();
        }
    }

    /// Take the pending timer out of `slot` if `ticket` belongs to it.
    pub(crate) fn complete(slot: &mut Option<PendingDebounce>, ticket: u64) -> bool {
        match slot {
            Some(pending) if pending.ticket() == ticket => {
                *slot = None;
                true
            }
            _ => false,
        }
    }
}
