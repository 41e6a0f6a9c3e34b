#![forbid(unsafe_code)]

//! Coalesced frame requests.
//!
//! Cell writes do not run the pipeline; they request that it runs. The
//! request is a bounded(1) channel used with `try_send`: when a frame is
//! already pending, further requests are dropped on the floor. Any burst
//! of writes between loop ticks therefore collapses into exactly one
//! frame.

use std::sync::Mutex;
use std::sync::mpsc::{Receiver, SyncSender, TrySendError, sync_channel};

use tracing::trace;

/// Single-slot frame request channel.
///
/// The frame loop installs itself as the receiver; writers call
/// [`request`](Self::request) from any thread.
#[derive(Debug, Default)]
pub struct FrameRequest {
    tx: Mutex<Option<SyncSender<()>>>,
}

impl FrameRequest {
    /// Create an empty request slot with no receiver installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a receiver, replacing any previous one.
    ///
    /// Returns the receiving end the frame loop blocks on. A previously
    /// installed loop sees its channel disconnect and exits.
    pub fn install(&self) -> Receiver<()> {
        let (tx, rx) = sync_channel(1);
        *self.tx.lock().expect("frame request lock poisoned") = Some(tx);
        rx
    }

    /// Remove the installed receiver, if any.
    pub fn uninstall(&self) {
        *self.tx.lock().expect("frame request lock poisoned") = None;
    }

    /// Request a frame.
    ///
    /// Returns true when this call enqueued the request, false when one
    /// was already pending (coalesced) or no receiver is installed.
    pub fn request(&self) -> bool {
        let guard = self.tx.lock().expect("frame request lock poisoned");
        let Some(tx) = guard.as_ref() else {
            return false;
        };
        match tx.try_send(()) {
            Ok(()) => {
                trace!("frame requested");
                true
            }
            Err(TrySendError::Full(())) => {
                // Already pending; the burst coalesces into that frame.
                false
            }
            Err(TrySendError::Disconnected(())) => {
                trace!("frame request dropped: loop gone");
                false
            }
        }
    }

    /// Whether a receiver is installed.
    pub fn is_installed(&self) -> bool {
        self.tx
            .lock()
            .expect("frame request lock poisoned")
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::TryRecvError;

    #[test]
    fn request_without_receiver_is_dropped() {
        let frame = FrameRequest::new();
        assert!(!frame.request());
    }

    #[test]
    fn burst_collapses_into_one_pending_frame() {
        let frame = FrameRequest::new();
        let rx = frame.install();

        assert!(frame.request());
        for _ in 0..100 {
            assert!(!frame.request(), "extra requests must coalesce");
        }

        assert_eq!(rx.try_recv(), Ok(()));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn drained_slot_accepts_a_new_request() {
        let frame = FrameRequest::new();
        let rx = frame.install();

        assert!(frame.request());
        rx.try_recv().expect("one frame pending");
        assert!(frame.request());
        assert_eq!(rx.try_recv(), Ok(()));
    }

    #[test]
    fn reinstall_disconnects_previous_receiver() {
        let frame = FrameRequest::new();
        let old_rx = frame.install();
        let _new_rx = frame.install();

        frame.request();
        assert!(matches!(old_rx.try_recv(), Err(TryRecvError::Disconnected)));
    }
}
