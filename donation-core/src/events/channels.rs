//! Handoff from platform listeners to the host dispatch loop.
//!
//! Listeners usually run on their own I/O tasks while handlers run on the
//! host's loop, so events cross over through a bounded channel.

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::donation::DonationEvent;

/// Default buffer size for the donation channel.
pub const DEFAULT_CHANNEL_BUFFER: usize = 256;

/// Errors that can occur when handing an event to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandoffError {
    /// The host dropped its receiver.
    #[error("donation receiver closed")]
    Closed,

    /// The buffer is full and the caller asked not to wait.
    #[error("donation channel full")]
    Full,
}

/// Receiver handle for donation events, owned by the host loop.
pub type DonationEventReceiver<A> = mpsc::Receiver<DonationEvent<A>>;

/// Sender handle for donation events, owned by a platform listener.
pub struct DonationEventSender<A> {
    inner: mpsc::Sender<DonationEvent<A>>,
}

impl<A> Clone for DonationEventSender<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A> DonationEventSender<A> {
    /// Send an event, waiting for buffer space.
    pub async fn send_donation(&self, event: DonationEvent<A>) -> Result<(), HandoffError> {
        if event.is_test_donation() {
            debug!(donation_type = ?event.donation_type(), "Handing over test donation");
        }

        self.inner.send(event).await.map_err(|_| {
            warn!("Donation receiver closed, dropping DonationEvent");
            HandoffError::Closed
        })
    }

    /// Send an event without waiting.
    pub fn try_send_donation(&self, event: DonationEvent<A>) -> Result<(), HandoffError> {
        self.inner.try_send(event).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => {
                warn!("Donation channel full, dropping DonationEvent");
                HandoffError::Full
            }
            mpsc::error::TrySendError::Closed(_) => {
                warn!("Donation receiver closed, dropping DonationEvent");
                HandoffError::Closed
            }
        })
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

/// Create a new donation event channel.
///
/// Returns a (sender, receiver) pair. Each listener can hold its own clone
/// of the sender.
pub fn donation_event_channel<A>() -> (DonationEventSender<A>, DonationEventReceiver<A>) {
    donation_event_channel_with_buffer(DEFAULT_CHANNEL_BUFFER)
}

/// Create a donation event channel with a custom buffer size.
pub fn donation_event_channel_with_buffer<A>(
    buffer: usize,
) -> (DonationEventSender<A>, DonationEventReceiver<A>) {
    let (inner, rx) = mpsc::channel(buffer.max(1));
    (DonationEventSender { inner }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use donation_sdk::DonationType;

    fn event(nickname: &str) -> DonationEvent<&'static str> {
        DonationEvent::new("steve", DonationType::Cheese, nickname, 10).unwrap()
    }

    #[tokio::test]
    async fn test_events_arrive_in_order() {
        let (tx, mut rx) = donation_event_channel();
        let listener = tx.clone();

        tx.send_donation(event("first")).await.unwrap();
        listener.send_donation(event("second")).await.unwrap();

        assert_eq!(rx.recv().await.unwrap().nickname(), "first");
        assert_eq!(rx.recv().await.unwrap().nickname(), "second");
    }

    #[tokio::test]
    async fn test_send_after_receiver_dropped() {
        let (tx, rx) = donation_event_channel();
        drop(rx);

        assert!(tx.is_closed());
        assert_eq!(tx.send_donation(event("TEST")).await, Err(HandoffError::Closed));
        assert_eq!(tx.try_send_donation(event("TEST")), Err(HandoffError::Closed));
    }

    #[test]
    fn test_try_send_when_full() {
        let (tx, mut rx) = donation_event_channel_with_buffer(1);

        tx.try_send_donation(event("first")).unwrap();
        assert_eq!(tx.try_send_donation(event("second")), Err(HandoffError::Full));

        assert_eq!(rx.try_recv().unwrap().nickname(), "first");
        assert!(rx.try_recv().is_err());
    }
}
