//! Contracts toward the host's event bus.
//!
//! The bus itself belongs to the host. This module only names what the
//! donation model needs from it and how a publisher reads the result.

use tracing::{debug, info};

use super::donation::DonationEvent;
use super::lifecycle::Cancellable;

/// A host-registered handler that inspects, and may cancel, donation events.
pub trait DonationHandler<A> {
    fn handle(&self, event: &DonationEvent<A>);
}

impl<A, F> DonationHandler<A> for F
where
    F: Fn(&DonationEvent<A>),
{
    fn handle(&self, event: &DonationEvent<A>) {
        self(event)
    }
}

/// The host's dispatch mechanism.
///
/// Implementations must invoke every subscribed handler synchronously, in
/// registration order, before `publish` returns. Handlers keep running after
/// one of them cancels the event.
pub trait DonationPublisher<A> {
    fn subscribe(&mut self, handler: Box<dyn DonationHandler<A> + Send + Sync>);

    fn publish(&self, event: &DonationEvent<A>);
}

/// What the publisher should do once every handler has run.
#[derive(Debug)]
pub enum DonationOutcome<A> {
    /// No handler cancelled the event; run the side effect.
    Proceed(DonationEvent<A>),
    /// A handler cancelled the event; skip the side effect.
    Cancelled(DonationEvent<A>),
}

impl<A> DonationOutcome<A> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DonationOutcome::Cancelled(_))
    }

    /// The event, if the side effect should run.
    pub fn proceed(self) -> Option<DonationEvent<A>> {
        match self {
            DonationOutcome::Proceed(event) => Some(event),
            DonationOutcome::Cancelled(_) => None,
        }
    }

    pub fn into_event(self) -> DonationEvent<A> {
        match self {
            DonationOutcome::Proceed(event) | DonationOutcome::Cancelled(event) => event,
        }
    }
}

/// Publish an event and report whether its side effect should run.
pub fn publish_and_check<A, P>(publisher: &P, event: DonationEvent<A>) -> DonationOutcome<A>
where
    P: DonationPublisher<A> + ?Sized,
{
    debug!(
        donation_type = ?event.donation_type(),
        amount = event.amount(),
        count = event.count(),
        test = event.is_test_donation(),
        "Publishing DonationEvent"
    );

    publisher.publish(&event);

    if event.is_cancelled() {
        info!(
            donation_type = ?event.donation_type(),
            nickname = event.nickname(),
            "DonationEvent cancelled by handler"
        );
        return DonationOutcome::Cancelled(event);
    }

    DonationOutcome::Proceed(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use donation_sdk::DonationType;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct OrderedBus {
        handlers: Vec<Box<dyn DonationHandler<u32> + Send + Sync>>,
    }

    impl DonationPublisher<u32> for OrderedBus {
        fn subscribe(&mut self, handler: Box<dyn DonationHandler<u32> + Send + Sync>) {
            self.handlers.push(handler);
        }

        fn publish(&self, event: &DonationEvent<u32>) {
            for handler in &self.handlers {
                handler.handle(event);
            }
        }
    }

    fn event() -> DonationEvent<u32> {
        DonationEvent::new(7, DonationType::Balloon, "홍길동", 33).unwrap()
    }

    #[test]
    fn test_proceeds_without_handlers() {
        let bus = OrderedBus::default();
        let outcome = publish_and_check(&bus, event());
        assert!(!outcome.is_cancelled());
        assert_eq!(outcome.proceed().unwrap().count(), 33);
    }

    #[test]
    fn test_first_cancel_wins_and_later_handlers_still_run() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut bus = OrderedBus::default();

        let seen = Arc::clone(&calls);
        bus.subscribe(Box::new(move |_: &DonationEvent<u32>| {
            seen.lock().unwrap().push("observer");
        }));
        let seen = Arc::clone(&calls);
        bus.subscribe(Box::new(move |event: &DonationEvent<u32>| {
            seen.lock().unwrap().push("veto");
            event.cancel();
        }));
        let seen = Arc::clone(&calls);
        bus.subscribe(Box::new(move |event: &DonationEvent<u32>| {
            seen.lock().unwrap().push("late");
            assert!(event.is_cancelled());
        }));

        let outcome = publish_and_check(&bus, event());

        assert!(outcome.is_cancelled());
        assert_eq!(*calls.lock().unwrap(), vec!["observer", "veto", "late"]);

        let event = outcome.into_event();
        assert!(event.is_cancelled());
        assert_eq!(event.nickname(), "홍길동");
    }

    #[test]
    fn test_cancelled_outcome_has_nothing_to_proceed() {
        let mut bus = OrderedBus::default();
        bus.subscribe(Box::new(|event: &DonationEvent<u32>| event.cancel()));
        bus.subscribe(Box::new(|event: &DonationEvent<u32>| event.cancel()));

        assert!(publish_and_check(&bus, event()).proceed().is_none());
    }
}
