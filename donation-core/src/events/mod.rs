//! Donation event model and the contracts around its delivery.
//!
//! # Event Flow
//!
//! 1. A platform listener builds a `DonationEvent` and hands it over through
//!    `donation_event_channel`.
//! 2. The host loop publishes it to its handlers via `publish_and_check`.
//! 3. Handlers may cancel it. A cancelled event is dropped.
//! 4. Otherwise the host runs the configured side effect, usually a
//!    `CommandTemplate` rendered from the event.
//!
//! Events are ephemeral. Nothing here persists them or blocks.

pub mod channels;
pub mod dispatch;
pub mod donation;
pub mod lifecycle;

pub use channels::{
    DEFAULT_CHANNEL_BUFFER, DonationEventReceiver, DonationEventSender, HandoffError,
    donation_event_channel, donation_event_channel_with_buffer,
};
pub use dispatch::{DonationHandler, DonationOutcome, DonationPublisher, publish_and_check};
pub use donation::DonationEvent;
pub use lifecycle::{ActorBound, Cancellable, CancellationFlag};
