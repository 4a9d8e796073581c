#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod command;
pub mod events;

pub use donation_sdk::{DonationError, DonationType, Platform};
