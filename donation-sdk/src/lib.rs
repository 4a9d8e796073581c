#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

//! Closed vocabulary for livestream donations.
//!
//! Platform listeners use these types to describe what they observed
//! before handing a donation over to `donation-core`.

pub mod error;
pub mod objects;

pub use error::DonationError;
pub use objects::{DonationType, Platform};
