pub mod donation_type;
pub mod platform;

pub use donation_type::DonationType;
pub use platform::Platform;
