//! The donation event raised when an actor receives a livestream donation.

use donation_sdk::{DonationError, DonationType, Platform};

use super::lifecycle::{ActorBound, Cancellable, CancellationFlag};

/// Nickname that CHZZK uses for donations raised by its alert test button.
const TEST_NICKNAME: &str = "TEST";

/// Minor-currency multiplier applied to every amount.
///
/// Amounts arrive in 100-won steps on every platform, including CHZZK
/// where one unit already costs a single won.
const AMOUNT_SCALE: i64 = 100;

/// Raised when an actor receives a donation. If no handler cancels it, the
/// host runs its configured side effect.
#[derive(Clone)]
pub struct DonationEvent<A> {
    actor: A,
    donation_type: DonationType,
    nickname: String,
    amount: i64,
    cancelled: CancellationFlag,
}

impl<A> DonationEvent<A> {
    /// Largest amount whose scaled value still fits in an `i64`.
    pub const MAX_AMOUNT: i64 = i64::MAX / AMOUNT_SCALE;

    /// Create a new donation event.
    ///
    /// # Arguments
    ///
    /// * `actor` - The entity receiving the donation
    /// * `donation_type` - The platform-specific donation type
    /// * `nickname` - Donor nickname, or the mission title for mission donations
    /// * `amount` - Donation amount in 100-won units
    ///
    /// Fails with [`DonationError::InvalidArgument`] when `amount` is negative
    /// or larger than [`Self::MAX_AMOUNT`].
    pub fn new(
        actor: A,
        donation_type: DonationType,
        nickname: impl Into<String>,
        amount: i64,
    ) -> Result<Self, DonationError> {
        if amount < 0 {
            return Err(DonationError::InvalidArgument(format!(
                "amount must not be negative, got {amount}"
            )));
        }
        if amount > Self::MAX_AMOUNT {
            return Err(DonationError::InvalidArgument(format!(
                "amount {amount} exceeds {}",
                Self::MAX_AMOUNT
            )));
        }

        Ok(Self {
            actor,
            donation_type,
            nickname: nickname.into(),
            amount,
            cancelled: CancellationFlag::new(),
        })
    }

    pub fn donation_type(&self) -> DonationType {
        self.donation_type
    }

    pub fn platform(&self) -> Platform {
        self.donation_type.platform()
    }

    /// Donor nickname, or the mission title for mission donations.
    /// May contain whitespace and special characters.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Donation amount in 100-won units.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Number of currency units (별풍선, 치즈) donated.
    ///
    /// Integer division, so amounts that do not divide evenly are truncated.
    pub fn count(&self) -> i64 {
        self.amount * AMOUNT_SCALE / self.platform().unit_price()
    }

    /// Whether the donation came from an alert test rather than a real
    /// transaction. Only CHZZK marks its test alerts.
    pub fn is_test_donation(&self) -> bool {
        self.platform() == Platform::Chzzk && self.nickname == TEST_NICKNAME
    }

    /// Human-readable sentence describing the donation, e.g.
    ///
    /// - `홍길동님으로부터 별풍선 33개를 후원`
    /// - `도전미션 "탈출 성공"을/를 성공하여 별풍선 5개를 후원`
    pub fn display_string(&self) -> String {
        self.to_string()
    }

    pub fn into_actor(self) -> A {
        self.actor
    }
}

impl<A> ActorBound for DonationEvent<A> {
    type Actor = A;

    fn actor(&self) -> &A {
        &self.actor
    }
}

impl<A> Cancellable for DonationEvent<A> {
    fn is_cancelled(&self) -> bool {
        self.cancelled.is_set()
    }

    fn cancel(&self) {
        self.cancelled.set();
    }
}

impl<A> std::fmt::Display for DonationEvent<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.donation_type {
            DonationType::ChallengeMission => write!(
                f,
                "{} \"{}\"을/를 성공하여 {} {}개를 후원",
                self.donation_type.name(),
                self.nickname,
                self.platform().currency_name(),
                self.count()
            ),
            _ => write!(
                f,
                "{}님으로부터 {} {}개를 후원",
                self.nickname,
                self.donation_type.name(),
                self.count()
            ),
        }
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for DonationEvent<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DonationEvent")
            .field("actor", &self.actor)
            .field("donation_type", &self.donation_type)
            .field("nickname", &self.nickname)
            .field("amount", &self.amount)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
