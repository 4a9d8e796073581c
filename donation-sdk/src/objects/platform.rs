//! Streaming platforms that can raise donations.

use serde::{Deserialize, Serialize};

use super::DonationType;

/// All streaming platforms supported for donation alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    /// [SOOP](https://www.sooplive.co.kr/)
    Soop,
    /// [치지직](https://chzzk.naver.com/)
    Chzzk,
}

impl Platform {
    /// Every platform, in declaration order.
    pub const ALL: [Platform; 2] = [Platform::Soop, Platform::Chzzk];

    /// Display name of the platform.
    pub const fn name(self) -> &'static str {
        match self {
            Platform::Soop => "숲",
            Platform::Chzzk => "치지직",
        }
    }

    /// Name of the currency unit viewers spend (별풍선, 치즈).
    pub const fn currency_name(self) -> &'static str {
        match self {
            Platform::Soop => "별풍선",
            Platform::Chzzk => "치즈",
        }
    }

    /// Cost of one currency unit in won. Always greater than zero.
    pub const fn unit_price(self) -> i64 {
        match self {
            Platform::Soop => 100,
            Platform::Chzzk => 1,
        }
    }

    /// Donation types bound to this platform.
    pub fn donation_types(self) -> impl Iterator<Item = DonationType> {
        DonationType::ALL
            .into_iter()
            .filter(move |donation_type| donation_type.platform() == self)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
