//! Donation types, each bound to exactly one platform.

use serde::{Deserialize, Serialize};

use super::Platform;
use crate::DonationError;

/// All donation types a listener can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DonationType {
    /// 별풍선 (SOOP)
    Balloon,
    /// 애드벌룬 (SOOP)
    AdBalloon,
    /// 대결미션 (SOOP). Delivered to the donated stream whether or not it won.
    BattleMission,
    /// 도전미션 (SOOP). Delivered when the mission succeeds.
    ChallengeMission,
    /// 영상풍선 (SOOP)
    VideoBalloon,
    /// 치즈 chat donation (치지직)
    Cheese,
    /// 치즈 video donation (치지직)
    VideoDonation,
}

impl DonationType {
    /// Every donation type, in declaration order.
    pub const ALL: [DonationType; 7] = [
        DonationType::Balloon,
        DonationType::AdBalloon,
        DonationType::BattleMission,
        DonationType::ChallengeMission,
        DonationType::VideoBalloon,
        DonationType::Cheese,
        DonationType::VideoDonation,
    ];

    /// Display name of the donation type.
    pub const fn name(self) -> &'static str {
        match self {
            DonationType::Balloon => "별풍선",
            DonationType::AdBalloon => "애드벌룬",
            DonationType::BattleMission => "대결미션",
            DonationType::ChallengeMission => "도전미션",
            DonationType::VideoBalloon => "영상풍선",
            DonationType::Cheese => "치즈",
            DonationType::VideoDonation => "영상 후원",
        }
    }

    /// Platform this type belongs to.
    pub const fn platform(self) -> Platform {
        match self {
            DonationType::Balloon
            | DonationType::AdBalloon
            | DonationType::BattleMission
            | DonationType::ChallengeMission
            | DonationType::VideoBalloon => Platform::Soop,
            DonationType::Cheese | DonationType::VideoDonation => Platform::Chzzk,
        }
    }

    /// Look up a donation type by display name on the given platform.
    ///
    /// Fails with [`DonationError::InvariantViolation`] when the name exists
    /// but belongs to another platform.
    pub fn resolve(platform: Platform, name: &str) -> Result<Self, DonationError> {
        let Some(donation_type) = Self::ALL.into_iter().find(|t| t.name() == name) else {
            return Err(DonationError::UnknownDonationType(name.to_owned()));
        };

        if donation_type.platform() != platform {
            return Err(DonationError::InvariantViolation {
                donation_type,
                expected: platform,
                actual: donation_type.platform(),
            });
        }

        Ok(donation_type)
    }
}

impl std::fmt::Display for DonationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
