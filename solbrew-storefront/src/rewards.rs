use solbrew_membership::tier::Tier;

use crate::error::StorefrontError;
use crate::notice::Notice;

/// One redeemable reward. `cost_points == 0` marks a perk included with the
/// tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardItem {
    pub name: &'static str,
    pub cost_points: u32,
}

/// Per-tier rewards dashboard data. Mock values; redeeming records nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardTable {
    pub tier: Tier,
    pub monthly_credits: u8,
    pub used_credits: u8,
    pub loyalty_points: u32,
    pub next_reward_at: u32,
    pub rewards: &'static [RewardItem],
}

const BRONZE_REWARDS: &[RewardItem] = &[
    RewardItem {
        name: "Free Regular Coffee",
        cost_points: 100,
    },
    RewardItem {
        name: "Birthday Drink",
        cost_points: 0,
    },
    RewardItem {
        name: "Size Upgrade",
        cost_points: 50,
    },
];

const SILVER_REWARDS: &[RewardItem] = &[
    RewardItem {
        name: "Free Premium Coffee",
        cost_points: 150,
    },
    RewardItem {
        name: "Free Pastry",
        cost_points: 200,
    },
    RewardItem {
        name: "Tasting Event Access",
        cost_points: 0,
    },
    RewardItem {
        name: "Custom Drink Creation",
        cost_points: 300,
    },
];

const GOLD_REWARDS: &[RewardItem] = &[
    RewardItem {
        name: "Any Drink Free",
        cost_points: 0,
    },
    RewardItem {
        name: "Premium Bean Bag",
        cost_points: 500,
    },
    RewardItem {
        name: "Private Barista Session",
        cost_points: 0,
    },
    RewardItem {
        name: "Quarterly Gift Box",
        cost_points: 0,
    },
    RewardItem {
        name: "VIP Event Access",
        cost_points: 0,
    },
];

/// Dashboard data for a member of `tier`.
pub fn reward_table(tier: Tier) -> RewardTable {
    match tier {
        Tier::Bronze => RewardTable {
            tier,
            monthly_credits: 1,
            used_credits: 0,
            loyalty_points: 150,
            next_reward_at: 350,
            rewards: BRONZE_REWARDS,
        },
        Tier::Silver => RewardTable {
            tier,
            monthly_credits: 2,
            used_credits: 1,
            loyalty_points: 420,
            next_reward_at: 580,
            rewards: SILVER_REWARDS,
        },
        Tier::Gold => RewardTable {
            tier,
            monthly_credits: 5,
            used_credits: 2,
            loyalty_points: 890,
            next_reward_at: 1000,
            rewards: GOLD_REWARDS,
        },
    }
}

impl RewardTable {
    /// Free credits left this month.
    pub fn credits_remaining(&self) -> u8 {
        self.monthly_credits.saturating_sub(self.used_credits)
    }

    /// Points still needed before the next reward unlocks.
    pub fn points_to_next_reward(&self) -> u32 {
        self.next_reward_at.saturating_sub(self.loyalty_points)
    }

    /// Redeem a reward against the available point balance. Nothing is
    /// recorded — the confirmation notice is the entire effect.
    pub fn redeem(&self, reward_name: &str, cost_points: u32) -> Result<Notice, StorefrontError> {
        if cost_points > self.loyalty_points {
            return Err(StorefrontError::InsufficientPoints {
                shortfall: cost_points - self.loyalty_points,
            });
        }
        Ok(Notice::new("reward_redeemed")
            .add_attribute("reward", reward_name)
            .add_attribute("cost_points", cost_points.to_string()))
    }
}
