use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use solbrew_membership::tier::{current_tier, Tier};

use crate::error::StorefrontError;
use crate::helpers::memberships_from_tokens;
use crate::ports::{TokenLedger, WalletAddress};

/// Outcome of an admin membership lookup.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct VerificationReport {
    pub wallet: WalletAddress,
    pub tier: Option<Tier>,
    pub is_valid: bool,
    pub token_count: usize,
}

/// Look up the tier standing of an arbitrary wallet for manual benefit
/// grants. Backed by the live ledger query; a query failure is reported
/// rather than treated as an empty wallet.
pub fn verify_membership(
    ledger: &dyn TokenLedger,
    wallet: &WalletAddress,
) -> Result<VerificationReport, StorefrontError> {
    let tokens = ledger.tokens_owned_by(wallet)?;
    let memberships = memberships_from_tokens(tokens);
    let tier = current_tier(&memberships);
    Ok(VerificationReport {
        wallet: wallet.clone(),
        tier,
        is_valid: tier.is_some(),
        token_count: memberships.len(),
    })
}

/// Aggregate program counters shown on the admin dashboard. Mock data until
/// a real indexer backs it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MemberStats {
    pub total_members: u32,
    pub bronze_members: u32,
    pub silver_members: u32,
    pub gold_members: u32,
    pub total_redemptions: u32,
    pub today_redemptions: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RedemptionStatus {
    Pending,
    Completed,
}

/// One recent benefit redemption, as listed on the dashboard.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct RedemptionRecord {
    pub id: String,
    pub wallet: String,
    pub tier: Tier,
    pub reward: String,
    pub status: RedemptionStatus,
    /// Unix seconds.
    pub redeemed_at: u64,
}

pub fn member_stats() -> MemberStats {
    MemberStats {
        total_members: 1247,
        bronze_members: 856,
        silver_members: 298,
        gold_members: 93,
        total_redemptions: 3421,
        today_redemptions: 23,
    }
}

pub fn recent_redemptions() -> Vec<RedemptionRecord> {
    vec![
        RedemptionRecord {
            id: "1".to_string(),
            wallet: "7xKXt...Y9zM".to_string(),
            tier: Tier::Gold,
            reward: "Free Coffee".to_string(),
            status: RedemptionStatus::Completed,
            redeemed_at: 1738765800,
        },
        RedemptionRecord {
            id: "2".to_string(),
            wallet: "Bm4nX...K8vL".to_string(),
            tier: Tier::Silver,
            reward: "10% Discount".to_string(),
            status: RedemptionStatus::Pending,
            redeemed_at: 1738765500,
        },
    ]
}
