use crate::tier::Tier;

/// Lamports per SOL, the ledger's native unit.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Immutable catalog entry for one membership tier. Built at compile time,
/// never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierConfig {
    pub tier: Tier,
    pub name: &'static str,
    pub symbol: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Mint price in lamports.
    pub price_lamports: u64,
    /// Storefront discount in basis points (500 = 5%).
    pub discount_bps: u16,
    /// Free drink credits granted each month.
    pub monthly_allowance: u8,
    pub benefits: &'static [&'static str],
    pub exclusive: &'static [&'static str],
}

const BRONZE: TierConfig = TierConfig {
    tier: Tier::Bronze,
    name: "SolBrew Bronze Membership",
    symbol: "SOLBREW_BRONZE",
    description: "Bronze tier membership NFT for SolBrew Loyalty Program",
    image: "https://your-storage.com/bronze-nft.png",
    price_lamports: LAMPORTS_PER_SOL / 10,
    discount_bps: 500,
    monthly_allowance: 1,
    benefits: &[
        "5% discount on all drinks",
        "Priority queue",
        "Birthday free drink",
    ],
    exclusive: &["Bronze member events", "Early access to new drinks"],
};

const SILVER: TierConfig = TierConfig {
    tier: Tier::Silver,
    name: "SolBrew Silver Membership",
    symbol: "SOLBREW_SILVER",
    description: "Silver tier membership NFT for SolBrew Loyalty Program",
    image: "https://your-storage.com/silver-nft.png",
    price_lamports: LAMPORTS_PER_SOL / 4,
    discount_bps: 1000,
    monthly_allowance: 2,
    benefits: &[
        "10% discount on all drinks",
        "Free size upgrades",
        "2x loyalty points",
        "Bronze perks included",
    ],
    exclusive: &[
        "Silver lounge access",
        "Monthly tasting events",
        "Custom drink creation",
    ],
};

const GOLD: TierConfig = TierConfig {
    tier: Tier::Gold,
    name: "SolBrew Gold Membership",
    symbol: "SOLBREW_GOLD",
    description: "Gold tier membership NFT for SolBrew Loyalty Program",
    image: "https://your-storage.com/gold-nft.png",
    price_lamports: LAMPORTS_PER_SOL / 2,
    discount_bps: 1500,
    monthly_allowance: 5,
    benefits: &[
        "15% discount on all drinks",
        "Free premium add-ons",
        "3x loyalty points",
        "All previous perks",
    ],
    exclusive: &[
        "VIP gold lounge",
        "Private barista sessions",
        "First access to limited beans",
        "Quarterly gift box",
    ],
};

/// Pure lookup. Input is the closed tier enumeration, so there is no failure
/// mode.
pub const fn tier_config(tier: Tier) -> &'static TierConfig {
    match tier {
        Tier::Bronze => &BRONZE,
        Tier::Silver => &SILVER,
        Tier::Gold => &GOLD,
    }
}
