use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Program marker every membership token display name carries.
pub const PROGRAM_MARKER: &str = "SolBrew";
/// Second marker distinguishing membership tokens from other program drops.
pub const MEMBERSHIP_MARKER: &str = "Membership";

/// Membership tier. Variant order is the tier order: Bronze < Silver < Gold.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Bronze, Tier::Silver, Tier::Gold];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
        }
    }

    /// Extract the tier named by a token display name. Tier names are
    /// mutually exclusive under the naming convention, so match order does
    /// not matter.
    pub fn from_display_name(name: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|tier| name.contains(tier.name()))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One membership token held by a wallet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct OwnedMembership {
    pub token_id: String,
    pub display_name: String,
    /// `None` when the name follows the program convention but names no tier.
    pub tier: Option<Tier>,
}

/// Whether a token display name follows the program naming convention.
pub fn is_membership_name(name: &str) -> bool {
    name.contains(PROGRAM_MARKER) && name.contains(MEMBERSHIP_MARKER)
}

/// Build an `OwnedMembership` from a ledger token, or `None` when the token
/// is not a program membership.
pub fn membership_from_token(token_id: &str, display_name: &str) -> Option<OwnedMembership> {
    if !is_membership_name(display_name) {
        return None;
    }
    Some(OwnedMembership {
        token_id: token_id.to_string(),
        display_name: display_name.to_string(),
        tier: Tier::from_display_name(display_name),
    })
}

/// Highest tier present in an ownership set, `None` when the set is empty or
/// holds only tier-less tokens. Derived on every call, never stored.
pub fn current_tier(memberships: &[OwnedMembership]) -> Option<Tier> {
    memberships.iter().filter_map(|m| m.tier).max()
}
