use solbrew_membership::tier::{membership_from_token, OwnedMembership, Tier};

use crate::error::StorefrontError;
use crate::ports::{LedgerToken, WalletAddress};
use crate::state::{OwnershipView, WalletSession};

/// Resolve the connected wallet address or refuse with `WalletRequired`.
pub fn assert_connected(session: &WalletSession) -> Result<&WalletAddress, StorefrontError> {
    session
        .address
        .as_ref()
        .ok_or(StorefrontError::WalletRequired)
}

/// Refuse when the ownership view already holds a token of `tier`. Minting
/// an owned tier is disabled outright, not rejected at submit time.
pub fn assert_tier_not_owned(view: &OwnershipView, tier: Tier) -> Result<(), StorefrontError> {
    if let OwnershipView::Fetched { memberships } = view {
        if memberships.iter().any(|m| m.tier == Some(tier)) {
            return Err(StorefrontError::TierAlreadyOwned { tier });
        }
    }
    Ok(())
}

/// Filter a raw ledger token list down to program memberships.
pub fn memberships_from_tokens(tokens: Vec<LedgerToken>) -> Vec<OwnedMembership> {
    tokens
        .iter()
        .filter_map(|token| membership_from_token(&token.id, &token.metadata_name))
        .collect()
}
