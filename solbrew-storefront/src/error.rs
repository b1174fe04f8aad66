use thiserror::Error;

use solbrew_membership::error::MembershipError;
use solbrew_membership::tier::Tier;

use crate::ports::{LedgerError, WalletError};

/// Engine errors. All are non-fatal and scoped to the triggering user
/// action; the host renders them as transient notifications.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    #[error("wallet required: connect a wallet before minting")]
    WalletRequired,

    #[error("wallet connection failed: {0}")]
    ConnectionFailed(#[from] WalletError),

    #[error("a {tier} membership is already owned by this wallet")]
    TierAlreadyOwned { tier: Tier },

    #[error("no mint dialog is open")]
    NoMintDialog,

    #[error("a mint dialog for {tier} is already open")]
    MintDialogOpen { tier: Tier },

    #[error("mint request is {actual}, expected {expected}")]
    MintStateMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("ownership query failed: {0}")]
    OwnershipQueryFailed(#[from] LedgerError),

    #[error("insufficient points: {shortfall} more needed")]
    InsufficientPoints { shortfall: u32 },

    #[error("{0}")]
    InvalidMetadata(#[from] MembershipError),
}
