use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use solbrew_membership::tier::{OwnedMembership, Tier};

use crate::ports::{MintReceipt, MintServiceError, WalletAddress};

/// Progress checkpoints shown while a mint is in flight. Feedback only —
/// they do not gate correctness.
pub const PROGRESS_SUBMITTED: u8 = 10;
pub const PROGRESS_DISPATCHED: u8 = 30;
pub const PROGRESS_CONFIRMED: u8 = 80;
pub const PROGRESS_FINALIZED: u8 = 100;

/// Connection state of the user's external wallet.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
pub struct WalletSession {
    /// Present only while connected.
    pub address: Option<WalletAddress>,
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }
}

/// Result of the last completed ownership query.
///
/// `Unknown` covers both "never fetched" and "last fetch failed" — distinct
/// from a successful fetch that returned nothing.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipView {
    #[default]
    Unknown,
    Fetched { memberships: Vec<OwnedMembership> },
}

/// Tier standing derived from the ownership view.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TierStanding {
    /// No successful query yet, or the last query failed.
    Unknown,
    /// Queried successfully; the wallet holds no membership token.
    NoMembership,
    Member(Tier),
}

impl fmt::Display for TierStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierStanding::Unknown => f.write_str("unknown"),
            TierStanding::NoMembership => f.write_str("none"),
            TierStanding::Member(tier) => write!(f, "{}", tier),
        }
    }
}

/// Claim ticket for an in-flight ownership refresh. A result applied with a
/// stale ticket (the session changed, or a newer refresh started) is
/// discarded rather than written over newer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshTicket {
    pub(crate) epoch: u64,
}

/// Failure cause retained inside the `Failed` mint state.
#[derive(Error, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MintFailure {
    #[error("insufficient balance: {required_lamports} lamports required")]
    InsufficientBalance { required_lamports: u64 },

    #[error("transaction rejected by the wallet")]
    UserRejected,

    #[error("network failure: {reason}")]
    Network { reason: String },

    #[error("unknown failure")]
    Unknown,
}

impl From<MintServiceError> for MintFailure {
    fn from(err: MintServiceError) -> Self {
        match err {
            MintServiceError::InsufficientBalance { required_lamports } => {
                MintFailure::InsufficientBalance { required_lamports }
            }
            MintServiceError::UserRejected => MintFailure::UserRejected,
            MintServiceError::Network { reason } => MintFailure::Network { reason },
        }
    }
}

/// Minting workflow states. The receipt lives inside `Succeeded`, so a result
/// token exists exactly when the mint succeeded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MintState {
    Confirming,
    InProgress,
    Succeeded { receipt: MintReceipt },
    Failed { failure: MintFailure },
}

impl MintState {
    pub fn name(&self) -> &'static str {
        match self {
            MintState::Confirming => "confirming",
            MintState::InProgress => "in_progress",
            MintState::Succeeded { .. } => "succeeded",
            MintState::Failed { .. } => "failed",
        }
    }
}

/// One in-flight mint attempt, created when the dialog opens and discarded
/// when it closes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MintRequest {
    pub tier: Tier,
    pub state: MintState,
    progress: u8,
}

impl MintRequest {
    pub(crate) fn new(tier: Tier) -> Self {
        MintRequest {
            tier,
            state: MintState::Confirming,
            progress: 0,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn receipt(&self) -> Option<&MintReceipt> {
        match &self.state {
            MintState::Succeeded { receipt } => Some(receipt),
            _ => None,
        }
    }

    /// Advance the progress indicator. Never decreases while a request is in
    /// flight; only re-entering `Confirming` resets it.
    pub(crate) fn advance_progress(&mut self, checkpoint: u8) {
        self.progress = self.progress.max(checkpoint.min(PROGRESS_FINALIZED));
    }

    pub(crate) fn reset_to_confirming(&mut self) {
        self.state = MintState::Confirming;
        self.progress = 0;
    }
}
