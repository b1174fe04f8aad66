use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use solbrew_membership::catalog::TierConfig;
use solbrew_membership::metadata::TokenMetadata;

/// Opaque wallet address. New-type so addresses don't mix with other textual
/// identifiers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, JsonSchema)]
pub struct WalletAddress(pub String);

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One token as reported by the ledger query collaborator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct LedgerToken {
    pub id: String,
    pub metadata_name: String,
}

/// Result of a finalized mint: the new token and its confirmation signature,
/// retained for display and audit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MintReceipt {
    pub token_id: String,
    pub signature: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("wallet handshake unavailable: {reason}")]
    Unavailable { reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("ledger query failed: {reason}")]
    Network { reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MintServiceError {
    #[error("insufficient balance: {required_lamports} lamports required")]
    InsufficientBalance { required_lamports: u64 },

    #[error("transaction rejected by the wallet")]
    UserRejected,

    #[error("mint submission failed: {reason}")]
    Network { reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataStoreError {
    #[error("metadata upload failed: {reason}")]
    Network { reason: String },
}

/// External wallet handshake. `connect` resolves with `None` when the user
/// cancels the selection dialog — a no-op, not an error.
pub trait WalletAdapter {
    fn connect(&mut self) -> Result<Option<WalletAddress>, WalletError>;
    fn disconnect(&mut self);
}

/// Read-only token enumeration against the external ledger.
pub trait TokenLedger {
    fn tokens_owned_by(&self, address: &WalletAddress) -> Result<Vec<LedgerToken>, LedgerError>;
}

/// Token mint submission. One call covers dispatch and confirmation; the
/// transaction belongs to the service once dispatched.
pub trait MintService {
    fn mint(
        &mut self,
        config: &TierConfig,
        metadata_uri: &str,
        payer: &WalletAddress,
    ) -> Result<MintReceipt, MintServiceError>;
}

/// Off-chain metadata persistence, returning the document URI.
pub trait MetadataStore {
    fn upload(&mut self, metadata: &TokenMetadata) -> Result<String, MetadataStoreError>;
}

const IPFS_GATEWAY: &str = "https://gateway.pinata.cloud/ipfs/";

/// Development stand-in for a real pinning service. The identifier is
/// synthesized from the SHA-256 of the serialized document, so repeated
/// uploads of the same document yield the same URI.
#[derive(Clone, Debug, Default)]
pub struct StubMetadataStore;

impl MetadataStore for StubMetadataStore {
    fn upload(&mut self, metadata: &TokenMetadata) -> Result<String, MetadataStoreError> {
        let json = serde_json::to_vec(metadata).map_err(|err| MetadataStoreError::Network {
            reason: err.to_string(),
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&json);
        let digest = hasher.finalize();

        let mut cid = String::with_capacity(2 + digest.len() * 2);
        cid.push_str("Qm");
        for byte in digest {
            cid.push_str(&format!("{:02x}", byte));
        }
        Ok(format!("{}{}", IPFS_GATEWAY, cid))
    }
}
