use solbrew_membership::catalog::tier_config;
use solbrew_membership::metadata::TokenMetadata;
use solbrew_membership::tier::{current_tier, Tier};

use crate::error::StorefrontError;
use crate::helpers::{assert_connected, assert_tier_not_owned, memberships_from_tokens};
use crate::notice::Notice;
use crate::ports::{
    LedgerError, LedgerToken, MetadataStore, MintService, TokenLedger, WalletAdapter,
    WalletAddress,
};
use crate::state::{
    MintFailure, MintRequest, MintState, OwnershipView, RefreshTicket, TierStanding,
    WalletSession, PROGRESS_CONFIRMED, PROGRESS_DISPATCHED, PROGRESS_FINALIZED,
    PROGRESS_SUBMITTED,
};

/// Application state store for the storefront. All mutation goes through the
/// named operations below; views read through the accessors.
#[derive(Debug, Default)]
pub struct Storefront {
    session: WalletSession,
    ownership: OwnershipView,
    /// Bumped whenever the session changes or a newer refresh starts; stale
    /// refresh results are discarded against it.
    ownership_epoch: u64,
    mint: Option<MintRequest>,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Views ──────────────────────────────────────────────────────────────

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    pub fn ownership(&self) -> &OwnershipView {
        &self.ownership
    }

    pub fn mint_request(&self) -> Option<&MintRequest> {
        self.mint.as_ref()
    }

    /// Tier standing derived from the ownership view on every call.
    pub fn tier_standing(&self) -> TierStanding {
        match &self.ownership {
            OwnershipView::Unknown => TierStanding::Unknown,
            OwnershipView::Fetched { memberships } => match current_tier(memberships) {
                Some(tier) => TierStanding::Member(tier),
                None => TierStanding::NoMembership,
            },
        }
    }

    // ─── Wallet session ─────────────────────────────────────────────────────

    /// Run the external wallet handshake. Cancellation is a silent no-op;
    /// handshake failure surfaces as `ConnectionFailed`. A successful connect
    /// resets the ownership view to `Unknown` — the host should follow up
    /// with a refresh.
    pub fn connect(&mut self, adapter: &mut dyn WalletAdapter) -> Result<Notice, StorefrontError> {
        match adapter.connect()? {
            Some(address) => {
                self.session.address = Some(address.clone());
                self.invalidate_ownership();
                Ok(Notice::new("wallet_connected").add_attribute("address", address.to_string()))
            }
            None => Ok(Notice::new("wallet_connect_cancelled")),
        }
    }

    /// Clear the session. Idempotent.
    pub fn disconnect(
        &mut self,
        adapter: &mut dyn WalletAdapter,
    ) -> Result<Notice, StorefrontError> {
        if self.session.address.is_none() {
            return Ok(Notice::new("wallet_already_disconnected"));
        }
        adapter.disconnect();
        self.session.address = None;
        self.invalidate_ownership();
        Ok(Notice::new("wallet_disconnected"))
    }

    fn invalidate_ownership(&mut self) {
        self.ownership = OwnershipView::Unknown;
        self.ownership_epoch += 1;
    }

    // ─── Ownership query ────────────────────────────────────────────────────

    /// Start an ownership refresh for the connected wallet. The returned
    /// ticket must accompany the ledger result; a ticket from before a
    /// session change or a newer refresh is discarded on apply.
    pub fn begin_refresh(&mut self) -> Result<(RefreshTicket, WalletAddress), StorefrontError> {
        let address = assert_connected(&self.session)?.clone();
        self.ownership_epoch += 1;
        Ok((
            RefreshTicket {
                epoch: self.ownership_epoch,
            },
            address,
        ))
    }

    /// Apply the outcome of a refresh started with `begin_refresh`. The set
    /// is replaced wholesale; there is no incremental update.
    pub fn apply_refresh(
        &mut self,
        ticket: RefreshTicket,
        outcome: Result<Vec<LedgerToken>, LedgerError>,
    ) -> Result<Notice, StorefrontError> {
        if ticket.epoch != self.ownership_epoch {
            return Ok(Notice::new("refresh_discarded").add_attribute("reason", "stale"));
        }
        match outcome {
            Ok(tokens) => {
                let memberships = memberships_from_tokens(tokens);
                let count = memberships.len();
                self.ownership = OwnershipView::Fetched { memberships };
                Ok(Notice::new("memberships_refreshed")
                    .add_attribute("count", count.to_string())
                    .add_attribute("standing", self.tier_standing().to_string()))
            }
            Err(err) => {
                // A failed query is not "owns nothing" — drop back to Unknown.
                self.ownership = OwnershipView::Unknown;
                Err(StorefrontError::OwnershipQueryFailed(err))
            }
        }
    }

    /// Fetch and apply in one step, for hosts without their own suspension
    /// points.
    pub fn refresh_memberships(
        &mut self,
        ledger: &dyn TokenLedger,
    ) -> Result<Notice, StorefrontError> {
        let (ticket, address) = self.begin_refresh()?;
        let outcome = ledger.tokens_owned_by(&address);
        self.apply_refresh(ticket, outcome)
    }

    // ─── Minting workflow ───────────────────────────────────────────────────

    /// Open the mint dialog for `tier`, creating the request in `Confirming`.
    /// Refused outright for a tier the wallet already holds.
    pub fn open_mint_dialog(&mut self, tier: Tier) -> Result<Notice, StorefrontError> {
        assert_connected(&self.session)?;
        assert_tier_not_owned(&self.ownership, tier)?;
        if let Some(request) = &self.mint {
            return Err(StorefrontError::MintDialogOpen { tier: request.tier });
        }

        self.mint = Some(MintRequest::new(tier));
        let config = tier_config(tier);
        Ok(Notice::new("mint_dialog_opened")
            .add_attribute("tier", tier.to_string())
            .add_attribute("price_lamports", config.price_lamports.to_string()))
    }

    /// Confirm the purchase: `Confirming -> InProgress`. The wallet guard is
    /// re-checked — the session may have dropped since the dialog opened.
    pub fn begin_mint(&mut self) -> Result<Notice, StorefrontError> {
        assert_connected(&self.session)?;
        let request = self.mint.as_mut().ok_or(StorefrontError::NoMintDialog)?;
        match request.state {
            MintState::Confirming => {}
            ref other => {
                return Err(StorefrontError::MintStateMismatch {
                    expected: "confirming",
                    actual: other.name(),
                })
            }
        }

        request.state = MintState::InProgress;
        request.advance_progress(PROGRESS_SUBMITTED);
        Ok(Notice::new("mint_submitted").add_attribute("tier", request.tier.to_string()))
    }

    /// Drive the submitted mint to completion: upload the metadata document,
    /// dispatch the mint, and record the receipt or the failure cause. The
    /// transition to `Failed` is a successful engine operation — the cause is
    /// retained in the request, not raised.
    pub fn run_mint(
        &mut self,
        store: &mut dyn MetadataStore,
        minter: &mut dyn MintService,
    ) -> Result<Notice, StorefrontError> {
        let address = assert_connected(&self.session)?.clone();
        let request = self.mint.as_mut().ok_or(StorefrontError::NoMintDialog)?;
        match request.state {
            MintState::InProgress => {}
            ref other => {
                return Err(StorefrontError::MintStateMismatch {
                    expected: "in_progress",
                    actual: other.name(),
                })
            }
        }

        let tier = request.tier;
        let config = tier_config(tier);
        let metadata = TokenMetadata::for_tier(tier);
        metadata.validate()?;

        request.advance_progress(PROGRESS_DISPATCHED);
        let minted = store
            .upload(&metadata)
            .map_err(|err| MintFailure::Network {
                reason: err.to_string(),
            })
            .and_then(|uri| {
                minter
                    .mint(config, &uri, &address)
                    .map_err(MintFailure::from)
            });

        match minted {
            Ok(receipt) => {
                request.advance_progress(PROGRESS_CONFIRMED);
                let signature = receipt.signature.clone();
                request.state = MintState::Succeeded { receipt };
                request.advance_progress(PROGRESS_FINALIZED);
                Ok(Notice::new("mint_succeeded")
                    .add_attribute("tier", tier.to_string())
                    .add_attribute("signature", signature))
            }
            Err(failure) => {
                let cause = failure.to_string();
                request.state = MintState::Failed { failure };
                Ok(Notice::new("mint_failed")
                    .add_attribute("tier", tier.to_string())
                    .add_attribute("cause", cause))
            }
        }
    }

    /// Clear a failure and return to `Confirming` for another attempt.
    pub fn retry_mint(&mut self) -> Result<Notice, StorefrontError> {
        let request = self.mint.as_mut().ok_or(StorefrontError::NoMintDialog)?;
        match request.state {
            MintState::Failed { .. } => {}
            ref other => {
                return Err(StorefrontError::MintStateMismatch {
                    expected: "failed",
                    actual: other.name(),
                })
            }
        }

        request.reset_to_confirming();
        Ok(Notice::new("mint_retry").add_attribute("tier", request.tier.to_string()))
    }

    /// Discard the request from any state. A mint already dispatched to the
    /// ledger is not cancelled; a later ownership refresh observes whatever
    /// it produced.
    pub fn close_mint_dialog(&mut self) -> Notice {
        match self.mint.take() {
            Some(request) => Notice::new("mint_dialog_closed")
                .add_attribute("tier", request.tier.to_string())
                .add_attribute("state", request.state.name()),
            None => Notice::new("mint_dialog_closed"),
        }
    }
}
