multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — what is actually stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Undecided. Still votable until `expires_at`.
    Open,
    /// Yes weight crossed half of the total supply. Terminal.
    Accepted,
    /// No weight crossed half of the total supply. Terminal.
    Rejected,
}

// ============================================================
// Proposal State — status as observed at a given timestamp
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalState {
    Active,
    Accepted,
    Rejected,
    /// Open but past its window. Never stored, derived on read.
    Expired,
}

// ============================================================
// Proposal — one votable item
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub created_at: u64,
    /// Frozen at creation from the window configured at that time
    pub expires_at: u64,
    pub status: ProposalStatus,
    pub yes_weight: BigUint<M>,
    pub no_weight: BigUint<M>,
    /// Timestamp of the deciding vote (0 while undecided)
    pub closed_at: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn new(id: u64, proposer: ManagedAddress<M>, created_at: u64, expiry_window: u64) -> Self {
        Proposal {
            id,
            proposer,
            created_at,
            expires_at: created_at.saturating_add(expiry_window),
            status: ProposalStatus::Open,
            yes_weight: BigUint::zero(),
            no_weight: BigUint::zero(),
            closed_at: 0,
        }
    }

    pub fn is_active_at(&self, now: u64) -> bool {
        self.status == ProposalStatus::Open && now < self.expires_at
    }

    pub fn state_at(&self, now: u64) -> ProposalState {
        match self.status {
            ProposalStatus::Accepted => ProposalState::Accepted,
            ProposalStatus::Rejected => ProposalState::Rejected,
            ProposalStatus::Open if now < self.expires_at => ProposalState::Active,
            ProposalStatus::Open => ProposalState::Expired,
        }
    }

    /// Adds `weight` to one side and returns that side's new tally.
    pub fn add_weight(&mut self, direction: &VoteDirection, weight: &BigUint<M>) -> &BigUint<M> {
        match direction {
            VoteDirection::Yes => {
                self.yes_weight += weight;
                &self.yes_weight
            }
            VoteDirection::No => {
                self.no_weight += weight;
                &self.no_weight
            }
        }
    }
}

// ============================================================
// Vote Record — one entry per voter per proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteDirection {
    Yes,
    No,
}

impl VoteDirection {
    pub fn from_support(support: bool) -> Self {
        if support {
            VoteDirection::Yes
        } else {
            VoteDirection::No
        }
    }

    /// Status a proposal closes with when this side crosses the majority.
    pub fn closing_status(&self) -> ProposalStatus {
        match self {
            VoteDirection::Yes => ProposalStatus::Accepted,
            VoteDirection::No => ProposalStatus::Rejected,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub direction: VoteDirection,
    pub weight: BigUint<M>,
}

/// Strict majority: `tally` is more than half of `total`.
pub fn crosses_majority<M: ManagedTypeApi>(tally: &BigUint<M>, total: &BigUint<M>) -> bool {
    &(tally * 2u64) > total
}
