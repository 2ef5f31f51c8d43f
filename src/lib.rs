#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod types;
pub mod voting_proxy;
pub mod weight_source;

use errors::*;
use types::{crosses_majority, Proposal, ProposalState, VoteDirection, VoteRecord};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Voting: weight_source::WeightSourceModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        weight_source_address: ManagedAddress,
        expiry_window: u64,
        max_active_proposals: u64,
        reuse_closed_ids: bool,
    ) {
        require!(expiry_window > 0, ERR_ZERO_EXPIRY_WINDOW);
        require!(max_active_proposals > 0, ERR_ZERO_MAX_ACTIVE);

        self.weight_source_address().set(&weight_source_address);
        self.expiry_window().set(expiry_window);
        self.max_active_proposals().set(max_active_proposals);
        self.reuse_closed_ids().set(reuse_closed_ids);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: getNewProposal
    // Opens a proposal under a caller-chosen id. Expired
    // proposals give up their slot first.
    // ========================================================

    #[endpoint(getNewProposal)]
    fn get_new_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        self.discard_expired(now);

        if !self.proposals(proposal_id).is_empty() {
            let existing = self.proposals(proposal_id).get();
            require!(!existing.is_active_at(now), ERR_PROPOSAL_ALREADY_ACTIVE);
            require!(self.reuse_closed_ids().get(), ERR_PROPOSAL_ID_USED);
            self.generation(proposal_id).update(|g| *g += 1);
        }

        require!(
            (self.active_proposals().len() as u64) < self.max_active_proposals().get(),
            ERR_TOO_MANY_PROPOSALS
        );

        let proposal = Proposal::new(proposal_id, caller.clone(), now, self.expiry_window().get());
        self.proposals(proposal_id).set(&proposal);
        self.active_proposals().insert(proposal_id);

        self.proposal_created_event(proposal_id, &caller, now, proposal.expires_at);
    }

    // ========================================================
    // ENDPOINT: vote
    // Weighted yes/no vote. The weight must be backed by the
    // caller's token balance. Closes the proposal as soon as
    // one side holds a strict majority of the total supply.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool, weight: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(weight > 0u64, ERR_ZERO_WEIGHT);
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let mut proposal = self.proposals(proposal_id).get();
        let now = self.blockchain().get_block_timestamp();
        require!(proposal.is_active_at(now), ERR_PROPOSAL_NOT_ACTIVE);
        let generation = self.generation(proposal_id).get();
        require!(
            !self.has_voted(proposal_id, generation, &caller).get(),
            ERR_ALREADY_VOTED
        );

        let balance = self.verified_weight(&caller);
        require!(weight <= balance, ERR_INSUFFICIENT_WEIGHT);

        let direction = VoteDirection::from_support(support);
        let total = self.total_weight();
        let crossed = crosses_majority(proposal.add_weight(&direction, &weight), &total);

        self.vote_records(proposal_id, generation).push(&VoteRecord {
            voter: caller.clone(),
            direction,
            weight: weight.clone(),
        });
        self.has_voted(proposal_id, generation, &caller).set(true);
        self.vote_event(proposal_id, &caller, support, &weight);

        if crossed {
            proposal.status = direction.closing_status();
            proposal.closed_at = now;
            self.active_proposals().swap_remove(&proposal_id);
            match direction {
                VoteDirection::Yes => self.accepted_event(proposal_id),
                VoteDirection::No => self.rejected_event(proposal_id),
            }
        }

        self.proposals(proposal_id).set(&proposal);
    }

    // ========================================================
    // ENDPOINTS: owner configuration
    // Window changes only apply to proposals opened afterwards.
    // ========================================================

    #[only_owner]
    #[endpoint(setExpiryWindow)]
    fn set_expiry_window(&self, expiry_window: u64) {
        require!(expiry_window > 0, ERR_ZERO_EXPIRY_WINDOW);
        self.expiry_window().set(expiry_window);
        self.config_changed_event(&ManagedBuffer::from(b"expiryWindow"), expiry_window);
    }

    #[only_owner]
    #[endpoint(setMaxActiveProposals)]
    fn set_max_active_proposals(&self, max_active_proposals: u64) {
        require!(max_active_proposals > 0, ERR_ZERO_MAX_ACTIVE);
        self.max_active_proposals().set(max_active_proposals);
        self.config_changed_event(
            &ManagedBuffer::from(b"maxActiveProposals"),
            max_active_proposals,
        );
    }

    #[only_owner]
    #[endpoint(setReuseClosedIds)]
    fn set_reuse_closed_ids(&self, reuse_closed_ids: bool) {
        self.reuse_closed_ids().set(reuse_closed_ids);
        self.config_changed_event(
            &ManagedBuffer::from(b"reuseClosedIds"),
            reuse_closed_ids as u64,
        );
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Drops every expired proposal from the active set. The records
    /// themselves stay readable.
    fn discard_expired(&self, now: u64) {
        let mut expired: ManagedVec<u64> = ManagedVec::new();
        for proposal_id in self.active_proposals().iter() {
            if !self.proposals(proposal_id).get().is_active_at(now) {
                expired.push(proposal_id);
            }
        }

        for proposal_id in expired.iter() {
            self.active_proposals().swap_remove(&proposal_id);
            self.proposal_expired_event(proposal_id);
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// Unknown ids are simply not active.
    #[view(ifProposalIsActive)]
    fn if_proposal_is_active(&self, proposal_id: u64) -> bool {
        if self.proposals(proposal_id).is_empty() {
            return false;
        }
        let now = self.blockchain().get_block_timestamp();
        self.proposals(proposal_id).get().is_active_at(now)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: u64) -> ProposalState {
        let now = self.blockchain().get_block_timestamp();
        self.get_proposal(proposal_id).state_at(now)
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        let now = self.blockchain().get_block_timestamp();
        for proposal_id in self.active_proposals().iter() {
            if self.proposals(proposal_id).get().is_active_at(now) {
                result.push(proposal_id);
            }
        }
        result
    }

    #[view(hasVoted)]
    fn has_voter_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        let generation = self.generation(proposal_id).get();
        self.has_voted(proposal_id, generation, voter).get()
    }

    #[view(getVoteRecords)]
    fn get_vote_records(&self, proposal_id: u64) -> MultiValueEncoded<VoteRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let generation = self.generation(proposal_id).get();
        for record in self.vote_records(proposal_id, generation).iter() {
            result.push(record);
        }
        result
    }

    #[view(getConfig)]
    fn get_config(&self) -> MultiValue4<ManagedAddress, u64, u64, bool> {
        (
            self.weight_source_address().get(),
            self.expiry_window().get(),
            self.max_active_proposals().get(),
            self.reuse_closed_ids().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] created_at: u64,
        expires_at: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("accepted")]
    fn accepted_event(&self, #[indexed] proposal_id: u64);

    #[event("rejected")]
    fn rejected_event(&self, #[indexed] proposal_id: u64);

    #[event("proposalExpired")]
    fn proposal_expired_event(&self, #[indexed] proposal_id: u64);

    #[event("configChanged")]
    fn config_changed_event(&self, #[indexed] key: &ManagedBuffer, value: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("expiryWindow")]
    fn expiry_window(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("maxActiveProposals")]
    fn max_active_proposals(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("reuseClosedIds")]
    fn reuse_closed_ids(&self) -> SingleValueMapper<bool>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("activeProposals")]
    fn active_proposals(&self) -> UnorderedSetMapper<u64>;

    // ── Voters, keyed by how many times the id has been reused ──

    #[storage_mapper("generation")]
    fn generation(&self, proposal_id: u64) -> SingleValueMapper<u64>;

    #[storage_mapper("voteRecords")]
    fn vote_records(
        &self,
        proposal_id: u64,
        generation: u64,
    ) -> VecMapper<VoteRecord<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(
        &self,
        proposal_id: u64,
        generation: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<bool>;
}
