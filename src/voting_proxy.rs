use multiversx_sc::proxy_imports::*;

use crate::types::{Proposal, ProposalState, VoteRecord};

pub struct VotingProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for VotingProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = VotingProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        VotingProxyMethods { wrapped_tx: tx }
    }
}

pub struct VotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> VotingProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<bool>,
    >(
        self,
        weight_source_address: Arg0,
        expiry_window: Arg1,
        max_active_proposals: Arg2,
        reuse_closed_ids: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&weight_source_address)
            .argument(&expiry_window)
            .argument(&max_active_proposals)
            .argument(&reuse_closed_ids)
            .original_result()
    }
}

impl<Env, From, To, Gas> VotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> VotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn get_new_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNewProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn vote<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<bool>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        proposal_id: Arg0,
        support: Arg1,
        weight: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&proposal_id)
            .argument(&support)
            .argument(&weight)
            .original_result()
    }

    pub fn set_expiry_window<Arg0: ProxyArg<u64>>(
        self,
        expiry_window: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setExpiryWindow")
            .argument(&expiry_window)
            .original_result()
    }

    pub fn set_max_active_proposals<Arg0: ProxyArg<u64>>(
        self,
        max_active_proposals: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMaxActiveProposals")
            .argument(&max_active_proposals)
            .original_result()
    }

    pub fn set_reuse_closed_ids<Arg0: ProxyArg<bool>>(
        self,
        reuse_closed_ids: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setReuseClosedIds")
            .argument(&reuse_closed_ids)
            .original_result()
    }

    pub fn if_proposal_is_active<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("ifProposalIsActive")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposal_state<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalState> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalState")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_active_proposals(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getActiveProposals")
            .original_result()
    }

    pub fn has_voted<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        proposal_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVoted")
            .argument(&proposal_id)
            .argument(&voter)
            .original_result()
    }

    pub fn get_vote_records<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, VoteRecord<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoteRecords")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_config(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue4<ManagedAddress<Env::Api>, u64, u64, bool>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getConfig")
            .original_result()
    }
}
