use multiversx_sc::proxy_imports::*;

use crate::types::{Proposal, Vote};

pub struct CryptoDevsDaoProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CryptoDevsDaoProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CryptoDevsDaoProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CryptoDevsDaoProxyMethods { wrapped_tx: tx }
    }
}

pub struct CryptoDevsDaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> CryptoDevsDaoProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    /// Payable deploy; the attached EGLD seeds the treasury.
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        nft_address: Arg0,
        marketplace_address: Arg1,
    ) -> TxTypedDeploy<Env, From, (), Gas, ()> {
        self.wrapped_tx
            .raw_deploy()
            .argument(&nft_address)
            .argument(&marketplace_address)
            .original_result()
    }
}

impl<Env, From, To, Gas> CryptoDevsDaoProxyMethods<Env, From, To, Gas>
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

    /// Payable. The attached EGLD is added to the treasury.
    pub fn deposit(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("deposit").original_result()
    }

    pub fn create_proposal<Arg0: ProxyArg<u64>>(
        self,
        nft_token_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createProposal")
            .argument(&nft_token_id)
            .original_result()
    }

    pub fn vote_on_proposal<Arg0: ProxyArg<u64>, Arg1: ProxyArg<Vote>>(
        self,
        proposal_index: Arg0,
        vote: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("voteOnProposal")
            .argument(&proposal_index)
            .argument(&vote)
            .original_result()
    }

    pub fn execute_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("executeProposal")
            .argument(&proposal_index)
            .original_result()
    }

    pub fn withdraw_ether(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawEther")
            .original_result()
    }

    pub fn transfer_ownership<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_owner: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferOwnership")
            .argument(&new_owner)
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_index)
            .original_result()
    }

    pub fn get_proposals<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposals")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_num_proposals(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNumProposals")
            .original_result()
    }

    pub fn get_treasury_balance(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTreasuryBalance")
            .original_result()
    }

    pub fn get_nft_balance<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNftBalance")
            .argument(&address)
            .original_result()
    }

    pub fn has_token_voted<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        proposal_index: Arg0,
        token_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasTokenVoted")
            .argument(&proposal_index)
            .argument(&token_id)
            .original_result()
    }

    pub fn get_dao_owner(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDaoOwner")
            .original_result()
    }

    pub fn get_dao_config(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue3<ManagedAddress<Env::Api>, ManagedAddress<Env::Api>, u64>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDaoConfig")
            .original_result()
    }
}
