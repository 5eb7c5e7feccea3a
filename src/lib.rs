#![no_std]

multiversx_sc::imports!();

pub mod dao_proxy;
pub mod marketplace_proxy;
pub mod nft_proxy;
pub mod types;

use types::{Proposal, Vote};

// ============================================================
// Constants
// ============================================================

/// Voting window: 5 minutes in seconds. Fixed at proposal creation.
const VOTING_WINDOW: u64 = 300;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CryptoDevsDao {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Payable so the deployer can seed the treasury in the same
    /// transaction that creates the DAO.
    #[init]
    #[payable("EGLD")]
    fn init(&self, nft_address: ManagedAddress, marketplace_address: ManagedAddress) {
        self.nft_address().set(&nft_address);
        self.marketplace_address().set(&marketplace_address);
        self.dao_owner().set(&self.blockchain().get_caller());
        self.num_proposals().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Unsolicited treasury funding, open to anyone at any time.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();
        self.deposit_event(&caller, &payment_amount);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Any NFT holder can propose buying a token that the
    // marketplace still lists as available.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, nft_token_id: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let marketplace_addr = self.marketplace_address().get();
        let for_sale: bool = self
            .tx()
            .to(&marketplace_addr)
            .typed(marketplace_proxy::FakeNftMarketplaceProxy)
            .available(nft_token_id)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(for_sale, "NFT not for sale");

        let proposal_index = self.num_proposals().get();
        let deadline = self.blockchain().get_block_timestamp() + VOTING_WINDOW;

        let proposal = Proposal {
            nft_token_id,
            deadline,
            yay_votes: 0,
            nay_votes: 0,
            executed: false,
        };

        self.proposals(proposal_index).set(&proposal);
        self.num_proposals().set(proposal_index + 1);

        self.proposal_created_event(proposal_index, &caller, nft_token_id, deadline);

        proposal_index
    }

    // ========================================================
    // ENDPOINT: voteOnProposal
    // Voting power is per token id, not per member: every NFT the
    // caller holds that has not yet voted on this proposal counts
    // one vote. Power is re-evaluated at vote time, so holdings
    // acquired mid-proposal add fresh votes while transferred
    // tokens carry their spent mark to the new holder.
    // ========================================================

    #[endpoint(voteOnProposal)]
    fn vote_on_proposal(&self, proposal_index: u64, vote: Vote) {
        let caller = self.blockchain().get_caller();
        self.require_proposal_exists(proposal_index);
        self.require_member(&caller);

        let mut proposal = self.proposals(proposal_index).get();
        let now = self.blockchain().get_block_timestamp();
        require!(now < proposal.deadline, "Voting period has expired");

        let nft_addr = self.nft_address().get();
        let balance: u64 = self
            .tx()
            .to(&nft_addr)
            .typed(nft_proxy::CryptoDevsNftProxy)
            .balance_of(caller.clone())
            .returns(ReturnsResult)
            .sync_call_readonly();

        let mut voted = self.voted_tokens(proposal_index);
        let mut num_votes = 0u64;
        for index in 0..balance {
            let token_id: u64 = self
                .tx()
                .to(&nft_addr)
                .typed(nft_proxy::CryptoDevsNftProxy)
                .token_of_owner_by_index(caller.clone(), index)
                .returns(ReturnsResult)
                .sync_call_readonly();
            if voted.insert(token_id) {
                num_votes += 1;
            }
        }
        require!(num_votes > 0, "Already voted");

        match vote {
            Vote::Yay => proposal.yay_votes += num_votes,
            Vote::Nay => proposal.nay_votes += num_votes,
        }
        self.proposals(proposal_index).set(&proposal);

        self.vote_cast_event(proposal_index, &caller, vote == Vote::Yay, num_votes);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Callable by any member once the window has closed. A strict
    // yay majority triggers the purchase; a tie is a rejection.
    // Both outcomes mark the proposal executed. An underfunded
    // treasury instead fails the whole call, so the proposal stays
    // executable after a deposit.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_index: u64) {
        let caller = self.blockchain().get_caller();
        self.require_proposal_exists(proposal_index);
        self.require_member(&caller);

        let mut proposal = self.proposals(proposal_index).get();
        let now = self.blockchain().get_block_timestamp();
        require!(now >= proposal.deadline, "Voting period has not ended");
        require!(!proposal.executed, "Proposal already executed");

        let mut purchased = false;
        if proposal.yay_votes > proposal.nay_votes {
            let marketplace_addr = self.marketplace_address().get();
            let price: BigUint = self
                .tx()
                .to(&marketplace_addr)
                .typed(marketplace_proxy::FakeNftMarketplaceProxy)
                .get_price()
                .returns(ReturnsResult)
                .sync_call_readonly();

            let treasury = self
                .blockchain()
                .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
            require!(treasury >= price, "Insufficient treasury balance");

            self.tx()
                .to(&marketplace_addr)
                .typed(marketplace_proxy::FakeNftMarketplaceProxy)
                .purchase(proposal.nft_token_id)
                .egld(&price)
                .sync_call();
            purchased = true;
        }

        proposal.executed = true;
        self.proposals(proposal_index).set(&proposal);

        self.proposal_executed_event(proposal_index, &caller, purchased);
    }

    // ========================================================
    // ENDPOINT: withdrawEther
    // Owner drains the full treasury. A failed transfer aborts the
    // transaction, leaving the balance untouched.
    // ========================================================

    #[endpoint(withdrawEther)]
    fn withdraw_ether(&self) {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);

        let amount = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(amount > 0u64, "Nothing to withdraw");

        self.send().direct_egld(&caller, &amount);
        self.withdraw_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: transferOwnership
    // Not exercised by the governance flow itself; exists so the
    // privileged identity can be handed over.
    // ========================================================

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);
        require!(!new_owner.is_zero(), "New owner cannot be the zero address");

        self.dao_owner().set(&new_owner);
        self.ownership_transferred_event(&caller, &new_owner);
    }

    // ========================================================
    // INTERNAL: gating checks
    // ========================================================

    fn require_member(&self, caller: &ManagedAddress) {
        let nft_addr = self.nft_address().get();
        let balance: u64 = self
            .tx()
            .to(&nft_addr)
            .typed(nft_proxy::CryptoDevsNftProxy)
            .balance_of(caller.clone())
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(balance > 0, "Not a DAO member");
    }

    fn require_owner(&self, caller: &ManagedAddress) {
        require!(
            caller == &self.dao_owner().get(),
            "Caller is not the DAO owner"
        );
    }

    /// Out-of-range indices must be rejected explicitly, never read
    /// back as a zeroed record.
    fn require_proposal_exists(&self, proposal_index: u64) {
        require!(
            proposal_index < self.num_proposals().get(),
            "Proposal does not exist"
        );
    }

    // ========================================================
    // VIEWS — read-only queries for the dashboard
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_index: u64) -> Proposal {
        self.require_proposal_exists(proposal_index);
        self.proposals(proposal_index).get()
    }

    /// Proposals in creation order, starting at `from`. The position
    /// of each entry in the result is `from + offset`, so indices are
    /// recoverable by the caller.
    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal> {
        let mut result = MultiValueEncoded::new();
        let total = self.num_proposals().get();
        let end = core::cmp::min(from.saturating_add(count), total);
        for index in from..end {
            result.push(self.proposals(index).get());
        }
        result
    }

    #[view(getNumProposals)]
    fn get_num_proposals(&self) -> u64 {
        self.num_proposals().get()
    }

    #[view(getTreasuryBalance)]
    fn get_treasury_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    #[view(getNftBalance)]
    fn get_nft_balance(&self, address: ManagedAddress) -> u64 {
        let nft_addr = self.nft_address().get();
        self.tx()
            .to(&nft_addr)
            .typed(nft_proxy::CryptoDevsNftProxy)
            .balance_of(address)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// A token id that never voted and a token id that does not exist
    /// both read as "not present".
    #[view(hasTokenVoted)]
    fn has_token_voted(&self, proposal_index: u64, token_id: u64) -> bool {
        self.voted_tokens(proposal_index).contains(&token_id)
    }

    #[view(getDaoOwner)]
    fn get_dao_owner(&self) -> ManagedAddress {
        self.dao_owner().get()
    }

    #[view(getDaoConfig)]
    fn get_dao_config(&self) -> MultiValue3<ManagedAddress, ManagedAddress, u64> {
        let nft_addr = self.nft_address().get();
        let marketplace_addr = self.marketplace_address().get();
        (nft_addr, marketplace_addr, VOTING_WINDOW).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposit")]
    fn deposit_event(&self, #[indexed] sender: &ManagedAddress, amount: &BigUint);

    #[event("withdraw")]
    fn withdraw_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] nft_token_id: u64,
        deadline: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] yay: bool,
        num_votes: u64,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] executor: &ManagedAddress,
        purchased: bool,
    );

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("nftAddress")]
    fn nft_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("marketplaceAddress")]
    fn marketplace_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("daoOwner")]
    fn dao_owner(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Proposals ──

    #[storage_mapper("numProposals")]
    fn num_proposals(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_index: u64) -> SingleValueMapper<Proposal>;

    /// Token ids already consumed to vote on a given proposal.
    #[storage_mapper("votedTokens")]
    fn voted_tokens(&self, proposal_index: u64) -> UnorderedSetMapper<u64>;
}
