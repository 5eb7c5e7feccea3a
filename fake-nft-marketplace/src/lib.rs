#![no_std]

multiversx_sc::imports!();

pub mod marketplace_proxy;

// ============================================================
// Constants
// ============================================================

/// Every fake NFT costs 0.1 EGLD.
const NFT_PRICE: u64 = 100_000_000_000_000_000;

// ============================================================
// Contract
// ============================================================

/// Toy marketplace the DAO buys from: a fixed price, an availability
/// registry, and a payable purchase that records the buyer.
#[multiversx_sc::contract]
pub trait FakeNftMarketplace {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: purchase
    // ========================================================

    #[endpoint(purchase)]
    #[payable("EGLD")]
    fn purchase(&self, token_id: u64) {
        require!(self.token_owner(token_id).is_empty(), "Token already sold");

        let payment = self.call_value().egld_value().clone_value();
        require!(
            payment == BigUint::from(NFT_PRICE),
            "Payment does not match the NFT price"
        );

        let caller = self.blockchain().get_caller();
        self.token_owner(token_id).set(&caller);

        self.purchase_event(token_id, &caller, &payment);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getPrice)]
    fn get_price(&self) -> BigUint {
        BigUint::from(NFT_PRICE)
    }

    #[view(available)]
    fn available(&self, token_id: u64) -> bool {
        self.token_owner(token_id).is_empty()
    }

    #[view(tokenOwner)]
    fn get_token_owner(&self, token_id: u64) -> ManagedAddress {
        require!(!self.token_owner(token_id).is_empty(), "Token not sold yet");
        self.token_owner(token_id).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("purchase")]
    fn purchase_event(
        &self,
        #[indexed] token_id: u64,
        #[indexed] buyer: &ManagedAddress,
        price: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    /// Empty until the token is sold.
    #[storage_mapper("tokenOwner")]
    fn token_owner(&self, token_id: u64) -> SingleValueMapper<ManagedAddress>;
}
