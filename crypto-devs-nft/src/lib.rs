#![no_std]

multiversx_sc::imports!();

pub mod nft_proxy;

// ============================================================
// Constants
// ============================================================

/// Hard cap on the collection. Token ids run 0..19.
const MAX_TOKEN_IDS: u64 = 20;

// ============================================================
// Contract
// ============================================================

/// Minimal enumerable registry for the CryptoDevs governance
/// collection. Holding a token grants DAO membership; the DAO reads
/// holdings through `balanceOf` / `tokenOfOwnerByIndex`.
#[multiversx_sc::contract]
pub trait CryptoDevsNft {
    #[init]
    fn init(&self) {
        self.total_supply().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: mint
    // Sequential ids, capped collection, one token per call.
    // ========================================================

    #[endpoint(mint)]
    fn mint(&self) -> u64 {
        let total = self.total_supply().get();
        require!(total < MAX_TOKEN_IDS, "Collection fully minted");

        let caller = self.blockchain().get_caller();
        let token_id = total;

        self.token_owner(token_id).set(&caller);
        self.tokens_of(&caller).insert(token_id);
        self.total_supply().set(total + 1);

        self.mint_event(token_id, &caller);

        token_id
    }

    // ========================================================
    // ENDPOINT: transfer
    // Moves one token between holders. Enumeration order on the
    // sender side is not preserved (swap-remove).
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, token_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(token_id < self.total_supply().get(), "Token does not exist");
        require!(
            self.token_owner(token_id).get() == caller,
            "Not the token owner"
        );

        self.tokens_of(&caller).swap_remove(&token_id);
        self.tokens_of(&to).insert(token_id);
        self.token_owner(token_id).set(&to);

        self.transfer_event(token_id, &caller, &to);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, address: ManagedAddress) -> u64 {
        self.tokens_of(&address).len() as u64
    }

    #[view(tokenOfOwnerByIndex)]
    fn token_of_owner_by_index(&self, address: ManagedAddress, index: u64) -> u64 {
        let tokens = self.tokens_of(&address);
        require!((index as usize) < tokens.len(), "Owner index out of range");
        tokens.get_by_index(index as usize + 1)
    }

    #[view(ownerOf)]
    fn owner_of(&self, token_id: u64) -> ManagedAddress {
        require!(token_id < self.total_supply().get(), "Token does not exist");
        self.token_owner(token_id).get()
    }

    #[view(totalSupply)]
    fn get_total_supply(&self) -> u64 {
        self.total_supply().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("mint")]
    fn mint_event(&self, #[indexed] token_id: u64, #[indexed] owner: &ManagedAddress);

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] token_id: u64,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("tokenOwner")]
    fn token_owner(&self, token_id: u64) -> SingleValueMapper<ManagedAddress>;

    /// Per-holder enumeration set backing `tokenOfOwnerByIndex`.
    #[storage_mapper("tokensOf")]
    fn tokens_of(&self, address: &ManagedAddress) -> UnorderedSetMapper<u64>;
}
