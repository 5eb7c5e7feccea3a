multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Vote — ballot choice
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Vote {
    Yay,
    Nay,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct Proposal {
    /// Marketplace token id this proposal wants to buy.
    pub nft_token_id: u64,
    /// Block timestamp at which voting closes. Fixed at creation.
    pub deadline: u64,
    pub yay_votes: u64,
    pub nay_votes: u64,
    /// Set once an execution pass has been finalized, whether or not
    /// a purchase happened. Terminal.
    pub executed: bool,
}
