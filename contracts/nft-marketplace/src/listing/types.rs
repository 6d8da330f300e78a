use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

/// `"{nft_contract_id}:{token_id}"`.
pub type ListingId = String;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub seller_id: AccountId,
    pub nft_contract_id: AccountId,
    pub token_id: String,
    pub price: U128,
    /// Approval the seller granted this marketplace; presented on transfer.
    pub approval_id: u64,
    /// Storage bytes this listing occupies, locked from the seller's storage balance.
    pub storage_bytes: u64,
}

/// `msg` accepted by `nft_on_approve`.
#[near(serializers = [json])]
pub(crate) struct ListingArgs {
    pub price: U128,
}
