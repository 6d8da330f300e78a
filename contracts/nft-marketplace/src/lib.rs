use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;
mod external;

mod listing;
mod proceeds;
mod storage;

mod admin;
mod upgrade;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::MarketplaceError;
pub use listing::{Listing, ListingId};
pub use storage::StorageKey;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep178", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub listings: IterableMap<ListingId, Listing>,
    pub(crate) by_seller_id: LookupMap<AccountId, IterableSet<ListingId>>,
    pub(crate) by_nft_contract_id: LookupMap<AccountId, IterableSet<ListingId>>,

    // Credited only by a confirmed transfer; debited only by withdrawal.
    pub(crate) proceeds: LookupMap<AccountId, u128>,
    pub(crate) storage_deposits: LookupMap<AccountId, u128>,
    /// Bytes held by each seller's active listings.
    pub(crate) listing_bytes: LookupMap<AccountId, u64>,
}
