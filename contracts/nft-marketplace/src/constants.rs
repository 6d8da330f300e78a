use near_sdk::NearToken;

pub const MAX_TOKEN_ID_LEN: usize = 256;
// Upper bound on the `nft_token` JSON read back in the listing callback.
pub const MAX_TOKEN_JSON_LEN: usize = 16_384;

/// Storage balance a seller must have free before a listing is attempted. The amount
/// actually locked is the measured byte footprint of the listing.
pub const MIN_LISTING_STORAGE: NearToken = NearToken::from_millinear(10);

// Storage key invariant: delimiter cannot appear in NEAR account IDs, so listing ids never collide.
pub const DELIMITER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const DEFAULT_VIEW_LIMIT: u64 = 50;
pub const MAX_VIEW_LIMIT: u64 = 100;

pub const GAS_NFT_TOKEN_TGAS: u64 = 10;
pub const GAS_LIST_CALLBACK_TGAS: u64 = 20;
pub const GAS_NFT_TRANSFER_TGAS: u64 = 30;
pub const GAS_RESOLVE_PURCHASE_TGAS: u64 = 30;
pub const GAS_WITHDRAW_CALLBACK_TGAS: u64 = 15;
pub const GAS_MIGRATE_TGAS: u64 = 200;
