mod builder;

mod contract;
mod marketplace;
mod storage;

pub use contract::*;
pub use marketplace::*;
pub use storage::*;

pub(crate) const STANDARD: &str = "nft-marketplace";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const LISTING: &str = "LISTING_UPDATE";
pub(crate) const PROCEEDS: &str = "PROCEEDS_UPDATE";
pub(crate) const STORAGE: &str = "STORAGE_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
