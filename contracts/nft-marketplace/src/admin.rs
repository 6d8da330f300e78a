use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            listings: IterableMap::new(StorageKey::Listings),
            by_seller_id: LookupMap::new(StorageKey::BySellerId),
            by_nft_contract_id: LookupMap::new(StorageKey::ByNftContractId),
            proceeds: LookupMap::new(StorageKey::Proceeds),
            storage_deposits: LookupMap::new(StorageKey::StorageDeposits),
            listing_bytes: LookupMap::new(StorageKey::ListingBytes),
        }
    }

    #[payable]
    #[handle_result]
    pub fn set_owner(&mut self, new_owner: AccountId) -> Result<(), MarketplaceError> {
        self.check_owner_call()?;
        if new_owner == self.owner_id {
            return Err(MarketplaceError::InvalidInput(
                "New owner must differ from current owner".into(),
            ));
        }
        let old_owner = std::mem::replace(&mut self.owner_id, new_owner);
        events::emit_owner_changed(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
