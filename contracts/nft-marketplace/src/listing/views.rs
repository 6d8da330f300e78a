use crate::*;

#[near]
impl Contract {
    /// `None` once the listing is cancelled or bought.
    pub fn get_listing(&self, nft_contract_id: AccountId, token_id: String) -> Option<Listing> {
        let listing_id = Contract::make_listing_id(&nft_contract_id, &token_id);
        self.listings.get(&listing_id).cloned()
    }

    pub fn get_supply_listings(&self) -> u64 {
        self.listings.len() as u64
    }

    pub fn get_supply_by_seller(&self, account_id: AccountId) -> u64 {
        self.by_seller_id
            .get(&account_id)
            .map(|set| set.len() as u64)
            .unwrap_or(0)
    }

    pub fn get_supply_by_nft_contract(&self, nft_contract_id: AccountId) -> u64 {
        self.by_nft_contract_id
            .get(&nft_contract_id)
            .map(|set| set.len() as u64)
            .unwrap_or(0)
    }

    pub fn get_listings(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<Listing> {
        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_VIEW_LIMIT).min(MAX_VIEW_LIMIT);

        self.listings
            .iter()
            .skip(start as usize)
            .take(limit as usize)
            .map(|(_, listing)| listing.clone())
            .collect()
    }

    pub fn get_listings_by_seller(
        &self,
        account_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<Listing> {
        let Some(listing_ids) = self.by_seller_id.get(&account_id) else {
            return vec![];
        };
        self.collect_listings(listing_ids, from_index, limit)
    }

    pub fn get_listings_by_nft_contract(
        &self,
        nft_contract_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<Listing> {
        let Some(listing_ids) = self.by_nft_contract_id.get(&nft_contract_id) else {
            return vec![];
        };
        self.collect_listings(listing_ids, from_index, limit)
    }
}

impl Contract {
    fn collect_listings(
        &self,
        listing_ids: &IterableSet<ListingId>,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<Listing> {
        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_VIEW_LIMIT).min(MAX_VIEW_LIMIT);

        listing_ids
            .iter()
            .skip(start as usize)
            .take(limit as usize)
            .filter_map(|listing_id| self.listings.get(listing_id).cloned())
            .collect()
    }
}
