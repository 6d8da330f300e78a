use crate::guards::account_index_prefix;
use crate::*;

impl Contract {
    pub(crate) fn make_listing_id(nft_contract_id: &AccountId, token_id: &str) -> ListingId {
        format!("{}{}{}", nft_contract_id, DELIMITER, token_id)
    }

    /// Stores `listing` and its index entries, charging the bytes written to the seller.
    /// Returns the bytes charged.
    pub(crate) fn add_listing(&mut self, listing: Listing) -> u64 {
        let initial_storage = self.storage_usage_flushed();

        let listing_id = Contract::make_listing_id(&listing.nft_contract_id, &listing.token_id);
        let seller_id = listing.seller_id.clone();
        let nft_contract_id = listing.nft_contract_id.clone();
        self.listings.insert(listing_id.clone(), listing);

        let mut by_seller_id = self.by_seller_id.remove(&seller_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::BySellerIdInner {
                account_id_hash: account_index_prefix(&seller_id),
            })
        });
        by_seller_id.insert(listing_id.clone());
        // Inner set elements are cached apart from the outer map.
        by_seller_id.flush();
        self.by_seller_id.insert(seller_id.clone(), by_seller_id);

        let mut by_nft_contract_id = self
            .by_nft_contract_id
            .remove(&nft_contract_id)
            .unwrap_or_else(|| {
                IterableSet::new(StorageKey::ByNftContractIdInner {
                    account_id_hash: account_index_prefix(&nft_contract_id),
                })
            });
        by_nft_contract_id.insert(listing_id.clone());
        by_nft_contract_id.flush();
        self.by_nft_contract_id
            .insert(nft_contract_id, by_nft_contract_id);

        let seller_bytes = self.listing_bytes.get(&seller_id).copied().unwrap_or(0);
        self.listing_bytes.insert(seller_id.clone(), seller_bytes);

        // Fixed-width fields below are rewritten in place without changing usage.
        let bytes = self
            .storage_usage_flushed()
            .saturating_sub(initial_storage);
        self.listing_bytes
            .insert(seller_id, seller_bytes.saturating_add(bytes));
        if let Some(stored) = self.listings.get_mut(&listing_id) {
            stored.storage_bytes = bytes;
        }
        bytes
    }

    pub(crate) fn remove_listing(
        &mut self,
        nft_contract_id: &AccountId,
        token_id: &str,
    ) -> Result<Listing, MarketplaceError> {
        let listing_id = Contract::make_listing_id(nft_contract_id, token_id);

        let listing = self
            .listings
            .remove(&listing_id)
            .ok_or_else(|| MarketplaceError::not_listed(nft_contract_id, token_id))?;

        if let Some(mut seller_set) = self.by_seller_id.remove(&listing.seller_id) {
            seller_set.remove(&listing_id);
            seller_set.flush();
            if !seller_set.is_empty() {
                self.by_seller_id
                    .insert(listing.seller_id.clone(), seller_set);
            }
        }

        if let Some(mut contract_set) = self.by_nft_contract_id.remove(nft_contract_id) {
            contract_set.remove(&listing_id);
            contract_set.flush();
            if !contract_set.is_empty() {
                self.by_nft_contract_id
                    .insert(nft_contract_id.clone(), contract_set);
            }
        }

        let seller_bytes = self
            .listing_bytes
            .get(&listing.seller_id)
            .copied()
            .unwrap_or(0)
            .saturating_sub(listing.storage_bytes);
        if seller_bytes == 0 {
            self.listing_bytes.remove(&listing.seller_id);
        } else {
            self.listing_bytes
                .insert(listing.seller_id.clone(), seller_bytes);
        }

        Ok(listing)
    }

    pub(crate) fn listing(
        &self,
        nft_contract_id: &AccountId,
        token_id: &str,
    ) -> Result<&Listing, MarketplaceError> {
        self.listings
            .get(&Contract::make_listing_id(nft_contract_id, token_id))
            .ok_or_else(|| MarketplaceError::not_listed(nft_contract_id, token_id))
    }
}
