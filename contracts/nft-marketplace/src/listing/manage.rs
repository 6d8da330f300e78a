use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn cancel_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        self.cancel(&env::predecessor_account_id(), &nft_contract_id, &token_id)
    }

    #[payable]
    #[handle_result]
    pub fn update_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        new_price: U128,
    ) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        self.update_price(
            &env::predecessor_account_id(),
            &nft_contract_id,
            &token_id,
            new_price,
        )
    }
}

impl Contract {
    pub(crate) fn cancel(
        &mut self,
        actor_id: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
    ) -> Result<(), MarketplaceError> {
        let listing = self.listing(nft_contract_id, token_id)?;
        if actor_id != &listing.seller_id {
            return Err(MarketplaceError::NotOwner);
        }
        let listing = self.remove_listing(nft_contract_id, token_id)?;
        events::emit_item_canceled(&listing.seller_id, nft_contract_id, token_id);
        Ok(())
    }

    pub(crate) fn update_price(
        &mut self,
        actor_id: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        new_price: U128,
    ) -> Result<(), MarketplaceError> {
        let listing = self.listing(nft_contract_id, token_id)?;
        if actor_id != &listing.seller_id {
            return Err(MarketplaceError::NotOwner);
        }
        if new_price.0 == 0 {
            return Err(MarketplaceError::PriceMustBeAboveZero);
        }

        let mut listing = listing.clone();
        let old_price = listing.price;
        listing.price = new_price;
        let seller_id = listing.seller_id.clone();
        self.listings.insert(
            Contract::make_listing_id(nft_contract_id, token_id),
            listing,
        );

        events::emit_item_updated(&seller_id, nft_contract_id, token_id, old_price, new_price);
        Ok(())
    }
}
