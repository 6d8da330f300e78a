use crate::external::*;
use crate::*;

#[near]
impl Contract {
    /// Buys a listed token at its asking price. Payment above the price is refunded once the
    /// transfer settles; the seller is credited in `resolve_purchase`.
    #[payable]
    #[handle_result]
    pub fn buy_item(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<Promise, MarketplaceError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        let listing = self.take_listing_for_purchase(&buyer_id, &nft_contract_id, &token_id, deposit)?;

        Ok(ext_nft_contract::ext(nft_contract_id.clone())
            .with_static_gas(Gas::from_tgas(GAS_NFT_TRANSFER_TGAS))
            .with_attached_deposit(ONE_YOCTO)
            .nft_transfer(
                buyer_id.clone(),
                token_id.clone(),
                Some(listing.approval_id),
                Some("Purchased on NFT marketplace".to_string()),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_RESOLVE_PURCHASE_TGAS))
                    .resolve_purchase(
                        buyer_id,
                        listing.seller_id,
                        nft_contract_id,
                        token_id,
                        listing.price,
                        U128(deposit),
                    ),
            ))
    }

    /// Returns the price credited to the seller, or 0 if the transfer failed and the buyer was refunded.
    #[private]
    pub fn resolve_purchase(
        &mut self,
        buyer_id: AccountId,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
        deposit: U128,
    ) -> U128 {
        let transferred = env::promise_result_checked(0, 16).is_ok();
        self.settle_purchase(
            transferred,
            &buyer_id,
            &seller_id,
            &nft_contract_id,
            &token_id,
            price,
            deposit,
        )
    }
}

impl Contract {
    /// Validates the purchase and removes the listing before any cross-contract call.
    pub(crate) fn take_listing_for_purchase(
        &mut self,
        buyer_id: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        deposit: u128,
    ) -> Result<Listing, MarketplaceError> {
        let listing = self.listing(nft_contract_id, token_id)?;
        if buyer_id == &listing.seller_id {
            return Err(MarketplaceError::InvalidInput(
                "Cannot purchase your own listing".into(),
            ));
        }
        if deposit < listing.price.0 {
            return Err(MarketplaceError::PriceNotMet {
                nft_contract_id: nft_contract_id.clone(),
                token_id: token_id.to_string(),
                price: listing.price,
            });
        }

        self.remove_listing(nft_contract_id, token_id)
    }

    // Must not panic: the token may already have moved.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn settle_purchase(
        &mut self,
        transferred: bool,
        buyer_id: &AccountId,
        seller_id: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        price: U128,
        deposit: U128,
    ) -> U128 {
        if !transferred {
            events::emit_purchase_failed(
                buyer_id,
                seller_id,
                nft_contract_id,
                token_id,
                price,
                "nft_transfer_failed",
            );
            if deposit.0 > 0 {
                let _ = Promise::new(buyer_id.clone()).transfer(NearToken::from_yoctonear(deposit.0));
            }
            return U128(0);
        }

        self.credit_proceeds(seller_id, price.0);
        events::emit_item_bought(buyer_id, seller_id, nft_contract_id, token_id, price);

        let excess = deposit.0.saturating_sub(price.0);
        if excess > 0 {
            let _ = Promise::new(buyer_id.clone()).transfer(NearToken::from_yoctonear(excess));
        }

        price
    }
}
