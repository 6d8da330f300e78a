use crate::external::*;
use crate::guards::check_token_id;
use crate::listing::types::ListingArgs;
use crate::*;

#[near]
impl Contract {
    /// Lists a token the caller owns and has approved this marketplace for.
    /// Ownership and approval are verified against the NFT contract in `on_list_item_verified`.
    /// Any attached deposit is credited to the caller's storage balance first.
    #[payable]
    #[handle_result]
    pub fn list_item(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
    ) -> Result<Promise, MarketplaceError> {
        let seller_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit > 0 {
            self.credit_storage(&seller_id, deposit);
        }

        self.check_listable(&seller_id, &nft_contract_id, &token_id, price)?;

        Ok(ext_nft_contract::ext(nft_contract_id.clone())
            .with_static_gas(Gas::from_tgas(GAS_NFT_TOKEN_TGAS))
            .nft_token(token_id.clone())
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_LIST_CALLBACK_TGAS))
                    .on_list_item_verified(seller_id, nft_contract_id, token_id, price),
            ))
    }

    #[private]
    #[handle_result]
    pub fn on_list_item_verified(
        &mut self,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
    ) -> Result<(), MarketplaceError> {
        let token = match env::promise_result_checked(0, MAX_TOKEN_JSON_LEN) {
            Ok(value) => near_sdk::serde_json::from_slice::<Option<Token>>(&value)
                .unwrap_or_else(|e| {
                    env::log_str(&format!("Listing failed: unreadable nft_token response: {e}"));
                    None
                }),
            Err(_) => {
                env::log_str("Listing failed: nft_token call failed");
                None
            }
        };

        let approval_id = verify_listed_token(&seller_id, token.as_ref())?;
        self.complete_listing(seller_id, nft_contract_id, token_id, price, approval_id)
    }

    /// NEP-178 approval receiver. A `msg` of `{"price":"<yocto>"}` lists the token in the same step.
    #[handle_result]
    pub fn nft_on_approve(
        &mut self,
        token_id: String,
        owner_id: AccountId,
        approval_id: u64,
        msg: String,
    ) -> Result<(), MarketplaceError> {
        let nft_contract_id = env::predecessor_account_id();
        if env::signer_account_id() != owner_id {
            return Err(MarketplaceError::Unauthorized(
                "Only the token owner can list through nft_approve".into(),
            ));
        }

        let ListingArgs { price } = near_sdk::serde_json::from_str(&msg).map_err(|_| {
            MarketplaceError::InvalidInput("msg must be {\"price\":\"<yoctoNEAR>\"}".into())
        })?;

        self.check_listable(&owner_id, &nft_contract_id, &token_id, price)?;
        self.complete_listing(owner_id, nft_contract_id, token_id, price, approval_id)
    }
}

impl Contract {
    /// Checks that run before the NFT contract is consulted.
    pub(crate) fn check_listable(
        &self,
        seller_id: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        price: U128,
    ) -> Result<(), MarketplaceError> {
        check_token_id(token_id)?;
        let listing_id = Contract::make_listing_id(nft_contract_id, token_id);
        if self.listings.contains_key(&listing_id) {
            return Err(MarketplaceError::already_listed(nft_contract_id, token_id));
        }
        if price.0 == 0 {
            return Err(MarketplaceError::PriceMustBeAboveZero);
        }
        self.check_listing_storage(seller_id)
    }

    pub(crate) fn complete_listing(
        &mut self,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
        approval_id: u64,
    ) -> Result<(), MarketplaceError> {
        // Re-checked: another listing may have landed while the ownership check was in flight.
        let listing_id = Contract::make_listing_id(&nft_contract_id, &token_id);
        if self.listings.contains_key(&listing_id) {
            return Err(MarketplaceError::already_listed(&nft_contract_id, &token_id));
        }
        self.check_listing_storage(&seller_id)?;

        self.add_listing(Listing {
            seller_id: seller_id.clone(),
            nft_contract_id: nft_contract_id.clone(),
            token_id: token_id.clone(),
            price,
            approval_id,
            storage_bytes: 0,
        });
        if let Err(err) = self.check_storage_covered(&seller_id) {
            self.remove_listing(&nft_contract_id, &token_id)?;
            return Err(err);
        }

        events::emit_item_listed(&seller_id, &nft_contract_id, &token_id, price, approval_id);
        Ok(())
    }
}

/// Returns the approval id this marketplace holds on `token`, provided `seller_id` owns it.
pub(crate) fn verify_listed_token(
    seller_id: &AccountId,
    token: Option<&Token>,
) -> Result<u64, MarketplaceError> {
    let token = token.ok_or(MarketplaceError::NotOwner)?;
    if &token.owner_id != seller_id {
        return Err(MarketplaceError::NotOwner);
    }
    token
        .approved_account_ids
        .as_ref()
        .and_then(|approvals| approvals.get(&env::current_account_id()))
        .copied()
        .ok_or(MarketplaceError::NotApprovedForMarketplace)
}
