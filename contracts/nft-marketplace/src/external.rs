#![allow(dead_code)]

use std::collections::HashMap;

use near_sdk::json_types::U128;
use near_sdk::{AccountId, ext_contract, near};

/// The subset of a NEP-171 token view the marketplace reads back.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct Token {
    pub token_id: String,
    pub owner_id: AccountId,
    pub approved_account_ids: Option<HashMap<AccountId, u64>>,
}

#[ext_contract(ext_nft_contract)]
pub trait ExtNftContract {
    fn nft_token(&self, token_id: String) -> Option<Token>;

    fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        approval_id: Option<u64>,
        memo: Option<String>,
    );
}

#[ext_contract(ext_self)]
pub trait ExtSelf {
    fn on_list_item_verified(
        &mut self,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
    );

    fn resolve_purchase(
        &mut self,
        buyer_id: AccountId,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
        deposit: U128,
    ) -> U128;

    fn on_proceeds_withdrawn(&mut self, account_id: AccountId, amount: U128);
}
