use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::builder::MarketEvent;
use super::{LISTING, PROCEEDS};

// --- LISTING_UPDATE ---

pub fn emit_item_listed(
    seller_id: &AccountId,
    nft_contract_id: &AccountId,
    token_id: &str,
    price: U128,
    approval_id: u64,
) {
    MarketEvent::new(LISTING, "item_listed", seller_id)
        .account("seller_id", seller_id)
        .listing(nft_contract_id, token_id)
        .amount("price", price.0)
        .id("approval_id", approval_id)
        .emit();
}

pub fn emit_item_canceled(seller_id: &AccountId, nft_contract_id: &AccountId, token_id: &str) {
    MarketEvent::new(LISTING, "item_canceled", seller_id)
        .account("seller_id", seller_id)
        .listing(nft_contract_id, token_id)
        .emit();
}

pub fn emit_item_updated(
    seller_id: &AccountId,
    nft_contract_id: &AccountId,
    token_id: &str,
    old_price: U128,
    new_price: U128,
) {
    MarketEvent::new(LISTING, "item_updated", seller_id)
        .account("seller_id", seller_id)
        .listing(nft_contract_id, token_id)
        .amount("old_price", old_price.0)
        .amount("new_price", new_price.0)
        .emit();
}

pub fn emit_item_bought(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    nft_contract_id: &AccountId,
    token_id: &str,
    price: U128,
) {
    MarketEvent::new(LISTING, "item_bought", buyer_id)
        .account("buyer_id", buyer_id)
        .account("seller_id", seller_id)
        .listing(nft_contract_id, token_id)
        .amount("price", price.0)
        .emit();
}

/// The listing is gone and the buyer has been refunded.
pub fn emit_purchase_failed(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    nft_contract_id: &AccountId,
    token_id: &str,
    price: U128,
    reason: &str,
) {
    MarketEvent::new(LISTING, "purchase_failed", buyer_id)
        .account("buyer_id", buyer_id)
        .account("seller_id", seller_id)
        .listing(nft_contract_id, token_id)
        .amount("price", price.0)
        .text("reason", reason)
        .emit();
}

// --- PROCEEDS_UPDATE ---

pub fn emit_proceeds_withdrawn(account_id: &AccountId, amount: u128) {
    MarketEvent::new(PROCEEDS, "proceeds_withdrawn", account_id)
        .account("account_id", account_id)
        .amount("amount", amount)
        .emit();
}

pub fn emit_proceeds_withdraw_failed(account_id: &AccountId, amount: u128) {
    MarketEvent::new(PROCEEDS, "proceeds_withdraw_failed", account_id)
        .account("account_id", account_id)
        .amount("amount", amount)
        .emit();
}
