use near_sdk::AccountId;

use super::STORAGE;
use super::builder::MarketEvent;

pub fn emit_storage_deposit(account_id: &AccountId, deposit: u128, new_balance: u128) {
    MarketEvent::new(STORAGE, "storage_deposit", account_id)
        .account("account_id", account_id)
        .amount("deposit", deposit)
        .amount("new_balance", new_balance)
        .emit();
}

pub fn emit_storage_withdraw(account_id: &AccountId, amount: u128, new_balance: u128) {
    MarketEvent::new(STORAGE, "storage_withdraw", account_id)
        .account("account_id", account_id)
        .amount("amount", amount)
        .amount("new_balance", new_balance)
        .emit();
}
