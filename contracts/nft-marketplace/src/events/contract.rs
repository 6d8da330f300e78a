use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::MarketEvent;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    MarketEvent::new(CONTRACT, "contract_upgrade", contract_id)
        .text("old_version", old_version)
        .text("new_version", new_version)
        .emit();
}

pub fn emit_owner_changed(old_owner: &AccountId, new_owner: &AccountId) {
    MarketEvent::new(CONTRACT, "owner_changed", old_owner)
        .account("old_owner", old_owner)
        .account("new_owner", new_owner)
        .emit();
}
