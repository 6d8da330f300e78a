use near_sdk::{AccountId, Gas, Promise, env, near};

use crate::external::ext_nft_approval_receiver;
use crate::*;

const GAS_FOR_NFT_ON_APPROVE: Gas = Gas::from_tgas(30);

#[near]
impl Contract {
    /// Single-approval semantics: replaces every existing approval on the token.
    /// `None` clears all approvals. Returns the new approval id, if any.
    #[payable]
    pub fn approve(&mut self, account_id: Option<AccountId>, token_id: TokenId) -> Option<u64> {
        assert_at_least_one_yocto();
        let owner_id = env::predecessor_account_id();
        let mut token = self.owned_token(&owner_id, &token_id);

        let initial_storage = self.storage_usage_flushed();
        token.approved_account_ids.clear();
        let approval_id = account_id
            .clone()
            .map(|account_id| token.grant_approval(account_id));
        self.tokens_by_id.insert(token_id.clone(), token);

        let final_storage = self.storage_usage_flushed();
        refund_storage_deposit(final_storage.saturating_sub(initial_storage));
        refund_released_storage(&owner_id, initial_storage.saturating_sub(final_storage));

        match account_id {
            Some(account_id) => env::log_str(&format!(
                "Token {} approved for {} (approval_id {})",
                token_id,
                account_id,
                approval_id.unwrap_or_default()
            )),
            None => env::log_str(&format!("Token {} approvals cleared", token_id)),
        }

        approval_id
    }

    /// The most recently approved account, if any.
    pub fn get_approved(&self, token_id: TokenId) -> Option<AccountId> {
        self.tokens_by_id.get(&token_id).and_then(|token| {
            token
                .approved_account_ids
                .iter()
                .max_by_key(|(_, approval_id)| **approval_id)
                .map(|(account_id, _)| account_id.clone())
        })
    }

    /// NEP-178. Adds `account_id` alongside existing approvals; with `msg`, notifies it via `nft_on_approve`.
    #[payable]
    pub fn nft_approve(
        &mut self,
        token_id: TokenId,
        account_id: AccountId,
        msg: Option<String>,
    ) -> Option<Promise> {
        assert_at_least_one_yocto();
        let owner_id = env::predecessor_account_id();
        let mut token = self.owned_token(&owner_id, &token_id);

        let initial_storage = self.storage_usage_flushed();
        let approval_id = token.grant_approval(account_id.clone());
        self.tokens_by_id.insert(token_id.clone(), token);

        let storage_used = self
            .storage_usage_flushed()
            .saturating_sub(initial_storage);
        refund_storage_deposit(storage_used);

        msg.map(|msg| {
            ext_nft_approval_receiver::ext(account_id)
                .with_static_gas(GAS_FOR_NFT_ON_APPROVE)
                .nft_on_approve(token_id, owner_id, approval_id, msg)
        })
    }

    /// Refunds the storage the approval occupied to the owner.
    #[payable]
    pub fn nft_revoke(&mut self, token_id: TokenId, account_id: AccountId) {
        assert_one_yocto();
        let owner_id = env::predecessor_account_id();
        self.release_approvals(&owner_id, &token_id, Some(&account_id));
    }

    #[payable]
    pub fn nft_revoke_all(&mut self, token_id: TokenId) {
        assert_one_yocto();
        let owner_id = env::predecessor_account_id();
        self.release_approvals(&owner_id, &token_id, None);
    }

    /// If `approval_id` is supplied, it must also match.
    pub fn nft_is_approved(
        &self,
        token_id: TokenId,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool {
        self.tokens_by_id.get(&token_id).is_some_and(|token| {
            token
                .approved_account_ids
                .get(&approved_account_id)
                .is_some_and(|actual| approval_id.is_none_or(|id| *actual == id))
        })
    }
}
