use std::collections::HashMap;

use near_contract_standards::non_fungible_token::events::NftTransfer;
use near_sdk::{AccountId, Gas, PromiseOrValue, env, near, require};

use crate::external::ext_nft_receiver;
use crate::*;

const GAS_FOR_NFT_ON_TRANSFER: Gas = Gas::from_tgas(25);
const GAS_FOR_RESOLVE_TRANSFER: Gas = Gas::from_tgas(10);

#[near]
impl Contract {
    /// Callable by the owner or an approved account. Clears all approvals on the token.
    #[payable]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) {
        assert_one_yocto();
        let sender_id = env::predecessor_account_id();
        self.internal_transfer(&sender_id, &receiver_id, &token_id, approval_id, memo);
    }

    #[payable]
    pub fn nft_transfer_call(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
        approval_id: Option<u64>,
        memo: Option<String>,
        msg: String,
    ) -> PromiseOrValue<bool> {
        assert_one_yocto();
        let sender_id = env::predecessor_account_id();
        let (previous_owner_id, previous_approvals) =
            self.internal_transfer(&sender_id, &receiver_id, &token_id, approval_id, memo);

        ext_nft_receiver::ext(receiver_id.clone())
            .with_static_gas(GAS_FOR_NFT_ON_TRANSFER)
            .nft_on_transfer(sender_id, previous_owner_id.clone(), token_id.clone(), msg)
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(GAS_FOR_RESOLVE_TRANSFER)
                    .nft_resolve_transfer(
                        previous_owner_id,
                        receiver_id,
                        token_id,
                        Some(previous_approvals),
                    ),
            )
            .into()
    }

    pub fn nft_token(&self, token_id: TokenId) -> Option<Token> {
        self.tokens_by_id
            .get(&token_id)
            .map(|record| Token::from_record(&token_id, record, &self.metadata.name))
    }

    /// Returns `true` if the token ended up with `receiver_id`.
    #[private]
    pub fn nft_resolve_transfer(
        &mut self,
        previous_owner_id: AccountId,
        receiver_id: AccountId,
        token_id: TokenId,
        approved_account_ids: Option<HashMap<AccountId, u64>>,
    ) -> bool {
        // A failed receiver call counts as a request to return the token.
        let must_revert = match env::promise_result_checked(0, 16) {
            Ok(value) => near_sdk::serde_json::from_slice::<bool>(&value).unwrap_or(true),
            Err(_) => true,
        };
        if !must_revert {
            return true;
        }

        let Some(mut token) = self.tokens_by_id.get(&token_id).cloned() else {
            return true;
        };
        // Receiver already passed the token on; nothing to return.
        if token.owner_id != receiver_id {
            return true;
        }

        self.remove_token_from_owner(&receiver_id, &token_id);
        self.add_token_to_owner(&previous_owner_id, &token_id);
        token.owner_id = previous_owner_id.clone();
        if let Some(approvals) = approved_account_ids {
            token.approved_account_ids = approvals;
        }
        self.tokens_by_id.insert(token_id.clone(), token);

        NftTransfer {
            old_owner_id: &receiver_id,
            new_owner_id: &previous_owner_id,
            token_ids: &[token_id.as_str()],
            authorized_id: None,
            memo: None,
        }
        .emit();

        false
    }
}

impl Contract {
    /// Moves `token_id` to `receiver_id`; returns the previous owner and approvals.
    pub(crate) fn internal_transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: &str,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) -> (AccountId, HashMap<AccountId, u64>) {
        let mut token = self
            .tokens_by_id
            .get(token_id)
            .cloned()
            .unwrap_or_else(|| env::panic_str("Token not found"));

        if sender_id != &token.owner_id {
            let Some(actual_approval_id) = token.approved_account_ids.get(sender_id).copied()
            else {
                env::panic_str("Sender not approved");
            };
            require!(
                approval_id.is_none_or(|id| id == actual_approval_id),
                format!(
                    "The actual approval_id {} is different from the given approval_id {:?}",
                    actual_approval_id, approval_id
                )
            );
        }
        require!(
            &token.owner_id != receiver_id,
            "Current and next owner must differ"
        );

        let previous_owner_id = token.owner_id.clone();
        let previous_approvals = std::mem::take(&mut token.approved_account_ids);

        self.remove_token_from_owner(&previous_owner_id, token_id);
        self.add_token_to_owner(receiver_id, token_id);
        token.owner_id = receiver_id.clone();
        self.tokens_by_id.insert(token_id.to_string(), token);

        NftTransfer {
            old_owner_id: &previous_owner_id,
            new_owner_id: receiver_id,
            token_ids: &[token_id],
            authorized_id: if sender_id != &previous_owner_id {
                Some(sender_id)
            } else {
                None
            },
            memo: memo.as_deref(),
        }
        .emit();

        (previous_owner_id, previous_approvals)
    }
}
