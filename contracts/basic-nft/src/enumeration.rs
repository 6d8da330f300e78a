use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

use crate::*;

#[near]
impl Contract {
    pub fn nft_total_supply(&self) -> U128 {
        U128(self.tokens_by_id.len() as u128)
    }

    pub fn nft_tokens(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<Token> {
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100) as usize;

        self.tokens_by_id
            .iter()
            .skip(start)
            .take(limit)
            .map(|(token_id, record)| Token::from_record(token_id, record, &self.metadata.name))
            .collect()
    }

    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> U128 {
        U128(self.balance_of(account_id) as u128)
    }

    pub fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<Token> {
        let Some(owner_tokens) = self.tokens_per_owner.get(&account_id) else {
            return vec![];
        };

        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100) as usize;

        owner_tokens
            .iter()
            .skip(start)
            .filter_map(|token_id| {
                self.tokens_by_id
                    .get(token_id.as_str())
                    .map(|record| Token::from_record(token_id, record, &self.metadata.name))
            })
            .take(limit)
            .collect()
    }
}
