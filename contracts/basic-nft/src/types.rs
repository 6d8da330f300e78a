use std::collections::HashMap;

use near_sdk::{AccountId, near};

pub type TokenId = String;

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct TokenRecord {
    pub owner_id: AccountId,
    pub token_uri: String,
    pub approved_account_ids: HashMap<AccountId, u64>,
    /// Per-token counter; never reused after a revoke or transfer.
    pub next_approval_id: u64,
}

impl TokenRecord {
    pub fn new(owner_id: AccountId, token_uri: String) -> Self {
        Self {
            owner_id,
            token_uri,
            approved_account_ids: HashMap::new(),
            next_approval_id: 0,
        }
    }

    pub(crate) fn grant_approval(&mut self, account_id: AccountId) -> u64 {
        let approval_id = self.next_approval_id;
        self.next_approval_id += 1;
        self.approved_account_ids.insert(account_id, approval_id);
        approval_id
    }
}

/// NEP-177 token metadata; `reference` carries the token URI.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct TokenMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<String>,
    pub copies: Option<u64>,
    pub reference: Option<String>,
}

/// NEP-171 token view.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct Token {
    pub token_id: TokenId,
    pub owner_id: AccountId,
    pub metadata: Option<TokenMetadata>,
    pub approved_account_ids: Option<HashMap<AccountId, u64>>,
}

impl Token {
    pub(crate) fn from_record(token_id: &str, record: &TokenRecord, collection: &str) -> Self {
        Self {
            token_id: token_id.to_string(),
            owner_id: record.owner_id.clone(),
            metadata: Some(TokenMetadata {
                title: Some(format!("{} #{}", collection, token_id)),
                description: None,
                media: None,
                copies: Some(1),
                reference: Some(record.token_uri.clone()),
            }),
            approved_account_ids: Some(record.approved_account_ids.clone()),
        }
    }
}
