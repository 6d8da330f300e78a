//! Dogie NFT. NEP-171/177/178/181 compliant; every token points at the same metadata URI.

use near_contract_standards::non_fungible_token::events::NftMint;
use near_contract_standards::non_fungible_token::metadata::{
    NFT_METADATA_SPEC, NFTContractMetadata, NonFungibleTokenMetadataProvider,
};
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{
    AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise, env, near, require,
};

mod approval;
mod enumeration;
mod external;
mod nft_core;
mod types;


pub use types::{Token, TokenId, TokenMetadata, TokenRecord};

pub const TOKEN_URI: &str =
    "ipfs://bafybeig37ioir76s7mg5oobetncojcm3c3hxasyd4rvid4jqhy4gkaheg4/?filename=0-PUG.json";

const NAME: &str = "Dogie";
const SYMBOL: &str = "DOG";

#[derive(BorshStorageKey)]
#[near]
enum StorageKey {
    TokensById,
    TokensPerOwner,
    TokensPerOwnerInner { account_id_hash: Vec<u8> },
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep177", version = "2.0.0"),
        standard(standard = "nep178", version = "1.0.0"),
        standard(standard = "nep181", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    owner_id: AccountId,
    metadata: NFTContractMetadata,
    /// Id of the next token to mint; equals the number of tokens ever minted.
    token_counter: u64,
    tokens_by_id: IterableMap<TokenId, TokenRecord>,
    tokens_per_owner: LookupMap<AccountId, IterableSet<TokenId>>,
}

#[near]
impl Contract {
    /// Defaults to the Dogie/DOG collection metadata when `metadata` is omitted.
    #[init]
    pub fn new(owner_id: AccountId, metadata: Option<NFTContractMetadata>) -> Self {
        let metadata = metadata.unwrap_or_else(|| NFTContractMetadata {
            spec: NFT_METADATA_SPEC.to_string(),
            name: NAME.to_string(),
            symbol: SYMBOL.to_string(),
            icon: None,
            base_uri: None,
            reference: None,
            reference_hash: None,
        });
        require!(!metadata.name.is_empty(), "Token name cannot be empty");
        require!(!metadata.symbol.is_empty(), "Token symbol cannot be empty");

        Self {
            owner_id,
            metadata,
            token_counter: 0,
            tokens_by_id: IterableMap::new(StorageKey::TokensById),
            tokens_per_owner: LookupMap::new(StorageKey::TokensPerOwner),
        }
    }

    /// Mints the next token to the caller. Attached deposit must cover storage; excess is refunded.
    #[payable]
    pub fn mint_nft(&mut self) -> TokenId {
        let owner_id = env::predecessor_account_id();
        let initial_storage = self.storage_usage_flushed();

        let token_id = self.token_counter.to_string();
        self.tokens_by_id.insert(
            token_id.clone(),
            TokenRecord::new(owner_id.clone(), TOKEN_URI.to_string()),
        );
        self.add_token_to_owner(&owner_id, &token_id);
        self.token_counter += 1;

        let storage_used = self
            .storage_usage_flushed()
            .saturating_sub(initial_storage);
        refund_storage_deposit(storage_used);

        NftMint {
            owner_id: &owner_id,
            token_ids: &[token_id.as_str()],
            memo: None,
        }
        .emit();

        token_id
    }

    pub fn get_token_counter(&self) -> u64 {
        self.token_counter
    }

    /// The URI every minted token is created with.
    pub fn default_token_uri(&self) -> String {
        TOKEN_URI.to_string()
    }

    pub fn token_uri(&self, token_id: TokenId) -> Option<String> {
        self.tokens_by_id
            .get(&token_id)
            .map(|token| token.token_uri.clone())
    }

    pub fn balance_of(&self, account_id: AccountId) -> u64 {
        self.tokens_per_owner
            .get(&account_id)
            .map(|tokens| tokens.len() as u64)
            .unwrap_or(0)
    }

    pub fn owner_of(&self, token_id: TokenId) -> Option<AccountId> {
        self.tokens_by_id
            .get(&token_id)
            .map(|token| token.owner_id.clone())
    }

    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    /// Transfers contract administration. Owner only.
    pub fn set_owner(&mut self, new_owner: AccountId) {
        self.assert_owner();
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner.clone();
        env::log_str(&format!(
            "Owner changed from {} to {}",
            old_owner, new_owner
        ));
    }

    /// Updates collection icon. Owner only.
    pub fn set_icon(&mut self, icon: Option<String>) {
        self.assert_owner();
        self.metadata.icon = icon;
        env::log_str("Icon updated");
    }
}

// --- NEP-177: Non-Fungible Token Metadata ---
#[near]
impl NonFungibleTokenMetadataProvider for Contract {
    fn nft_metadata(&self) -> NFTContractMetadata {
        self.metadata.clone()
    }
}

impl Contract {
    fn assert_owner(&self) {
        require!(
            env::predecessor_account_id() == self.owner_id,
            "Only owner can call this method"
        );
    }

    pub(crate) fn add_token_to_owner(&mut self, owner_id: &AccountId, token_id: &str) {
        if !self.tokens_per_owner.contains_key(owner_id) {
            self.tokens_per_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::TokensPerOwnerInner {
                    account_id_hash: env::sha256(owner_id.as_bytes()),
                }),
            );
        }
        if let Some(owner_tokens) = self.tokens_per_owner.get_mut(owner_id) {
            owner_tokens.insert(token_id.to_string());
            // Inner set elements are cached apart from the outer map.
            owner_tokens.flush();
        }
    }

    pub(crate) fn remove_token_from_owner(&mut self, owner_id: &AccountId, token_id: &str) {
        if let Some(owner_tokens) = self.tokens_per_owner.get_mut(owner_id) {
            owner_tokens.remove(token_id);
            owner_tokens.flush();
            if owner_tokens.is_empty() {
                self.tokens_per_owner.remove(owner_id);
            }
        }
    }

    /// Panics unless `token_id` exists and is owned by `owner_id`.
    pub(crate) fn owned_token(&self, owner_id: &AccountId, token_id: &str) -> TokenRecord {
        let token = self
            .tokens_by_id
            .get(token_id)
            .unwrap_or_else(|| env::panic_str("Token not found"));
        require!(
            &token.owner_id == owner_id,
            "Only the token owner can manage approvals"
        );
        token.clone()
    }

    /// Drops the approval for `account_id`, or every approval when `None`, and refunds the
    /// freed storage to the owner. Returns the amount refunded.
    pub(crate) fn release_approvals(
        &mut self,
        owner_id: &AccountId,
        token_id: &str,
        account_id: Option<&AccountId>,
    ) -> NearToken {
        let mut token = self.owned_token(owner_id, token_id);
        let removed = match account_id {
            Some(account_id) => token.approved_account_ids.remove(account_id).is_some(),
            None => {
                let had_approvals = !token.approved_account_ids.is_empty();
                token.approved_account_ids.clear();
                had_approvals
            }
        };
        if !removed {
            return NearToken::from_yoctonear(0);
        }

        let initial_storage = self.storage_usage_flushed();
        self.tokens_by_id.insert(token_id.to_string(), token);
        let released = initial_storage.saturating_sub(self.storage_usage_flushed());
        refund_released_storage(owner_id, released)
    }

    // Collections cache writes; flush before measuring so storage deltas are real.
    pub(crate) fn storage_usage_flushed(&mut self) -> u64 {
        self.tokens_by_id.flush();
        self.tokens_per_owner.flush();
        env::storage_usage()
    }
}

pub(crate) fn assert_one_yocto() {
    require!(
        env::attached_deposit() == NearToken::from_yoctonear(1),
        "Requires attached deposit of exactly 1 yoctoNEAR"
    );
}

pub(crate) fn assert_at_least_one_yocto() {
    require!(
        env::attached_deposit() >= NearToken::from_yoctonear(1),
        "Requires attached deposit of at least 1 yoctoNEAR"
    );
}

/// Charges `storage_used` bytes against the attached deposit and refunds the rest to the caller.
pub(crate) fn refund_storage_deposit(storage_used: u64) {
    let required = env::storage_byte_cost().saturating_mul(storage_used as u128);
    let attached = env::attached_deposit();
    require!(
        attached >= required,
        format!(
            "Must attach {} yoctoNEAR to cover storage",
            required.as_yoctonear()
        )
    );

    let refund = attached.saturating_sub(required);
    if refund > NearToken::from_yoctonear(1) {
        let _ = Promise::new(env::predecessor_account_id()).transfer(refund);
    }
}

/// Sends the cost of `released` bytes back to `account_id`.
pub(crate) fn refund_released_storage(account_id: &AccountId, released: u64) -> NearToken {
    let refund = env::storage_byte_cost().saturating_mul(released as u128);
    if !refund.is_zero() {
        let _ = Promise::new(account_id.clone()).transfer(refund);
    }
    refund
}
