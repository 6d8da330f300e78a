use crate::guards::check_one_yocto;
use crate::*;

#[near]
#[derive(near_sdk::BorshStorageKey)]
pub enum StorageKey {
    Listings,
    BySellerId,
    BySellerIdInner { account_id_hash: Vec<u8> },
    ByNftContractId,
    ByNftContractIdInner { account_id_hash: Vec<u8> },
    Proceeds,
    StorageDeposits,
    ListingBytes,
}

#[near]
impl Contract {
    /// Credits the attached deposit to `account_id` (default: caller). Returns the new balance.
    #[payable]
    #[handle_result]
    pub fn storage_deposit(
        &mut self,
        account_id: Option<AccountId>,
    ) -> Result<U128, MarketplaceError> {
        let account_id = account_id.unwrap_or_else(env::predecessor_account_id);
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit == 0 {
            return Err(MarketplaceError::InsufficientDeposit(
                "Requires attached deposit of at least 1 yoctoNEAR".into(),
            ));
        }
        Ok(U128(self.credit_storage(&account_id, deposit)))
    }

    /// Withdraws everything not locked by active listings. Returns the amount sent.
    #[payable]
    #[handle_result]
    pub fn storage_withdraw(&mut self) -> Result<U128, MarketplaceError> {
        check_one_yocto()?;
        let account_id = env::predecessor_account_id();

        let available = self.storage_available(&account_id);
        if available == 0 {
            return Err(MarketplaceError::InvalidState(
                "No storage available to withdraw".into(),
            ));
        }

        let new_balance = self.storage_locked(&account_id);
        if new_balance == 0 {
            self.storage_deposits.remove(&account_id);
        } else {
            self.storage_deposits.insert(account_id.clone(), new_balance);
        }

        let _ = Promise::new(account_id.clone()).transfer(NearToken::from_yoctonear(available));
        events::emit_storage_withdraw(&account_id, available, new_balance);
        Ok(U128(available))
    }

    pub fn storage_balance_of(&self, account_id: AccountId) -> U128 {
        U128(self.storage_deposits.get(&account_id).copied().unwrap_or(0))
    }

    /// Free balance required before listing. The listing then locks its measured storage cost.
    pub fn storage_minimum_balance(&self) -> U128 {
        U128(MIN_LISTING_STORAGE.as_yoctonear())
    }

    /// Balance currently locked by the account's active listings.
    pub fn storage_locked_of(&self, account_id: AccountId) -> U128 {
        U128(self.storage_locked(&account_id))
    }
}

impl Contract {
    pub(crate) fn credit_storage(&mut self, account_id: &AccountId, amount: u128) -> u128 {
        let new_balance = self
            .storage_deposits
            .get(account_id)
            .copied()
            .unwrap_or(0)
            .saturating_add(amount);
        self.storage_deposits.insert(account_id.clone(), new_balance);
        events::emit_storage_deposit(account_id, amount, new_balance);
        new_balance
    }

    pub(crate) fn storage_locked(&self, account_id: &AccountId) -> u128 {
        let bytes = self.listing_bytes.get(account_id).copied().unwrap_or(0);
        env::storage_byte_cost()
            .saturating_mul(bytes as u128)
            .as_yoctonear()
    }

    pub(crate) fn storage_available(&self, account_id: &AccountId) -> u128 {
        self.storage_deposits
            .get(account_id)
            .copied()
            .unwrap_or(0)
            .saturating_sub(self.storage_locked(account_id))
    }

    /// Fails unless `seller_id` has at least the minimum listing balance free.
    pub(crate) fn check_listing_storage(&self, seller_id: &AccountId) -> Result<(), MarketplaceError> {
        let required = MIN_LISTING_STORAGE.as_yoctonear();
        let available = self.storage_available(seller_id);
        if available < required {
            return Err(MarketplaceError::InsufficientStorage(format!(
                "Listing requires {} yoctoNEAR of storage balance, available {}",
                required, available
            )));
        }
        Ok(())
    }

    /// Fails if the seller's balance no longer covers everything their listings lock.
    pub(crate) fn check_storage_covered(&self, seller_id: &AccountId) -> Result<(), MarketplaceError> {
        let balance = self.storage_deposits.get(seller_id).copied().unwrap_or(0);
        let locked = self.storage_locked(seller_id);
        if balance < locked {
            return Err(MarketplaceError::InsufficientStorage(format!(
                "Listings lock {} yoctoNEAR of storage, balance is {}",
                locked, balance
            )));
        }
        Ok(())
    }

    // Collections cache writes until flushed; measure only after flushing.
    pub(crate) fn storage_usage_flushed(&mut self) -> u64 {
        self.listings.flush();
        self.by_seller_id.flush();
        self.by_nft_contract_id.flush();
        self.proceeds.flush();
        self.storage_deposits.flush();
        self.listing_bytes.flush();
        env::storage_usage()
    }
}
