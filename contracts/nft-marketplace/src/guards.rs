use crate::*;

/// Prefix for an account's inner index set.
pub(crate) fn account_index_prefix(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), MarketplaceError> {
    let attached = env::attached_deposit();
    if attached == ONE_YOCTO {
        return Ok(());
    }
    Err(MarketplaceError::InsufficientDeposit(format!(
        "Requires attached deposit of exactly 1 yoctoNEAR, got {}",
        attached.as_yoctonear()
    )))
}

pub(crate) fn check_token_id(token_id: &str) -> Result<(), MarketplaceError> {
    if (1..=MAX_TOKEN_ID_LEN).contains(&token_id.len()) {
        return Ok(());
    }
    Err(MarketplaceError::InvalidInput(format!(
        "Token ID must be 1 to {MAX_TOKEN_ID_LEN} characters"
    )))
}

impl Contract {
    /// Owner-only calls: the predecessor must be the owner and attach 1 yoctoNEAR.
    pub(crate) fn check_owner_call(&self) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        if env::predecessor_account_id() != self.owner_id {
            return Err(MarketplaceError::only_owner("the marketplace owner"));
        }
        Ok(())
    }
}
