use crate::external::ext_self;
use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    pub fn get_proceeds(&self, account_id: AccountId) -> U128 {
        U128(self.proceeds.get(&account_id).copied().unwrap_or(0))
    }

    /// Sends the caller's full proceeds balance. The balance is zeroed before the transfer
    /// and restored by `on_proceeds_withdrawn` if the transfer fails.
    #[payable]
    #[handle_result]
    pub fn withdraw_proceeds(&mut self) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;
        let account_id = env::predecessor_account_id();
        let amount = self.take_proceeds(&account_id)?;

        Ok(Promise::new(account_id.clone())
            .transfer(NearToken::from_yoctonear(amount))
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_WITHDRAW_CALLBACK_TGAS))
                    .on_proceeds_withdrawn(account_id, U128(amount)),
            ))
    }

    #[private]
    pub fn on_proceeds_withdrawn(&mut self, account_id: AccountId, amount: U128) {
        let sent = env::promise_result_checked(0, 16).is_ok();
        self.settle_withdrawal(sent, &account_id, amount.0);
    }
}

impl Contract {
    pub(crate) fn credit_proceeds(&mut self, account_id: &AccountId, amount: u128) {
        let balance = self.proceeds.get(account_id).copied().unwrap_or(0);
        self.proceeds
            .insert(account_id.clone(), balance.saturating_add(amount));
    }

    pub(crate) fn take_proceeds(&mut self, account_id: &AccountId) -> Result<u128, MarketplaceError> {
        match self.proceeds.remove(account_id) {
            Some(amount) if amount > 0 => Ok(amount),
            _ => Err(MarketplaceError::NoProceeds),
        }
    }

    pub(crate) fn settle_withdrawal(&mut self, sent: bool, account_id: &AccountId, amount: u128) {
        if sent {
            events::emit_proceeds_withdrawn(account_id, amount);
        } else {
            self.credit_proceeds(account_id, amount);
            events::emit_proceeds_withdraw_failed(account_id, amount);
        }
    }
}
