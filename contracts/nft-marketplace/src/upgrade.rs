use crate::*;

#[near]
impl Contract {
    /// Deploys the WASM passed as raw call input and runs `migrate`. Owner only.
    #[payable]
    #[handle_result]
    pub fn update_contract(&mut self) -> Result<Promise, MarketplaceError> {
        self.check_owner_call()?;
        let code = env::input()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| MarketplaceError::InvalidInput("No contract code in input".into()))?;

        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return())
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut contract: Self =
            env::state_read().unwrap_or_else(|| env::panic_str("State read failed"));
        let old_version = contract.version.clone();
        contract.version = env!("CARGO_PKG_VERSION").to_string();

        events::emit_contract_upgraded(&env::current_account_id(), &old_version, &contract.version);

        contract
    }
}
