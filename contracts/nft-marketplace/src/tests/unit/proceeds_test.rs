use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

#[test]
fn withdraw_without_proceeds_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(seller(), 1).build());

    let err = expect_err(contract.withdraw_proceeds());
    assert_eq!(err, MarketplaceError::NoProceeds);
    assert_eq!(err.to_string(), "NftMarketplace__NoProceeds");
}

#[test]
fn withdraw_requires_one_yocto() {
    let mut contract = new_contract();
    contract.credit_proceeds(&seller(), PRICE);
    testing_env!(context(seller()).build());

    let err = expect_err(contract.withdraw_proceeds());
    assert!(matches!(err, MarketplaceError::InsufficientDeposit(_)));
    assert_eq!(contract.get_proceeds(seller()), U128(PRICE));
}

#[test]
fn withdraw_zeroes_balance_before_transfer() {
    let mut contract = new_contract();
    contract.credit_proceeds(&seller(), PRICE);
    testing_env!(context_with_deposit(seller(), 1).build());

    assert!(contract.withdraw_proceeds().is_ok());
    assert_eq!(contract.get_proceeds(seller()), U128(0));

    // A second withdrawal in flight finds nothing.
    let err = expect_err(contract.withdraw_proceeds());
    assert_eq!(err, MarketplaceError::NoProceeds);
}

#[test]
fn settle_withdrawal_success_emits() {
    let mut contract = new_contract();
    testing_env!(context(marketplace()).build());

    contract.settle_withdrawal(true, &seller(), PRICE);

    assert_eq!(contract.get_proceeds(seller()), U128(0));
    let logs = get_logs();
    assert!(
        logs.iter().any(|l| l.contains("\"proceeds_withdrawn\"")),
        "expected proceeds_withdrawn event, got: {logs:?}"
    );
}

#[test]
fn settle_withdrawal_failure_restores_balance() {
    let mut contract = new_contract();
    testing_env!(context(marketplace()).build());

    contract.settle_withdrawal(false, &seller(), PRICE);

    assert_eq!(contract.get_proceeds(seller()), U128(PRICE));
}
