use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn new_sets_owner_and_version() {
    let contract = new_contract();
    assert_eq!(contract.get_owner(), &owner());
    assert_eq!(contract.version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(contract.get_supply_listings(), 0);
}

#[test]
fn set_owner_by_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());

    contract.set_owner(seller()).unwrap();
    assert_eq!(contract.get_owner(), &seller());
}

#[test]
fn set_owner_by_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(seller(), 1).build());

    let err = contract.set_owner(seller()).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
}

#[test]
fn set_owner_same_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());

    let err = contract.set_owner(owner()).unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
}

#[test]
fn update_contract_by_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(seller(), 1).build());

    let err = expect_err(contract.update_contract());
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
}

#[test]
fn update_contract_without_code_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());

    let err = expect_err(contract.update_contract());
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
}
