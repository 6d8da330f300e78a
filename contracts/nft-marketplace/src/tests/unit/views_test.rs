use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn get_listing_unknown_is_none() {
    let contract = new_contract();
    assert!(contract.get_listing(nft(), "42".into()).is_none());
}

#[test]
fn listing_views_page_and_filter() {
    let mut contract = new_contract();
    seed_listing(&mut contract, &seller(), "0", PRICE);
    seed_listing(&mut contract, &seller(), "1", PRICE);
    seed_listing(&mut contract, &buyer(), "2", PRICE);

    testing_env!(context(owner()).build());
    assert_eq!(contract.get_supply_listings(), 3);
    assert_eq!(contract.get_listings(None, None).len(), 3);
    assert_eq!(contract.get_listings(Some(1), Some(1)).len(), 1);

    let by_seller: Vec<_> = contract
        .get_listings_by_seller(seller(), None, None)
        .into_iter()
        .map(|l| l.token_id)
        .collect();
    assert_eq!(by_seller, vec!["0".to_string(), "1".to_string()]);

    assert_eq!(contract.get_listings_by_nft_contract(nft(), None, None).len(), 3);
    assert!(contract.get_listings_by_seller(owner(), None, None).is_empty());
}

#[test]
fn listing_views_cap_limit() {
    let mut contract = new_contract();
    for i in 0..(MAX_VIEW_LIMIT + 5) {
        seed_listing(&mut contract, &seller(), &i.to_string(), PRICE);
    }

    assert_eq!(
        contract.get_listings(None, Some(MAX_VIEW_LIMIT * 2)).len() as u64,
        MAX_VIEW_LIMIT
    );
    assert_eq!(
        contract.get_listings(None, None).len() as u64,
        DEFAULT_VIEW_LIMIT
    );
}

#[test]
fn listing_ids_are_scoped_by_contract() {
    let id_a = Contract::make_listing_id(&nft(), "1");
    let id_b = Contract::make_listing_id(&"other.near".parse().unwrap(), "1");
    assert_eq!(id_a, "nft.near:1");
    assert_ne!(id_a, id_b);
}
