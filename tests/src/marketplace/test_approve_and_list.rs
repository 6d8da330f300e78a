// =============================================================================
// nft_approve → nft_on_approve Listing Tests
// =============================================================================

use anyhow::Result;
use near_workspaces::types::NearToken;
use serde_json::json;

use super::helpers::*;

async fn approve_with_price(env: &TestEnv, price: &str) -> Result<near_workspaces::result::ExecutionFinalResult> {
    Ok(env
        .deployer
        .call(env.nft.id(), "nft_approve")
        .args_json(json!({
            "token_id": TOKEN_ID,
            "account_id": env.marketplace.id(),
            "msg": json!({ "price": price }).to_string(),
        }))
        .deposit(DEPOSIT_APPROVE)
        .max_gas()
        .transact()
        .await?)
}

async fn fund_listing_storage(env: &TestEnv) -> Result<()> {
    env.deployer
        .call(env.marketplace.id(), "storage_deposit")
        .args_json(json!({}))
        .deposit(DEPOSIT_LISTING)
        .transact()
        .await?
        .into_result()?;
    Ok(())
}

#[tokio::test]
async fn test_list_via_nft_approve() -> Result<()> {
    let env = setup().await?;
    fund_listing_storage(&env).await?;

    let result = approve_with_price(&env, &PRICE.as_yoctonear().to_string()).await?;
    assert!(result.is_success(), "nft_approve should succeed: {:?}", result.failures());
    assert_event(&result, "item_listed");

    let listing = get_listing(&env.marketplace, &env.nft, TOKEN_ID)
        .await?
        .expect("listing should exist");
    assert_eq!(listing.seller_id, env.deployer.id().to_string());
    assert_eq!(listing.price, PRICE.as_yoctonear().to_string());

    Ok(())
}

#[tokio::test]
async fn test_listed_via_nft_approve_can_be_bought() -> Result<()> {
    let env = setup().await?;
    fund_listing_storage(&env).await?;
    approve_with_price(&env, &PRICE.as_yoctonear().to_string())
        .await?
        .into_result()?;

    buy_item(&env.marketplace, &env.player, &env.nft, TOKEN_ID, PRICE)
        .await?
        .into_result()?;

    assert_eq!(
        owner_of(&env.nft, TOKEN_ID).await?,
        Some(env.player.id().to_string())
    );

    Ok(())
}

#[tokio::test]
async fn test_nft_approve_without_storage_does_not_list() -> Result<()> {
    let env = setup().await?;

    let result = approve_with_price(&env, &NearToken::from_near(1).as_yoctonear().to_string()).await?;
    assert_failed_with(&result, "Insufficient storage");
    assert!(get_listing(&env.marketplace, &env.nft, TOKEN_ID).await?.is_none());

    Ok(())
}
