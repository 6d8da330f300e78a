// =============================================================================
// cancel_listing Integration Tests
// =============================================================================

use anyhow::Result;

use super::helpers::*;

#[tokio::test]
async fn test_reverts_if_there_is_no_listing() -> Result<()> {
    let env = setup().await?;

    let result = cancel_listing(&env.marketplace, &env.deployer, &env.nft, TOKEN_ID).await?;
    assert_failed_with(&result, "NftMarketplace__NotListed");

    Ok(())
}

#[tokio::test]
async fn test_reverts_if_anyone_but_the_owner_tries_to_call() -> Result<()> {
    let env = setup_listed().await?;

    let result = cancel_listing(&env.marketplace, &env.player, &env.nft, TOKEN_ID).await?;
    assert_failed_with(&result, "NftMarketplace__NotOwner");
    assert!(get_listing(&env.marketplace, &env.nft, TOKEN_ID).await?.is_some());

    Ok(())
}

#[tokio::test]
async fn test_emits_event_and_removes_listing() -> Result<()> {
    let env = setup_listed().await?;

    let result = cancel_listing(&env.marketplace, &env.deployer, &env.nft, TOKEN_ID).await?;
    assert!(result.is_success(), "cancel_listing should succeed: {:?}", result.failures());
    assert_event(&result, "item_canceled");

    assert!(get_listing(&env.marketplace, &env.nft, TOKEN_ID).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_cancelled_item_can_be_relisted() -> Result<()> {
    let env = setup_listed().await?;
    cancel_listing(&env.marketplace, &env.deployer, &env.nft, TOKEN_ID)
        .await?
        .into_result()?;

    // The first listing's storage deposit is released and reused.
    let result = list_item(&env.marketplace, &env.deployer, &env.nft, TOKEN_ID, PRICE).await?;
    assert!(result.is_success(), "relist should succeed: {:?}", result.failures());

    Ok(())
}
