// =============================================================================
// Storage & Admin Integration Tests
// =============================================================================

use anyhow::Result;
use serde_json::json;

use super::helpers::*;

#[tokio::test]
async fn test_listing_locks_storage_until_cancelled() -> Result<()> {
    let env = setup_listed().await?;

    let locked: String = env
        .marketplace
        .view("storage_locked_of")
        .args_json(json!({ "account_id": env.deployer.id() }))
        .await?
        .json()?;
    let locked: u128 = locked.parse()?;
    assert!(locked > 0);
    assert!(locked < DEPOSIT_LISTING.as_yoctonear());

    let result = env
        .deployer
        .call(env.marketplace.id(), "storage_withdraw")
        .deposit(ONE_YOCTO)
        .max_gas()
        .transact()
        .await?;
    assert!(result.is_success(), "storage_withdraw should succeed: {:?}", result.failures());
    let withdrawn: String = result.json()?;
    assert_eq!(withdrawn, (DEPOSIT_LISTING.as_yoctonear() - locked).to_string());

    let result = env
        .deployer
        .call(env.marketplace.id(), "storage_withdraw")
        .deposit(ONE_YOCTO)
        .transact()
        .await?;
    assert_failed_with(&result, "No storage available to withdraw");

    cancel_listing(&env.marketplace, &env.deployer, &env.nft, TOKEN_ID)
        .await?
        .into_result()?;

    let result = env
        .deployer
        .call(env.marketplace.id(), "storage_withdraw")
        .deposit(ONE_YOCTO)
        .max_gas()
        .transact()
        .await?;
    assert!(result.is_success(), "storage_withdraw should succeed: {:?}", result.failures());
    let withdrawn: String = result.json()?;
    assert_eq!(withdrawn, locked.to_string());

    Ok(())
}

#[tokio::test]
async fn test_set_owner_is_owner_only() -> Result<()> {
    let env = setup().await?;

    let result = env
        .player
        .call(env.marketplace.id(), "set_owner")
        .args_json(json!({ "new_owner": env.player.id() }))
        .deposit(ONE_YOCTO)
        .transact()
        .await?;
    assert_failed_with(&result, "Unauthorized");

    let result = env
        .deployer
        .call(env.marketplace.id(), "set_owner")
        .args_json(json!({ "new_owner": env.player.id() }))
        .deposit(ONE_YOCTO)
        .transact()
        .await?;
    assert!(result.is_success(), "set_owner should succeed: {:?}", result.failures());
    assert_event(&result, "owner_changed");

    let owner: String = env.marketplace.view("get_owner").await?.json()?;
    assert_eq!(owner, env.player.id().to_string());

    Ok(())
}

#[tokio::test]
async fn test_version_matches_package() -> Result<()> {
    let env = setup().await?;

    let version: String = env.marketplace.view("version").await?.json()?;
    assert_eq!(version, "0.1.0");

    Ok(())
}
