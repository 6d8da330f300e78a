// =============================================================================
// withdraw_proceeds Integration Tests
// =============================================================================

use anyhow::Result;
use near_workspaces::types::NearToken;

use super::helpers::*;

#[tokio::test]
async fn test_doesnt_allow_zero_proceed_withdrawals() -> Result<()> {
    let env = setup().await?;

    let result = withdraw_proceeds(&env.marketplace, &env.deployer).await?;
    assert_failed_with(&result, "NftMarketplace__NoProceeds");

    Ok(())
}

#[tokio::test]
async fn test_withdraws_proceeds() -> Result<()> {
    let env = setup_listed().await?;
    buy_item(&env.marketplace, &env.player, &env.nft, TOKEN_ID, PRICE)
        .await?
        .into_result()?;

    let proceeds_before = get_proceeds(&env.marketplace, &env.deployer).await?;
    let balance_before = env.deployer.view_account().await?.balance;

    let result = withdraw_proceeds(&env.marketplace, &env.deployer).await?;
    assert!(result.is_success(), "withdraw_proceeds should succeed: {:?}", result.failures());
    assert_event(&result, "proceeds_withdrawn");

    let balance_after = env.deployer.view_account().await?.balance;
    let gas_allowance = NearToken::from_millinear(100).as_yoctonear();
    assert!(balance_after.as_yoctonear() + gas_allowance >= balance_before.as_yoctonear() + proceeds_before);
    assert!(balance_after.as_yoctonear() <= balance_before.as_yoctonear() + proceeds_before);
    assert_eq!(get_proceeds(&env.marketplace, &env.deployer).await?, 0);

    Ok(())
}
