use anyhow::{Context, Result};
use near_workspaces::network::Sandbox;
use near_workspaces::{Contract, Worker};
use std::path::PathBuf;
use std::time::Duration;

const SANDBOX_ATTEMPTS: u32 = 6;
const SANDBOX_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Starts a sandbox node, retrying failed startups.
pub async fn setup_sandbox() -> Result<Worker<Sandbox>> {
    let mut attempt = 1;
    loop {
        match near_workspaces::sandbox().await {
            Ok(worker) => return Ok(worker),
            Err(e) if attempt < SANDBOX_ATTEMPTS => {
                eprintln!("[setup_sandbox] attempt {attempt}/{SANDBOX_ATTEMPTS} failed: {e}");
                attempt += 1;
                tokio::time::sleep(SANDBOX_RETRY_DELAY).await;
            }
            Err(e) => {
                return Err(e).context(format!(
                    "sandbox did not start after {SANDBOX_ATTEMPTS} attempts"
                ));
            }
        }
    }
}

/// Dev-deploys the built WASM of a workspace contract, e.g. `"nft-marketplace"`.
pub async fn deploy_contract(worker: &Worker<Sandbox>, contract_name: &str) -> Result<Contract> {
    let path = get_wasm_path(contract_name);
    let wasm = std::fs::read(&path)
        .with_context(|| format!("missing WASM at {}; run `cargo near build`", path.display()))?;
    Ok(worker.dev_deploy(&wasm).await?)
}

/// `<NAME>_WASM_PATH` overrides the `cargo near build` output location.
pub fn get_wasm_path(contract_name: &str) -> PathBuf {
    let artifact = contract_name.replace('-', "_");
    let env_key = format!("{}_WASM_PATH", artifact.to_uppercase());
    match std::env::var(env_key) {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../target/near")
            .join(&artifact)
            .join(format!("{artifact}.wasm")),
    }
}
