use near_sdk::serde::Serialize;
use near_sdk::serde_json::{self, Map, Value};
use near_sdk::{AccountId, env};

use super::{PREFIX, STANDARD, VERSION};

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct EventLog {
    standard: &'static str,
    version: &'static str,
    event: &'static str,
    data: [Value; 1],
}

/// A single `EVENT_JSON` entry. `operation` and `author` are always present;
/// the remaining keys depend on the operation.
pub(crate) struct MarketEvent {
    event: &'static str,
    data: Map<String, Value>,
}

impl MarketEvent {
    pub(crate) fn new(event: &'static str, operation: &str, author: &AccountId) -> Self {
        let mut data = Map::new();
        data.insert("operation".into(), operation.into());
        data.insert("author".into(), author.as_str().into());
        Self { event, data }
    }

    /// Identifies the listed token.
    pub(crate) fn listing(self, nft_contract_id: &AccountId, token_id: &str) -> Self {
        self.account("nft_contract_id", nft_contract_id)
            .text("token_id", token_id)
    }

    pub(crate) fn account(self, key: &str, account_id: &AccountId) -> Self {
        self.text(key, account_id.as_str())
    }

    pub(crate) fn text(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // yoctoNEAR exceeds 2^53, so amounts and ids are written as decimal strings.
    pub(crate) fn amount(self, key: &str, yocto: u128) -> Self {
        self.text(key, &yocto.to_string())
    }

    pub(crate) fn id(self, key: &str, id: u64) -> Self {
        self.text(key, &id.to_string())
    }

    pub(crate) fn emit(self) {
        let log = EventLog {
            standard: STANDARD,
            version: VERSION,
            event: self.event,
            data: [Value::Object(self.data)],
        };
        if let Ok(json) = serde_json::to_string(&log) {
            env::log_str(&format!("{PREFIX}{json}"));
        }
    }
}
