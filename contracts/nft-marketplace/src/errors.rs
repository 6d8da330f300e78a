use near_sdk::AccountId;
use near_sdk::json_types::U128;
use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum MarketplaceError {
    AlreadyListed {
        nft_contract_id: AccountId,
        token_id: String,
    },
    NotOwner,
    NotApprovedForMarketplace,
    NotListed {
        nft_contract_id: AccountId,
        token_id: String,
    },
    PriceNotMet {
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
    },
    NoProceeds,
    PriceMustBeAboveZero,
    Unauthorized(String),
    InvalidInput(String),
    InvalidState(String),
    InsufficientDeposit(String),
    InsufficientStorage(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyListed {
                nft_contract_id,
                token_id,
            } => write!(
                f,
                "NftMarketplace__AlreadyListed: {} token {}",
                nft_contract_id, token_id
            ),
            Self::NotOwner => write!(f, "NftMarketplace__NotOwner"),
            Self::NotApprovedForMarketplace => {
                write!(f, "NftMarketplace__NotApprovedForMarketplace")
            }
            Self::NotListed {
                nft_contract_id,
                token_id,
            } => write!(
                f,
                "NftMarketplace__NotListed: {} token {}",
                nft_contract_id, token_id
            ),
            Self::PriceNotMet {
                nft_contract_id,
                token_id,
                price,
            } => write!(
                f,
                "NftMarketplace__PriceNotMet: {} token {} costs {} yoctoNEAR",
                nft_contract_id, token_id, price.0
            ),
            Self::NoProceeds => write!(f, "NftMarketplace__NoProceeds"),
            Self::PriceMustBeAboveZero => write!(f, "NftMarketplace__PriceMustBeAboveZero"),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InsufficientStorage(msg) => write!(f, "Insufficient storage: {}", msg),
        }
    }
}

impl MarketplaceError {
    pub fn already_listed(nft_contract_id: &AccountId, token_id: &str) -> Self {
        Self::AlreadyListed {
            nft_contract_id: nft_contract_id.clone(),
            token_id: token_id.to_string(),
        }
    }
    pub fn not_listed(nft_contract_id: &AccountId, token_id: &str) -> Self {
        Self::NotListed {
            nft_contract_id: nft_contract_id.clone(),
            token_id: token_id.to_string(),
        }
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
