//! Supported chains and their public block explorers.
//!
//! Explorer links are built by appending the address, unmodified, to a fixed
//! per-chain prefix. Chain names coming back from the validation service are
//! matched case-insensitively; anything unrecognised resolves to an empty link.
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Blockchain {
    Bitcoin,
    Ethereum,
    Polygon,
    Optimism,
    Base,
    Solana,
    Cardano,
    Sui,
    Aptos,
}

impl Blockchain {
    /// Explorer URL prefix; the address is appended as the final path segment.
    pub fn explorer_prefix(&self) -> &'static str {
        match self {
            Blockchain::Bitcoin => "https://www.blockchain.com/btc/address/",
            Blockchain::Ethereum => "https://etherscan.io/address/",
            Blockchain::Polygon => "https://polygonscan.com/address/",
            Blockchain::Optimism => "https://optimistic.etherscan.io/address/",
            Blockchain::Base => "https://basescan.org/address/",
            Blockchain::Solana => "https://explorer.solana.com/address/",
            Blockchain::Cardano => "https://cardanoscan.io/address/",
            Blockchain::Sui => "https://suiscan.xyz/address/",
            Blockchain::Aptos => "https://explorer.aptoslabs.com/account/",
        }
    }

    pub fn explorer_url(&self, address: &str) -> String {
        format!("{}{}", self.explorer_prefix(), address)
    }
}

/// Resolves the explorer link for a chain name reported by the validation service.
///
/// Returns an empty string for chains without a known explorer.
pub fn explorer_url(blockchain: &str, address: &str) -> String {
    blockchain
        .parse::<Blockchain>()
        .map(|chain| chain.explorer_url(address))
        .unwrap_or_default()
}
