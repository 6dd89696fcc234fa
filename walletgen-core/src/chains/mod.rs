// walletgen-core/src/chains/mod.rs

//! Chain Key Builder Module
//!
//! Closed set of supported chains, dispatched on the SLIP-44 coin-type tag
//! the presentation layer selects (`"501"` Solana, `"60"` Ethereum).
//! Adding a third chain = one new variant + one new builder module.

pub mod evm;
pub mod solana;

pub use evm::{EvmAddress, EvmKeys};
pub use solana::SolanaKeys;

use crate::error::{WalletError, WalletResult};

/// Chain được hỗ trợ, đóng kín theo coin type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    /// Solana — ed25519, coin_type 501
    Solana,
    /// Ethereum / EVM — secp256k1, coin_type 60
    Ethereum,
}

/// Key pair đã encode theo format user-facing của từng chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainKeyPair {
    /// Solana: base58 của 32-byte public key.
    /// Ethereum: EIP-55 checksummed address.
    pub public_key: String,
    /// Solana: base58 của 64-byte keypair bytes (secret || public).
    /// Ethereum: 0x-prefixed hex của 32-byte private key.
    pub private_key: String,
}

impl ChainKind {
    /// Resolve coin-type tag từ presentation layer
    ///
    /// Tag ngoài {"501", "60"} → `UnsupportedChain`, không tạo record nào.
    pub fn from_tag(tag: &str) -> WalletResult<Self> {
        match tag.trim() {
            "501" => Ok(ChainKind::Solana),
            "60" => Ok(ChainKind::Ethereum),
            other => Err(WalletError::UnsupportedChain(other.to_string())),
        }
    }

    /// SLIP-44 coin type
    #[inline]
    pub fn coin_type(self) -> u32 {
        match self {
            ChainKind::Solana => crate::crypto::paths::coin_type::SOLANA,
            ChainKind::Ethereum => crate::crypto::paths::coin_type::ETHEREUM,
        }
    }

    /// Tag dạng string (dùng cho durable mirror key `paths`)
    #[inline]
    pub fn tag(self) -> &'static str {
        match self {
            ChainKind::Solana => "501",
            ChainKind::Ethereum => "60",
        }
    }

    /// Tên hiển thị
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            ChainKind::Solana => "Solana",
            ChainKind::Ethereum => "Ethereum",
        }
    }

    /// Build chain-native key pair từ 32 bytes derived key material
    pub fn build_keys(self, material: &[u8; 32]) -> WalletResult<ChainKeyPair> {
        match self {
            ChainKind::Solana => Ok(SolanaKeys::build(material)),
            ChainKind::Ethereum => EvmKeys::build(material),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
