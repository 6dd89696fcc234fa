// walletgen-core/src/crypto/paths.rs
//
// Derivation Paths Module - HD Wallet Path Generator
// BIP-44 (Purpose), SLIP-44 (Coin Types), SLIP-0010 (Hardened Derivation)

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const ETHEREUM: u32 = 60; // EVM chains dùng chung coin_type 60
    pub const SOLANA: u32 = 501;
}

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// Path builder cho wallet generator
///
/// # Conventions
/// Mọi wallet đều dùng layout `m/44'/coin'/0'/index'` — purpose 44,
/// account cố định 0, address index tăng dần theo từng wallet.
/// Tất cả levels đều hardened (SLIP-0010 yêu cầu với ed25519).
pub struct DerivationPaths;

impl DerivationPaths {
    pub const SOLANA_0: &'static str = "m/44'/501'/0'/0'";
    pub const ETHEREUM_0: &'static str = "m/44'/60'/0'/0'";

    /// Path cho wallet thứ `account_index` của một chain
    ///
    /// # Verify
    /// - Solana:   `wallet(501, 2)` -> m/44'/501'/0'/2'
    /// - Ethereum: `wallet(60, 0)`  -> m/44'/60'/0'/0'
    #[inline]
    pub fn wallet(coin_type: u32, account_index: u32) -> String {
        format!("m/44'/{}'/0'/{}'", coin_type, account_index)
    }
}

// =============================================================================
// TESTS
// =============================================================================
