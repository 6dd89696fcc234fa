// walletgen-core/src/crypto/key_deriver.rs
//
// Path Deriver — SLIP-0010 Hardened Derivation
//
// Algorithm: HMAC-SHA512, master key "ed25519 seed", hardened-only
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// QUAN TRỌNG: generator dùng MỘT pipeline derivation cho cả hai chain.
// Solana dùng 32 bytes kết quả làm ed25519 seed; Ethereum interpret cùng
// 32 bytes đó làm secp256k1 private key scalar. Vì vậy tất cả levels
// trong path PHẢI là hardened (có dấu ').
// VD: m/44'/501'/0'/0' (OK)    m/44'/501'/0'/0 (INVALID)

use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// Path Deriver — SLIP-0010 Standard
///
/// # Security
/// - HMAC-SHA512 cho mỗi level derivation
/// - Key material + chain code tự động zeroize
/// - Không lưu intermediate state
pub struct PathDeriver;

impl PathDeriver {
    /// SLIP-0010 master key constant
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive 32 bytes key material từ seed + path
    ///
    /// Deterministic: cùng (seed, path) luôn cho cùng kết quả.
    ///
    /// # Arguments
    /// * `seed` - 64 bytes BIP-39 seed
    /// * `path` - Derivation path, all levels MUST be hardened
    ///            e.g., "m/44'/501'/0'/0'"
    ///
    /// # Returns
    /// 32-byte key material, auto-zeroize on drop
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        Self::validate_seed(seed)?;

        // Parse path thành danh sách hardened indices
        let indices = Self::parse_path(path)?;

        // Step 1: Master key generation
        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = Self::master_key_generate(seed)?;

        // Step 2: Child key derivation (mỗi level)
        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || index)
        for index in &indices {
            let (child_key, child_chain) = Self::child_key_derive(&key, &chain_code, *index)?;
            // Zeroize old values trước khi overwrite
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        // Zeroize chain code (không cần nữa)
        chain_code.zeroize();

        Ok(Zeroizing::new(key))
    }

    /// Derive master key từ seed
    ///
    /// I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
    /// IL (32 bytes) = key material
    /// IR (32 bytes) = chain code
    fn master_key_generate(seed: &[u8]) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(Self::MASTER_SECRET).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })?;

        mac.update(seed);
        let result = mac.finalize().into_bytes();

        // Copy into stack buffer we fully control, then zeroize
        let mut buf = [0u8; 64];
        buf.copy_from_slice(&result);

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);

        // Zeroize local buffer — chứa raw key material
        buf.zeroize();

        Ok((key, chain_code))
    }

    /// Derive child key (hardened only)
    ///
    /// Data = 0x00 || parent_key || ser32(index + 0x80000000)
    /// I = HMAC-SHA512(Key = parent_chain_code, Data = Data)
    fn child_key_derive(
        parent_key: &[u8; 32],
        parent_chain_code: &[u8; 32],
        index: u32,
    ) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(parent_chain_code).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })?;

        // Data = 0x00 || parent_key (32 bytes) || index_be (4 bytes)
        let hardened_index = index | 0x80000000;
        mac.update(&[0x00]);
        mac.update(parent_key);
        mac.update(&hardened_index.to_be_bytes());

        let result = mac.finalize().into_bytes();

        // Copy into stack buffer we fully control, then zeroize
        let mut buf = [0u8; 64];
        buf.copy_from_slice(&result);

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);

        // Zeroize local buffer — chứa raw key material
        buf.zeroize();

        Ok((key, chain_code))
    }

    /// Parse derivation path thành list of indices
    ///
    /// Input: "m/44'/501'/0'/0'"
    /// Output: [44, 501, 0, 0]
    ///
    /// Tất cả levels phải có dấu ' (hardened)
    fn parse_path(path: &str) -> WalletResult<Vec<u32>> {
        let path = path.trim();

        // Phải bắt đầu bằng "m/"
        if !path.starts_with("m/") {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Path must start with 'm/': {}",
                path
            ))));
        }

        let segments = &path[2..]; // Bỏ "m/"
        if segments.is_empty() {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(
                "Empty derivation path".to_string(),
            )));
        }

        let mut indices = Vec::new();
        for segment in segments.split('/') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            // SLIP-0010: tất cả phải hardened
            if !segment.ends_with('\'') && !segment.ends_with('h') {
                return Err(WalletError::Crypto(CryptoError::DerivationFailed(
                    format!(
                        "SLIP-0010 requires ALL levels to be hardened (add '). Invalid segment: '{}'",
                        segment
                    ),
                )));
            }

            // Parse số (bỏ dấu ' hoặc h ở cuối)
            let num_str = &segment[..segment.len() - 1];
            let index: u32 = num_str.parse().map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Invalid index '{}': {}",
                    num_str, e
                )))
            })?;

            indices.push(index);
        }

        Ok(indices)
    }

    /// Validate seed length (BIP-39 seed luôn là 64 bytes)
    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != 64 {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected 64 bytes, got {}",
                seed.len()
            ))));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPaths;

    // Seed của BIP-39 test mnemonic "abandon ... about" (empty passphrase)
    const TEST_SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[test]
    fn test_derive_solana_material() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let key = PathDeriver::derive(&seed, DerivationPaths::SOLANA_0).unwrap();
        // Independently derived (SLIP-0010 over HMAC-SHA512)
        assert_eq!(
            hex::encode(&*key),
            "37df573b3ac4ad5b522e064e25b63ea16bcbe79d449e81a0268d1047948bb445"
        );
    }

    #[test]
    fn test_derive_ethereum_material() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let key = PathDeriver::derive(&seed, DerivationPaths::ETHEREUM_0).unwrap();
        assert_eq!(
            hex::encode(&*key),
            "bca443f5149618b5dbe6e80b5c096ad4280d5a2e8bc0ce3ebc71c9c0878ba5de"
        );
    }

    #[test]
    fn test_consistency() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let k1 = PathDeriver::derive(&seed, DerivationPaths::SOLANA_0).unwrap();
        let k2 = PathDeriver::derive(&seed, DerivationPaths::SOLANA_0).unwrap();
        assert_eq!(&*k1, &*k2);
    }

    #[test]
    fn test_different_indices() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let k0 = PathDeriver::derive(&seed, &DerivationPaths::wallet(501, 0)).unwrap();
        let k1 = PathDeriver::derive(&seed, &DerivationPaths::wallet(501, 1)).unwrap();
        let k2 = PathDeriver::derive(&seed, &DerivationPaths::wallet(501, 2)).unwrap();
        assert_ne!(&*k0, &*k1);
        assert_ne!(&*k1, &*k2);
    }

    #[test]
    fn test_different_chains() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let sol = PathDeriver::derive(&seed, DerivationPaths::SOLANA_0).unwrap();
        let eth = PathDeriver::derive(&seed, DerivationPaths::ETHEREUM_0).unwrap();
        assert_ne!(&*sol, &*eth);
    }

    #[test]
    fn test_non_hardened_path_rejected() {
        let seed = hex::decode(TEST_SEED).unwrap();
        // m/44'/501'/0'/0 — last segment NOT hardened = INVALID
        let result = PathDeriver::derive(&seed, "m/44'/501'/0'/0");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("hardened"));
    }

    #[test]
    fn test_invalid_path_format() {
        let seed = hex::decode(TEST_SEED).unwrap();
        assert!(PathDeriver::derive(&seed, "invalid").is_err());
        assert!(PathDeriver::derive(&seed, "44'/501'/0'").is_err()); // Missing m/
        assert!(PathDeriver::derive(&seed, "m/").is_err());
    }

    #[test]
    fn test_invalid_seed_length() {
        let short_seed = [0u8; 32];
        let result = PathDeriver::derive(&short_seed, DerivationPaths::SOLANA_0);
        assert!(matches!(
            result,
            Err(WalletError::Crypto(CryptoError::DerivationFailed(_)))
        ));
    }

    #[test]
    fn test_parse_path_accepts_hardened_only() {
        assert!(PathDeriver::parse_path("m/44'/501'/0'/0'").is_ok());
        assert!(PathDeriver::parse_path("m/44'/60'/0'/5'").is_ok());
        assert!(PathDeriver::parse_path("m/44'/501'/0'/0").is_err()); // Not hardened
        assert!(PathDeriver::parse_path("invalid").is_err());
    }

    // =========================================================================
    // SLIP-0010 Test Vector (from official spec)
    // =========================================================================
    // Seed: 000102030405060708090a0b0c0d0e0f
    // Chain m:
    //   private: 2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7

    #[test]
    fn test_slip0010_vector_master() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();

        let (key, _chain_code) = PathDeriver::master_key_generate(&seed).unwrap();

        assert_eq!(
            hex::encode(key),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
    }
}
