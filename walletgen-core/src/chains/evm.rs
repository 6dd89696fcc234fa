// walletgen-core/src/chains/evm.rs
//
// EVM Key Builder - secp256k1 Key Pair + EIP-55 Address
// EIP-55 (Checksum), Keccak-256, secp256k1

use super::ChainKeyPair;
use crate::error::{CryptoError, WalletError, WalletResult};
use alloy_primitives::Address;
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use tiny_keccak::{Hasher, Keccak};
use zeroize::{Zeroize, Zeroizing};

/// EVM Key Builder
///
/// # Encoding
/// - `public_key`: EIP-55 checksummed address derived từ public key
/// - `private_key`: 0x-prefixed hex của 32-byte private key
pub struct EvmKeys;

impl EvmKeys {
    /// Build key pair từ derived key material (interpret làm secp256k1 scalar)
    ///
    /// Material ngoài range của curve (0 hoặc >= n) → `InvalidKeyFormat`,
    /// không tạo record nào.
    pub fn build(material: &[u8; 32]) -> WalletResult<ChainKeyPair> {
        let address = EvmAddress::derive_from_slice(material)?;

        Ok(ChainKeyPair {
            public_key: address,
            private_key: format!("0x{}", hex::encode(material)),
        })
    }
}

/// EVM Address Derivation
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
///
/// # Security
/// - Zeroize: intermediate data (hash, public key bytes) bị xóa sau khi dùng
/// - No Storage: module này KHÔNG lưu private key
pub struct EvmAddress;

impl EvmAddress {
    /// Derive 20 bytes address from a **borrowed byte slice**.
    ///
    /// # Algorithm (chuẩn Ethereum Yellow Paper)
    /// 1. `priv_key` (32B) → secp256k1 → `pub_key` (uncompressed, 65B)
    /// 2. Bỏ prefix byte 0x04 → `pub_key_raw` (64B)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 4. `hash[12..32]` → `address` (20B)
    pub fn derive_bytes_from_slice(priv_key: &[u8]) -> WalletResult<[u8; 20]> {
        // Parse & validate private key
        let secret_key = SecretKey::from_slice(priv_key).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid secp256k1 private key: {}",
                e
            )))
        })?;

        // Derive public key (uncompressed), wrap trong Zeroizing
        let public_key = secret_key.public_key();
        let encoded = Zeroizing::new(public_key.to_encoded_point(false));
        let pub_key_raw = &encoded.as_bytes()[1..]; // Bỏ 0x04 prefix

        // Keccak-256 hash (stack allocated)
        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];
        hasher.update(pub_key_raw);
        hasher.finalize(&mut hash);

        // Extract 20 bytes cuối
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);

        // Zeroize hash (chứa thông tin liên quan tới public key)
        hash.zeroize();

        Ok(address)
    }

    /// Derive EIP-55 checksummed address from a **borrowed byte slice**.
    ///
    /// # Returns
    /// `"0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B"` (mixed-case checksum)
    #[inline]
    pub fn derive_from_slice(priv_key: &[u8]) -> WalletResult<String> {
        let bytes = Self::derive_bytes_from_slice(priv_key)?;
        Ok(Address::from_slice(&bytes).to_checksum(None))
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// Validate chuỗi có phải Ethereum address hợp lệ không
    ///
    /// Kiểm tra: `0x` prefix + 40 hex chars + EIP-55 checksum (nếu mixed case)
    #[inline]
    pub fn is_valid(address: &str) -> bool {
        address.parse::<Address>().is_ok()
    }

    /// Normalize về EIP-55 checksum format
    ///
    /// `"0xabcd..."` → `"0xAbCd..."` (mixed-case theo checksum)
    pub fn to_checksum(address: &str) -> WalletResult<String> {
        let addr: Address = address.parse().map_err(|_| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(
                "Invalid Ethereum address format".to_string(),
            ))
        })?;
        Ok(addr.to_checksum(None))
    }

    /// So sánh 2 address (case-insensitive)
    #[inline]
    pub fn equals(addr1: &str, addr2: &str) -> bool {
        match (addr1.parse::<Address>(), addr2.parse::<Address>()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Anvil/Hardhat account #0
    const ANVIL_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    // SLIP-0010 material cho "abandon...about" tại m/44'/60'/0'/0'
    const TEST_MATERIAL: &str =
        "bca443f5149618b5dbe6e80b5c096ad4280d5a2e8bc0ce3ebc71c9c0878ba5de";
    const TEST_ADDRESS: &str = "0x2759A6Ad812b8A7B73A63a243816D66F5b72A0A7";

    fn material() -> [u8; 32] {
        hex::decode(TEST_MATERIAL).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_build_golden_address() {
        let keys = EvmKeys::build(&material()).unwrap();
        assert_eq!(keys.public_key, TEST_ADDRESS);
    }

    #[test]
    fn test_build_private_key_encoding() {
        let keys = EvmKeys::build(&material()).unwrap();
        assert_eq!(keys.private_key, format!("0x{}", TEST_MATERIAL));
        assert_eq!(keys.private_key.len(), 66); // 0x + 64 hex chars
    }

    #[test]
    fn test_address_shape() {
        let keys = EvmKeys::build(&material()).unwrap();
        assert!(keys.public_key.starts_with("0x"));
        assert_eq!(keys.public_key.len(), 42);
        assert!(keys.public_key[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_derive_anvil_vector() {
        let priv_key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        let address = EvmAddress::derive_from_slice(&priv_key).unwrap();
        assert_eq!(address, ANVIL_ADDRESS);
    }

    #[test]
    fn test_derive_bytes_matches_string() {
        let priv_key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        let bytes = EvmAddress::derive_bytes_from_slice(&priv_key).unwrap();
        let reconstructed = Address::from_slice(&bytes).to_checksum(None);
        assert_eq!(reconstructed, ANVIL_ADDRESS);
    }

    #[test]
    fn test_deterministic() {
        let k1 = EvmKeys::build(&material()).unwrap();
        let k2 = EvmKeys::build(&material()).unwrap();
        assert_eq!(k1, k2);
    }

    #[test]
    fn test_is_valid() {
        assert!(EvmAddress::is_valid(ANVIL_ADDRESS));
        assert!(EvmAddress::is_valid(
            "0xdead000000000000000000000000000000000000"
        ));
        assert!(!EvmAddress::is_valid("0xinvalid"));
        assert!(!EvmAddress::is_valid("not an address"));
        assert!(!EvmAddress::is_valid("0x123")); // Too short
        assert!(!EvmAddress::is_valid("")); // Empty
    }

    #[test]
    fn test_to_checksum() {
        let lowercase = ANVIL_ADDRESS.to_lowercase();
        let checksummed = EvmAddress::to_checksum(&lowercase).unwrap();
        assert_eq!(checksummed, ANVIL_ADDRESS);
    }

    #[test]
    fn test_equals() {
        let upper = "0xABCD1234ABCD1234ABCD1234ABCD1234ABCD1234";
        let lower = "0xabcd1234abcd1234abcd1234abcd1234abcd1234";
        assert!(EvmAddress::equals(upper, lower));
        assert!(!EvmAddress::equals(upper, ANVIL_ADDRESS));
    }

    #[test]
    fn test_zero_scalar_rejected() {
        let zero = [0u8; 32];
        let result = EvmKeys::build(&zero);
        assert!(matches!(
            result,
            Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(_)))
        ));
    }

    #[test]
    fn test_invalid_key_length_rejected() {
        assert!(EvmAddress::derive_from_slice(&[0u8; 31]).is_err());
        assert!(EvmAddress::derive_from_slice(&[1u8; 33]).is_err());
        assert!(EvmAddress::derive_from_slice(&[]).is_err());
    }
}
