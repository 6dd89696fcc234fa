// walletgen-core/src/chains/solana.rs
//
// Solana Key Builder - Ed25519 Key Pair + Base58 Encoding
// Chuẩn: SLIP-0010 seed → ed25519 signing key, NaCl 64-byte secret layout

use super::ChainKeyPair;
use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

/// Solana Key Builder
///
/// # Flow:  Key Material (32B) → Ed25519 Keypair → Base58 Encodings
///
/// # Encoding
/// - `public_key`: base58 của 32-byte verifying key (Solana address)
/// - `private_key`: base58 của 64-byte keypair bytes (secret || public),
///   cùng layout với NaCl `secretKey` — import được vào Phantom/Solflare
pub struct SolanaKeys;

impl SolanaKeys {
    /// Build key pair từ derived key material
    ///
    /// Ed25519 chấp nhận mọi 32 bytes làm seed nên hàm này infallible.
    pub fn build(material: &[u8; 32]) -> ChainKeyPair {
        let signing_key = SigningKey::from_bytes(material);
        let verifying_key = signing_key.verifying_key();

        // 64-byte secret = seed (32B) || public key (32B)
        let keypair_bytes = Zeroizing::new(signing_key.to_keypair_bytes());

        ChainKeyPair {
            public_key: bs58::encode(verifying_key.as_bytes()).into_string(),
            private_key: bs58::encode(&keypair_bytes[..]).into_string(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
