// walletgen-core/src/wallet.rs
//
// Wallet Derivation Pipeline
// mnemonic → seed → path → key material → chain key pair → WalletRecord

use crate::chains::ChainKind;
use crate::crypto::{DerivationPaths, PathDeriver, RecoveryPhrase};
use crate::error::WalletResult;
use serde::{Deserialize, Serialize};

/// Một wallet đã derive, sẵn sàng hiển thị và mirror xuống durable storage.
///
/// Field names serialize theo camelCase để khớp layout JSON lịch sử
/// (`publicKey`, `privateKey`, `mnemonic`, `path`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    pub public_key: String,
    pub private_key: String,
    /// Full recovery phrase, space-separated — chung cho mọi record cùng mnemonic
    pub mnemonic: String,
    /// BIP-44 style path, unique per record trong một mnemonic+chain
    pub path: String,
}

// Custom Debug - KHÔNG hiển thị private key / mnemonic
impl std::fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletRecord")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .field("mnemonic", &"[REDACTED]")
            .field("path", &self.path)
            .finish()
    }
}

/// Derive một wallet record tại `account_index`
///
/// Pipeline hoàn chỉnh, deterministic và idempotent: cùng
/// (phrase, chain, index) luôn cho ra record giống hệt nhau.
/// Mọi failure trả về `Err` — không bao giờ có record nửa vời.
pub fn derive_wallet(
    chain: ChainKind,
    phrase: &RecoveryPhrase,
    account_index: u32,
) -> WalletResult<WalletRecord> {
    let seed = phrase.to_seed()?;
    let path = DerivationPaths::wallet(chain.coin_type(), account_index);
    let material = PathDeriver::derive(&*seed, &path)?;
    let keys = chain.build_keys(&material)?;

    Ok(WalletRecord {
        public_key: keys.public_key,
        private_key: keys.private_key,
        mnemonic: phrase.phrase().to_string(),
        path,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn phrase() -> RecoveryPhrase {
        RecoveryPhrase::from_phrase(TEST_MNEMONIC).unwrap()
    }

    #[test]
    fn test_solana_golden_record() {
        let record = derive_wallet(ChainKind::Solana, &phrase(), 0).unwrap();
        assert_eq!(record.path, "m/44'/501'/0'/0'");
        assert_eq!(record.mnemonic, TEST_MNEMONIC);
        // Golden value, independently derived
        assert_eq!(
            record.public_key,
            "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"
        );
        let secret = bs58::decode(&record.private_key).into_vec().unwrap();
        assert_eq!(secret.len(), 64);
    }

    #[test]
    fn test_ethereum_golden_record() {
        let record = derive_wallet(ChainKind::Ethereum, &phrase(), 0).unwrap();
        assert_eq!(record.path, "m/44'/60'/0'/0'");
        assert_eq!(record.public_key, "0x2759A6Ad812b8A7B73A63a243816D66F5b72A0A7");
        assert_eq!(
            record.private_key,
            "0xbca443f5149618b5dbe6e80b5c096ad4280d5a2e8bc0ce3ebc71c9c0878ba5de"
        );
    }

    #[test]
    fn test_increasing_indices_distinct() {
        let p = phrase();
        let records: Vec<WalletRecord> = (0..3)
            .map(|i| derive_wallet(ChainKind::Solana, &p, i).unwrap())
            .collect();
        for i in 0..records.len() {
            for j in (i + 1)..records.len() {
                assert_ne!(records[i].public_key, records[j].public_key);
                assert_ne!(records[i].path, records[j].path);
            }
        }
        assert_eq!(records[1].path, "m/44'/501'/0'/1'");
        assert_eq!(records[2].path, "m/44'/501'/0'/2'");
    }

    #[test]
    fn test_idempotent() {
        let p = phrase();
        let r1 = derive_wallet(ChainKind::Ethereum, &p, 1).unwrap();
        let r2 = derive_wallet(ChainKind::Ethereum, &p, 1).unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_serde_camel_case_layout() {
        let record = derive_wallet(ChainKind::Ethereum, &phrase(), 0).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("publicKey").is_some());
        assert!(json.get("privateKey").is_some());
        assert!(json.get("mnemonic").is_some());
        assert!(json.get("path").is_some());
        // snake_case không được lọt ra layout
        assert!(json.get("public_key").is_none());

        let back: WalletRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_debug_does_not_leak_secrets() {
        let record = derive_wallet(ChainKind::Ethereum, &phrase(), 0).unwrap();
        let debug_output = format!("{:?}", record);
        assert!(!debug_output.contains("abandon"));
        assert!(!debug_output.contains(&record.private_key));
        assert!(debug_output.contains("REDACTED"));
    }
}
