// walletgen-core/src/lib.rs

//! # walletgen-core
//!
//! Deterministic multi-chain wallet generator core: BIP-39 recovery phrase →
//! SLIP-0010 hardened derivation → chain-native key pair (Solana / Ethereum) →
//! ordered wallet collection mirrored xuống durable storage.
//!
//! Crate này là phần core không-UI của một browser wallet generator:
//! presentation layer gọi [`WalletStore`] qua bốn operations
//! (`generate_first`, `add_one`, `delete_at`, `clear_all`) và tự lo toàn bộ
//! visual feedback. Không network, không transaction signing, không CLI.
//!
//! # Example
//!
//! ```
//! use walletgen_core::{MemoryStorage, WalletStore};
//!
//! let mut store = WalletStore::new(MemoryStorage::new());
//! // Empty phrase → một recovery phrase 12 words mới được generate
//! let record = store.generate_first("", "501").unwrap();
//! assert_eq!(record.path, "m/44'/501'/0'/0'");
//! ```

pub mod chains;
pub mod crypto;
pub mod error;
pub mod store;
pub mod wallet;

// Re-exports for cleaner API access
pub use chains::{ChainKeyPair, ChainKind, EvmAddress};
pub use crypto::{DerivationPaths, PathDeriver, RecoveryPhrase, WordCount};
pub use error::{CryptoError, MnemonicError, WalletError, WalletResult};
pub use store::{MemoryStorage, StoragePort, WalletStore};
pub use wallet::{derive_wallet, WalletRecord};
