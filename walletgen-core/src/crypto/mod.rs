// walletgen-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! This module implements the deterministic derivation pipeline of the wallet generator:
//!
//! - **Mnemonic Service**: BIP-39 recovery phrases (generate / validate / seed) via [`RecoveryPhrase`].
//! - **Path Deriver**: SLIP-0010 hardened derivation shared by both chains via [`PathDeriver`].
//! - **Derivation Paths**: `m/44'/coin'/0'/index'` path builder via [`DerivationPaths`].

pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use key_deriver::PathDeriver;
pub use mnemonic::{RecoveryPhrase, WordCount};
pub use paths::DerivationPaths;
