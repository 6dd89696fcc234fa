// walletgen-core/src/store/mod.rs

//! Wallet Store Module
//!
//! Ordered collection của các wallet đã derive cho mnemonic đang active,
//! mirror đồng bộ xuống durable storage qua [`StoragePort`] sau mỗi mutation.
//!
//! # Invariants
//! - Hai visibility-flag vectors luôn cùng độ dài với collection
//! - Operation fail → state giữ nguyên, không có record nửa vời
//! - Insertion order = derivation order = display order

pub mod port;

pub use port::{MemoryStorage, StoragePort};

use crate::chains::ChainKind;
use crate::crypto::RecoveryPhrase;
use crate::error::{WalletError, WalletResult};
use crate::wallet::{derive_wallet, WalletRecord};
use tracing::{debug, info};

// Durable state layout — ba keys cố định, khớp layout lịch sử
pub const WALLETS_KEY: &str = "wallets";
pub const MNEMONICS_KEY: &str = "mnemonics";
pub const PATHS_KEY: &str = "paths";

/// Wallet Store - collection + durable mirror
///
/// Mọi mutating operation (`generate_first`, `add_one`, `delete_at`,
/// `clear_all`) đều mirror kết quả xuống storage ngay lập tức, để session
/// sau có thể [`rehydrate`](Self::rehydrate) lại từ cùng storage.
pub struct WalletStore<S: StoragePort> {
    storage: S,
    wallets: Vec<WalletRecord>,
    mnemonic_words: Vec<String>,
    chain: Option<ChainKind>,
    visible_private_keys: Vec<bool>,
    visible_phrases: Vec<bool>,
}

impl<S: StoragePort> WalletStore<S> {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Store rỗng trên một storage backend
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            wallets: Vec::new(),
            mnemonic_words: Vec::new(),
            chain: None,
            visible_private_keys: Vec::new(),
            visible_phrases: Vec::new(),
        }
    }

    /// Rebuild in-memory state từ durable storage
    ///
    /// - Key chưa tồn tại → phần state tương ứng rỗng (không phải lỗi)
    /// - JSON hỏng → `WalletError::Storage`
    /// - Visibility flags luôn rehydrate thành all-`false`
    ///   (trạng thái reveal không bao giờ được persist)
    pub fn rehydrate(storage: S) -> WalletResult<Self> {
        let mut store = Self::new(storage);

        if let Some(raw) = store.storage.get(WALLETS_KEY) {
            store.wallets = serde_json::from_str(&raw)
                .map_err(|e| WalletError::Storage(format!("corrupt '{}': {}", WALLETS_KEY, e)))?;
        }
        if let Some(raw) = store.storage.get(MNEMONICS_KEY) {
            store.mnemonic_words = serde_json::from_str(&raw)
                .map_err(|e| WalletError::Storage(format!("corrupt '{}': {}", MNEMONICS_KEY, e)))?;
        }
        if let Some(raw) = store.storage.get(PATHS_KEY) {
            let tags: Vec<String> = serde_json::from_str(&raw)
                .map_err(|e| WalletError::Storage(format!("corrupt '{}': {}", PATHS_KEY, e)))?;
            store.chain = tags.first().and_then(|t| ChainKind::from_tag(t).ok());
        }

        store.visible_private_keys = vec![false; store.wallets.len()];
        store.visible_phrases = vec![false; store.wallets.len()];

        debug!(count = store.wallets.len(), "wallet store rehydrated");
        Ok(store)
    }

    // =========================================================================
    // MUTATING OPERATIONS
    // =========================================================================

    /// Generate operation của presentation layer
    ///
    /// - `phrase_input` trống/blank → generate phrase 12 words mới
    /// - `phrase_input` invalid → `Err(Mnemonic)`, state giữ nguyên
    /// - `chain_tag` ngoài {"501", "60"} → `Err(UnsupportedChain)`
    ///
    /// Contract: **append** — gọi liên tiếp không clear sẽ grow collection
    /// (derive tại `account_index = len()`), không reset.
    pub fn generate_first(
        &mut self,
        phrase_input: &str,
        chain_tag: &str,
    ) -> WalletResult<&WalletRecord> {
        let chain = ChainKind::from_tag(chain_tag)?;
        let phrase = RecoveryPhrase::resolve(phrase_input)?;

        let record = derive_wallet(chain, &phrase, self.wallets.len() as u32)?;

        // Derivation thành công — giờ mới được mutate
        self.chain = Some(chain);
        self.mnemonic_words = phrase.words();
        self.wallets.push(record);
        self.visible_private_keys.push(false);
        self.visible_phrases.push(false);
        self.persist();

        info!(
            chain = chain.name(),
            count = self.wallets.len(),
            "wallet generated"
        );
        Ok(self.wallets.last().expect("record just pushed"))
    }

    /// Derive thêm một wallet từ mnemonic đang active
    ///
    /// `account_index = len()` — index tăng dần, không có gaps.
    pub fn add_one(&mut self) -> WalletResult<&WalletRecord> {
        if self.mnemonic_words.is_empty() {
            return Err(WalletError::NoMnemonic);
        }
        let chain = self.chain.ok_or(WalletError::NoMnemonic)?;

        let phrase = RecoveryPhrase::from_phrase(&self.mnemonic_words.join(" "))?;
        let record = derive_wallet(chain, &phrase, self.wallets.len() as u32)?;

        self.wallets.push(record);
        self.visible_private_keys.push(false);
        self.visible_phrases.push(false);
        self.persist();

        info!(count = self.wallets.len(), "wallet appended");
        Ok(self.wallets.last().expect("record just pushed"))
    }

    /// Xóa record tại `index` cùng hai visibility flags tương ứng
    ///
    /// Các records còn lại giữ nguyên thứ tự; re-index implicit theo
    /// vị trí trong sequence (không có gaps).
    pub fn delete_at(&mut self, index: usize) -> WalletResult<()> {
        if index >= self.wallets.len() {
            return Err(WalletError::IndexOutOfBounds {
                index,
                len: self.wallets.len(),
            });
        }

        self.wallets.remove(index);
        self.visible_private_keys.remove(index);
        self.visible_phrases.remove(index);
        self.persist();

        info!(index, count = self.wallets.len(), "wallet deleted");
        Ok(())
    }

    /// Xóa toàn bộ collection, flags, cached words và durable copy
    pub fn clear_all(&mut self) {
        self.wallets.clear();
        self.mnemonic_words.clear();
        self.chain = None;
        self.visible_private_keys.clear();
        self.visible_phrases.clear();

        self.storage.remove(WALLETS_KEY);
        self.storage.remove(MNEMONICS_KEY);
        self.storage.remove(PATHS_KEY);

        info!("all wallets cleared");
    }

    // =========================================================================
    // VISIBILITY FLAGS
    // =========================================================================

    /// Toggle reveal của private key tại `index`; trả về trạng thái mới
    pub fn toggle_private_key(&mut self, index: usize) -> WalletResult<bool> {
        let len = self.wallets.len();
        let flag = self
            .visible_private_keys
            .get_mut(index)
            .ok_or(WalletError::IndexOutOfBounds { index, len })?;
        *flag = !*flag;
        Ok(*flag)
    }

    /// Toggle reveal của recovery phrase tại `index`; trả về trạng thái mới
    pub fn toggle_phrase(&mut self, index: usize) -> WalletResult<bool> {
        let len = self.wallets.len();
        let flag = self
            .visible_phrases
            .get_mut(index)
            .ok_or(WalletError::IndexOutOfBounds { index, len })?;
        *flag = !*flag;
        Ok(*flag)
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[inline]
    pub fn wallets(&self) -> &[WalletRecord] {
        &self.wallets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Words của mnemonic đang active (cho phrase-reveal UI)
    #[inline]
    pub fn mnemonic_words(&self) -> &[String] {
        &self.mnemonic_words
    }

    /// Chain đã chọn cho session này
    #[inline]
    pub fn chain(&self) -> Option<ChainKind> {
        self.chain
    }

    #[inline]
    pub fn visible_private_keys(&self) -> &[bool] {
        &self.visible_private_keys
    }

    #[inline]
    pub fn visible_phrases(&self) -> &[bool] {
        &self.visible_phrases
    }

    /// Trả lại storage backend (dùng cho rehydration tests)
    pub fn into_storage(self) -> S {
        self.storage
    }

    // =========================================================================
    // DURABLE MIRROR
    // =========================================================================

    /// Mirror toàn bộ state xuống ba durable keys
    ///
    /// Serialization của các types này không thể fail (plain strings/bools),
    /// nên persist không trả Result.
    fn persist(&mut self) {
        let wallets = serde_json::to_string(&self.wallets).expect("records serialize");
        self.storage.set(WALLETS_KEY, &wallets);

        let words = serde_json::to_string(&self.mnemonic_words).expect("words serialize");
        self.storage.set(MNEMONICS_KEY, &words);

        let tags: Vec<&str> = self.chain.iter().map(|c| c.tag()).collect();
        let paths = serde_json::to_string(&tags).expect("tags serialize");
        self.storage.set(PATHS_KEY, &paths);
    }
}

// =============================================================================
// TESTS
// =============================================================================
