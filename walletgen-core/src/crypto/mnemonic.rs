// walletgen-core/src/crypto/mnemonic.rs
//
// Mnemonic Service - BIP-39 Recovery Phrase
// Chuẩn: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::error::{MnemonicError, WalletResult};
use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Số lượng words hỗ trợ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy) — mặc định cho wallet generator
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Lấy số bytes entropy cần thiết
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }
}

/// BIP-39 Recovery Phrase
///
/// # Security
/// - **ZeroizeOnDrop**: Phrase được ghi đè bằng 0 khi struct bị drop
/// - **CSPRNG**: Entropy từ `OsRng` (OS-level cryptographically secure RNG)
/// - **No Debug Leak**: Custom Debug impl không hiển thị phrase
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RecoveryPhrase {
    phrase: String,
    word_count: usize,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị recovery phrase
impl std::fmt::Debug for RecoveryPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecoveryPhrase")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl RecoveryPhrase {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Tạo phrase mới với 12 words (128-bit entropy)
    pub fn generate() -> Self {
        Self::with_word_count(WordCount::Twelve)
    }

    /// Tạo phrase với số lượng words tùy chỉnh
    pub fn with_word_count(word_count: WordCount) -> Self {
        let entropy_size = word_count.entropy_bytes();

        // Stack-allocated entropy buffer (max 32 bytes)
        let mut entropy = [0u8; 32];
        OsRng.fill_bytes(&mut entropy[..entropy_size]);

        let mnemonic =
            Mnemonic::from_entropy(&entropy[..entropy_size]).expect("Valid entropy size");

        // Zeroize entropy ngay sau khi sử dụng
        entropy.zeroize();

        Self {
            phrase: mnemonic.to_string(),
            word_count: word_count as usize,
        }
    }

    /// Khôi phục phrase từ input có sẵn
    ///
    /// # Validation
    /// - Kiểm tra số lượng words (12, 15, 18, 21, 24)
    /// - Kiểm tra từng word có trong BIP-39 wordlist
    /// - Kiểm tra checksum
    pub fn from_phrase(phrase: &str) -> Result<Self, MnemonicError> {
        // Normalize whitespace và count words
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        let count = words.len();

        if !matches!(count, 12 | 15 | 18 | 21 | 24) {
            return Err(MnemonicError::InvalidWordCount(count));
        }

        let normalized = words.join(" ");
        Mnemonic::parse(&normalized).map_err(|e| match e {
            bip39::Error::UnknownWord(idx) => {
                MnemonicError::UnknownWord(words.get(idx).copied().unwrap_or("?").to_string())
            }
            bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
            other => MnemonicError::Bip39Error(other.to_string()),
        })?;

        Ok(Self {
            phrase: normalized,
            word_count: count,
        })
    }

    /// Resolve user input thành phrase dùng được
    ///
    /// Contract của generator:
    /// - Input trống/blank → generate phrase mới (không phải lỗi)
    /// - Input không trống nhưng invalid → `Err(MnemonicError)`
    /// - Input hợp lệ → phrase đã normalize
    pub fn resolve(input: &str) -> Result<Self, MnemonicError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Ok(Self::generate())
        } else {
            Self::from_phrase(trimmed)
        }
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Lấy recovery phrase
    ///
    /// # Warning
    /// Cẩn thận khi hiển thị hoặc log giá trị này!
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Lấy số lượng words
    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Lấy danh sách các words (dùng cho durable mirror + phrase reveal UI)
    pub fn words(&self) -> Vec<String> {
        self.phrase.split_whitespace().map(str::to_owned).collect()
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// Tạo seed từ phrase (PBKDF2-HMAC-SHA512, empty passphrase)
    ///
    /// Deterministic: cùng phrase luôn cho cùng 64-byte seed.
    ///
    /// # Returns
    /// 64-byte seed wrapped trong `Zeroizing` để tự động xóa khi drop
    pub fn to_seed(&self) -> WalletResult<Zeroizing<[u8; 64]>> {
        let mnemonic = Mnemonic::parse(&self.phrase)
            .map_err(|e| MnemonicError::Bip39Error(e.to_string()))?;
        Ok(Zeroizing::new(mnemonic.to_seed("")))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Kiểm tra xem phrase có hợp lệ không
    ///
    /// Thực hiện đầy đủ validation: word count, wordlist, checksum
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
