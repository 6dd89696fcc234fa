// walletgen-core/src/store/port.rs

// Storage Port - Key-Value Persistence Interface
//
// Wallet Store KHÔNG phụ thuộc vào một global storage cụ thể nào
// (localStorage, file, ...). Mọi durable state đi qua port này, nên
// test có thể inject in-memory fake và host app inject backend thật.

use std::collections::HashMap;

/// Key-value persistence port
///
/// # Contract
/// - `get` trả về `None` khi key chưa tồn tại
/// - `set` ghi đè value cũ (nếu có)
/// - `remove` idempotent — xóa key chưa tồn tại không phải lỗi
pub trait StoragePort {
    /// Đọc value theo key
    fn get(&self, key: &str) -> Option<String>;

    /// Ghi value cho key (overwrite nếu đã tồn tại)
    fn set(&mut self, key: &str, value: &str);

    /// Xóa key
    fn remove(&mut self, key: &str);
}

/// In-memory implementation của [`StoragePort`]
///
/// Dùng làm test fake và làm default backend khi host app
/// chưa gắn durable storage thật.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Số keys đang lưu
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

// =============================================================================
// TESTS
// =============================================================================
