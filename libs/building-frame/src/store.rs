//! # Asset Store
//!
//! Keyed, bounded storage for generated GLB buffers, for callers that serve
//! bytes-mode output under an identifier (one entry per session or request).
//! The generator itself never reads or writes the store.
//!
//! ## Features
//!
//! - **Random keys**: every insert gets a fresh [`AssetId`]
//! - **LRU eviction**: least recently used entry goes when full
//! - **Statistics**: hit, miss and eviction counts
//!
//! ## Example
//!
//! ```rust
//! use building_frame::{generate, AssetStore, OutputMode};
//!
//! let mut store = AssetStore::new(2);
//! let glb = generate("wood", 1, 0.2, OutputMode::Bytes).unwrap();
//! let id = store.insert(glb.as_bytes().unwrap().to_vec());
//! assert!(store.get(&id).is_some());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use config::constants::DEFAULT_ASSET_CAPACITY;
use uuid::Uuid;

/// Identifier of a stored asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(Uuid);

impl AssetId {
    /// Creates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for AssetId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone)]
struct StoredAsset {
    bytes: Arc<[u8]>,
    /// Access stamp for LRU ordering
    last_access: u64,
}

/// Store statistics for monitoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Lookups that found their asset
    pub hits: u64,
    /// Lookups for unknown or evicted ids
    pub misses: u64,
    /// Entries dropped to make room
    pub evictions: u64,
    /// Total entries ever inserted
    pub total_stored: u64,
}

impl StoreStats {
    /// Computes the hit rate (0.0 to 1.0), or 0.0 if nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// GLB buffers keyed by [`AssetId`] with LRU eviction.
#[derive(Debug)]
pub struct AssetStore {
    entries: HashMap<AssetId, StoredAsset>,
    capacity: usize,
    clock: u64,
    stats: StoreStats,
}

impl AssetStore {
    /// Creates a store holding at most `capacity` assets (minimum one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
            clock: 0,
            stats: StoreStats::default(),
        }
    }

    /// Stores a buffer under a fresh id, evicting the least recently used
    /// entry when full.
    pub fn insert(&mut self, bytes: impl Into<Arc<[u8]>>) -> AssetId {
        while self.entries.len() >= self.capacity {
            self.evict_lru();
        }

        let id = AssetId::new();
        self.clock += 1;
        self.entries.insert(
            id,
            StoredAsset {
                bytes: bytes.into(),
                last_access: self.clock,
            },
        );
        self.stats.total_stored += 1;
        id
    }

    /// Returns the buffer for `id` and marks it as recently used.
    pub fn get(&mut self, id: &AssetId) -> Option<Arc<[u8]>> {
        self.clock += 1;

        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.last_access = self.clock;
                self.stats.hits += 1;
                Some(Arc::clone(&entry.bytes))
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Checks presence without touching recency or statistics.
    pub fn contains(&self, id: &AssetId) -> bool {
        self.entries.contains_key(id)
    }

    /// Removes an asset, returning its buffer.
    pub fn remove(&mut self, id: &AssetId) -> Option<Arc<[u8]>> {
        self.entries.remove(id).map(|entry| entry.bytes)
    }

    fn evict_lru(&mut self) {
        let lru = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_access)
            .map(|(id, _)| *id);

        if let Some(id) = lru {
            self.entries.remove(&id);
            self.stats.evictions += 1;
            log::debug!("evicted asset {id}");
        }
    }

    /// Returns the current number of stored assets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of assets kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every stored asset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns store statistics.
    pub fn stats(&self) -> &StoreStats {
        &self.stats
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_CAPACITY)
    }
}
