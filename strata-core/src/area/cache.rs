//! Insertion-ordered, capacity-bounded cache of computed zone values.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use super::arena::AreaId;

/// Packs a coordinate pair into one key, x in the low half (like `ChunkPos.asLong`).
#[inline]
#[must_use]
pub const fn pack_coords(x: i32, y: i32) -> u64 {
    (x as u32 as u64) | ((y as u32 as u64) << 32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    area: AreaId,
    pos: u64,
}

/// Zone values shared by every area built from one layer context.
///
/// Entries are keyed by area and packed coordinate. Eviction is oldest-first
/// and is driven by the ceiling of the area doing the insertion, so a
/// later-queried area can push out entries of an earlier one.
#[derive(Debug, Clone, Default)]
pub struct ZoneCache {
    values: FxHashMap<CacheKey, i32>,
    order: VecDeque<CacheKey>,
}

impl ZoneCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the cache holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The cached value of `area` at `(x, y)`, if present.
    #[inline]
    #[must_use]
    pub fn get(&self, area: AreaId, x: i32, y: i32) -> Option<i32> {
        self.values
            .get(&CacheKey {
                area,
                pos: pack_coords(x, y),
            })
            .copied()
    }

    /// Stores a value computed by `area`, then trims to `ceiling`.
    ///
    /// Once the cache holds more than `ceiling` entries, the oldest
    /// `max(1, ceiling / 16)` entries are dropped.
    pub fn insert(&mut self, area: AreaId, x: i32, y: i32, value: i32, ceiling: usize) {
        let key = CacheKey {
            area,
            pos: pack_coords(x, y),
        };
        if self.values.insert(key, value).is_none() {
            self.order.push_back(key);
        }

        if self.values.len() > ceiling {
            let batch = (ceiling / 16).max(1);
            for _ in 0..batch {
                let Some(oldest) = self.order.pop_front() else {
                    break;
                };
                self.values.remove(&oldest);
            }
            log::trace!(
                "Evicted {batch} zone entries for area {}, {} remain",
                area.index(),
                self.values.len()
            );
        }
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.values.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: AreaId = AreaId::from_index(0);
    const OTHER: AreaId = AreaId::from_index(1);

    #[test]
    fn pack_keeps_sign_information() {
        assert_ne!(pack_coords(-1, 0), pack_coords(0, -1));
        assert_ne!(pack_coords(1, 2), pack_coords(2, 1));
        assert_eq!(pack_coords(0, 0), 0);
    }

    #[test]
    fn evicts_oldest_first() {
        let mut cache = ZoneCache::new();
        for x in 0..4 {
            cache.insert(AREA, x, 0, x * 10, 4);
        }
        assert_eq!(cache.len(), 4);

        cache.insert(AREA, 4, 0, 40, 4);
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.get(AREA, 0, 0), None);
        assert_eq!(cache.get(AREA, 1, 0), Some(10));
        assert_eq!(cache.get(AREA, 4, 0), Some(40));
    }

    #[test]
    fn large_ceilings_evict_in_batches() {
        let mut cache = ZoneCache::new();
        for x in 0..=64 {
            cache.insert(AREA, x, 0, x, 64);
        }
        // 65 entries > 64, so 64 / 16 = 4 of the oldest go.
        assert_eq!(cache.len(), 61);
        assert_eq!(cache.get(AREA, 3, 0), None);
        assert_eq!(cache.get(AREA, 4, 0), Some(4));
    }

    #[test]
    fn areas_do_not_collide_but_share_capacity() {
        let mut cache = ZoneCache::new();
        cache.insert(AREA, 5, 5, 1, 2);
        cache.insert(OTHER, 5, 5, 2, 2);
        assert_eq!(cache.get(AREA, 5, 5), Some(1));
        assert_eq!(cache.get(OTHER, 5, 5), Some(2));

        cache.insert(OTHER, 6, 6, 3, 2);
        assert_eq!(cache.get(AREA, 5, 5), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clear_empties_everything() {
        let mut cache = ZoneCache::new();
        cache.insert(AREA, 0, 0, 1, 8);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(AREA, 0, 0), None);
    }
}
