//! Free-list pools of reusable buffers.
//!
//! Meshes are rebuilt after nearly every edit. Handing cleared buffers back
//! to a pool keeps their capacity around, so steady-state rebuilds stop
//! allocating.

use crate::core::{Color, Vec2, Vec3};

/// Hit/miss counters for a pool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Requests served from the free list
    pub hits: u64,
    /// Requests that had to allocate a new buffer
    pub misses: u64,
    /// Buffers currently waiting on the free list
    pub available: usize,
}

/// A stack of cleared `Vec<T>` buffers ready for reuse.
#[derive(Debug)]
pub struct ListPool<T> {
    stack: Vec<Vec<T>>,
    hits: u64,
    misses: u64,
}

impl<T> ListPool<T> {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Take an empty buffer, reusing a pooled one if available.
    pub fn get(&mut self) -> Vec<T> {
        match self.stack.pop() {
            Some(list) => {
                self.hits += 1;
                list
            }
            None => {
                self.misses += 1;
                Vec::new()
            }
        }
    }

    /// Clear a buffer and return it to the pool.
    pub fn add(&mut self, mut list: Vec<T>) {
        list.clear();
        self.stack.push(list);
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            hits: self.hits,
            misses: self.misses,
            available: self.stack.len(),
        }
    }
}

impl<T> Default for ListPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One pool per mesh buffer type, shared by every rebuild on a thread.
#[derive(Debug, Default)]
pub struct MeshPools {
    pub vertices: ListPool<Vec3>,
    pub colors: ListPool<Color>,
    pub uvs: ListPool<Vec2>,
    pub triangles: ListPool<u32>,
}

impl MeshPools {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_then_hit() {
        let mut pool: ListPool<Vec3> = ListPool::new();
        let mut list = pool.get();
        assert_eq!(pool.stats().misses, 1);

        list.extend([Vec3::ONE; 64]);
        let capacity = list.capacity();
        pool.add(list);
        assert_eq!(pool.stats().available, 1);

        let reused = pool.get();
        assert!(reused.is_empty());
        assert!(reused.capacity() >= capacity);
        assert_eq!(
            pool.stats(),
            PoolStats { hits: 1, misses: 1, available: 0 }
        );
    }

    #[test]
    fn test_pool_is_lifo() {
        let mut pool: ListPool<u32> = ListPool::default();
        pool.add(Vec::with_capacity(4));
        pool.add(Vec::with_capacity(100));
        assert!(pool.get().capacity() >= 100);
        assert!(pool.get().capacity() >= 4);
        assert_eq!(pool.stats().hits, 2);
    }

    #[test]
    fn test_add_clears() {
        let mut pool: ListPool<u32> = ListPool::new();
        pool.add(vec![1, 2, 3]);
        assert!(pool.get().is_empty());
    }
}
