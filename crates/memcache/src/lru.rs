//! Recency and lookup indexes
//!
//! Nodes live in an arena addressed by slot index; the map stores the slot,
//! never a copy of the entry. Freed slots are recycled through a free list.

use ahash::RandomState;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Upper bound on slots reserved at construction; larger caches grow on demand
const PREALLOC_LIMIT: usize = 1024;

/// Node in the recency list
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// LRU index over a slot arena. `head` is most recently used, `tail` least.
pub(crate) struct LruCache<K, V> {
    map: HashMap<K, usize, RandomState>,
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    /// 0 means unbounded
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an index holding at most `capacity` entries (0 for no limit)
    pub(crate) fn new(capacity: usize) -> Self {
        let reserve = capacity.min(PREALLOC_LIMIT);
        Self {
            map: HashMap::with_capacity_and_hasher(reserve, RandomState::new()),
            nodes: Vec::with_capacity(reserve),
            head: None,
            tail: None,
            free_list: Vec::new(),
            capacity,
        }
    }

    /// Look up a value and mark it most recently used
    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.move_to_front(idx);
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Look up a value without touching recency
    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Insert or update a key-value pair.
    ///
    /// Updating an existing key never evicts. Inserting a new key past
    /// capacity removes exactly one entry from the tail and returns it.
    pub(crate) fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(node) = &mut self.nodes[idx] {
                node.value = value;
            }
            self.move_to_front(idx);
            return None;
        }

        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            key: key.clone(),
            value,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.map.insert(key, idx);

        if self.capacity != 0 && self.map.len() > self.capacity {
            self.pop_lru()
        } else {
            None
        }
    }

    /// Remove a key, returning its entry
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.map.remove(key)?;
        self.release(idx)
    }

    /// Remove the least recently used entry
    pub(crate) fn pop_lru(&mut self) -> Option<(K, V)> {
        let tail_idx = self.tail?;
        let (key, value) = self.release(tail_idx)?;
        self.map.remove(&key);
        Some((key, value))
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry
    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
    }

    /// Keys from most to least recently used
    pub(crate) fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }

        self.unlink(idx);

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.nodes[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    /// Unlink a slot, recycle it and hand back its entry. The caller owns
    /// the map side.
    fn release(&mut self, idx: usize) -> Option<(K, V)> {
        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free_list.push(idx);
        Some((node.key, node.value))
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }
}

/// Iterator over keys in recency order
pub(crate) struct Keys<'a, K, V> {
    nodes: &'a [Option<Node<K, V>>],
    cursor: Option<usize>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes[self.cursor?].as_ref()?;
        self.cursor = node.next;
        Some(&node.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(cache: &LruCache<u32, &'static str>) -> Vec<u32> {
        cache.keys().copied().collect()
    }

    #[test]
    fn test_lru_basic() {
        let mut cache = LruCache::new(2);

        cache.put(1, "a");
        cache.put(2, "b");

        assert_eq!(cache.get(&1), Some(&"a"));
        assert_eq!(cache.get(&2), Some(&"b"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = LruCache::new(2);

        assert_eq!(cache.put(1, "a"), None);
        assert_eq!(cache.put(2, "b"), None);
        assert_eq!(cache.put(3, "c"), Some((1, "a")));

        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(&"b"));
        assert_eq!(cache.get(&3), Some(&"c"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_lru_update() {
        let mut cache = LruCache::new(2);

        cache.put(1, "a");
        cache.put(2, "b");
        cache.get(&1);
        assert_eq!(cache.put(3, "c"), Some((2, "b")));

        assert_eq!(cache.get(&1), Some(&"a"));
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&3), Some(&"c"));
    }

    #[test]
    fn test_lru_unbounded() {
        let mut cache = LruCache::new(0);

        for i in 0..1000 {
            assert_eq!(cache.put(i, "x"), None);
        }

        assert_eq!(cache.len(), 1000);
        assert_eq!(cache.capacity(), 0);
    }

    #[test]
    fn test_lru_huge_capacity() {
        let mut cache = LruCache::new(usize::MAX);

        assert_eq!(cache.len(), 0);
        assert_eq!(cache.put(1, "a"), None);
        assert_eq!(cache.get(&1), Some(&"a"));
        assert_eq!(cache.capacity(), usize::MAX);
    }

    #[test]
    fn test_lru_remove() {
        let mut cache = LruCache::new(3);

        cache.put(1, "a");
        cache.put(2, "b");
        cache.put(3, "c");

        assert_eq!(cache.remove(&2), Some((2, "b")));
        assert_eq!(cache.remove(&2), None);
        assert_eq!(cache.len(), 2);
        assert_eq!(order(&cache), vec![3, 1]);
    }

    #[test]
    fn test_lru_remove_ends() {
        let mut cache = LruCache::new(3);

        cache.put(1, "a");
        cache.put(2, "b");
        cache.put(3, "c");

        cache.remove(&3);
        cache.remove(&1);
        assert_eq!(order(&cache), vec![2]);

        cache.remove(&2);
        assert_eq!(order(&cache), Vec::<u32>::new());
        assert_eq!(cache.pop_lru(), None);
    }

    #[test]
    fn test_lru_pop() {
        let mut cache = LruCache::new(0);

        cache.put(1, "a");
        cache.put(2, "b");

        assert_eq!(cache.pop_lru(), Some((1, "a")));
        assert_eq!(cache.pop_lru(), Some((2, "b")));
        assert_eq!(cache.pop_lru(), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_lru_slot_reuse() {
        let mut cache = LruCache::new(2);

        for i in 0..100 {
            cache.put(i, "x");
        }

        assert!(cache.nodes.len() <= 3);
        assert_eq!(order(&cache), vec![99, 98]);
    }

    #[test]
    fn test_lru_peek() {
        let mut cache = LruCache::new(2);

        cache.put(1, "a");
        cache.put(2, "b");

        assert_eq!(cache.peek(&1), Some(&"a"));
        assert!(cache.contains(&1));
        assert!(!cache.contains(&3));
        assert_eq!(order(&cache), vec![2, 1]);
    }

    #[test]
    fn test_lru_clear() {
        let mut cache = LruCache::new(3);

        cache.put(1, "a");
        cache.put(2, "b");
        cache.clear();

        assert_eq!(cache.len(), 0);
        assert_eq!(order(&cache), Vec::<u32>::new());

        cache.put(3, "c");
        assert_eq!(order(&cache), vec![3]);
    }

    #[test]
    fn test_lru_overwrite() {
        let mut cache = LruCache::new(2);

        cache.put(1, "a");
        cache.put(2, "b");
        assert_eq!(cache.put(1, "c"), None);

        assert_eq!(cache.peek(&1), Some(&"c"));
        assert_eq!(cache.len(), 2);
        assert_eq!(order(&cache), vec![1, 2]);
    }

    #[test]
    fn test_lru_borrowed_lookup() {
        let mut cache: LruCache<String, u32> = LruCache::new(2);

        cache.put("key".to_string(), 1);

        assert_eq!(cache.get("key"), Some(&1));
        assert_eq!(cache.remove("key"), Some(("key".to_string(), 1)));
    }
}
