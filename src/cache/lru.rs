//! LRU List Module
//!
//! Recency ordering for the cache store: an arena of nodes linked by index
//! into a doubly-linked list. Front = most recently used, back = least.
//! Slots freed by eviction are recycled, so the arena never grows past the
//! peak number of resident entries.

use crate::cache::CacheEntry;

/// Null link marker.
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node {
    entry: CacheEntry,
    prev: usize,
    next: usize,
}

// == LRU List ==
/// Index-linked recency list.
///
/// Every operation except iteration is O(1). Callers hold on to the slot
/// index returned by [`LruList::push_front`] to address an entry later.
#[derive(Debug)]
pub struct LruList {
    nodes: Vec<Node>,
    head: usize,
    tail: usize,
    /// Recycled slot indices
    free: Vec<usize>,
    len: usize,
}

impl Default for LruList {
    fn default() -> Self {
        Self::new()
    }
}

impl LruList {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    // == Push Front ==
    /// Inserts an entry as most recently used and returns its slot.
    pub fn push_front(&mut self, entry: CacheEntry) -> usize {
        let node = Node {
            entry,
            prev: NIL,
            next: NIL,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Touch ==
    /// Marks the entry in `idx` as most recently used.
    pub fn touch(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<CacheEntry> {
        if self.tail == NIL {
            return None;
        }
        let idx = self.tail;
        self.unlink(idx);
        self.free.push(idx);
        self.len -= 1;
        Some(self.nodes[idx].entry)
    }

    // == Slot Access ==
    pub fn get(&self, idx: usize) -> &CacheEntry {
        &self.nodes[idx].entry
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut CacheEntry {
        &mut self.nodes[idx].entry
    }

    // == Iteration ==
    /// Iterates from most recently used to least recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn link_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }
}

// == Iterator ==
/// Most-recently-used-first iterator over an [`LruList`].
pub struct Iter<'a> {
    list: &'a LruList,
    cursor: usize,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CacheEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let node = &self.list.nodes[self.cursor];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &LruList) -> Vec<i64> {
        list.iter().map(|e| e.key).collect()
    }

    fn oldest(list: &LruList) -> Option<i64> {
        list.iter().last().map(|e| e.key)
    }

    fn push(list: &mut LruList, key: i64) -> usize {
        list.push_front(CacheEntry::new(key, key * 10))
    }

    #[test]
    fn test_list_new() {
        let list = LruList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(oldest(&list), None);
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = LruList::new();
        push(&mut list, 1);
        push(&mut list, 2);
        push(&mut list, 3);

        assert_eq!(list.len(), 3);
        assert_eq!(keys(&list), vec![3, 2, 1]);
        // 1 is oldest (added first)
        assert_eq!(oldest(&list), Some(1));
    }

    #[test]
    fn test_touch_moves_to_front() {
        let mut list = LruList::new();
        let a = push(&mut list, 1);
        push(&mut list, 2);
        push(&mut list, 3);

        list.touch(a);

        assert_eq!(keys(&list), vec![1, 3, 2]);
        assert_eq!(oldest(&list), Some(2));
    }

    #[test]
    fn test_touch_head_is_noop() {
        let mut list = LruList::new();
        push(&mut list, 1);
        let b = push(&mut list, 2);

        list.touch(b);
        list.touch(b);

        assert_eq!(keys(&list), vec![2, 1]);
    }

    #[test]
    fn test_touch_middle_and_tail() {
        let mut list = LruList::new();
        let a = push(&mut list, 1);
        let b = push(&mut list, 2);
        let c = push(&mut list, 3);

        // front=[3, 2, 1]=back
        list.touch(a); // [1, 3, 2]
        list.touch(c); // [3, 1, 2]
        list.touch(b); // [2, 3, 1]

        assert_eq!(keys(&list), vec![2, 3, 1]);
        assert_eq!(list.pop_back().map(|e| e.key), Some(1));
        assert_eq!(list.pop_back().map(|e| e.key), Some(3));
        assert_eq!(list.pop_back().map(|e| e.key), Some(2));
        assert!(list.is_empty());
    }

    #[test]
    fn test_pop_back_empty() {
        let mut list = LruList::new();
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    fn test_single_element_pop() {
        let mut list = LruList::new();
        push(&mut list, 9);

        assert_eq!(list.pop_back(), Some(CacheEntry::new(9, 90)));
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut list = LruList::with_capacity(2);
        push(&mut list, 1);
        push(&mut list, 2);

        list.pop_back();
        let idx = push(&mut list, 3);

        // Reuses the slot freed by key 1
        assert_eq!(list.nodes.len(), 2);
        assert_eq!(list.get(idx).key, 3);
        assert_eq!(keys(&list), vec![3, 2]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut list = LruList::new();
        let idx = push(&mut list, 4);

        list.get_mut(idx).value = 400;

        assert_eq!(list.get(idx).value, 400);
        assert_eq!(list.iter().len(), 1);
    }
}
