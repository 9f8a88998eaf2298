// Indexable handler stack
//
// LIFO at the top, but also addressable by index so that interrupts can be
// layered below the current top.

use std::ops::{Index, IndexMut};

/// Growable stack with random access
///
/// Index 0 is the bottom (oldest) entry, `len() - 1` the top.
/// Push, pop and peek are O(1) amortized; `insert` and `remove_at` shift the
/// entries above the index.
#[derive(Debug, Clone)]
pub struct HandlerStack<T> {
    items: Vec<T>,
}

impl<T> HandlerStack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push an item on top
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Top item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Mutable top item
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Top item together with everything below it
    pub fn split_top_mut(&mut self) -> Option<(&mut T, &mut [T])> {
        self.items.split_last_mut()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Insert an item at `index`, shifting the entries above it up.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    /// Remove the item at `index`, shifting the entries above it down
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove the first item (from the bottom) matching `predicate`
    pub fn remove<F>(&mut self, predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.position(predicate)?;
        Some(self.items.remove(index))
    }

    /// Replace the item at `index` and return the replaced one.
    ///
    /// Hands `item` back if `index` is out of range.
    pub fn exchange(&mut self, index: usize, item: T) -> Result<T, T> {
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, item)),
            None => Err(item),
        }
    }

    /// Index of the first item (from the bottom) matching `predicate`
    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate from bottom to top
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for HandlerStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for HandlerStack<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for HandlerStack<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}
