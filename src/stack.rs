// LIFO of points used as scratch state by one flood fill.
// Growth policy is part of the contract: a full stack doubles before the push,
// which keeps push amortized O(1).

use crate::types::Point;

pub struct PointStack {
    items: Vec<Point>, // items.len() is the next free slot, 0 if empty
    capacity: usize,
}

impl PointStack {
    /// Empty stack with room for `capacity` points. `capacity` must be > 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "point stack capacity must be positive");
        Self { items: Vec::with_capacity(capacity), capacity }
    }

    /// Logical capacity: starts at the requested value and only ever doubles.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn push(&mut self, point: Point) {
        if self.is_full() {
            self.capacity *= 2;
            self.items.reserve_exact(self.capacity - self.items.len());
        }
        self.items.push(point);
    }

    /// Remove the newest point.
    ///
    /// Panics on an empty stack: callers check `is_empty` first, so reaching
    /// this is a bug, not a runtime condition.
    pub fn pop(&mut self) -> Point {
        match self.items.pop() {
            Some(p) => p,
            None => panic!("popped an empty point stack"),
        }
    }

    /// Newest point without removing it. Same precondition as `pop`.
    pub fn peek(&self) -> Point {
        match self.items.last() {
            Some(&p) => p,
            None => panic!("peeked an empty point stack"),
        }
    }

    /// Drop all points; capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Release the backing storage.
    pub fn destroy(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_is_empty() {
        let s = PointStack::new(4);
        assert!(s.is_empty());
        assert!(!s.is_full());
        assert_eq!(s.capacity(), 4);
    }

    #[test]
    fn grows_once_and_pops_in_reverse() {
        let mut s = PointStack::new(2);
        s.push(Point::new(1, 1));
        s.push(Point::new(2, 2));
        assert!(s.is_full());
        assert_eq!(s.capacity(), 2);

        s.push(Point::new(3, 3));
        assert_eq!(s.capacity(), 4);
        assert_eq!(s.len(), 3);

        assert_eq!(s.pop(), Point::new(3, 3));
        assert_eq!(s.pop(), Point::new(2, 2));
        assert_eq!(s.pop(), Point::new(1, 1));
        assert!(s.is_empty());
    }

    #[test]
    fn boundary_push_pop_at_capacity_one() {
        let mut s = PointStack::new(1);
        s.push(Point::new(7, 8));
        assert!(s.is_full());
        assert_eq!(s.peek(), Point::new(7, 8));
        assert_eq!(s.len(), 1);
        assert_eq!(s.pop(), Point::new(7, 8));
        assert!(s.is_empty());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut s = PointStack::new(2);
        for i in 0..5 {
            s.push(Point::new(i, i));
        }
        assert_eq!(s.capacity(), 8);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.capacity(), 8);
        s.destroy();
    }

    #[test]
    #[should_panic(expected = "popped an empty point stack")]
    fn pop_empty_panics() {
        let mut s = PointStack::new(1);
        s.pop();
    }

    #[test]
    #[should_panic(expected = "peeked an empty point stack")]
    fn peek_empty_panics() {
        let s = PointStack::new(1);
        s.peek();
    }

    #[test]
    #[should_panic]
    fn zero_capacity_is_rejected() {
        let _ = PointStack::new(0);
    }
}
