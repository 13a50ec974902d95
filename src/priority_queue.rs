//! An array-backed binary min-heap keyed by an explicit priority.
//!
//! Unlike [std::collections::BinaryHeap] the priority is stored next to the element instead of
//! being derived from it, and there is no decrease-key: a better priority for an element is
//! simply enqueued again, leaving the old entry behind as a stale duplicate for the consumer to
//! skip.
use crate::error::EmptyQueueError;

#[derive(Clone, Debug)]
struct Entry<T, P> {
    element: T,
    priority: P,
}

#[derive(Clone, Debug)]
pub struct PriorityQueue<T, P> {
    elements: Vec<Entry<T, P>>,
}

impl<T, P> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        PriorityQueue {
            elements: Vec::new(),
        }
    }
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    pub fn new() -> PriorityQueue<T, P> {
        Self::default()
    }
    pub fn with_capacity(capacity: usize) -> PriorityQueue<T, P> {
        PriorityQueue {
            elements: Vec::with_capacity(capacity),
        }
    }
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    /// The element with the smallest priority, without removing it.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.elements.first().map(|e| (&e.element, &e.priority))
    }

    /// Appends the pair and restores the heap property in O(log n).
    pub fn enqueue(&mut self, element: T, priority: P) {
        self.elements.push(Entry { element, priority });
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes the root and returns it together with its priority.
    pub fn dequeue(&mut self) -> Result<(T, P), EmptyQueueError> {
        if self.elements.is_empty() {
            return Err(EmptyQueueError);
        }
        let root = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Ok((root.element, root.priority))
    }

    /// Like [dequeue](Self::dequeue) but maps the empty case to [None].
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.dequeue().ok()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.elements[index].priority < self.elements[parent].priority {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;
            if left < len && self.elements[left].priority < self.elements[smallest].priority {
                smallest = left;
            }
            // Right only displaces left when strictly smaller, so ties go left.
            if right < len && self.elements[right].priority < self.elements[smallest].priority {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn assert_heap_property(queue: &PriorityQueue<usize, i32>) {
        if let Some((_, root)) = queue.peek() {
            assert!(queue.elements.iter().all(|e| *root <= e.priority));
        }
        for (i, e) in queue.elements.iter().enumerate().skip(1) {
            assert!(queue.elements[(i - 1) / 2].priority <= e.priority);
        }
    }

    #[test]
    fn dequeues_in_priority_order() {
        let mut queue = PriorityQueue::new();
        for (element, priority) in [('d', 4), ('a', 1), ('e', 5), ('c', 3), ('b', 2)] {
            queue.enqueue(element, priority);
        }
        let mut order = Vec::new();
        while !queue.is_empty() {
            order.push(queue.dequeue().unwrap());
        }
        assert_eq!(order, vec![('a', 1), ('b', 2), ('c', 3), ('d', 4), ('e', 5)]);
    }

    #[test]
    fn empty_dequeue_fails() {
        let mut queue: PriorityQueue<u8, u32> = PriorityQueue::new();
        assert_eq!(queue.dequeue(), Err(EmptyQueueError));
        assert_eq!(queue.pop(), None);
        queue.enqueue(7, 0);
        assert_eq!(queue.dequeue(), Ok((7, 0)));
        assert_eq!(queue.dequeue(), Err(EmptyQueueError));
    }

    /// Equal priorities never trigger a swap, so the earlier entry stays on top.
    #[test]
    fn equal_priority_keeps_root() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("first", 5);
        queue.enqueue("second", 5);
        assert_eq!(queue.peek(), Some((&"first", &5)));
        assert_eq!(queue.dequeue(), Ok(("first", 5)));
        assert_eq!(queue.dequeue(), Ok(("second", 5)));
    }

    /// Stale duplicates of the same element are kept and come out in priority order.
    #[test]
    fn duplicate_elements() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(3usize, 10);
        queue.enqueue(3usize, 2);
        queue.enqueue(4usize, 6);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some((3, 2)));
        assert_eq!(queue.pop(), Some((4, 6)));
        assert_eq!(queue.pop(), Some((3, 10)));
    }

    #[test]
    fn heap_property_under_random_operations() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut queue = PriorityQueue::with_capacity(64);
        let mut last_popped = None;
        for i in 0..2000 {
            if rng.gen_bool(0.6) {
                queue.enqueue(i, rng.gen_range(-50..50));
                last_popped = None;
            } else if let Some((_, priority)) = queue.pop() {
                // Without interleaved pushes, successive pops never decrease.
                if let Some(last) = last_popped {
                    assert!(last <= priority);
                }
                last_popped = Some(priority);
            }
            assert_heap_property(&queue);
        }
    }
}
