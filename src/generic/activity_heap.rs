/*!
A max-heap of variables keyed by activity.

The heap is backed by three arrays: an activity per variable, the heap of
variable indices, and the position of each variable in the heap (or a nil
mark when the variable is off the heap). The activity array stays in place
while variables move on and off the heap, so a variable keeps its activity
across backjumps.

Bumping adds the current bump delta to a variable's activity and restores
the heap order. The delta itself grows by a constant factor each time
[rescale_delta](ActivityHeap::rescale_delta) is called --- one call per
conflict --- which decays older activity relative to newer without touching
every entry. When any activity crosses a large ceiling, every activity and
the delta are scaled down by the same constant to keep the values finite.

Insertion is idempotent, and the heap may hold variables which have since
been valued; the consumer skips those at pop time.
*/

use crate::structures::literal::Variable;

const HEAP_NIL: usize = usize::MAX;

/// Activities above this bound trigger a global rescale.
const RESCALE_CEILING: f64 = 1e100;

/// The factor applied to every activity, and the bump delta, on a rescale.
const RESCALE_FACTOR: f64 = 1e-100;

/// The growth of the bump delta per conflict, the reciprocal of a decay
/// factor of 0.95.
const BUMP_GROWTH: f64 = 1.0 / 0.95;

pub struct ActivityHeap {
    activity: Vec<f64>,
    heap: Vec<Variable>,
    position: Vec<usize>,
    delta: f64,
}

impl Default for ActivityHeap {
    fn default() -> Self {
        ActivityHeap {
            activity: vec![0.0],
            heap: Vec::default(),
            position: vec![HEAP_NIL],
            delta: 1.0,
        }
    }
}

impl ActivityHeap {
    /// Grows the backing arrays to hold variables `1..=count`.
    pub fn grow_to(&mut self, count: usize) {
        if count + 1 > self.activity.len() {
            self.activity.resize(count + 1, 0.0);
            self.position.resize(count + 1, HEAP_NIL);
        }
    }

    /// The activity of a variable.
    pub fn activity_of(&self, variable: Variable) -> f64 {
        self.activity[variable as usize]
    }

    /// True when the heap holds no variables.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Places a variable on the heap, if not already present.
    pub fn insert(&mut self, variable: Variable) {
        if self.position[variable as usize] != HEAP_NIL {
            return;
        }
        let index = self.heap.len();
        self.heap.push(variable);
        self.position[variable as usize] = index;
        self.sift_up(index);
    }

    /// Removes and returns the variable of highest activity, if any.
    pub fn pop_max(&mut self) -> Option<Variable> {
        let top = *self.heap.first()?;
        self.position[top as usize] = HEAP_NIL;
        let last = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.heap[0] = last;
            self.position[last as usize] = 0;
            self.sift_down(0);
        }
        Some(top)
    }

    /// Adds the bump delta to a variable's activity and restores heap
    /// order, rescaling everything first if the ceiling would be crossed.
    pub fn bump(&mut self, variable: Variable) {
        let index = variable as usize;
        self.activity[index] += self.delta;
        if self.activity[index] > RESCALE_CEILING {
            for activity in self.activity.iter_mut() {
                *activity *= RESCALE_FACTOR;
            }
            self.delta *= RESCALE_FACTOR;
        }
        let heap_index = self.position[index];
        if heap_index != HEAP_NIL {
            self.sift_up(heap_index);
        }
    }

    /// Grows the bump delta, decaying older activity relative to newer.
    pub fn rescale_delta(&mut self) {
        self.delta *= BUMP_GROWTH;
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.activity[self.heap[a] as usize] < self.activity[self.heap[b] as usize]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a] as usize] = a;
        self.position[self.heap[b] as usize] = b;
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less(parent, index) {
                self.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let mut largest = index;
            if self.less(largest, left) {
                largest = left;
            }
            if right < self.heap.len() && self.less(largest, right) {
                largest = right;
            }
            if largest == index {
                break;
            }
            self.swap(index, largest);
            index = largest;
        }
    }
}

#[cfg(test)]
mod heap_tests {
    use super::*;

    fn fresh(count: usize) -> ActivityHeap {
        let mut heap = ActivityHeap::default();
        heap.grow_to(count);
        for variable in 1..=count {
            heap.insert(variable as Variable);
        }
        heap
    }

    #[test]
    fn pop_order_follows_bumps() {
        let mut heap = fresh(5);
        heap.bump(3);
        heap.bump(3);
        heap.bump(5);

        assert_eq!(heap.pop_max(), Some(3));
        assert_eq!(heap.pop_max(), Some(5));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut heap = fresh(3);
        heap.insert(2);
        heap.insert(2);

        let mut drained = 0;
        while heap.pop_max().is_some() {
            drained += 1;
        }
        assert_eq!(drained, 3);
    }

    #[test]
    fn reinsert_keeps_activity() {
        let mut heap = fresh(3);
        heap.bump(2);
        assert_eq!(heap.pop_max(), Some(2));
        heap.insert(2);
        assert_eq!(heap.pop_max(), Some(2));
    }

    #[test]
    fn delta_growth_orders_recent_bumps_first() {
        let mut heap = fresh(2);
        heap.bump(1);
        for _ in 0..100 {
            heap.rescale_delta();
        }
        heap.bump(2);
        assert!(heap.activity_of(2) > heap.activity_of(1));
        assert_eq!(heap.pop_max(), Some(2));
    }

    #[test]
    fn ceiling_rescale_preserves_order() {
        let mut heap = fresh(3);
        for _ in 0..5000 {
            heap.bump(1);
            heap.rescale_delta();
        }
        heap.bump(2);
        assert!(heap.activity_of(1) <= RESCALE_CEILING);
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(2));
    }
}
