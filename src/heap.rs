//! Array-backed binary max-heap.
//!
//! The children of the element at index `i` live at `2i + 1` and `2i + 2`, and no element is
//! larger than its parent.

/// A binary max-heap of integers stored in a growable vector.
///
/// # Examples
/// ```
/// use balanced_trees::heap::MaxHeap;
///
/// let mut heap = MaxHeap::new();
/// heap.add(3);
/// heap.add(7);
/// heap.add(5);
///
/// assert_eq!(heap.peek(), Some(7));
/// assert_eq!(heap.remove(), Some(7));
/// assert_eq!(heap.remove(), Some(5));
/// assert_eq!(heap.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaxHeap {
    array: Vec<i32>,
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

impl MaxHeap {
    /// Constructs a new, empty `MaxHeap`.
    pub fn new() -> Self {
        MaxHeap { array: Vec::new() }
    }

    /// Constructs a new, empty `MaxHeap` with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        MaxHeap {
            array: Vec::with_capacity(capacity),
        }
    }

    /// Adds a value, moving it up until its parent is at least as large.
    pub fn add(&mut self, value: i32) {
        let mut index = self.array.len();
        self.array.push(value);
        while index > 0 && self.array[index] > self.array[parent(index)] {
            self.array.swap(index, parent(index));
            index = parent(index);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Returns the largest value, or `None` if the heap is empty.
    pub fn peek(&self) -> Option<i32> {
        self.array.first().cloned()
    }

    /// Removes and returns the largest value, or `None` if the heap is empty.
    pub fn remove(&mut self) -> Option<i32> {
        if self.array.is_empty() {
            return None;
        }
        let ret = self.array.swap_remove(0);

        let len = self.array.len();
        let mut index = 0;
        loop {
            let left = index * 2 + 1;
            let right = index * 2 + 2;
            let mut largest = index;
            if left < len && self.array[left] > self.array[largest] {
                largest = left;
            }
            if right < len && self.array[right] > self.array[largest] {
                largest = right;
            }
            if largest == index {
                break;
            }
            self.array.swap(index, largest);
            index = largest;
        }

        Some(ret)
    }

    /// Returns the underlying array in heap order.
    pub fn as_slice(&self) -> &[i32] {
        &self.array
    }
}

impl Extend<i32> for MaxHeap {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = i32>,
    {
        for value in iter {
            self.add(value);
        }
    }
}

/// Sorts `values` in ascending order by draining a max-heap from the back.
///
/// # Examples
/// ```
/// use balanced_trees::heap::heap_sort;
///
/// assert_eq!(heap_sort(vec![3, -1, 2, 3]), vec![-1, 2, 3, 3]);
/// ```
pub fn heap_sort(values: Vec<i32>) -> Vec<i32> {
    let mut heap = MaxHeap::with_capacity(values.len());
    heap.extend(values);

    let mut sorted = vec![0; heap.len()];
    for slot in sorted.iter_mut().rev() {
        *slot = match heap.remove() {
            Some(value) => value,
            None => unreachable!(),
        };
    }
    sorted
}
