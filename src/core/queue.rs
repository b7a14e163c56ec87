use std::io::Write;

pub const DEFAULT_CAPACITY: usize = 5;

/// Fixed-capacity FIFO queue backed by a ring of slots.
#[derive(Debug, Clone)]
pub struct CircularArrayQueue<T> {
    items: Vec<Option<T>>,
    head: usize,
    tail: usize,
    size: usize,
}

impl<T> Default for CircularArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularArrayQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` 是佇列最多能存放的元素數量
    pub fn with_capacity(capacity: usize) -> Self {
        let mut items = Vec::with_capacity(capacity);
        items.resize_with(capacity, || None);
        Self {
            items,
            head: 0,
            tail: 0,
            size: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.items.len()
    }

    /// Returns false and drops `item` when the queue is full.
    pub fn enqueue(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }

        self.items[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.items.len();
        self.size += 1;

        true
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let item = self.items[self.head].take();
        self.head = (self.head + 1) % self.items.len();
        self.size -= 1;

        item
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    pub fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T: std::fmt::Display> CircularArrayQueue<T> {
    pub fn print_all_elements<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for item in self.iter() {
            writeln!(out, "{}", item)?;
        }
        Ok(())
    }
}

pub struct Iter<'a, T> {
    queue: &'a CircularArrayQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.size {
            return None;
        }
        let index = (self.queue.head + self.offset) % self.queue.items.len();
        self.offset += 1;
        self.queue.items[index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.size - self.offset;
        (remaining, Some(remaining))
    }
}

impl<'a, T> IntoIterator for &'a CircularArrayQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
