use alloc::{boxed::Box, vec::Vec};

/// A fixed-size circular buffer holding the most recent `period` prices.
///
/// Once full, each push overwrites the oldest price. Iteration always yields
/// prices in arrival order, oldest first.
#[derive(Debug, Clone)]
pub struct Window<T> {
    /// Backing storage, `period` slots
    buf: Box<[T]>,
    /// Slot the next push writes to
    pos: usize,
    /// Whether every slot has been written at least once
    full: bool,
}

impl<T: Copy + Default> Window<T> {
    /// Creates an empty window; `period` must be non-zero
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "period can not be zero");

        Self {
            buf: vec![T::default(); period].into_boxed_slice(),
            pos: 0,
            full: false,
        }
    }

    /// Number of slots in the window
    pub fn period(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` once `period` values have been pushed
    pub const fn is_full(&self) -> bool {
        self.full
    }

    /// Number of values currently held
    pub fn len(&self) -> usize {
        if self.full { self.period() } else { self.pos }
    }

    /// Empties the window
    pub fn reset(&mut self) {
        self.buf.fill(T::default());
        self.pos = 0;
        self.full = false;
    }

    /// Pushes a value, overwriting the oldest one once the window is full
    pub fn next(&mut self, value: T) {
        self.buf[self.pos] = value;

        self.pos = (self.pos + 1) % self.period();
        if self.pos == 0 {
            self.full = true;
        }
    }

    /// Iterates the held values oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let start = if self.full { self.pos } else { 0 };
        (0..self.len()).map(move |i| &self.buf[(start + i) % self.period()])
    }

    /// Copies the held values into a vector, oldest first
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }
}
