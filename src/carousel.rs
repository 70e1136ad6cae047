//! Cyclic carousel index.

/// Which way the last move went; the UI slides accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> i8 {
        match self {
            Direction::None => 0,
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
    direction: Direction,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            index: 0,
            direction: Direction::None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn next(&mut self) -> Option<&T> {
        self.direction = Direction::Forward;
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
        self.current()
    }

    pub fn prev(&mut self) -> Option<&T> {
        self.direction = Direction::Backward;
        if !self.items.is_empty() {
            self.index = self.index.checked_sub(1).unwrap_or(self.items.len() - 1);
        }
        self.current()
    }

    /// Jump to `index`, ignoring out-of-range values.
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() && index != self.index {
            self.direction = if index > self.index {
                Direction::Forward
            } else {
                Direction::Backward
            };
            self.index = index;
        }
    }
}
