//! Winning-shape ("tippy") enumeration.
//!
//! A tippy is four cells reached from a pivot by a three-step walk that
//! turns twice: `[up, right, up]`, `[left, down, left]`, and so on. The
//! table is built once per board and shared by every derived state.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Board coordinate: column `x`, row `y`.
pub type Coord = (usize, usize);

/// One winning shape, coordinates sorted.
pub type Shape = [Coord; 4];

#[derive(Clone, Copy, Debug)]
enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    fn walk(self, (x, y): Coord, size: usize) -> Option<Coord> {
        let next = match self {
            Step::Up => (x, y.checked_sub(1)?),
            Step::Down => (x, y + 1),
            Step::Left => (x.checked_sub(1)?, y),
            Step::Right => (x + 1, y),
        };
        (next.0 < size && next.1 < size).then_some(next)
    }
}

const PATTERNS: [[Step; 3]; 8] = [
    [Step::Up, Step::Right, Step::Up],
    [Step::Up, Step::Left, Step::Up],
    [Step::Down, Step::Right, Step::Down],
    [Step::Down, Step::Left, Step::Down],
    [Step::Right, Step::Up, Step::Right],
    [Step::Right, Step::Down, Step::Right],
    [Step::Left, Step::Up, Step::Left],
    [Step::Left, Step::Down, Step::Left],
];

/// Every winning shape on an `size x size` board, indexed by cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TippyTable {
    size: usize,
    shapes: Vec<Shape>,
    /// Indices into `shapes` for each cell, row-major.
    by_cell: Vec<SmallVec<[usize; 8]>>,
}

impl TippyTable {
    /// Enumerate all shapes that fit on the board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let mut seen = FxHashSet::default();
        let mut shapes = Vec::new();

        for y in 0..size {
            for x in 0..size {
                for pattern in &PATTERNS {
                    if let Some(shape) = Self::trace((x, y), pattern, size) {
                        if seen.insert(shape) {
                            shapes.push(shape);
                        }
                    }
                }
            }
        }

        let mut by_cell = vec![SmallVec::new(); size * size];
        for (idx, shape) in shapes.iter().enumerate() {
            for &(x, y) in shape {
                by_cell[y * size + x].push(idx);
            }
        }

        Self {
            size,
            shapes,
            by_cell,
        }
    }

    /// Walk `pattern` from `pivot`; `None` if the walk leaves the board.
    fn trace(pivot: Coord, pattern: &[Step; 3], size: usize) -> Option<Shape> {
        let mut shape = [pivot; 4];
        let mut at = pivot;
        for (slot, step) in shape[1..].iter_mut().zip(pattern) {
            at = step.walk(at, size)?;
            *slot = at;
        }
        shape.sort_unstable();
        Some(shape)
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All shapes.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of distinct shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True if no shape fits on the board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes passing through `(x, y)`.
    pub fn through(&self, (x, y): Coord) -> impl Iterator<Item = &Shape> {
        self.by_cell[y * self.size + x]
            .iter()
            .map(move |&idx| &self.shapes[idx])
    }
}
