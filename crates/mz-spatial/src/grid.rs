//! Grid world representation and builder.
//!
//! # Data layout
//!
//! Cells are stored row-major in one `Vec<CellKind>`:
//!
//! ```text
//! cells[ y * width + x ]
//! ```
//!
//! Dimensions are fixed at construction.  The only mutation after that is
//! the `Occupied` marker, written through [`GridWorld::mark_occupied`] and
//! removed through [`GridWorld::clear_occupied`].

use std::fmt;

use mz_core::{Direction, Position};

use crate::{SpatialError, SpatialResult};

// ── CellKind ──────────────────────────────────────────────────────────────────

/// What a single cell contains.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Open,
    Wall,
    /// Transient marker: a live agent stands here.
    Occupied,
}

impl CellKind {
    /// Decode the integer maze format supplied by level loaders:
    /// 0 = open, 1 = wall, 2 = occupied.
    pub fn from_code(code: u8) -> Option<CellKind> {
        match code {
            0 => Some(CellKind::Open),
            1 => Some(CellKind::Wall),
            2 => Some(CellKind::Occupied),
            _ => None,
        }
    }

    fn glyph(self) -> char {
        match self {
            CellKind::Open     => '.',
            CellKind::Wall     => '#',
            CellKind::Occupied => '@',
        }
    }
}

// ── GridWorld ─────────────────────────────────────────────────────────────────

/// Rectangular maze of [`CellKind`]s.
///
/// Construct with [`GridWorld::from_rows`], [`GridWorld::from_codes`] or
/// [`GridWorldBuilder`].
#[derive(Clone, PartialEq, Eq)]
pub struct GridWorld {
    width:  usize,
    height: usize,
    cells:  Vec<CellKind>,
}

impl GridWorld {
    /// Build from a row-major matrix.  Rows must all have the same length.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> SpatialResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(SpatialError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(SpatialError::RaggedRow { row, expected: width, got: r.len() });
            }
            cells.extend(r);
        }
        Ok(Self { width, height, cells })
    }

    /// Build from the integer maze format (0 = open, 1 = wall, 2 = occupied).
    pub fn from_codes(rows: &[Vec<u8>]) -> SpatialResult<Self> {
        let decoded = rows
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, &code)| {
                        CellKind::from_code(code).ok_or(SpatialError::UnknownCode {
                            code,
                            pos: Position::new(x as i32, y as i32),
                        })
                    })
                    .collect::<SpatialResult<Vec<_>>>()
            })
            .collect::<SpatialResult<Vec<_>>>()?;
        Self::from_rows(decoded)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Row-major index of `pos`, or `None` outside the grid.
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Contents of `pos`.  Fails fast on positions outside the grid.
    pub fn cell_at(&self, pos: Position) -> SpatialResult<CellKind> {
        self.index_of(pos)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_bounds(pos))
    }

    /// Contents of `pos`, with everything outside the grid reading as
    /// `Wall`.  This is how percepts see the border.
    #[inline]
    pub fn kind_or_wall(&self, pos: Position) -> CellKind {
        self.index_of(pos).map_or(CellKind::Wall, |i| self.cells[i])
    }

    /// `true` iff `pos` is in bounds and `Open`.  Neither walls nor other
    /// agents are passable.
    #[inline]
    pub fn passable(&self, pos: Position) -> bool {
        self.kind_or_wall(pos) == CellKind::Open
    }

    /// `true` iff `pos` holds the `Occupied` marker.
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.kind_or_wall(pos) == CellKind::Occupied
    }

    /// Passable cardinal neighbours of `pos`, in [`Direction::ALL`] order.
    pub fn passable_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors().into_iter().filter(move |&n| self.passable(n))
    }

    /// Headings from `pos` whose adjacent cell is passable.
    pub fn passable_directions(&self, pos: Position) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.passable(pos.step(d)))
            .collect()
    }

    /// Every cell that is not a wall, row-major.
    pub fn floor_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &k)| k != CellKind::Wall)
            .map(|(i, _)| self.position_of(i))
    }

    // ── Occupancy writes ──────────────────────────────────────────────────

    /// Place the `Occupied` marker on an `Open` cell.
    pub fn mark_occupied(&mut self, pos: Position) -> SpatialResult<()> {
        let i = self.index_of(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        match self.cells[i] {
            CellKind::Open => {
                self.cells[i] = CellKind::Occupied;
                Ok(())
            }
            CellKind::Wall     => Err(SpatialError::Wall(pos)),
            CellKind::Occupied => Err(SpatialError::AlreadyOccupied(pos)),
        }
    }

    /// Remove the `Occupied` marker.  Clearing an already open cell is a
    /// no-op.
    pub fn clear_occupied(&mut self, pos: Position) -> SpatialResult<()> {
        let i = self.index_of(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        match self.cells[i] {
            CellKind::Occupied | CellKind::Open => {
                self.cells[i] = CellKind::Open;
                Ok(())
            }
            CellKind::Wall => Err(SpatialError::Wall(pos)),
        }
    }

    fn out_of_bounds(&self, pos: Position) -> SpatialError {
        SpatialError::OutOfBounds { pos, width: self.width, height: self.height }
    }
}

impl fmt::Display for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().map(|k| k.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridWorld {}x{}\n{self}", self.width, self.height)
    }
}

// ── GridWorldBuilder ──────────────────────────────────────────────────────────

/// Incremental grid construction for tests and procedurally drawn levels.
///
/// ```rust
/// use mz_core::Position;
/// use mz_spatial::GridWorldBuilder;
///
/// // 5x5 room with a pillar in the middle.
/// let world = GridWorldBuilder::new(5, 5)
///     .border()
///     .wall(Position::new(2, 2))
///     .build();
/// assert!(world.passable(Position::new(1, 1)));
/// assert!(!world.passable(Position::new(2, 2)));
/// ```
pub struct GridWorldBuilder {
    width:  usize,
    height: usize,
    cells:  Vec<CellKind>,
}

impl GridWorldBuilder {
    /// An all-open `width` × `height` grid.  Zero dimensions are bumped to 1
    /// so the built grid is never empty.
    pub fn new(width: usize, height: usize) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self { width, height, cells: vec![CellKind::Open; width * height] }
    }

    /// Wall in the outermost ring of cells.
    pub fn border(mut self) -> Self {
        for y in 0..self.height {
            for x in 0..self.width {
                if x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height {
                    self.cells[y * self.width + x] = CellKind::Wall;
                }
            }
        }
        self
    }

    /// Set one cell to `Wall`.  Positions outside the grid are ignored.
    pub fn wall(self, pos: Position) -> Self {
        self.cell(pos, CellKind::Wall)
    }

    /// Set one cell to `kind`.  Positions outside the grid are ignored.
    pub fn cell(mut self, pos: Position, kind: CellKind) -> Self {
        if pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height {
            self.cells[pos.y as usize * self.width + pos.x as usize] = kind;
        }
        self
    }

    pub fn build(self) -> GridWorld {
        GridWorld { width: self.width, height: self.height, cells: self.cells }
    }
}
