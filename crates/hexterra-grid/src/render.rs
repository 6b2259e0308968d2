//! The boundary to whatever draws the cells.

use crate::cell::Cell;

/// Receives the output of a generation pass.
///
/// Each pass calls [`clear`](CellRenderer::clear) once, then
/// [`submit`](CellRenderer::submit) for every cell in row-major order, all
/// from the thread that started the pass.
pub trait CellRenderer {
    /// Drop everything submitted by the previous pass.
    fn clear(&mut self);

    /// Take one finished cell.
    fn submit(&mut self, cell: &Cell);
}

/// Renderer that keeps a copy of every submitted cell.
#[derive(Debug, Default)]
pub struct CollectingRenderer {
    cells: Vec<Cell>,
    clears: usize,
}

impl CollectingRenderer {
    /// Empty renderer that has never been cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells submitted since the last clear, in submission order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// How many times the renderer has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl CellRenderer for CollectingRenderer {
    fn clear(&mut self) {
        self.cells.clear();
        self.clears += 1;
    }

    fn submit(&mut self, cell: &Cell) {
        self.cells.push(cell.clone());
    }
}
