use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// What a single cell currently shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    /// Next state after a click, [`RevealState::Answer`] is terminal.
    pub const fn next(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => Question,
            Question | Answer => Answer,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowedQuestion,
    ShowedAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowedQuestion => true,
            ShowedAnswer => true,
        }
    }
}

/// Display payload of a cell, borrowed from the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellView<'a> {
    Hidden,
    Question(&'a str),
    Answer(&'a str),
    /// The category has no clue for this row.
    Unbound,
}

/// The categories of one game plus the reveal state of every cell.
///
/// Cells are addressed with `(x, y)` where `x` is the category column and `y` the clue row. A cell is unbound when
/// its category returned fewer clues than the board has rows; such cells stay empty and ignore clicks.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    categories: Vec<Category>,
    cells: Array2<Option<RevealState>>,
}

impl Board {
    pub fn new(mut categories: Vec<Category>) -> Self {
        if categories.len() > usize::from(BOARD_COLUMNS) {
            log::warn!(
                "Got {} categories, only the first {} are used",
                categories.len(),
                BOARD_COLUMNS
            );
            categories.truncate(BOARD_COLUMNS.into());
        }

        for category in &categories {
            if category.clues.len() < usize::from(BOARD_ROWS) {
                log::warn!(
                    "Category {} ({:?}) only has {} clues, remaining cells stay empty",
                    category.id,
                    category.title,
                    category.clues.len()
                );
            }
        }

        let cells = Array2::from_shape_fn(
            (categories.len(), BOARD_ROWS.into()),
            |(x, y)| categories[x].clue(y).map(|_| RevealState::Hidden),
        );

        Self { categories, cells }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn columns(&self) -> Coord {
        // at most BOARD_COLUMNS, see new()
        self.categories.len() as Coord
    }

    pub const fn rows(&self) -> Coord {
        BOARD_ROWS
    }

    pub fn size(&self) -> Coord2 {
        (self.columns(), self.rows())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (columns, rows) = self.size();
        if coords.0 < columns && coords.1 < rows {
            Ok(coords)
        } else {
            Err(BoardError::InvalidCoords)
        }
    }

    /// Resolves `(x, y)` to the clue at `categories[x].clues[y]`, `None` for unbound cells.
    pub fn clue_at(&self, coords: Coord2) -> Result<Option<&Clue>> {
        let (x, y) = self.validate_coords(coords)?;
        Ok(self.categories[usize::from(x)].clue(y.into()))
    }

    pub fn reveal_state_at(&self, coords: Coord2) -> Result<Option<RevealState>> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellView<'_>> {
        let state = self.reveal_state_at(coords)?;
        let clue = self.clue_at(coords)?;

        Ok(match (state, clue) {
            (Some(RevealState::Hidden), Some(_)) => CellView::Hidden,
            (Some(RevealState::Question), Some(clue)) => CellView::Question(&clue.question),
            (Some(RevealState::Answer), Some(clue)) => CellView::Answer(&clue.answer),
            _ => CellView::Unbound,
        })
    }

    /// Advances the cell at `coords` one step towards showing the answer.
    pub fn handle_cell_click(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        let Some(state) = self.cells[coords.to_nd_index()] else {
            log::debug!("click on unbound cell {:?}", coords);
            return Ok(RevealOutcome::NoChange);
        };

        let next = state.next();
        self.cells[coords.to_nd_index()] = Some(next);

        Ok(match (state, next) {
            (RevealState::Hidden, RevealState::Question) => RevealOutcome::ShowedQuestion,
            (RevealState::Question, RevealState::Answer) => RevealOutcome::ShowedAnswer,
            _ => RevealOutcome::NoChange,
        })
    }

    pub fn bound_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_some()).count()
    }

    /// Whether every bound cell shows its answer, a board without clues is never complete.
    pub fn is_complete(&self) -> bool {
        self.bound_count() > 0
            && self
                .cells
                .iter()
                .flatten()
                .all(|state| state.is_terminal())
    }
}
