use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;
use core::future::Future;
use rand::Rng;
use web_time::Instant;

use crate::*;

/// Where categories come from, usually the trivia HTTP service.
pub trait TriviaSource {
    type Error;

    fn list_categories(
        &self,
        count: u32,
    ) -> impl Future<Output = core::result::Result<Vec<CategorySummary>, Self::Error>>;

    fn category(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = core::result::Result<Category, Self::Error>>;
}

/// Fetches the listing, selects the categories and resolves them one after another into a new board.
pub async fn load_board<S, R>(
    source: &S,
    rng: &mut R,
    listing_count: u32,
) -> core::result::Result<Board, LoadError<S::Error>>
where
    S: TriviaSource + ?Sized,
    R: Rng + ?Sized,
{
    let started_at = Instant::now();

    let pool = source
        .list_categories(listing_count)
        .await
        .map_err(LoadError::Listing)?;
    log::debug!("listing returned {} categories", pool.len());

    let selection = select_categories(&pool, rng);
    let mut categories = Vec::with_capacity(selection.len());
    for id in selected_ids(&selection) {
        log::debug!("fetching category {}", id);
        let category = source
            .category(id)
            .await
            .map_err(|err| LoadError::Category { id, source: err })?;
        categories.push(category);
    }

    let board = Board::new(categories);
    log::info!(
        "Board with {} categories ready in {:?}",
        board.columns(),
        started_at.elapsed()
    );
    Ok(board)
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Identifies the session a board load belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionTicket {
    generation: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FinishOutcome {
    Applied,
    /// A newer session was started, the result was dropped.
    Stale,
}

/// Owns the board of the current game.
///
/// Starting or restarting drops the current board and hands out a new [`SessionTicket`]. Loads run outside the
/// controller and report back through [`SessionController::finish`]; a result carrying an outdated ticket is
/// discarded, so a restart during loading never lets an older fetch overwrite the new session.
#[derive(Debug, Default)]
pub struct SessionController {
    generation: u64,
    phase: SessionPhase,
    board: Option<Board>,
    last_error: Option<String>,
}

impl SessionController {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Loading)
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn button_label(&self) -> &'static str {
        use SessionPhase::*;
        match self.phase {
            Idle => "Start!",
            Loading => "Loading...",
            Ready | Failed => "Restart!",
        }
    }

    pub fn start_game(&mut self) -> SessionTicket {
        self.generation = self.generation.wrapping_add(1);
        self.phase = SessionPhase::Loading;
        self.board = None;
        self.last_error = None;
        log::debug!("session {} started", self.generation);
        SessionTicket {
            generation: self.generation,
        }
    }

    pub fn restart_game(&mut self) -> SessionTicket {
        if self.is_loading() {
            log::info!("Restarting while loading, pending results will be ignored");
        } else if self.board.is_some() {
            log::info!("Restarting, discarding current board");
        }
        self.start_game()
    }

    pub fn finish<E: Display>(
        &mut self,
        ticket: SessionTicket,
        result: core::result::Result<Board, E>,
    ) -> FinishOutcome {
        if ticket.generation != self.generation {
            log::debug!(
                "dropping result of session {}, current is {}",
                ticket.generation,
                self.generation
            );
            return FinishOutcome::Stale;
        }

        match result {
            Ok(board) => {
                self.board = Some(board);
                self.phase = SessionPhase::Ready;
            }
            Err(err) => {
                log::error!("Could not set up the board: {}", err);
                self.last_error = Some(err.to_string());
                self.phase = SessionPhase::Failed;
            }
        }
        FinishOutcome::Applied
    }

    /// Starts a session and waits for its board.
    pub async fn run<S, R>(&mut self, source: &S, rng: &mut R, listing_count: u32) -> FinishOutcome
    where
        S: TriviaSource + ?Sized,
        S::Error: Display,
        R: Rng + ?Sized,
    {
        let ticket = self.restart_game();
        let result = load_board(source, rng, listing_count).await;
        self.finish(ticket, result)
    }

    pub fn handle_cell_click(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        match self.board.as_mut() {
            Some(board) => board.handle_cell_click(coords),
            None => Ok(RevealOutcome::NoChange),
        }
    }
}
