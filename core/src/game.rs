use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a single game. `Won` and `Lost` are terminal: the board
/// freezes and further select/flag interactions are silently ignored.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// A board cell addressed either directly by index or by the fractional
/// position of a pointer event within the board's bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Target {
    Index(CellIdx),
    /// Both components must be in `[0, 1)`.
    Pointer { x: f64, y: f64 },
}

/// Typed commands accepted by [`Game::apply`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Select(Target),
    ToggleFlag(Target),
    Tick,
    Reset,
}

/// Result of applying a single command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Outcome {
    Reveal(RevealOutcome),
    Flag(FlagOutcome),
    Ticked,
    WasReset,
    Ignored,
}

/// Represents a game from configuration to terminal state. The board starts
/// empty and is populated lazily: mines are placed by the first select,
/// excluding the clicked cell and its whole neighborhood, before that same
/// select is processed against the populated board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    seed: u64,
    state: GameState,
    num_flags: CellCount,
    num_reveals: CellCount,
    mines_placed: CellCount,
    elapsed_ticks: u32,
    triggered_mine: Option<CellIdx>,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            board: Board::new(),
            seed,
            state: Default::default(),
            num_flags: 0,
            num_reveals: 0,
            mines_placed: 0,
            elapsed_ticks: 0,
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn num_flags(&self) -> CellCount {
        self.num_flags
    }

    pub fn num_reveals(&self) -> CellCount {
        self.num_reveals
    }

    pub fn mines_placed(&self) -> CellCount {
        self.mines_placed
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    /// The mine that ended the game, if it ended in a loss.
    pub fn triggered_mine(&self) -> Option<CellIdx> {
        self.triggered_mine
    }

    /// How many mines have not been flagged yet.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.config.mines) - i64::from(self.num_flags)
    }

    /// Placed mine indices, for shells that reveal mines after a loss. The
    /// board itself is never mutated for display.
    pub fn mine_indices(&self) -> impl Iterator<Item = CellIdx> + '_ {
        self.board.mine_indices()
    }

    /// Single dispatch point for all interactions.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Select(target) => {
                let idx = self.resolve(target)?;
                Ok(Outcome::Reveal(self.select(idx)?))
            }
            Command::ToggleFlag(target) => {
                let idx = self.resolve(target)?;
                Ok(Outcome::Flag(self.toggle_flag(idx)?))
            }
            Command::Tick => Ok(if self.tick() {
                Outcome::Ticked
            } else {
                Outcome::Ignored
            }),
            Command::Reset => {
                self.reset();
                Ok(Outcome::WasReset)
            }
        }
    }

    fn resolve(&self, target: Target) -> Result<CellIdx> {
        match target {
            Target::Index(idx) => self.config.validate_idx(idx),
            Target::Pointer { x, y } => self.config.validate_idx(self.config.pointer_to_idx(x, y)),
        }
    }

    /// Primary (reveal-intent) interaction with a cell.
    pub fn select(&mut self, idx: CellIdx) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let idx = self.config.validate_idx(idx)?;
        if self.state.is_terminal() {
            return Ok(NoChange);
        }

        if matches!(self.state, GameState::NotStarted) {
            self.start(idx);
        }

        let cell = self.board.cell(idx);
        Ok(
            if matches!(cell.status, CellStatus::Flagged | CellStatus::Questioned) {
                NoChange
            } else if cell.is_mine() {
                self.triggered_mine = Some(idx);
                self.state = GameState::Lost;
                log::debug!("hit mine at cell {idx}");
                HitMine
            } else if cell.is_unknown() {
                let revealed = crate::engine::reveal_from(&self.config, &mut self.board, idx);
                self.num_reveals += revealed;
                self.check_completion()
            } else if !cell.is_revealed() {
                // numbered cell: reveal directly, no cascade
                self.board.mark_revealed(idx);
                self.num_reveals += 1;
                self.check_completion()
            } else {
                NoChange
            },
        )
    }

    /// Secondary (flag-intent) interaction with a cell. Works before the
    /// first select and never triggers placement or reveal logic.
    pub fn toggle_flag(&mut self, idx: CellIdx) -> Result<FlagOutcome> {
        let idx = self.config.validate_idx(idx)?;
        if self.state.is_terminal() {
            return Ok(FlagOutcome::NoChange);
        }

        let outcome = crate::engine::toggle_flag(&mut self.board, idx, self.config.marks);
        self.num_flags = self.num_flags.saturating_add_signed(outcome.flag_delta());
        Ok(outcome)
    }

    /// Advances elapsed time by one tick; time only runs while in progress.
    pub fn tick(&mut self) -> bool {
        if matches!(self.state, GameState::InProgress) {
            self.elapsed_ticks += 1;
            true
        } else {
            false
        }
    }

    /// Discards the board, counts, and elapsed time; returns to
    /// `NotStarted` with the same game type.
    pub fn reset(&mut self) {
        use rand::prelude::*;

        self.board.clear();
        self.num_flags = 0;
        self.num_reveals = 0;
        self.mines_placed = 0;
        self.elapsed_ticks = 0;
        self.triggered_mine = None;
        self.state = GameState::NotStarted;
        // fresh layout for the next game, still reproducible from the
        // original seed
        self.seed = SmallRng::seed_from_u64(self.seed).random();
        log::debug!("board reset");
    }

    /// Switches game type and resets. Invalid settings cannot reach this
    /// point: they are rejected when the [`GameConfig`] is constructed.
    pub fn reconfigure(&mut self, config: GameConfig) {
        self.config = config;
        self.reset();
    }

    fn start(&mut self, first_idx: CellIdx) {
        self.mines_placed =
            ShufflePlacer::new(self.seed).place_mines(&self.config, &mut self.board, first_idx);
        self.state = GameState::InProgress;
        log::debug!("game started at cell {first_idx}");
    }

    fn check_completion(&mut self) -> RevealOutcome {
        if self.num_reveals == self.config.safe_cells() {
            self.state = GameState::Won;
            log::debug!("all safe cells revealed");
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }
}
