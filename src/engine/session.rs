//! The game session and its turn state machine.

use tracing::{debug, info, trace, warn};

use super::phase::{GameResult, TurnPhase};
use super::schedule::{Continuation, Generation, ScheduledTask, Scheduler};
use super::view::SessionSnapshot;
use crate::board::Board;
use crate::core::{
    ConfigError, GameRng, InvalidMoveError, Mode, Position, SessionSettings, Side, SideMap,
    SymbolPool,
};
use crate::difficulty::{DifficultyCatalog, DifficultyPreset, PresetId};
use crate::history::{CardSnapshot, MoveHistory, MoveRecord};
use crate::opponent::{MemoryDetail, OpponentMemory};

/// One game from start to finish, owned by the caller.
///
/// Holds the board, move history, opponent memory, scores, and the queue of
/// deferred continuations. Commands that are not allowed in the current
/// state return [`InvalidMoveError`] and leave the session untouched.
///
/// ## Driving time
///
/// Picks return immediately; resolutions and computer turns are queued and
/// only happen when the caller advances the virtual clock with
/// [`advance`](Self::advance) (or drains it with
/// [`run_until_idle`](Self::run_until_idle)).
///
/// ```
/// use memory_match::core::{Mode, Pacing, Position, SessionSettings};
/// use memory_match::difficulty::PresetId;
/// use memory_match::engine::{GameSession, TurnPhase};
///
/// let settings = SessionSettings::seeded(7).with_pacing(Pacing::instant());
/// let mut session = GameSession::start(PresetId::Easy, Mode::TwoPlayer, settings).unwrap();
///
/// session.pick_card(Position::new(0, 0)).unwrap();
/// session.pick_card(Position::new(0, 1)).unwrap();
/// assert!(matches!(session.phase(), TurnPhase::Resolving { .. }));
///
/// session.run_until_idle();
/// assert_eq!(session.phase(), TurnPhase::AwaitingFirstPick);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    preset: DifficultyPreset,
    mode: Mode,
    settings: SessionSettings,
    pool: SymbolPool,

    board: Board,
    history: MoveHistory,
    memory: OpponentMemory,
    rng: GameRng,

    phase: TurnPhase,
    active: Side,
    scores: SideMap<u32>,
    matched_pairs: usize,

    generation: Generation,
    scheduler: Scheduler,
    started_at_ms: u64,
}

impl GameSession {
    /// Start a new session on a freshly shuffled board.
    ///
    /// # Errors
    /// Returns `ConfigError` if the preset's board cannot be built from the
    /// standard symbol pool.
    pub fn start(preset: PresetId, mode: Mode, settings: SessionSettings) -> Result<Self, ConfigError> {
        let preset = DifficultyCatalog::standard().get(preset).clone();
        let pool = SymbolPool::standard();
        let mut rng = settings.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let board = Board::initialize(preset.rows, preset.cols, &pool, &mut rng)?;

        info!(
            preset = %preset.id,
            ?mode,
            seed = rng.seed(),
            "session started"
        );
        Ok(Self::assemble(preset, mode, settings, pool, board, rng))
    }

    /// Start a session on a prepared board, keeping the preset's pacing.
    ///
    /// Resets reshuffle a board of the same dimensions.
    #[must_use]
    pub fn from_board(preset: PresetId, mode: Mode, settings: SessionSettings, board: Board) -> Self {
        let preset = DifficultyCatalog::standard().get(preset).clone();
        let rng = settings.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(
            preset = %preset.id,
            ?mode,
            rows = board.rows(),
            cols = board.cols(),
            "session started on prepared board"
        );
        Self::assemble(preset, mode, settings, SymbolPool::standard(), board, rng)
    }

    fn assemble(
        preset: DifficultyPreset,
        mode: Mode,
        settings: SessionSettings,
        pool: SymbolPool,
        board: Board,
        rng: GameRng,
    ) -> Self {
        Self {
            preset,
            mode,
            settings,
            pool,
            board,
            history: MoveHistory::new(),
            memory: OpponentMemory::new(),
            rng,
            phase: TurnPhase::AwaitingFirstPick,
            active: Side::First,
            scores: SideMap::default(),
            matched_pairs: 0,
            generation: 0,
            scheduler: Scheduler::new(),
            started_at_ms: 0,
        }
    }

    // === Commands ===

    /// Turn a card for the active side.
    ///
    /// Only human-controlled sides pick through this call; while the
    /// computer is active it is rejected as `NotYourTurn`. The second pick
    /// of a turn queues the resolution.
    ///
    /// # Errors
    /// Rejected without mutation if the session has ended, a resolution is
    /// in progress, the computer is to move, or the card is off the board,
    /// face up, or matched.
    pub fn pick_card(&mut self, pos: Position) -> Result<(), InvalidMoveError> {
        self.ensure_can_pick()?;
        if self.mode.is_computer(self.active) {
            return Err(InvalidMoveError::NotYourTurn { active: self.active });
        }
        self.pick(self.active, pos)
    }

    /// Take back the most recent match.
    ///
    /// Allowed only while the first side (the human, or Player 1) is to
    /// move, no resolution is pending, and the latest match is its own.
    /// The pair goes back face down and the score and matched count drop
    /// by one. Opponent memory is not restored.
    ///
    /// # Errors
    /// Rejected without mutation when any of the above does not hold.
    pub fn undo(&mut self) -> Result<MoveRecord, InvalidMoveError> {
        self.undoable()?;
        let Some(record) = self.history.pop_last() else {
            return Err(InvalidMoveError::NothingToUndo);
        };

        for pos in record.positions() {
            self.board.clear_matched(pos)?;
        }
        self.scores[record.side] = self.scores[record.side].saturating_sub(1);
        self.matched_pairs = self.matched_pairs.saturating_sub(1);

        debug!(
            first = %record.first.position,
            second = %record.second.position,
            "match undone"
        );
        Ok(record)
    }

    /// Exit mid-play.
    ///
    /// Moves to `Abandoned` from any phase. Face-up cards from an unfinished
    /// turn are turned back without scoring, history and memory are cleared,
    /// and every queued continuation becomes stale.
    pub fn abandon(&mut self) {
        if self.phase == TurnPhase::Abandoned {
            return;
        }
        self.generation += 1;
        for pos in self.in_flight_positions() {
            self.board.hide(pos);
        }
        self.phase = TurnPhase::Abandoned;
        self.history.clear();
        self.memory.clear();
        info!(generation = self.generation, "session abandoned");
    }

    /// Replay with the same preset and mode on a fresh shuffle.
    ///
    /// Scores, history, and memory are cleared and the first side moves.
    /// Queued continuations from before the reset become stale.
    ///
    /// # Errors
    /// Returns `ConfigError` if the board cannot be rebuilt.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        let board = Board::initialize(self.board.rows(), self.board.cols(), &self.pool, &mut self.rng)?;

        self.generation += 1;
        self.board = board;
        self.history.clear();
        self.memory.clear();
        self.phase = TurnPhase::AwaitingFirstPick;
        self.active = Side::First;
        self.scores = SideMap::default();
        self.matched_pairs = 0;
        self.started_at_ms = self.scheduler.now_ms();

        info!(generation = self.generation, "session reset");
        Ok(())
    }

    /// Advance virtual time by `elapsed_ms`, firing every continuation that
    /// falls due, in due order.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let deadline = self.scheduler.now_ms().saturating_add(elapsed_ms);
        while let Some(task) = self.scheduler.pop_due(deadline) {
            self.fire(task);
        }
        self.scheduler.advance_to(deadline);
    }

    /// Fire queued continuations until none remain, jumping the clock to
    /// each due time.
    pub fn run_until_idle(&mut self) {
        while let Some(task) = self.scheduler.pop_due(u64::MAX) {
            self.fire(task);
        }
    }

    // === Queries ===

    /// The grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Side to move.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active
    }

    /// Whether the session still accepts play.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.phase.is_terminal()
    }

    /// Pairs credited to each side.
    #[must_use]
    pub fn scores(&self) -> &SideMap<u32> {
        &self.scores
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.board.total_pairs()
    }

    /// Resolved matches.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// What the computer remembers.
    #[must_use]
    pub fn memory(&self) -> &OpponentMemory {
        &self.memory
    }

    /// Remembered positions per symbol.
    #[must_use]
    pub fn memory_details(&self) -> Vec<MemoryDetail> {
        self.memory.details()
    }

    /// Winner or tie once every pair is matched.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        (self.phase == TurnPhase::GameOver)
            .then(|| GameResult::from_scores(self.scores[Side::First], self.scores[Side::Second]))
    }

    /// Whether [`undo`](Self::undo) would currently succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undoable().is_ok()
    }

    /// Active preset.
    #[must_use]
    pub fn preset(&self) -> &DifficultyPreset {
        &self.preset
    }

    /// Solo or two-player.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Settings the session was started with.
    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Virtual time since the current game began.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.scheduler.now_ms().saturating_sub(self.started_at_ms)
    }

    /// Time left against the preset's limit, floored at zero.
    #[must_use]
    pub fn time_remaining_ms(&self) -> u64 {
        (self.preset.time_limit_secs * 1000).saturating_sub(self.elapsed_ms())
    }

    /// Queued continuations, stale ones included.
    #[must_use]
    pub fn pending_continuations(&self) -> usize {
        self.scheduler.len()
    }

    /// Generation token for continuations scheduled now.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Serializable summary for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            preset: self.preset.id,
            mode: self.mode,
            rows: self.board.rows(),
            cols: self.board.cols(),
            cards: self.board.cards().copied().collect(),
            phase: self.phase,
            active: self.active,
            scores: self.scores.clone(),
            matched_pairs: self.matched_pairs,
            total_pairs: self.board.total_pairs(),
            history_len: self.history.len(),
            memory_len: self.memory.len(),
            outcome: self.outcome(),
            can_undo: self.can_undo(),
            time_remaining_ms: self.time_remaining_ms(),
        }
    }

    // === State machine ===

    fn ensure_can_pick(&self) -> Result<(), InvalidMoveError> {
        if !self.is_active() {
            return Err(InvalidMoveError::SessionInactive);
        }
        if !self.phase.accepts_picks() {
            return Err(InvalidMoveError::Busy);
        }
        Ok(())
    }

    fn undoable(&self) -> Result<&MoveRecord, InvalidMoveError> {
        self.ensure_can_pick()?;
        if self.active != Side::First {
            return Err(InvalidMoveError::NotYourTurn { active: self.active });
        }
        let record = self.history.peek_last().ok_or(InvalidMoveError::NothingToUndo)?;
        if record.side != Side::First {
            return Err(InvalidMoveError::UndoNotAllowed { owner: record.side });
        }
        Ok(record)
    }

    fn pick(&mut self, side: Side, pos: Position) -> Result<(), InvalidMoveError> {
        self.ensure_can_pick()?;
        if side != self.active {
            return Err(InvalidMoveError::NotYourTurn { active: self.active });
        }
        self.board.reveal(pos)?;

        self.phase = match self.phase {
            TurnPhase::AwaitingSecondPick { first } => {
                self.schedule(self.settings.pacing.resolve_delay_ms, Continuation::Resolve);
                TurnPhase::Resolving { first, second: pos }
            }
            _ => TurnPhase::AwaitingSecondPick { first: pos },
        };
        trace!(%side, %pos, "card picked");
        Ok(())
    }

    fn schedule(&mut self, delay_ms: u64, step: Continuation) {
        self.scheduler.schedule(delay_ms, self.generation, step);
    }

    fn fire(&mut self, task: ScheduledTask) {
        if task.generation != self.generation || !self.is_active() {
            trace!(step = ?task.step, generation = task.generation, "stale continuation dropped");
            return;
        }

        let result = match task.step {
            Continuation::Resolve => self.resolve(),
            Continuation::HideMismatch { first, second } => {
                self.board.hide(first);
                self.board.hide(second);
                self.begin_turn(self.active.other());
                Ok(())
            }
            Continuation::ComputerFirstPick => self.computer_pick(None),
            Continuation::ComputerSecondPick { anchor } => self.computer_pick(Some(anchor)),
        };

        if let Err(err) = result {
            warn!(%err, step = ?task.step, "continuation rejected");
        }
    }

    fn resolve(&mut self) -> Result<(), InvalidMoveError> {
        let TurnPhase::Resolving { first, second } = self.phase else {
            return Err(InvalidMoveError::Busy);
        };
        let a = self.snapshot_at(first)?;
        let b = self.snapshot_at(second)?;

        if a.symbol == b.symbol {
            self.board.set_matched(first)?;
            self.board.set_matched(second)?;
            self.scores[self.active] += 1;
            self.matched_pairs += 1;
            self.history.push_match(MoveRecord::new(a, b, self.active));
            if self.mode == Mode::VsComputer {
                self.memory.forget(a.symbol, first);
                self.memory.forget(b.symbol, second);
            }
            debug!(side = %self.active, symbol = %a.symbol, matched = self.matched_pairs, "pair matched");

            if self.board.is_complete() {
                self.phase = TurnPhase::GameOver;
                info!(result = ?self.outcome(), "game over");
            } else {
                self.phase = TurnPhase::SwitchingTurn;
                self.begin_turn(self.active);
            }
        } else {
            if self.mode == Mode::VsComputer {
                self.memory.remember(a.symbol, first);
                self.memory.remember(b.symbol, second);
            }
            debug!(side = %self.active, %first, %second, "no match");
            self.phase = TurnPhase::SwitchingTurn;
            self.schedule(
                self.settings.pacing.mismatch_hide_ms,
                Continuation::HideMismatch { first, second },
            );
        }
        Ok(())
    }

    fn snapshot_at(&self, pos: Position) -> Result<CardSnapshot, InvalidMoveError> {
        self.board
            .card(pos)
            .map(CardSnapshot::from)
            .ok_or(InvalidMoveError::OutOfBounds(pos))
    }

    /// Hand the turn to `side`, queueing the computer's turn if it moves next.
    fn begin_turn(&mut self, side: Side) {
        self.active = side;
        self.phase = TurnPhase::AwaitingFirstPick;
        if self.mode.is_computer(side) {
            self.schedule(self.preset.think_delay_ms, Continuation::ComputerFirstPick);
        }
    }

    fn computer_pick(&mut self, anchor: Option<Position>) -> Result<(), InvalidMoveError> {
        let Some(pos) = self.memory.choose_move(&self.board, anchor, &mut self.rng) else {
            debug!("computer has no card to turn");
            if let Some(anchor) = anchor {
                self.board.hide(anchor);
            }
            self.phase = TurnPhase::SwitchingTurn;
            self.begin_turn(self.active.other());
            return Ok(());
        };

        self.pick(self.active, pos)?;
        if anchor.is_none() {
            self.schedule(
                self.settings.pacing.computer_pick_gap_ms,
                Continuation::ComputerSecondPick { anchor: pos },
            );
        }
        Ok(())
    }

    fn in_flight_positions(&self) -> Vec<Position> {
        self.board
            .cards()
            .filter(|c| c.revealed && !c.matched)
            .map(|c| c.position)
            .collect()
    }
}
