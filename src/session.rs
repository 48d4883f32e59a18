//! Game sessions
//!
//! A [`GameService`] hosts independent human-versus-engine games keyed by an
//! opaque id. The human always plays Black and moves first; every accepted
//! human move is answered by the session's engine in the same call.

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::board::{Board, BoardState, Pos, Stone};
use crate::config::{check_board_size, GameConfig};
use crate::engine::{AIEngine, Difficulty};
use crate::error::{GameError, Result};

/// Opaque session identifier (32 lowercase hex characters)
pub type SessionId = String;

/// One game in progress.
pub struct GameSession {
    pub board: Board,
    pub engine: AIEngine,
    pub hint_used: bool,
}

impl GameSession {
    fn new(board: Board, engine: AIEngine) -> Self {
        Self {
            board,
            engine,
            hint_used: false,
        }
    }
}

/// Storage for live sessions.
pub trait SessionStore {
    fn get(&self, id: &str) -> Option<&GameSession>;
    fn get_mut(&mut self, id: &str) -> Option<&mut GameSession>;
    fn put(&mut self, id: SessionId, session: GameSession);
    /// Remove a session, returning whether it existed.
    fn delete(&mut self, id: &str) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process session store.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: HashMap<SessionId, GameSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, id: &str) -> Option<&GameSession> {
        self.sessions.get(id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut GameSession> {
        self.sessions.get_mut(id)
    }

    fn put(&mut self, id: SessionId, session: GameSession) {
        self.sessions.insert(id, session);
    }

    fn delete(&mut self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}

/// Result of one accepted human move.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub player_move: Pos,
    /// Engine reply, absent when the human move ended the game
    pub ai_move: Option<Pos>,
    pub board_state: BoardState,
}

/// Hosts game sessions on top of a [`SessionStore`].
pub struct GameService<S: SessionStore = MemorySessionStore> {
    store: S,
    config: GameConfig,
    rng: ChaCha8Rng,
}

impl GameService<MemorySessionStore> {
    /// Service backed by an in-memory store.
    pub fn in_memory(config: GameConfig) -> Result<Self> {
        Self::new(MemorySessionStore::new(), config)
    }
}

impl<S: SessionStore> GameService<S> {
    /// Validate `config` and build a service over `store`.
    pub fn new(store: S, config: GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self { store, config, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a game. Missing arguments fall back to the configured defaults.
    pub fn new_game(
        &mut self,
        difficulty: Option<u8>,
        board_size: Option<usize>,
    ) -> Result<(SessionId, BoardState)> {
        if self.store.len() >= self.config.max_sessions {
            log::warn!("session limit {} reached", self.config.max_sessions);
            return Err(GameError::SessionLimit(self.config.max_sessions));
        }

        let difficulty = match difficulty {
            Some(level) => Difficulty::new(level)?,
            None => self.config.difficulty,
        };
        let size = board_size.unwrap_or(self.config.board_size);
        check_board_size(size)?;

        let id = self.next_id();
        let engine = self.engine_for(Stone::White, difficulty);
        let board = Board::new(size);
        let state = board.snapshot();
        self.store.put(id.clone(), GameSession::new(board, engine));

        log::info!(
            "new game {} (difficulty {}, {}x{})",
            id,
            difficulty.level(),
            size,
            size
        );
        Ok((id, state))
    }

    /// Play the human move at `(row, col)` and let the engine answer.
    pub fn make_move(&mut self, id: &str, row: usize, col: usize) -> Result<TurnOutcome> {
        let session = self.session_mut(id)?;
        let board = &mut session.board;

        if board.is_terminal() {
            log::warn!("move on finished game {}", id);
            return Err(GameError::GameOver);
        }
        if board.current_player() != Stone::Black {
            log::warn!("move out of turn in game {}", id);
            return Err(GameError::NotPlayerTurn);
        }
        if !board.apply_move(row, col, Stone::Black) {
            log::warn!("invalid move ({}, {}) in game {}", row, col, id);
            return Err(GameError::InvalidMove { row, col });
        }
        let player_move = Pos::new(row as u8, col as u8);

        let mut ai_move = None;
        if !board.is_terminal() && board.current_player() == Stone::White {
            if let Some(pos) = session.engine.get_move(board) {
                board.apply_move(pos.row as usize, pos.col as usize, Stone::White);
                ai_move = Some(pos);
            }
        }

        if let Some(winner) = board.winner() {
            log::info!("game {} won by {:?}", id, winner);
        } else if board.is_terminal() {
            log::info!("game {} drawn", id);
        }

        Ok(TurnOutcome {
            player_move,
            ai_move,
            board_state: board.snapshot(),
        })
    }

    /// Snapshot of a session's board.
    pub fn board_state(&self, id: &str) -> Result<BoardState> {
        Ok(self.board(id)?.snapshot())
    }

    /// Borrow a session's board.
    pub fn board(&self, id: &str) -> Result<&Board> {
        self.store
            .get(id)
            .map(|s| &s.board)
            .ok_or_else(|| GameError::UnknownSession(id.to_string()))
    }

    /// Clear the board and re-arm the hint.
    pub fn reset_game(&mut self, id: &str) -> Result<BoardState> {
        let session = self.session_mut(id)?;
        session.board.reset();
        session.hint_used = false;
        log::info!("game {} reset", id);
        Ok(session.board.snapshot())
    }

    /// Suggest a move for the human. Allowed once per game.
    pub fn hint(&mut self, id: &str) -> Result<Pos> {
        let seed = self.rng.gen();
        let table = self.config.scores.clone();
        let session = self.session_mut(id)?;

        if session.board.is_terminal() {
            return Err(GameError::GameOver);
        }
        if session.board.current_player() != Stone::Black {
            return Err(GameError::NotPlayerTurn);
        }
        if session.hint_used {
            log::warn!("second hint requested in game {}", id);
            return Err(GameError::HintAlreadyUsed);
        }

        let difficulty = session.engine.difficulty();
        let mut advisor = AIEngine::for_color(Stone::Black, difficulty, table, Some(seed));
        let pos = advisor
            .get_move(&session.board)
            .ok_or(GameError::NoValidMoves)?;

        session.hint_used = true;
        log::info!("hint {:?} given in game {}", pos, id);
        Ok(pos)
    }

    /// Drop a session.
    pub fn end_game(&mut self, id: &str) -> Result<()> {
        if self.store.delete(id) {
            log::info!("game {} ended", id);
            Ok(())
        } else {
            Err(GameError::UnknownSession(id.to_string()))
        }
    }

    /// Number of live sessions.
    pub fn active_games(&self) -> usize {
        self.store.len()
    }

    fn session_mut(&mut self, id: &str) -> Result<&mut GameSession> {
        self.store
            .get_mut(id)
            .ok_or_else(|| GameError::UnknownSession(id.to_string()))
    }

    fn engine_for(&mut self, color: Stone, difficulty: Difficulty) -> AIEngine {
        let seed = self.rng.gen();
        AIEngine::for_color(color, difficulty, self.config.scores.clone(), Some(seed))
    }

    fn next_id(&mut self) -> SessionId {
        loop {
            let id = format!("{:032x}", self.rng.gen::<u128>());
            if self.store.get(&id).is_none() {
                return id;
            }
        }
    }
}
