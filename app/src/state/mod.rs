//! Scorecard state — the single owned state container and its lifecycle.
//!
//! All state mutation happens sequentially through `ScorecardService`
//! methods (`&mut self` is the serialization point; there is no parallel
//! mutation path). Every mutating method applies the change in memory and
//! performs the paired write-through persistence call — optimistic
//! ordering, so a failed write surfaces to the caller without leaving the
//! session unusable.

pub mod config;

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use greenside::{
    Catalog, CourseMode, HoleCount, Player, Round, RoundStats, StatsConfig, calculate_stats,
};

use crate::store::{RoundStore, StoreResult};

/// Where the current game sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    NoGame,
    Ready,
    InProgress,
    EditMode,
    Complete,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGame => write!(f, "no_game"),
            Self::Ready => write!(f, "ready"),
            Self::InProgress => write!(f, "in_progress"),
            Self::EditMode => write!(f, "edit_mode"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// Transient bookkeeping while a historical round is being edited.
/// Never persisted — an interrupted edit is simply discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditState {
    pub round_id: Uuid,
    pub original_scores: HashMap<u8, Option<u32>>,
    pub has_changes: bool,
}

/// Outcome of a score-entry attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// Score recorded (or cleared) on the targeted hole.
    Recorded,
    /// Rejected: an earlier hole is still unscored; play that one first.
    SkippedAhead { next_unscored: u8 },
    /// Rejected: no round is in a scorable phase.
    NotPlaying,
}

/// Outcome of a completion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    Completed,
    /// Rejected: a hole is still unscored.
    Unscored { hole: u8 },
    NotPlaying,
}

/// The scorecard state container: player identity, round history, and the
/// in-flight round, hydrated from the store at startup and written back on
/// every change.
///
/// Invariants held after every operation: `current_round` is `Some` iff the
/// phase is not `NoGame`; `edit` is `Some` iff the phase is `EditMode`.
pub struct ScorecardService<S: RoundStore> {
    store: S,
    catalog: Catalog,
    stats_config: StatsConfig,
    player: Player,
    current_round: Option<Round>,
    rounds: Vec<Round>,
    phase: GamePhase,
    edit: Option<EditState>,
}

impl<S: RoundStore> ScorecardService<S> {
    /// Hydrate the service from storage. Read failures degrade to defaults
    /// (with a warning) so startup always reaches a usable state.
    pub async fn load(store: S, catalog: Catalog, stats_config: StatsConfig) -> ScorecardService<S> {
        let player = match store.load_player().await {
            Ok(player) => player.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("failed to load player, starting fresh: {e}");
                Player::default()
            }
        };
        let rounds = match store.load_rounds().await {
            Ok(rounds) => rounds,
            Err(e) => {
                tracing::warn!("failed to load round history, starting empty: {e}");
                Vec::new()
            }
        };
        let current_round = match store.load_current_round().await {
            Ok(round) => round,
            Err(e) => {
                tracing::warn!("failed to load in-flight round, discarding: {e}");
                None
            }
        };
        let phase = if current_round.is_some() {
            GamePhase::InProgress
        } else {
            GamePhase::NoGame
        };
        tracing::info!(
            "hydrated: {} completed rounds, in-flight round: {}",
            rounds.len(),
            current_round.is_some(),
        );
        ScorecardService {
            store,
            catalog,
            stats_config,
            player,
            current_round,
            rounds,
            phase,
            edit: None,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn edit(&self) -> Option<&EditState> {
        self.edit.as_ref()
    }

    pub async fn set_player(&mut self, name: impl Into<String>) -> StoreResult<()> {
        self.player = Player::new(name);
        self.store.save_player(&self.player).await
    }

    /// Create a round on the named catalog course (or a random course of
    /// the mode when `course_name` is `None`) and move to `Ready`.
    /// Returns `false` without state change when a game is already active
    /// or the name is not in the catalog.
    pub async fn start_round(
        &mut self,
        mode: CourseMode,
        holes: HoleCount,
        course_name: Option<&str>,
    ) -> StoreResult<bool> {
        if self.phase != GamePhase::NoGame {
            tracing::warn!("start_round: a game is already active ({})", self.phase);
            return Ok(false);
        }
        let name = match course_name {
            Some(name) => name.to_string(),
            None => {
                let names = Catalog::names(mode);
                names[rand::thread_rng().gen_range(0..names.len())].to_string()
            }
        };
        let Some(course) = self.catalog.course(&name) else {
            tracing::warn!("start_round: unknown course '{name}'");
            return Ok(false);
        };
        let course = match holes {
            HoleCount::Nine => course.front_nine(),
            HoleCount::Eighteen => course.clone(),
        };
        tracing::info!("starting round at '{name}' ({holes} holes, {mode})");
        self.current_round = Some(Round::new(name, course));
        self.phase = GamePhase::Ready;
        self.persist_current().await?;
        Ok(true)
    }

    /// Move a freshly created round into play. Returns `false` outside `Ready`.
    pub fn begin_play(&mut self) -> bool {
        if self.phase != GamePhase::Ready {
            return false;
        }
        self.phase = GamePhase::InProgress;
        true
    }

    /// Record (or clear, with `None`) a score on the current round.
    ///
    /// In `InProgress`, scoring a hole past the earliest unscored hole is
    /// rejected with a redirect to that hole — a workflow guard, not an
    /// error. Edit mode scores holes in any order.
    pub async fn record_score(
        &mut self,
        hole_number: u8,
        score: Option<u32>,
    ) -> StoreResult<ScoreOutcome> {
        if !matches!(self.phase, GamePhase::InProgress | GamePhase::EditMode) {
            return Ok(ScoreOutcome::NotPlaying);
        }
        let Some(round) = &self.current_round else {
            return Ok(ScoreOutcome::NotPlaying);
        };
        if self.phase == GamePhase::InProgress
            && let Some(first) = round.first_unscored()
            && hole_number > first
        {
            return Ok(ScoreOutcome::SkippedAhead {
                next_unscored: first,
            });
        }
        let updated = round.with_score(hole_number, score);
        if let Some(edit) = &mut self.edit {
            edit.has_changes = updated.course.holes.iter().any(|h| {
                edit.original_scores.get(&h.number).copied().flatten() != h.score
            });
        }
        self.current_round = Some(updated);
        self.persist_current().await?;
        Ok(ScoreOutcome::Recorded)
    }

    /// Freeze the current round and archive it into history. Rejected while
    /// any hole is unscored (the engine-level `into_completed` stays
    /// permissive; this is the workflow gate).
    pub async fn complete_round(&mut self) -> StoreResult<CompleteOutcome> {
        if self.phase != GamePhase::InProgress {
            return Ok(CompleteOutcome::NotPlaying);
        }
        let Some(round) = self.current_round.take() else {
            return Ok(CompleteOutcome::NotPlaying);
        };
        if let Some(hole) = round.first_unscored() {
            self.current_round = Some(round);
            return Ok(CompleteOutcome::Unscored { hole });
        }
        let completed = round.into_completed();
        tracing::info!(
            "round complete at '{}': {} strokes ({:+})",
            completed.course_name,
            completed.total_score,
            completed.differential,
        );
        self.rounds.push(completed.clone());
        self.current_round = Some(completed);
        self.phase = GamePhase::Complete;
        self.store.save_rounds(&self.rounds).await?;
        self.store.save_current_round(None).await?;
        Ok(CompleteOutcome::Completed)
    }

    /// Discard the current round (wherever it is in its lifecycle) and
    /// return to no-game. History is untouched.
    pub async fn new_game(&mut self) -> StoreResult<()> {
        self.current_round = None;
        self.edit = None;
        self.phase = GamePhase::NoGame;
        self.store.save_current_round(None).await
    }

    /// Open a completed historical round for editing, as a deep copy.
    /// Unknown ids are a no-op returning `false`.
    pub async fn begin_edit(&mut self, round_id: Uuid) -> StoreResult<bool> {
        if self.phase != GamePhase::NoGame {
            tracing::warn!("begin_edit: a game is already active ({})", self.phase);
            return Ok(false);
        }
        let Some(round) = self.rounds.iter().find(|r| r.id == round_id && r.completed) else {
            return Ok(false);
        };
        let copy = round.clone();
        self.edit = Some(EditState {
            round_id,
            original_scores: copy.course.holes.iter().map(|h| (h.number, h.score)).collect(),
            has_changes: false,
        });
        self.current_round = Some(copy);
        self.phase = GamePhase::EditMode;
        self.persist_current().await?;
        Ok(true)
    }

    /// Merge the edited copy back into history, replacing the archived
    /// round with the same id.
    pub async fn save_edit(&mut self) -> StoreResult<bool> {
        if self.phase != GamePhase::EditMode {
            return Ok(false);
        }
        let Some(edited) = self.current_round.take() else {
            return Ok(false);
        };
        self.edit = None;
        self.phase = GamePhase::NoGame;
        if let Some(slot) = self.rounds.iter_mut().find(|r| r.id == edited.id) {
            tracing::info!("saved edits to round {} at '{}'", edited.id, edited.course_name);
            *slot = edited;
        }
        self.store.save_rounds(&self.rounds).await?;
        self.store.save_current_round(None).await?;
        Ok(true)
    }

    /// Discard the edited copy; history is untouched.
    pub async fn cancel_edit(&mut self) -> StoreResult<()> {
        if self.phase != GamePhase::EditMode {
            return Ok(());
        }
        self.current_round = None;
        self.edit = None;
        self.phase = GamePhase::NoGame;
        self.store.save_current_round(None).await
    }

    /// Remove a round from history. Unknown ids are a no-op returning `false`.
    pub async fn delete_round(&mut self, round_id: Uuid) -> StoreResult<bool> {
        let before = self.rounds.len();
        self.rounds.retain(|r| r.id != round_id);
        if self.rounds.len() == before {
            return Ok(false);
        }
        tracing::info!("deleted round {round_id}");
        self.store.save_rounds(&self.rounds).await?;
        Ok(true)
    }

    /// Aggregate statistics over the full history.
    pub fn stats(&self) -> RoundStats {
        calculate_stats(&self.rounds, &self.stats_config)
    }

    /// Aggregate statistics over a category slice of history, pre-filtered
    /// by mode and/or hole count.
    pub fn stats_for(&self, mode: Option<CourseMode>, holes: Option<HoleCount>) -> RoundStats {
        let filtered: Vec<Round> = self
            .rounds
            .iter()
            .filter(|r| mode.is_none_or(|m| r.course.course_mode == m))
            .filter(|r| holes.is_none_or(|h| r.course.hole_count == h))
            .cloned()
            .collect();
        calculate_stats(&filtered, &self.stats_config)
    }

    /// Reset everything — player, history, in-flight round, and storage.
    pub async fn clear_all(&mut self) -> StoreResult<()> {
        self.player = Player::default();
        self.rounds.clear();
        self.current_round = None;
        self.edit = None;
        self.phase = GamePhase::NoGame;
        self.store.clear_all().await
    }

    async fn persist_current(&self) -> StoreResult<()> {
        self.store.save_current_round(self.current_round.as_ref()).await
    }
}
