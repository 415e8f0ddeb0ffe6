//! Rounds — a course in play, with value-semantics score updates.
//!
//! Score updates never mutate in place: [`Round::with_score`] returns a new
//! round with totals recomputed, so callers can rely on referential
//! distinctness to detect change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Course;

/// Upper slack accepted by [`is_valid_score`]: scores up to `par + 3`.
pub const MAX_OVER_PAR: u32 = 3;

/// Advisory score-range check: `1..=par + 3`.
///
/// Not enforced by [`Round::with_score`] — callers apply it at the input
/// boundary, and out-of-range scores fed past it are accepted and reflected
/// in the totals.
pub fn is_valid_score(par: u8, score: u32) -> bool {
    (1..=u32::from(par) + MAX_OVER_PAR).contains(&score)
}

/// One round of a course, in play or archived.
///
/// `differential` is always `total_score - course.total_par`, the whole
/// course's par — mid-round it is a partial figure, not "vs par so far"
/// (that is [`Round::played_differential`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub course: Course,
    pub course_name: String,
    pub total_score: u32,
    pub differential: i32,
    pub completed: bool,
}

impl Round {
    /// Start a fresh round on `course` with a new id and the current time.
    pub fn new(course_name: impl Into<String>, course: Course) -> Round {
        Round {
            id: Uuid::new_v4(),
            date: Utc::now(),
            course,
            course_name: course_name.into(),
            total_score: 0,
            differential: 0,
            completed: false,
        }
    }

    /// Replace (or clear, with `None`) the score on `hole_number`, returning
    /// a new round with `total_score` and `differential` recomputed over all
    /// holes (unset scores count as 0). Unknown hole numbers change no score.
    /// No range validation happens here — see [`is_valid_score`].
    pub fn with_score(&self, hole_number: u8, score: Option<u32>) -> Round {
        let mut next = self.clone();
        if let Some(hole) = next
            .course
            .holes
            .iter_mut()
            .find(|h| h.number == hole_number)
        {
            hole.score = score;
        }
        next.total_score = next.course.holes.iter().filter_map(|h| h.score).sum();
        next.differential = next.total_score as i32 - next.course.total_par as i32;
        next
    }

    /// Mark the round complete. Alters nothing else, and does not verify
    /// that every hole is scored — the workflow layer gates completion on a
    /// full scorecard.
    pub fn into_completed(mut self) -> Round {
        self.completed = true;
        self
    }

    /// Number of holes with a recorded score.
    pub fn scored_holes(&self) -> usize {
        self.course.holes.iter().filter(|h| h.score.is_some()).count()
    }

    /// True when every hole has a recorded score.
    pub fn all_scored(&self) -> bool {
        self.course.holes.iter().all(|h| h.score.is_some())
    }

    /// First hole without a recorded score, in hole order.
    pub fn first_unscored(&self) -> Option<u8> {
        self.course
            .holes
            .iter()
            .find(|h| h.score.is_none())
            .map(|h| h.number)
    }

    /// Differential over attempted holes only: recorded strokes minus the
    /// par of the holes that have a score. Diverges from `differential`
    /// mid-round; display paths that want "vs par so far" use this.
    pub fn played_differential(&self) -> i32 {
        self.course
            .holes
            .iter()
            .filter_map(|h| h.score.map(|s| s as i32 - i32::from(h.par)))
            .sum()
    }
}
