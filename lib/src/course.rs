//! Course layout types — mode, hole count, holes, and per-nine totals.
//!
//! A `Course` is a fixed layout: 9 or 18 holes, each with a par and a
//! distance drawn from the legal set for that par (see `generator`). The
//! per-hole `score` slot lives here too so a `Round` can carry the whole
//! scorecard as one value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a course is laid out. Indoor distances are feet, outdoor yards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum CourseMode {
    Indoor,
    Outdoor,
}

impl CourseMode {
    /// Unit suffix for hole distances in this mode.
    pub fn distance_unit(&self) -> &'static str {
        match self {
            Self::Indoor => "ft",
            Self::Outdoor => "yd",
        }
    }
}

impl fmt::Display for CourseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indoor => write!(f, "indoor"),
            Self::Outdoor => write!(f, "outdoor"),
        }
    }
}

/// Number of holes in a layout. Serializes as the bare number (9 or 18).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HoleCount {
    Nine,
    Eighteen,
}

impl HoleCount {
    pub fn holes(self) -> u8 {
        match self {
            Self::Nine => 9,
            Self::Eighteen => 18,
        }
    }
}

impl TryFrom<u8> for HoleCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(Self::Nine),
            18 => Ok(Self::Eighteen),
            other => Err(format!("invalid hole count {other}: expected 9 or 18")),
        }
    }
}

impl From<HoleCount> for u8 {
    fn from(value: HoleCount) -> Self {
        value.holes()
    }
}

impl std::str::FromStr for HoleCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid hole count {s:?}: expected 9 or 18"))?;
        Self::try_from(n)
    }
}

impl fmt::Display for HoleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.holes())
    }
}

/// A single hole: 1-based position, par, distance, and the recorded score.
///
/// `score` stays `None` until the player records a stroke count; recording
/// `None` again clears it (toggle-off).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub number: u8,
    pub par: u8,
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl Hole {
    /// Hole-in-one: a recorded score of exactly 1.
    pub fn is_ace(&self) -> bool {
        self.score == Some(1)
    }
}

/// A complete course layout with pre-summed totals.
///
/// Invariants: `holes` is dense 1..=hole_count in order; `total_par =
/// front_nine_par + back_nine_par` (likewise distance); a 9-hole course has
/// zeroed back-nine fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub holes: Vec<Hole>,
    pub total_par: u32,
    pub total_distance: f64,
    pub front_nine_par: u32,
    pub front_nine_distance: f64,
    pub back_nine_par: u32,
    pub back_nine_distance: f64,
    pub course_mode: CourseMode,
    pub hole_count: HoleCount,
}

impl Course {
    /// Build a course from its holes, deriving all totals. `holes` must
    /// already be in play order with dense 1-based numbers and length 9 or 18.
    pub(crate) fn from_holes(course_mode: CourseMode, holes: Vec<Hole>) -> Course {
        let front = &holes[..holes.len().min(9)];
        let back = if holes.len() > 9 { &holes[9..] } else { &[][..] };
        let front_nine_par = front.iter().map(|h| u32::from(h.par)).sum();
        let front_nine_distance = front.iter().map(|h| h.distance).sum();
        let back_nine_par = back.iter().map(|h| u32::from(h.par)).sum::<u32>();
        let back_nine_distance = back.iter().map(|h| h.distance).sum::<f64>();
        let hole_count = if holes.len() > 9 {
            HoleCount::Eighteen
        } else {
            HoleCount::Nine
        };
        Course {
            total_par: front_nine_par + back_nine_par,
            total_distance: front_nine_distance + back_nine_distance,
            front_nine_par,
            front_nine_distance,
            back_nine_par,
            back_nine_distance,
            course_mode,
            hole_count,
            holes,
        }
    }

    /// Slice to the first nine holes, rederiving totals: the front-nine
    /// breakdown becomes the whole-round totals and the back-nine fields
    /// zero out.
    pub fn front_nine(&self) -> Course {
        Course {
            holes: self.holes.iter().take(9).cloned().collect(),
            total_par: self.front_nine_par,
            total_distance: self.front_nine_distance,
            front_nine_par: self.front_nine_par,
            front_nine_distance: self.front_nine_distance,
            back_nine_par: 0,
            back_nine_distance: 0.0,
            course_mode: self.course_mode,
            hole_count: HoleCount::Nine,
        }
    }

    /// Look up a hole by its 1-based number.
    pub fn hole(&self, number: u8) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }
}
