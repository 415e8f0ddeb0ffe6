//! Course generation — shuffled par templates and randomized legal distances.
//!
//! Each nine is an independent uniform shuffle of a fixed par multiset, and
//! each hole independently draws a distance from the finite legal set for
//! its (par, mode). The random source is a caller-supplied [`Rng`] so tests
//! and the offline catalog build can seed it.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{Course, CourseMode, Hole, HoleCount};

/// Canonical par multiset for one indoor nine: 2× par 1, 5× par 2, 2× par 3.
const INDOOR_PAR_TEMPLATE: [u8; 9] = [1, 1, 2, 2, 2, 2, 2, 3, 3];

/// Canonical par multiset for one outdoor nine: 2× par 2, 6× par 3, 1× par 4.
const OUTDOOR_PAR_TEMPLATE: [u8; 9] = [2, 2, 3, 3, 3, 3, 3, 3, 4];

const INDOOR_PAR1_FT: &[f64] = &[2.5, 3.0, 3.5, 4.0];
const INDOOR_PAR2_FT: &[f64] = &[4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 7.5];
const INDOOR_PAR3_FT: &[f64] = &[10.0];
const OUTDOOR_PAR2_YD: &[f64] = &[10.0, 15.0];
const OUTDOOR_PAR3_YD: &[f64] = &[20.0, 25.0, 30.0, 35.0];
const OUTDOOR_PAR4_YD: &[f64] = &[40.0];

/// The par multiset one nine of `mode` is shuffled from.
pub fn par_template(mode: CourseMode) -> [u8; 9] {
    match mode {
        CourseMode::Indoor => INDOOR_PAR_TEMPLATE,
        CourseMode::Outdoor => OUTDOOR_PAR_TEMPLATE,
    }
}

/// Legal distances for a hole of the given par in the given mode
/// (feet indoor, yards outdoor). Empty for pars outside the mode's template.
pub fn legal_distances(mode: CourseMode, par: u8) -> &'static [f64] {
    match (mode, par) {
        (CourseMode::Indoor, 1) => INDOOR_PAR1_FT,
        (CourseMode::Indoor, 2) => INDOOR_PAR2_FT,
        (CourseMode::Indoor, 3) => INDOOR_PAR3_FT,
        (CourseMode::Outdoor, 2) => OUTDOOR_PAR2_YD,
        (CourseMode::Outdoor, 3) => OUTDOOR_PAR3_YD,
        (CourseMode::Outdoor, 4) => OUTDOOR_PAR4_YD,
        _ => &[],
    }
}

/// Generate a fresh course layout: one shuffled nine, or two independently
/// shuffled nines for [`HoleCount::Eighteen`], with a random legal distance
/// per hole and all totals derived.
pub fn generate_course<R: Rng>(rng: &mut R, mode: CourseMode, holes: HoleCount) -> Course {
    let nines = match holes {
        HoleCount::Nine => 1,
        HoleCount::Eighteen => 2,
    };

    let mut pars = Vec::with_capacity(nines * 9);
    for _ in 0..nines {
        let mut nine = par_template(mode);
        nine.shuffle(rng);
        pars.extend_from_slice(&nine);
    }

    let holes = pars
        .iter()
        .enumerate()
        .map(|(i, &par)| {
            let set = legal_distances(mode, par);
            Hole {
                number: (i + 1) as u8,
                par,
                distance: set[rng.gen_range(0..set.len())],
                score: None,
            }
        })
        .collect();

    Course::from_holes(mode, holes)
}
