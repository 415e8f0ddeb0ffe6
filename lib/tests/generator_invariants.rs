use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use greenside::{Course, CourseMode, HoleCount, generate_course, legal_distances, par_template};

fn sorted_pars(course: &Course, range: std::ops::Range<usize>) -> Vec<u8> {
    let mut pars: Vec<u8> = course.holes[range].iter().map(|h| h.par).collect();
    pars.sort_unstable();
    pars
}

fn sorted_template(mode: CourseMode) -> Vec<u8> {
    let mut template = par_template(mode).to_vec();
    template.sort_unstable();
    template
}

fn assert_layout_invariants(course: &Course) {
    let mode = course.course_mode;
    let expected_len = usize::from(course.hole_count.holes());
    assert_eq!(course.holes.len(), expected_len);

    // Dense 1-based numbering in play order.
    for (i, hole) in course.holes.iter().enumerate() {
        assert_eq!(usize::from(hole.number), i + 1);
        assert!(hole.score.is_none());
    }

    // Each nine carries exactly the canonical par multiset.
    assert_eq!(sorted_pars(course, 0..9), sorted_template(mode));
    if course.hole_count == HoleCount::Eighteen {
        assert_eq!(sorted_pars(course, 9..18), sorted_template(mode));
    }

    // Every distance is drawn from the legal set for its (par, mode).
    for hole in &course.holes {
        assert!(
            legal_distances(mode, hole.par).contains(&hole.distance),
            "hole {} par {} has illegal distance {}",
            hole.number,
            hole.par,
            hole.distance,
        );
    }

    // Totals are plain sums split at index 9. Distances are multiples of
    // 0.5, so f64 sums are exact.
    let front = &course.holes[..9.min(course.holes.len())];
    let back = if course.holes.len() > 9 {
        &course.holes[9..]
    } else {
        &[][..]
    };
    assert_eq!(
        course.front_nine_par,
        front.iter().map(|h| u32::from(h.par)).sum::<u32>()
    );
    assert_eq!(
        course.back_nine_par,
        back.iter().map(|h| u32::from(h.par)).sum::<u32>()
    );
    assert_eq!(course.total_par, course.front_nine_par + course.back_nine_par);
    assert_eq!(
        course.front_nine_distance,
        front.iter().map(|h| h.distance).sum::<f64>()
    );
    assert_eq!(
        course.back_nine_distance,
        back.iter().map(|h| h.distance).sum::<f64>()
    );
    assert_eq!(
        course.total_distance,
        course.front_nine_distance + course.back_nine_distance
    );

    if course.hole_count == HoleCount::Nine {
        assert_eq!(course.back_nine_par, 0);
        assert_eq!(course.back_nine_distance, 0.0);
    }
}

#[test]
fn indoor_nine_matches_the_template_multiset() {
    let mut rng = StdRng::seed_from_u64(7);
    let course = generate_course(&mut rng, CourseMode::Indoor, HoleCount::Nine);
    assert_layout_invariants(&course);
    assert_eq!(course.total_par, 18); // 2*1 + 5*2 + 2*3
}

#[test]
fn outdoor_nine_matches_the_template_multiset() {
    let mut rng = StdRng::seed_from_u64(7);
    let course = generate_course(&mut rng, CourseMode::Outdoor, HoleCount::Nine);
    assert_layout_invariants(&course);
    assert_eq!(course.total_par, 26); // 2*2 + 6*3 + 1*4
}

#[test]
fn eighteen_holes_carry_the_template_in_each_nine() {
    let mut rng = StdRng::seed_from_u64(11);
    let indoor = generate_course(&mut rng, CourseMode::Indoor, HoleCount::Eighteen);
    assert_layout_invariants(&indoor);
    assert_eq!(indoor.total_par, 36);

    let outdoor = generate_course(&mut rng, CourseMode::Outdoor, HoleCount::Eighteen);
    assert_layout_invariants(&outdoor);
    assert_eq!(outdoor.total_par, 52);
}

#[test]
fn front_nine_slice_rederives_totals() {
    let mut rng = StdRng::seed_from_u64(23);
    let full = generate_course(&mut rng, CourseMode::Indoor, HoleCount::Eighteen);
    let front = full.front_nine();

    assert_eq!(front.hole_count, HoleCount::Nine);
    assert_eq!(front.holes.len(), 9);
    assert_eq!(front.holes, full.holes[..9]);
    assert_eq!(front.total_par, full.front_nine_par);
    assert_eq!(front.total_distance, full.front_nine_distance);
    assert_eq!(front.front_nine_par, full.front_nine_par);
    assert_eq!(front.back_nine_par, 0);
    assert_eq!(front.back_nine_distance, 0.0);
    assert_layout_invariants(&front);
}

#[test]
fn indoor_par_three_distance_is_fixed() {
    assert_eq!(legal_distances(CourseMode::Indoor, 3), &[10.0]);
    assert_eq!(legal_distances(CourseMode::Outdoor, 4), &[40.0]);
}

#[test]
fn out_of_template_pars_have_no_legal_distances() {
    assert!(legal_distances(CourseMode::Indoor, 4).is_empty());
    assert!(legal_distances(CourseMode::Outdoor, 1).is_empty());
}

#[test]
fn distance_units_follow_the_mode() {
    assert_eq!(CourseMode::Indoor.distance_unit(), "ft");
    assert_eq!(CourseMode::Outdoor.distance_unit(), "yd");
}

#[test]
fn hole_counts_parse_from_the_bare_number() {
    assert_eq!("9".parse::<HoleCount>(), Ok(HoleCount::Nine));
    assert_eq!("18".parse::<HoleCount>(), Ok(HoleCount::Eighteen));
    assert!("12".parse::<HoleCount>().is_err());
    assert_eq!(HoleCount::Eighteen.to_string(), "18");
    assert_eq!(HoleCount::Nine.holes(), 9);
}

proptest! {
    #[test]
    fn generated_courses_always_satisfy_layout_invariants(
        seed in any::<u64>(),
        indoor in any::<bool>(),
        eighteen in any::<bool>(),
    ) {
        let mode = if indoor { CourseMode::Indoor } else { CourseMode::Outdoor };
        let holes = if eighteen { HoleCount::Eighteen } else { HoleCount::Nine };
        let mut rng = StdRng::seed_from_u64(seed);
        let course = generate_course(&mut rng, mode, holes);
        assert_layout_invariants(&course);
        prop_assert_eq!(course.course_mode, mode);
        prop_assert_eq!(course.hole_count, holes);
    }
}
