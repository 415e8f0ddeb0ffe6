use rand::SeedableRng;
use rand::rngs::StdRng;

use greenside::{
    Catalog, CatalogError, CourseMode, HoleCount, INDOOR_COURSE_NAMES, OUTDOOR_COURSE_NAMES,
    legal_distances, par_template,
};

#[test]
fn embedded_catalog_loads() {
    let catalog = Catalog::load().unwrap();
    assert_eq!(catalog.iter().count(), 20);
}

#[test]
fn name_lists_are_fixed_and_disjoint() {
    assert_eq!(Catalog::names(CourseMode::Indoor), &INDOOR_COURSE_NAMES[..]);
    assert_eq!(Catalog::names(CourseMode::Outdoor), &OUTDOOR_COURSE_NAMES[..]);
    for name in INDOOR_COURSE_NAMES {
        assert!(!OUTDOOR_COURSE_NAMES.contains(&name));
    }
}

#[test]
fn every_entry_is_a_valid_eighteen_hole_layout_for_its_mode() {
    let catalog = Catalog::load().unwrap();
    for (mode, names) in [
        (CourseMode::Indoor, &INDOOR_COURSE_NAMES),
        (CourseMode::Outdoor, &OUTDOOR_COURSE_NAMES),
    ] {
        let mut template = par_template(mode).to_vec();
        template.sort_unstable();

        for name in names {
            let course = catalog.course(name).unwrap();
            assert_eq!(course.course_mode, mode, "{name}");
            assert_eq!(course.hole_count, HoleCount::Eighteen, "{name}");
            assert_eq!(course.holes.len(), 18, "{name}");

            for (i, hole) in course.holes.iter().enumerate() {
                assert_eq!(usize::from(hole.number), i + 1, "{name}");
                assert!(
                    legal_distances(mode, hole.par).contains(&hole.distance),
                    "{name} hole {}",
                    hole.number,
                );
            }
            for nine in [&course.holes[..9], &course.holes[9..]] {
                let mut pars: Vec<u8> = nine.iter().map(|h| h.par).collect();
                pars.sort_unstable();
                assert_eq!(pars, template, "{name}");
            }
            assert_eq!(course.total_par, course.front_nine_par + course.back_nine_par);
            assert_eq!(
                course.total_distance,
                course.front_nine_distance + course.back_nine_distance
            );
        }
    }
}

#[test]
fn lookup_is_exact_match_only() {
    let catalog = Catalog::load().unwrap();
    assert!(catalog.course("Carpet Canyon").is_some());
    assert!(catalog.course("carpet canyon").is_none());
    assert!(catalog.course("No Such Course").is_none());
}

#[test]
fn generated_catalogs_round_trip_through_json() {
    let mut rng = StdRng::seed_from_u64(99);
    let generated = Catalog::generate(&mut rng);
    let json = generated.to_json_pretty().unwrap();
    let reloaded = Catalog::from_json(&json).unwrap();
    for (name, course) in generated.iter() {
        assert_eq!(reloaded.course(name), Some(course));
    }
}

#[test]
fn unknown_format_versions_are_rejected() {
    let err = Catalog::from_json(r#"{"format_version":2,"courses":{}}"#).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedVersion(2)));
}

#[test]
fn documents_missing_a_fixed_course_are_rejected() {
    let err = Catalog::from_json(r#"{"format_version":1,"courses":{}}"#).unwrap_err();
    assert!(matches!(err, CatalogError::MissingCourse(_)));
}
