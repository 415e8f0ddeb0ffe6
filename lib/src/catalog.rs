//! Pre-generated course catalog — fixed names, frozen layouts.
//!
//! The catalog ships as a versioned JSON document embedded at compile time,
//! produced by the offline `gen-catalog` build step. A given course name
//! therefore presents the same layout to every session sharing the
//! snapshot. Loading is explicit via [`Catalog::load`] — nothing runs at
//! import time.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Course, CourseMode, HoleCount, generate_course};

/// Format tag carried by the catalog document.
pub const CATALOG_FORMAT_VERSION: u16 = 1;

/// The ten indoor course names, fixed across builds.
pub const INDOOR_COURSE_NAMES: [&str; 10] = [
    "Attic Acres",
    "Basement Bluffs",
    "Carpet Canyon",
    "Corridor Creek",
    "Den Dunes",
    "Hallway Links",
    "Kitchen Knolls",
    "Lounge Ledges",
    "Parlor Pines",
    "Study Slopes",
];

/// The ten outdoor course names, fixed across builds.
pub const OUTDOOR_COURSE_NAMES: [&str; 10] = [
    "Backyard Bend",
    "Cedar Crossing",
    "Garden Gate",
    "Harbor Heights",
    "Maple Hollow",
    "Meadow Run",
    "Orchard Ridge",
    "Prairie Point",
    "Stone Creek",
    "Willow Walk",
];

const CATALOG_DATA: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    format_version: u16,
    courses: BTreeMap<String, Course>,
}

#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    UnsupportedVersion(u16),
    MissingCourse(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "catalog parse failed: {e}"),
            Self::UnsupportedVersion(v) => write!(f, "unsupported catalog format version {v}"),
            Self::MissingCourse(name) => write!(f, "catalog is missing course {name:?}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// The read-only catalog: every fixed course name mapped to its frozen
/// 18-hole layout.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: BTreeMap<String, Course>,
}

impl Catalog {
    /// Parse the embedded catalog document. Call once at startup.
    pub fn load() -> Result<Catalog, CatalogError> {
        Self::from_json(CATALOG_DATA)
    }

    /// Parse a catalog document, verifying the format version and that every
    /// fixed course name is present.
    pub fn from_json(data: &str) -> Result<Catalog, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(data)?;
        if doc.format_version != CATALOG_FORMAT_VERSION {
            return Err(CatalogError::UnsupportedVersion(doc.format_version));
        }
        for name in INDOOR_COURSE_NAMES.iter().chain(&OUTDOOR_COURSE_NAMES) {
            if !doc.courses.contains_key(*name) {
                return Err(CatalogError::MissingCourse((*name).to_string()));
            }
        }
        Ok(Catalog {
            courses: doc.courses,
        })
    }

    /// Generate a fresh catalog: an 18-hole layout for every fixed name.
    /// This is the offline build step, not a runtime operation.
    pub fn generate<R: Rng>(rng: &mut R) -> Catalog {
        let mut courses = BTreeMap::new();
        for name in INDOOR_COURSE_NAMES {
            let course = generate_course(rng, CourseMode::Indoor, HoleCount::Eighteen);
            courses.insert(name.to_string(), course);
        }
        for name in OUTDOOR_COURSE_NAMES {
            let course = generate_course(rng, CourseMode::Outdoor, HoleCount::Eighteen);
            courses.insert(name.to_string(), course);
        }
        Catalog { courses }
    }

    /// Exact-match lookup by course name.
    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.get(name)
    }

    /// The fixed name list for a mode.
    pub fn names(mode: CourseMode) -> &'static [&'static str] {
        match mode {
            CourseMode::Indoor => &INDOOR_COURSE_NAMES,
            CourseMode::Outdoor => &OUTDOOR_COURSE_NAMES,
        }
    }

    /// All catalog entries, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Course)> {
        self.courses.iter().map(|(name, course)| (name.as_str(), course))
    }

    /// Serialize to the versioned catalog document format.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&CatalogDocument {
            format_version: CATALOG_FORMAT_VERSION,
            courses: self.courses.clone(),
        })
    }
}
