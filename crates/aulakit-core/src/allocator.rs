//! Randomized course-progress allocation.
//!
//! When a learner first shows up with no progress record, they get a
//! plausible-looking random subset of the catalog assigned. The randomness is
//! injected so callers (and tests) control the seed.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Course, CourseProgress, ProgressRecord};

/// Fixed start date stamped on every allocated entry.
pub const ALLOCATION_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 15) {
    Some(d) => d,
    None => panic!("invalid allocation start date"),
};

/// Fixed last-activity date used by the bootstrap profile.
pub const BOOTSTRAP_ACTIVITY_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 11, 17) {
    Some(d) => d,
    None => panic!("invalid bootstrap activity date"),
};

/// Inclusive grade range for eligible courses, on a 5-point scale.
const GRADE_RANGE: (f64, f64) = (3.5, 5.0);

/// Bounds on how many courses get assigned per allocation.
const MIN_COURSES: usize = 3;
const MAX_COURSES: usize = 5;

/// Tuning knobs for one allocation pass.
///
/// The two built-in profiles intentionally differ: the lazy read-path
/// bootstrap and the explicit reassignment endpoint of the original system
/// used different completion ranges and grade-eligibility thresholds, and
/// both behaviors are preserved as named profiles. `bootstrap` is the
/// default for first-access allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationProfile {
    /// Inclusive completion-percentage range.
    pub pct_range: (u8, u8),
    /// Completion percentage at which a grade becomes eligible.
    pub grade_threshold: u8,
    /// Upper bound on hours invested (lower bound is 1).
    pub max_hours: u32,
    /// Last-activity date: `None` stamps the fixed bootstrap date,
    /// `Some` means "use the caller-supplied today".
    pub activity_is_today: bool,
}

impl AllocationProfile {
    /// Profile for the lazy first-read bootstrap path.
    pub fn bootstrap() -> Self {
        AllocationProfile {
            pct_range: (10, 95),
            grade_threshold: 75,
            max_hours: 40,
            activity_is_today: false,
        }
    }

    /// Profile for the explicit reassignment path.
    pub fn reassign() -> Self {
        AllocationProfile {
            pct_range: (5, 100),
            grade_threshold: 80,
            max_hours: 50,
            activity_is_today: true,
        }
    }
}

/// Allocate a random subset of the catalog to a learner.
///
/// Picks between 3 and 5 courses (clamped to the catalog size), sampled
/// without replacement, and fabricates progress for each. A grade is present
/// only when the completion percentage reaches the profile's threshold.
///
/// An empty catalog yields an empty record; deciding whether that is an
/// error belongs to the caller (see `ProgressService`).
pub fn allocate<R: Rng + ?Sized>(
    learner_id: &str,
    catalog: &[Course],
    profile: AllocationProfile,
    rng: &mut R,
    today: NaiveDate,
) -> ProgressRecord {
    if catalog.is_empty() {
        return ProgressRecord::empty(learner_id);
    }

    let count = rng.gen_range(MIN_COURSES..=MAX_COURSES).min(catalog.len());
    let selection = catalog.choose_multiple(&mut *rng, count);

    let last_activity = if profile.activity_is_today {
        today
    } else {
        BOOTSTRAP_ACTIVITY_DATE
    };

    let courses = selection
        .map(|course| {
            let pct = rng.gen_range(profile.pct_range.0..=profile.pct_range.1);
            let grade = if pct >= profile.grade_threshold {
                Some(round_grade(rng.gen_range(GRADE_RANGE.0..=GRADE_RANGE.1)))
            } else {
                None
            };

            CourseProgress {
                course_id: course.id.clone(),
                completed_pct: pct,
                hours_invested: rng.gen_range(1..=profile.max_hours),
                last_lesson: format!("Lesson {}", rng.gen_range(1..=10)),
                started_on: ALLOCATION_START_DATE,
                last_activity,
                grade,
            }
        })
        .collect();

    ProgressRecord {
        learner_id: learner_id.to_string(),
        courses,
    }
}

/// Round a grade to one decimal place.
fn round_grade(grade: f64) -> f64 {
    (grade * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn catalog(n: usize) -> Vec<Course> {
        (1..=n)
            .map(|i| Course {
                id: format!("course{i}"),
                title: format!("Course {i}"),
                description: String::new(),
                instructor_id: "inst1".into(),
                duration_hours: 40,
                rating: 4.5,
                level: None,
            })
            .collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
    }

    #[test]
    fn assigns_between_three_and_five_courses() {
        let catalog = catalog(15);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let record = allocate(
                "stu1",
                &catalog,
                AllocationProfile::bootstrap(),
                &mut rng,
                today(),
            );
            assert!(
                (3..=5).contains(&record.courses.len()),
                "seed {seed} assigned {} courses",
                record.courses.len()
            );
        }
    }

    #[test]
    fn samples_without_replacement() {
        let catalog = catalog(15);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let record = allocate(
                "stu1",
                &catalog,
                AllocationProfile::reassign(),
                &mut rng,
                today(),
            );
            let unique: HashSet<_> = record.courses.iter().map(|c| &c.course_id).collect();
            assert_eq!(unique.len(), record.courses.len());
        }
    }

    #[test]
    fn clamps_to_catalog_size() {
        let catalog = catalog(2);
        let mut rng = StdRng::seed_from_u64(7);
        let record = allocate(
            "stu1",
            &catalog,
            AllocationProfile::bootstrap(),
            &mut rng,
            today(),
        );
        assert_eq!(record.courses.len(), 2);
    }

    #[test]
    fn empty_catalog_yields_empty_record() {
        let mut rng = StdRng::seed_from_u64(1);
        let record = allocate(
            "stu1",
            &[],
            AllocationProfile::bootstrap(),
            &mut rng,
            today(),
        );
        assert!(record.is_empty());
        assert_eq!(record.learner_id, "stu1");
    }

    #[test]
    fn grade_present_iff_threshold_reached() {
        let catalog = catalog(20);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let profile = AllocationProfile::bootstrap();
            let record = allocate("stu1", &catalog, profile, &mut rng, today());
            for entry in &record.courses {
                if entry.completed_pct >= profile.grade_threshold {
                    let grade = entry.grade.unwrap_or_else(|| {
                        panic!("{}% complete but no grade", entry.completed_pct)
                    });
                    assert!((3.5..=5.0).contains(&grade), "grade out of range: {grade}");
                } else {
                    assert!(entry.grade.is_none());
                }
            }
        }
    }

    #[test]
    fn bootstrap_ranges_respected() {
        let catalog = catalog(20);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let record = allocate(
                "stu1",
                &catalog,
                AllocationProfile::bootstrap(),
                &mut rng,
                today(),
            );
            for entry in &record.courses {
                assert!((10..=95).contains(&entry.completed_pct));
                assert!((1..=40).contains(&entry.hours_invested));
                assert_eq!(entry.started_on, ALLOCATION_START_DATE);
                assert_eq!(entry.last_activity, BOOTSTRAP_ACTIVITY_DATE);
            }
        }
    }

    #[test]
    fn reassign_stamps_today_as_activity() {
        let catalog = catalog(10);
        let mut rng = StdRng::seed_from_u64(3);
        let record = allocate(
            "stu1",
            &catalog,
            AllocationProfile::reassign(),
            &mut rng,
            today(),
        );
        for entry in &record.courses {
            assert_eq!(entry.last_activity, today());
            assert!((5..=100).contains(&entry.completed_pct));
            assert!((1..=50).contains(&entry.hours_invested));
        }
    }

    #[test]
    fn seeded_allocation_is_deterministic() {
        let catalog = catalog(12);
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a = allocate(
            "stu1",
            &catalog,
            AllocationProfile::bootstrap(),
            &mut rng_a,
            today(),
        );
        let b = allocate(
            "stu1",
            &catalog,
            AllocationProfile::bootstrap(),
            &mut rng_b,
            today(),
        );

        assert_eq!(a.courses.len(), b.courses.len());
        for (x, y) in a.courses.iter().zip(&b.courses) {
            assert_eq!(x.course_id, y.course_id);
            assert_eq!(x.completed_pct, y.completed_pct);
            assert_eq!(x.hours_invested, y.hours_invested);
            assert_eq!(x.last_lesson, y.last_lesson);
            assert_eq!(x.grade, y.grade);
        }
    }

    #[test]
    fn grades_rounded_to_one_decimal() {
        let catalog = catalog(20);
        let mut rng = StdRng::seed_from_u64(99);
        let record = allocate(
            "stu1",
            &catalog,
            AllocationProfile::reassign(),
            &mut rng,
            today(),
        );
        for grade in record.courses.iter().filter_map(|c| c.grade) {
            let scaled = grade * 10.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "grade not rounded: {grade}"
            );
        }
    }
}
