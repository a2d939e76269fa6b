//! Demo seed data.
//!
//! A systems-engineering course catalog and a starter quiz, used by the
//! CLI's offline mode and by `aulakit init`. Ratings are drawn from the
//! injected rng so seeded runs stay reproducible.

use rand::Rng;

use aulakit_core::model::{Choice, Course, Level, Question, Quiz};

struct SeedCourse {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    instructor_id: &'static str,
    duration_hours: u32,
    rating_range: (f64, f64),
    level: Level,
}

const COURSES: &[SeedCourse] = &[
    SeedCourse {
        id: "ing-sys-001",
        title: "Programming Fundamentals",
        description: "Introduction to programming with Python: variables, control flow, functions, and OOP.",
        instructor_id: "instructor1",
        duration_hours: 60,
        rating_range: (4.2, 5.0),
        level: Level::Basic,
    },
    SeedCourse {
        id: "ing-sys-002",
        title: "Data Structures and Algorithms",
        description: "Arrays, linked lists, trees, graphs, sorting and searching algorithms.",
        instructor_id: "instructor1",
        duration_hours: 80,
        rating_range: (4.0, 4.9),
        level: Level::Intermediate,
    },
    SeedCourse {
        id: "ing-sys-003",
        title: "Relational Databases",
        description: "SQL, database design, normalization, PostgreSQL and MySQL.",
        instructor_id: "instructor2",
        duration_hours: 50,
        rating_range: (4.3, 5.0),
        level: Level::Intermediate,
    },
    SeedCourse {
        id: "ing-sys-004",
        title: "Full Stack Web Development",
        description: "HTML, CSS, JavaScript, React, Node.js, RESTful APIs and deployment.",
        instructor_id: "instructor2",
        duration_hours: 120,
        rating_range: (4.4, 5.0),
        level: Level::Advanced,
    },
    SeedCourse {
        id: "ing-sys-005",
        title: "Software Architecture",
        description: "Design patterns, microservices, clean architecture and SOLID principles.",
        instructor_id: "instructor1",
        duration_hours: 70,
        rating_range: (4.5, 5.0),
        level: Level::Advanced,
    },
    SeedCourse {
        id: "ing-sys-006",
        title: "Operating Systems",
        description: "Processes, threads, memory management, file systems, Linux.",
        instructor_id: "instructor2",
        duration_hours: 65,
        rating_range: (4.1, 4.8),
        level: Level::Intermediate,
    },
    SeedCourse {
        id: "ing-sys-007",
        title: "Computer Networks",
        description: "TCP/IP protocols, DNS, HTTP, routing, switching and network security.",
        instructor_id: "instructor1",
        duration_hours: 55,
        rating_range: (4.2, 4.9),
        level: Level::Intermediate,
    },
    SeedCourse {
        id: "ing-sys-008",
        title: "Artificial Intelligence",
        description: "Machine learning, neural networks, NLP and computer vision with Python.",
        instructor_id: "instructor2",
        duration_hours: 100,
        rating_range: (4.6, 5.0),
        level: Level::Advanced,
    },
    SeedCourse {
        id: "ing-sys-009",
        title: "Information Security",
        description: "Cryptography, pentesting, vulnerability analysis, ethical hacking.",
        instructor_id: "instructor1",
        duration_hours: 75,
        rating_range: (4.3, 4.9),
        level: Level::Advanced,
    },
    SeedCourse {
        id: "ing-sys-010",
        title: "Cloud Computing and DevOps",
        description: "AWS, Docker, Kubernetes, CI/CD, infrastructure as code.",
        instructor_id: "instructor2",
        duration_hours: 90,
        rating_range: (4.4, 5.0),
        level: Level::Advanced,
    },
];

/// The demo course catalog, with ratings drawn from `rng`.
pub fn demo_courses<R: Rng + ?Sized>(rng: &mut R) -> Vec<Course> {
    COURSES
        .iter()
        .map(|c| Course {
            id: c.id.to_string(),
            title: c.title.to_string(),
            description: c.description.to_string(),
            instructor_id: c.instructor_id.to_string(),
            duration_hours: c.duration_hours,
            rating: round1(rng.gen_range(c.rating_range.0..=c.rating_range.1)),
            level: Some(c.level),
        })
        .collect()
}

/// The starter quiz shipped with `aulakit init`.
pub fn demo_quiz() -> Quiz {
    Quiz {
        id: "c1".into(),
        title: "Initial Python Assessment".into(),
        questions: vec![Question {
            id: "q1".into(),
            prompt: "What does print(1+1) output?".into(),
            choices: vec![
                Choice {
                    id: "o1".into(),
                    label: "1".into(),
                    correct: false,
                },
                Choice {
                    id: "o2".into(),
                    label: "2".into(),
                    correct: true,
                },
                Choice {
                    id: "o3".into(),
                    label: "11".into(),
                    correct: false,
                },
            ],
        }],
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
