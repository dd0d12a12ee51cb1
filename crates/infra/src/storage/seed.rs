//! Synthetic test-mode dataset
//!
//! Generates a deterministic, realistic-looking dataset for the test
//! universe: a handful of projects with varied allocations and roughly two
//! months of weekday entries with varied session lengths. Deterministic on
//! purpose so demos and QA runs look the same every time.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use hourglass_common::day_start;
use hourglass_domain::{Project, TimeEntry};

/// Days of history the generator fills.
const HISTORY_DAYS: i64 = 60;

struct SeedProject {
    name: &'static str,
    description: &'static str,
    capacity: f64,
    /// Hour of day the first session starts.
    start_hour: i64,
    /// Session length pattern in minutes, cycled by day ordinal.
    session_minutes: [i64; 4],
}

const SEED_PROJECTS: [SeedProject; 4] = [
    SeedProject {
        name: "Website Relaunch",
        description: "Marketing site rebuild",
        capacity: 0.4,
        start_hour: 9,
        session_minutes: [90, 120, 75, 150],
    },
    SeedProject {
        name: "Mobile App",
        description: "iOS and Android client",
        capacity: 0.3,
        start_hour: 11,
        session_minutes: [60, 45, 120, 90],
    },
    SeedProject {
        name: "Customer Support",
        description: "Tickets and follow-ups",
        capacity: 0.15,
        start_hour: 14,
        session_minutes: [30, 60, 45, 30],
    },
    SeedProject {
        name: "Internal Tooling",
        description: "Build and release scripts",
        capacity: 0.1,
        start_hour: 16,
        session_minutes: [45, 0, 60, 0],
    },
];

const NOTES: [&str; 4] = ["implementation", "review and cleanup", "planning", "pairing session"];

/// Generate the synthetic dataset ending at `today`.
pub fn generate(today: NaiveDate) -> (Vec<Project>, Vec<TimeEntry>) {
    let projects: Vec<Project> = SEED_PROJECTS
        .iter()
        .map(|seed| Project::new(seed.name, seed.description, seed.capacity))
        .collect();

    let mut entries = Vec::new();
    for offset in 0..HISTORY_DAYS {
        let date = today - Duration::days(offset);
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        let ordinal = date.ordinal() as usize;

        for (index, seed) in SEED_PROJECTS.iter().enumerate() {
            // Skip some project-days so the heatmap has texture.
            if (ordinal + index) % 5 == 0 {
                continue;
            }
            let minutes = seed.session_minutes[(ordinal + index) % seed.session_minutes.len()];
            if minutes == 0 {
                continue;
            }
            let start = day_start(date) + Duration::hours(seed.start_hour);
            entries.push(TimeEntry::new(
                &projects[index].id,
                NOTES[(ordinal + index) % NOTES.len()],
                start,
                start + Duration::minutes(minutes),
            ));
        }
    }
    entries.sort_by_key(|entry| entry.start_time);

    (projects, entries)
}
