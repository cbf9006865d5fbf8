use indexmap::IndexMap;

use crate::models::Activity;
use crate::services::activity_directory::ActivityDirectory;

/// Directory pre-populated with the reference catalog.
pub fn seeded_directory() -> ActivityDirectory {
    ActivityDirectory::new(seed_catalog())
}

/// The fixed catalog for the reference deployment. This is configuration, not
/// logic: the set of activities never changes at runtime.
pub fn seed_catalog() -> IndexMap<String, Activity> {
    let mut catalog = IndexMap::new();

    insert(
        &mut catalog,
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    );
    insert(
        &mut catalog,
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    );
    insert(
        &mut catalog,
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    );
    insert(
        &mut catalog,
        "Soccer Club",
        "Practice soccer skills and play friendly matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["liam@mergington.edu", "noah@mergington.edu"],
    );
    insert(
        &mut catalog,
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu", "mia@mergington.edu"],
    );
    insert(
        &mut catalog,
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    );
    insert(
        &mut catalog,
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "scarlett@mergington.edu"],
    );
    insert(
        &mut catalog,
        "Math Club",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["james@mergington.edu", "benjamin@mergington.edu"],
    );
    insert(
        &mut catalog,
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["charlotte@mergington.edu", "henry@mergington.edu"],
    );

    catalog
}

fn insert(
    catalog: &mut IndexMap<String, Activity>,
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) {
    catalog.insert(
        name.to_string(),
        Activity {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        },
    );
}
