//! Seed roster for the mock data source. This is product behavior in
//! the admin surface, not test-only scaffolding: fresh installs start
//! from this roster.

use crate::{
    store::{MemoryStore, StoreError},
    user::{User, UserId, UserType},
};
use ulid::Ulid;

// Fixed timestamp base so fixture ids are stable and list in roster order.
const FIXTURE_TS_MS: u64 = 1_700_000_000_000;

fn fixture_id(n: u64) -> UserId {
    UserId(Ulid::from_parts(FIXTURE_TS_MS + n, u128::from(n)))
}

fn user(
    n: u64,
    first_name: &str,
    last_name: &str,
    phone_number: Option<&str>,
    email: &str,
    user_type: UserType,
) -> User {
    User {
        id: Some(fixture_id(n)),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone_number: phone_number.map(str::to_string),
        email: email.to_string(),
        user_type,
    }
}

/// The record every walkthrough edits first.
#[must_use]
pub fn tom_sawyer() -> User {
    user(
        1,
        "Tom",
        "Sawyer",
        Some("+1-214-555-7294"),
        "tom@email.fake",
        UserType::Basic,
    )
}

#[must_use]
pub fn mark_twain() -> User {
    user(
        2,
        "Mark",
        "Twain",
        Some("+1-214-555-7294"),
        "mark.twain@example.com",
        UserType::Admin,
    )
}

/// The full seed roster, in id order.
#[must_use]
pub fn mock_roster() -> Vec<User> {
    vec![
        tom_sawyer(),
        mark_twain(),
        user(
            3,
            "Alice",
            "Smith",
            Some("+1-555-111-2222"),
            "alice.smith@example.com",
            UserType::Admin,
        ),
        user(4, "Bob", "Johnson", None, "bob.johnson@example.com", UserType::Basic),
        user(
            5,
            "Charlie",
            "Brown",
            Some("+1-555-333-4444"),
            "charlie.brown@example.com",
            UserType::Basic,
        ),
        user(
            6,
            "Diana",
            "Miller",
            Some("+1-555-555-6666"),
            "diana.miller@example.com",
            UserType::Admin,
        ),
        user(7, "Edward", "Davis", None, "edward.davis@example.com", UserType::Admin),
        user(
            8,
            "Fiona",
            "Wilson",
            Some("+1-555-777-8888"),
            "fiona.wilson@example.com",
            UserType::Basic,
        ),
        user(9, "George", "Clark", None, "george.clark@example.com", UserType::Basic),
        user(
            10,
            "Hannah",
            "Martinez",
            Some("+1-555-999-0000"),
            "hannah.martinez@example.com",
            UserType::Admin,
        ),
        user(11, "Ivan", "Lopez", None, "ivan.lopez@example.com", UserType::Basic),
        user(
            12,
            "Julia",
            "Taylor",
            Some("+1-555-123-4567"),
            "julia.taylor@example.com",
            UserType::Admin,
        ),
    ]
}

/// A memory store preloaded with the seed roster.
pub fn seeded_store() -> Result<MemoryStore<User>, StoreError> {
    MemoryStore::with_records(mock_roster())
}

///
/// TESTS
///
