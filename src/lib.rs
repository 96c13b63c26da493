//! Participant-to-resource matching for lottery events.
//!
//! Pairs lottery winners (participants) with resources (staff, cast,
//! booths) over one or more rounds. Participants may list up to three
//! preferred resources; resources may carry NG lists of participants
//! they must not be paired with.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Participant`, `Resource`, `NgEntry`,
//!   `Assignment`, `Slot`, `MatchingResult`
//! - **`config`**: Shape codes (M001–M006), judgment mode, conflict policy
//! - **`exclusion`**: The NG predicate shared by every engine
//! - **`engines`**: One engine per shape (random draft, ring rotation)
//! - **`matcher`**: Shape dispatch, warning pass, KPI
//! - **`analytics`**: Frequently excluded participants, caution and exception lists
//! - **`validation`**: Input integrity checks (duplicate IDs, slot counts, shape parameters)
//!
//! # Architecture
//!
//! Engines are pure functions of their input and a caller-supplied
//! random generator: same seed, same result. They never fail; structural
//! dead ends are reported through the `conflict` flag of
//! [`models::MatchingResult`].
//! Logging goes through `tracing`; the host installs the subscriber.
//!
//! # References
//!
//! - Walker (1977), "An Efficient Method for Generating Discrete Random
//!   Variables with General Distributions"
//! - Knuth (1997), "The Art of Computer Programming, Vol. 2", §3.4.2

pub mod analytics;
pub mod config;
pub mod engines;
pub mod exclusion;
pub mod matcher;
pub mod models;
pub mod validation;
