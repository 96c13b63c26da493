//! Matching domain models.
//!
//! Provides the data types for matching inputs and outputs. Inputs are
//! immutable for the duration of a run; engines work on local copies.
//!
//! # Domain Mappings
//!
//! | u-matching | Meet-and-greet | Speed dating | Mentoring |
//! |------------|----------------|--------------|-----------|
//! | Participant | Lottery winner | Attendee | Mentee |
//! | Resource | Cast member | Host | Mentor |
//! | Round | Rotation | Date | Session |
//! | Slot | Table | Seat | Booth |

mod participant;
mod resource;
mod result;

pub use participant::{Participant, MAX_PREFERENCES};
pub use resource::{NgEntry, Resource};
pub use result::{Assignment, MatchingResult, Slot};
