//! Dispatcher, warning pass and KPI evaluation.
//!
//! # Algorithm
//!
//! [`Matcher`] filters resources to the available ones, runs the single
//! engine selected by the configured shape, then (warn policy only)
//! flags forbidden pairings with [`attach_warnings`].
//!
//! # KPI
//!
//! [`MatchingKpi`] summarizes a result: rank histogram, preferred and
//! satisfied rates, coverage, warnings and vacant seats.

mod dispatcher;
mod kpi;
mod warnings;

pub use dispatcher::{Matcher, MatchingRequest};
pub use kpi::MatchingKpi;
pub use warnings::attach_warnings;
