//! Application-level configuration.
//!
//! - [`PollParams`]: view sizing and voting policy

pub mod poll_params;

pub use poll_params::PollParams;
