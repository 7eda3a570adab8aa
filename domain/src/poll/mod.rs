//! Poll domain.
//!
//! - [`question::Question`]: a poll prompt with a publication timestamp
//! - [`choice::Choice`]: one answer to a question, carrying its tally
//! - [`visibility`]: when a question is published / recently published
//! - [`vote`]: ballot rejections and tallied results

pub mod choice;
pub mod question;
pub mod visibility;
pub mod vote;
