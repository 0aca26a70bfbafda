pub mod config;
pub mod occurrence;
pub mod schedule;

pub use config::SearchConfig;
pub use occurrence::{next, next_sequence, occurrences, Occurrences};
pub use schedule::Schedule;
