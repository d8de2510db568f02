pub mod assign;
pub mod calculator;
pub mod duty;
pub mod export;
pub mod log;
pub mod matches;
pub mod person;
pub mod time_entry;
