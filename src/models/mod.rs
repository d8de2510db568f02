pub mod assignment;
pub mod matches;
pub mod person;
pub mod security_duty;
pub mod snapshot;
pub mod work_hour;
