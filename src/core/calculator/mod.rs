pub mod compensation;
pub mod duration;
pub mod months;
pub mod worktime;
