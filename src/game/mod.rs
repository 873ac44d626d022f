pub mod accuracy;
pub mod battle;
pub mod combo;
pub mod judge;
pub mod note;
pub mod schedule;
