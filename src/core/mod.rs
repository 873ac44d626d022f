pub mod input;
pub mod presentation;
pub mod scheduler;
