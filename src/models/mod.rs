pub mod allocation;
pub mod common;
pub mod player;
pub mod report;
