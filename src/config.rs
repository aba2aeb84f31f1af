pub mod allocation;
pub mod settings;
