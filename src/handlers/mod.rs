pub mod allocation_handler;
pub mod backend_health_handler;
