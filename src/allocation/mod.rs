pub mod allocator;
pub mod grouping;
pub mod report;
pub mod roster;
pub mod stratified;
pub mod structure;
pub mod union_find;

pub use allocator::TeamAllocator;
pub use roster::{parse_payload, Roster, RosterError};
