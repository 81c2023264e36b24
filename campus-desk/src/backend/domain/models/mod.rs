//! Store bindings for the shared record types: field lookup, form defaults,
//! table layouts and the fixed demo seeds.

pub mod attendance;
pub mod finance;
pub mod inventory;
pub mod staff;
pub mod student;
