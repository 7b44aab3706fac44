// Service exports
pub mod roster;

pub use roster::{parse_roster, Roster, RosterError, RosterStore};
