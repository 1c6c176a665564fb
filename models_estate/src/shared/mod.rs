pub mod slot_date;

pub use slot_date::{SlotDateError, parse_slot_date};
