pub mod booking;
pub mod inquiry;
pub mod listing;

pub use booking::{Booking, NewBooking};
pub use inquiry::{Inquiry, NewInquiry};
pub use listing::Listing;
