pub mod booking;
pub mod inquiry;
pub mod listing;

pub use booking::Booking;
pub use inquiry::Inquiry;
pub use listing::Listing;
