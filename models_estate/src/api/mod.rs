pub mod error;
pub mod requests;
pub mod responses;

pub use error::{BookingValidationError, InquiryValidationError};
pub use requests::{CreateBookingRequest, CreateInquiryRequest};
pub use responses::{BookingResponse, InquiryResponse, ListingResponse};
