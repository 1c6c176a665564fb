//! OpenAPI documentation, served through Swagger UI at `/docs`.
//!
//! Only the public site surface is documented here; `/internal` and
//! `/health` stay out of the published contract.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::listings::list::list_listings,
        crate::api::listings::get::get_listing,
        crate::api::bookings::create::create_booking,
        crate::api::bookings::booked::booked_slots,
        crate::api::inquiries::create::create_inquiry,
        crate::api::mortgage::estimate_mortgage,
    ),
    components(schemas(
        models_estate::api::ListingResponse,
        models_estate::api::BookingResponse,
        models_estate::api::InquiryResponse,
        models_estate::api::CreateBookingRequest,
        models_estate::api::CreateInquiryRequest,
        listing_filters::PriceRange,
        listing_filters::SortOrder,
        crate::api::listings::list::ListingsResponse,
        crate::api::bookings::booked::BookedSlotsResponse,
        crate::api::mortgage::MortgageEstimateResponse,
    )),
    tags(
        (name = "Listings", description = "Property listings and search"),
        (name = "Bookings", description = "Viewing slot bookings"),
        (name = "Inquiries", description = "Contact inquiries"),
        (name = "Mortgage", description = "Mortgage payment estimates"),
    )
)]
pub struct ApiDoc;
