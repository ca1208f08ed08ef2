//! Payload shapes of the JSON data sources that sit next to carousels on
//! the demo pages. Carousels never consume these; they are typed here so
//! callers rendering slide content agree on field names.

pub mod country;
pub mod flights;
pub mod landmarks;
pub mod timezone;

pub use country::{CountryFlags, CountryRecord};
pub use flights::{Flight, FlightListing};
pub use landmarks::{LandmarkHit, LandmarkSearch, LandmarkSearchQuery};
pub use timezone::TimeZoneInfo;
