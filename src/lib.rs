// Core of the hotel booking front end: REST client for the rooms and
// reservations backend, plus the page flow that carries its state through
// URL query parameters.

pub mod api;
pub mod console;
pub mod flow;
pub mod query;
pub mod types;

// Re-export key types for convenience
pub use api::{ApiError, ClientConfig, HotelApi, RestClient};
pub use console::{ApiConsole, Panel};
pub use flow::{
    FetchState, GuestDetails, ListingPage, ListingView, ReservationPage, ReservationView,
    SearchPage, StaySummary,
};
pub use query::{QueryError, QueryParams, ReservationQuery, Route, SearchQuery};
pub use types::{Reservation, Room, RoomDraft};
