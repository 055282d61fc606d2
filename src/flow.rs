// The booking flow: Search -> Listing -> Reservation. Each page is an
// explicit state machine whose only inbound state is the typed query record
// parsed at entry; everything else is page-local and dies with the page.
//
// Every fetch failure is converted into display state here. Nothing
// propagates past a page.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::api::HotelApi;
use crate::query::{QueryError, QueryParams, ReservationQuery, Route, SearchQuery};
use crate::types::{Reservation, Room};

// How long the confirmation screen stays up before navigating home.
pub const CONFIRMATION_REDIRECT_DELAY: Duration = Duration::from_secs(2);

pub const EMPTY_LISTING_MESSAGE: &str = "There is no available room!";
pub const MISSING_SEARCH_DATES_MESSAGE: &str =
    "Please select both check-in and check-out dates";

// Shared fetch lifecycle for everything a page loads or submits.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

// Whole days between two ISO dates, clamped at zero. An unparsable date
// also yields zero, so a malformed URL degrades to a zero-night stay
// instead of failing the page.
pub fn stay_nights(check_in: &str, check_out: &str) -> i64 {
    let parse = |value: &str| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok();
    match (parse(check_in), parse(check_out)) {
        (Some(check_in), Some(check_out)) => (check_out - check_in).num_days().max(0),
        _ => 0,
    }
}

/// Initial state of the flow: collects the date range.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub check_in_date: String,
    pub check_out_date: String,
}

impl SearchPage {
    pub fn new() -> Self {
        Self::default()
    }

    // Proceed to the listing only when both dates are present; the values
    // travel in the URL untouched.
    pub fn submit(&self) -> Result<Route, String> {
        if self.check_in_date.is_empty() || self.check_out_date.is_empty() {
            return Err(MISSING_SEARCH_DATES_MESSAGE.to_string());
        }
        Ok(Route::AvailableRooms(SearchQuery {
            check_in: self.check_in_date.clone(),
            check_out: self.check_out_date.clone(),
        }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingView<'a> {
    Loading,
    Error(&'a str),
    /// Resolved with zero rooms; rendered as `EMPTY_LISTING_MESSAGE`,
    /// distinct from the error state.
    Empty,
    Rooms(&'a [Room]),
}

/// Availability listing for a date range taken from the URL.
pub struct ListingPage {
    api: Arc<dyn HotelApi>,
    query: Result<SearchQuery, QueryError>,
    rooms: FetchState<Vec<Room>>,
}

impl ListingPage {
    // Missing dates are terminal: the page renders the validation error and
    // never issues a request.
    pub fn enter(api: Arc<dyn HotelApi>, params: &QueryParams) -> Self {
        let query = SearchQuery::from_params(params);
        let rooms = match &query {
            Ok(_) => FetchState::Idle,
            Err(err) => FetchState::Error(err.to_string()),
        };
        Self { api, query, rooms }
    }

    pub async fn load(&mut self) {
        let query = match &self.query {
            Ok(query) => query.clone(),
            Err(_) => return,
        };
        self.rooms = FetchState::Loading;
        match self
            .api
            .search_available_rooms(&query.check_in, &query.check_out)
            .await
        {
            Ok(rooms) => self.rooms = FetchState::Success(rooms),
            Err(err) => self.rooms = FetchState::Error(err.to_string()),
        }
    }

    pub fn view(&self) -> ListingView<'_> {
        match &self.rooms {
            FetchState::Idle | FetchState::Loading => ListingView::Loading,
            FetchState::Error(message) => ListingView::Error(message),
            FetchState::Success(rooms) if rooms.is_empty() => ListingView::Empty,
            FetchState::Success(rooms) => ListingView::Rooms(rooms),
        }
    }

    // "I'll Reserve": hand off to the reservation form with this room's
    // nightly price captured now.
    pub fn reserve(&self, room: &Room) -> Option<Route> {
        let query = self.query.as_ref().ok()?;
        Some(Route::Reservation(ReservationQuery {
            room_id: room.id,
            check_in: query.check_in.clone(),
            check_out: query.check_out.clone(),
            price: room.price,
        }))
    }
}

/// Guest contact fields collected on the reservation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub special_request: String,
}

/// Derived pricing shown in the reservation summary.
#[derive(Debug, Clone, PartialEq)]
pub struct StaySummary {
    pub room_id: i64,
    pub check_in: String,
    pub check_out: String,
    pub number_of_days: i64,
    pub nightly_price: f64,
    pub total_price: f64,
}

impl StaySummary {
    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.total_price)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReservationView<'a> {
    Form {
        summary: Option<StaySummary>,
        error: Option<&'a str>,
    },
    Submitting,
    Confirmed {
        redirect: Route,
        after: Duration,
    },
}

/// Final step of the flow: collects guest details and submits.
pub struct ReservationPage {
    api: Arc<dyn HotelApi>,
    query: Result<ReservationQuery, QueryError>,
    pub guest: GuestDetails,
    state: FetchState<Reservation>,
}

impl ReservationPage {
    pub fn enter(api: Arc<dyn HotelApi>, params: &QueryParams) -> Self {
        let query = ReservationQuery::from_params(params);
        let state = match &query {
            Ok(_) => FetchState::Idle,
            Err(err) => FetchState::Error(err.to_string()),
        };
        Self {
            api,
            query,
            guest: GuestDetails::default(),
            state,
        }
    }

    pub fn summary(&self) -> Option<StaySummary> {
        let query = self.query.as_ref().ok()?;
        let number_of_days = stay_nights(&query.check_in, &query.check_out);
        Some(StaySummary {
            room_id: query.room_id,
            check_in: query.check_in.clone(),
            check_out: query.check_out.clone(),
            number_of_days,
            nightly_price: query.price,
            total_price: number_of_days as f64 * query.price,
        })
    }

    // Submits whatever the form holds. A zero-night stay is not blocked
    // here; availability and stay validation belong to the backend. On
    // failure the entered guest details stay in place for a manual retry.
    pub async fn submit(&mut self) {
        let query = match &self.query {
            Ok(query) => query.clone(),
            Err(err) => {
                self.state = FetchState::Error(err.to_string());
                return;
            }
        };
        self.state = FetchState::Loading;
        let reservation = Reservation {
            id: None,
            id_room: query.room_id,
            check_in_date: query.check_in.clone(),
            check_out_date: query.check_out.clone(),
            full_name: self.guest.full_name.clone(),
            email: self.guest.email.clone(),
            phone: self.guest.phone.clone(),
            special_request: if self.guest.special_request.is_empty() {
                None
            } else {
                Some(self.guest.special_request.clone())
            },
        };
        match self.api.create_reservation(&reservation).await {
            Ok(created) => self.state = FetchState::Success(created),
            Err(err) => self.state = FetchState::Error(err.to_string()),
        }
    }

    pub fn view(&self) -> ReservationView<'_> {
        match &self.state {
            FetchState::Loading => ReservationView::Submitting,
            FetchState::Success(_) => ReservationView::Confirmed {
                redirect: Route::Home,
                after: CONFIRMATION_REDIRECT_DELAY,
            },
            FetchState::Idle => ReservationView::Form {
                summary: self.summary(),
                error: None,
            },
            FetchState::Error(message) => ReservationView::Form {
                summary: self.summary(),
                error: Some(message),
            },
        }
    }
}
