// URL query parameters are the only state carried between pages: the flow
// has no client-side store, so each page parses a typed record out of the
// query string at entry instead of trusting it implicitly.

use thiserror::Error;
use url::form_urlencoded;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Check-in and check-out dates are required")]
    MissingDates,

    #[error("Missing required reservation information")]
    MissingReservationInfo,
}

// Decoded key/value pairs of a query string, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    // First value for `name`; an empty value counts as absent, matching the
    // pages' treatment of blank date inputs.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }
}

// State handed from Search to the availability listing.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub check_in: String,
    pub check_out: String,
}

impl SearchQuery {
    pub fn from_params(params: &QueryParams) -> Result<Self, QueryError> {
        match (params.get("checkIn"), params.get("checkOut")) {
            (Some(check_in), Some(check_out)) => Ok(Self {
                check_in: check_in.to_string(),
                check_out: check_out.to_string(),
            }),
            _ => Err(QueryError::MissingDates),
        }
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("checkIn", &self.check_in)
            .append_pair("checkOut", &self.check_out)
            .finish()
    }
}

// State handed from the listing to the reservation form. The price is the
// selected room's nightly price as captured at listing time.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationQuery {
    pub room_id: i64,
    pub check_in: String,
    pub check_out: String,
    pub price: f64,
}

impl ReservationQuery {
    pub fn from_params(params: &QueryParams) -> Result<Self, QueryError> {
        let room_id = params
            .get("roomId")
            .and_then(|value| value.parse::<i64>().ok())
            .ok_or(QueryError::MissingReservationInfo)?;
        let check_in = params
            .get("checkIn")
            .ok_or(QueryError::MissingReservationInfo)?;
        let check_out = params
            .get("checkOut")
            .ok_or(QueryError::MissingReservationInfo)?;
        let price = params
            .get("price")
            .and_then(|value| value.parse::<f64>().ok())
            .ok_or(QueryError::MissingReservationInfo)?;
        // A zero price reads as missing information, same as an absent
        // parameter.
        if price == 0.0 {
            return Err(QueryError::MissingReservationInfo);
        }
        Ok(Self {
            room_id,
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            price,
        })
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("roomId", &self.room_id.to_string())
            .append_pair("checkIn", &self.check_in)
            .append_pair("checkOut", &self.check_out)
            .append_pair("price", &self.price.to_string())
            .finish()
    }
}

// The navigable pages. Explore and Contact are static content; they carry
// no state beyond their path.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Explore,
    Contact,
    ApiTest,
    AvailableRooms(SearchQuery),
    Reservation(ReservationQuery),
}

impl Route {
    pub fn to_url(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Explore => "/explore".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::ApiTest => "/api-test".to_string(),
            Route::AvailableRooms(query) => {
                format!("/available-rooms?{}", query.to_query_string())
            }
            Route::Reservation(query) => format!("/reservation?{}", query.to_query_string()),
        }
    }
}
