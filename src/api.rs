// REST client for the hotel backend. One function per backend operation,
// each issuing exactly one HTTP request and normalizing failure into
// `ApiError`. No retries, no timeouts, no caching.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::types::{Reservation, Room, RoomDraft};

#[derive(Error, Debug)]
pub enum ApiError {
    // Non-2xx response. The body is the response text when the backend sent
    // any, otherwise the canonical status reason.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Room not found")]
    RoomNotFound,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unknown error")]
    Unknown,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    // Prefix for every request, e.g. "http://localhost:8080". Empty means
    // same-origin relative paths (the development proxy setup).
    pub base_url: String,
}

// The full backend surface. Kept behind a trait so the flow controller and
// the console can run against a mock in tests.
#[async_trait]
pub trait HotelApi: Send + Sync + 'static {
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError>;

    async fn get_room(&self, id: i64) -> Result<Room, ApiError>;

    async fn search_available_rooms(
        &self,
        check_in: &str,
        check_out: &str,
    ) -> Result<Vec<Room>, ApiError>;

    async fn create_reservation(&self, reservation: &Reservation)
        -> Result<Reservation, ApiError>;

    async fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError>;

    async fn create_room(&self, draft: &RoomDraft) -> Result<Room, ApiError>;

    async fn update_room(&self, id: i64, draft: &RoomDraft) -> Result<(), ApiError>;

    async fn delete_room(&self, id: i64) -> Result<(), ApiError>;
}

pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Turn a non-2xx response into the uniform error, consuming the body.
    async fn error_for_status(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await.unwrap_or_default();
        let body = if body.trim().is_empty() { reason } else { body };
        ApiError::Status {
            status: status.as_u16(),
            body,
        }
    }
}

#[async_trait]
impl HotelApi for RestClient {
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        tracing::debug!("GET /api/rooms");
        let response = self.http.get(self.url("/api/rooms")).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }
        Ok(response.json().await?)
    }

    async fn get_room(&self, id: i64) -> Result<Room, ApiError> {
        tracing::debug!(id, "GET /api/rooms/{{id}}");
        let response = self
            .http
            .get(self.url(&format!("/api/rooms/{}", id)))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::RoomNotFound);
        }
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }
        Ok(response.json().await?)
    }

    async fn search_available_rooms(
        &self,
        check_in: &str,
        check_out: &str,
    ) -> Result<Vec<Room>, ApiError> {
        tracing::debug!(check_in, check_out, "GET /api/reservations/search");
        let response = self
            .http
            .get(self.url("/api/reservations/search"))
            .query(&[("checkIn", check_in), ("checkOut", check_out)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }
        Ok(response.json().await?)
    }

    async fn create_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<Reservation, ApiError> {
        tracing::debug!(id_room = reservation.id_room, "POST /api/reservations");
        let response = self
            .http
            .post(self.url("/api/reservations"))
            .json(reservation)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }
        Ok(response.json().await?)
    }

    async fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        tracing::debug!("GET /api/reservations");
        let response = self.http.get(self.url("/api/reservations")).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }
        Ok(response.json().await?)
    }

    async fn create_room(&self, draft: &RoomDraft) -> Result<Room, ApiError> {
        tracing::debug!("POST /api/rooms");
        let response = self
            .http
            .post(self.url("/api/rooms"))
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }
        Ok(response.json().await?)
    }

    async fn update_room(&self, id: i64, draft: &RoomDraft) -> Result<(), ApiError> {
        tracing::debug!(id, "PUT /api/rooms/{{id}}");
        let response = self
            .http
            .put(self.url(&format!("/api/rooms/{}", id)))
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }
        Ok(())
    }

    async fn delete_room(&self, id: i64) -> Result<(), ApiError> {
        tracing::debug!(id, "DELETE /api/rooms/{{id}}");
        let response = self
            .http
            .delete(self.url(&format!("/api/rooms/{}", id)))
            .send()
            .await?;
        // 204 is the expected success status; accept any other 2xx as well.
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockApi;
    use super::*;

    #[test]
    fn status_error_message_embeds_code_and_body() {
        let err = ApiError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn not_found_has_distinguished_message() {
        assert_eq!(ApiError::RoomNotFound.to_string(), "Room not found");
    }

    #[test]
    fn unknown_error_has_generic_message() {
        assert_eq!(ApiError::Unknown.to_string(), "Unknown error");
    }

    #[test]
    fn rest_client_prefixes_base_url() {
        let client = RestClient::new(ClientConfig {
            base_url: "http://localhost:8080".to_string(),
        });
        assert_eq!(client.url("/api/rooms"), "http://localhost:8080/api/rooms");

        // Same-origin default: paths pass through untouched.
        let client = RestClient::new(ClientConfig::default());
        assert_eq!(client.url("/api/rooms"), "/api/rooms");
    }

    #[tokio::test]
    async fn created_reservation_round_trips_through_listing() {
        let api = MockApi::new();
        let submitted = Reservation {
            id: None,
            id_room: 2,
            check_in_date: "2025-10-15".to_string(),
            check_out_date: "2025-10-20".to_string(),
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "555-0123".to_string(),
            special_request: Some("Late arrival".to_string()),
        };

        let created = api.create_reservation(&submitted).await.unwrap();
        assert!(created.id.is_some());

        let listed = api.list_reservations().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].id_room, submitted.id_room);
        assert_eq!(listed[0].check_in_date, submitted.check_in_date);
        assert_eq!(listed[0].full_name, submitted.full_name);
    }

    #[tokio::test]
    async fn mock_missing_room_is_not_found() {
        let api = MockApi::new();
        let err = api.get_room(99).await.unwrap_err();
        assert!(matches!(err, ApiError::RoomNotFound));
    }

    // Serves exactly one canned HTTP response on a local port, so the
    // response-to-error translation is exercised over a real socket.
    async fn one_shot_server(response: &'static str) -> RestClient {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            // The requests under test carry no body; one read drains the
            // request head.
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        RestClient::new(ClientConfig {
            base_url: format!("http://{}", addr),
        })
    }

    #[tokio::test]
    async fn non_2xx_response_translates_to_status_error() {
        let client = one_shot_server(
            "HTTP/1.1 500 Internal Server Error\r\n\
             Connection: close\r\n\
             Content-Length: 9\r\n\r\n\
             boom town",
        )
        .await;

        let err = client.list_rooms().await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: boom town");
    }

    #[tokio::test]
    async fn empty_error_body_falls_back_to_status_reason() {
        let client = one_shot_server(
            "HTTP/1.1 503 Service Unavailable\r\n\
             Connection: close\r\n\
             Content-Length: 0\r\n\r\n",
        )
        .await;

        let err = client.list_rooms().await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[tokio::test]
    async fn get_room_translates_404_to_not_found() {
        let client = one_shot_server(
            "HTTP/1.1 404 Not Found\r\n\
             Connection: close\r\n\
             Content-Length: 0\r\n\r\n",
        )
        .await;

        let err = client.get_room(99).await.unwrap_err();
        assert!(matches!(err, ApiError::RoomNotFound));
    }

    #[tokio::test]
    async fn successful_response_body_decodes_as_rooms() {
        let client = one_shot_server(
            "HTTP/1.1 200 OK\r\n\
             Connection: close\r\n\
             Content-Type: application/json\r\n\
             Content-Length: 43\r\n\r\n\
             [{\"id\":1,\"numberOfPerson\":2,\"price\":150.0}]",
        )
        .await;

        let rooms = client.list_rooms().await.unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, 1);
        assert_eq!(rooms[0].price, 150.0);
        assert!(!rooms[0].have_private_bathroom);
    }

    #[tokio::test]
    async fn delete_accepts_204_no_content() {
        let client = one_shot_server(
            "HTTP/1.1 204 No Content\r\n\
             Connection: close\r\n\r\n",
        )
        .await;

        assert!(client.delete_room(1).await.is_ok());
    }
}
