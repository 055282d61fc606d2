// Wire types for the hotel backend. The backend speaks camelCase JSON, so
// every struct renames its fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub number_of_person: u32,
    pub price: f64,
    // Older rooms in the backend predate this flag; treat absent as false.
    #[serde(default)]
    pub have_private_bathroom: bool,
}

// Partial room used as the body of create/update requests. Fields left as
// None are omitted so the backend only touches what was provided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_person: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub have_private_bathroom: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    // Backend-assigned; a creation request must not carry an id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub id_room: i64,
    pub check_in_date: String,
    pub check_out_date: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_request: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_uses_backend_field_names() {
        let room = Room {
            id: 3,
            description: Some("Deluxe Suite".to_string()),
            number_of_person: 2,
            price: 150.0,
            have_private_bathroom: true,
        };

        let json = serde_json::to_string(&room).unwrap();
        assert!(json.contains("\"numberOfPerson\":2"));
        assert!(json.contains("\"havePrivateBathroom\":true"));
    }

    #[test]
    fn room_bathroom_flag_defaults_to_false() {
        let room: Room =
            serde_json::from_str(r#"{"id":1,"numberOfPerson":1,"price":80.0}"#).unwrap();
        assert!(!room.have_private_bathroom);
        assert_eq!(room.description, None);
    }

    #[test]
    fn new_reservation_serializes_without_id() {
        let reservation = Reservation {
            id: None,
            id_room: 4,
            check_in_date: "2025-10-15".to_string(),
            check_out_date: "2025-10-18".to_string(),
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "555-0123".to_string(),
            special_request: None,
        };

        let json = serde_json::to_string(&reservation).unwrap();
        assert!(!json.contains("\"id\""), "unexpected id in {}", json);
        assert!(json.contains("\"idRoom\":4"));
        assert!(json.contains("\"checkInDate\":\"2025-10-15\""));
    }

    #[test]
    fn empty_draft_serializes_to_empty_object() {
        let json = serde_json::to_string(&RoomDraft::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
