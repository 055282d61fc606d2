// Developer-facing console exercising the full API surface: one panel per
// backend operation, each with its own status line and raw JSON response
// view. Panels are independent; the only cross-panel behavior is refreshing
// the room list after a successful room mutation.

use std::sync::Arc;

use crate::api::HotelApi;
use crate::flow::FetchState;
use crate::types::{Reservation, Room, RoomDraft};

// Status plus the pretty-printed response body of one console section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel {
    pub status: FetchState<String>,
    pub response: Option<String>,
}

impl Panel {
    fn begin(&mut self) {
        self.status = FetchState::Loading;
        self.response = None;
    }

    fn succeed(&mut self, message: impl Into<String>) {
        self.status = FetchState::Success(message.into());
    }

    fn fail(&mut self, message: impl std::fmt::Display) {
        self.status = FetchState::Error(format!("Error: {}", message));
    }

    fn show<T: serde::Serialize>(&mut self, value: &T) {
        self.response = serde_json::to_string_pretty(value).ok();
    }
}

/// Seed values for the reservation form, as shown when the console opens.
fn seeded_reservation_form() -> ReservationForm {
    ReservationForm {
        id_room: Some(1),
        check_in_date: "2025-10-15".to_string(),
        check_out_date: "2025-10-18".to_string(),
        full_name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "555-0123".to_string(),
        special_request: String::new(),
    }
}

// Form state applied after a successful creation. Note the reset dates
// differ from the initial seed dates.
fn reset_reservation_form() -> ReservationForm {
    ReservationForm {
        check_in_date: "2025-02-15".to_string(),
        check_out_date: "2025-02-18".to_string(),
        ..seeded_reservation_form()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationForm {
    pub id_room: Option<i64>,
    pub check_in_date: String,
    pub check_out_date: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub special_request: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomForm {
    pub description: String,
    pub number_of_person: Option<u32>,
    pub price: Option<f64>,
    pub have_private_bathroom: bool,
}

pub struct ApiConsole {
    api: Arc<dyn HotelApi>,

    pub rooms: Vec<Room>,
    pub rooms_panel: Panel,

    pub check_in: String,
    pub check_out: String,
    pub available_rooms: Vec<Room>,
    pub search_panel: Panel,

    pub reservation_form: ReservationForm,
    pub reservation_panel: Panel,

    pub room_id: String,
    pub room_panel: Panel,

    pub reservations_panel: Panel,

    pub new_room: RoomForm,
    pub create_room_panel: Panel,

    pub update_room_id: String,
    pub update_room_form: RoomForm,
    pub update_room_panel: Panel,

    pub delete_room_id: String,
    pub delete_room_panel: Panel,
}

impl ApiConsole {
    pub fn new(api: Arc<dyn HotelApi>) -> Self {
        Self {
            api,
            rooms: Vec::new(),
            rooms_panel: Panel::default(),
            check_in: "2025-10-15".to_string(),
            check_out: "2025-10-20".to_string(),
            available_rooms: Vec::new(),
            search_panel: Panel::default(),
            reservation_form: seeded_reservation_form(),
            reservation_panel: Panel::default(),
            room_id: "1".to_string(),
            room_panel: Panel::default(),
            reservations_panel: Panel::default(),
            new_room: RoomForm {
                description: "Deluxe Suite".to_string(),
                number_of_person: Some(2),
                price: Some(150.0),
                have_private_bathroom: true,
            },
            create_room_panel: Panel::default(),
            update_room_id: "1".to_string(),
            update_room_form: RoomForm {
                description: String::new(),
                number_of_person: None,
                price: None,
                have_private_bathroom: false,
            },
            update_room_panel: Panel::default(),
            delete_room_id: String::new(),
            delete_room_panel: Panel::default(),
        }
    }

    pub async fn get_all_rooms(&mut self) {
        self.rooms_panel.begin();
        match self.api.list_rooms().await {
            Ok(rooms) => {
                self.rooms_panel
                    .succeed(format!("Success - Found {} room(s)", rooms.len()));
                self.rooms = rooms;
            }
            Err(err) => self.rooms_panel.fail(err),
        }
    }

    pub async fn search_rooms(&mut self) {
        if self.check_in.is_empty() || self.check_out.is_empty() {
            self.search_panel.fail("Please select both dates");
            return;
        }
        self.search_panel.begin();
        match self
            .api
            .search_available_rooms(&self.check_in, &self.check_out)
            .await
        {
            Ok(rooms) => {
                self.search_panel
                    .succeed(format!("Success - Found {} available room(s)", rooms.len()));
                self.available_rooms = rooms;
            }
            Err(err) => self.search_panel.fail(err),
        }
    }

    /// Empty-result hint for the search section, shown instead of a grid.
    pub fn search_empty_message(&self) -> Option<&'static str> {
        match self.search_panel.status {
            FetchState::Success(_) if self.available_rooms.is_empty() => {
                Some("No available rooms found for these dates")
            }
            _ => None,
        }
    }

    pub async fn create_reservation(&mut self) {
        let form = &self.reservation_form;
        let id_room = match form.id_room {
            Some(id) => id,
            None => {
                self.reservation_panel.fail("Please fill all required fields");
                return;
            }
        };
        if form.check_in_date.is_empty()
            || form.check_out_date.is_empty()
            || form.full_name.is_empty()
            || form.email.is_empty()
            || form.phone.is_empty()
        {
            self.reservation_panel.fail("Please fill all required fields");
            return;
        }

        let reservation = Reservation {
            id: None,
            id_room,
            check_in_date: form.check_in_date.clone(),
            check_out_date: form.check_out_date.clone(),
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            special_request: if form.special_request.is_empty() {
                None
            } else {
                Some(form.special_request.clone())
            },
        };

        self.reservation_panel.begin();
        match self.api.create_reservation(&reservation).await {
            Ok(created) => {
                self.reservation_panel.succeed("Success - Reservation created!");
                self.reservation_panel.show(&created);
                self.reservation_form = reset_reservation_form();
            }
            Err(err) => self.reservation_panel.fail(err),
        }
    }

    pub async fn get_room_by_id(&mut self) {
        let id = match self.room_id.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                self.room_panel.fail("Please enter a room ID");
                return;
            }
        };
        self.room_panel.begin();
        match self.api.get_room(id).await {
            Ok(room) => {
                self.room_panel.succeed("Success - Room found");
                self.room_panel.show(&room);
            }
            Err(err) => self.room_panel.fail(err),
        }
    }

    pub async fn get_all_reservations(&mut self) {
        self.reservations_panel.begin();
        match self.api.list_reservations().await {
            Ok(reservations) => {
                if reservations.is_empty() {
                    self.reservations_panel
                        .succeed("Success - No reservations found");
                } else {
                    self.reservations_panel.succeed(format!(
                        "Success - Found {} reservation(s)",
                        reservations.len()
                    ));
                }
                self.reservations_panel.show(&reservations);
            }
            Err(err) => self.reservations_panel.fail(err),
        }
    }

    pub async fn create_room(&mut self) {
        let form = &self.new_room;
        let (number_of_person, price) = match (form.number_of_person, form.price) {
            (Some(persons), Some(price)) if !form.description.is_empty() => (persons, price),
            _ => {
                self.create_room_panel.fail("Please fill all required fields");
                return;
            }
        };

        let draft = RoomDraft {
            description: Some(form.description.clone()),
            number_of_person: Some(number_of_person),
            price: Some(price),
            have_private_bathroom: Some(form.have_private_bathroom),
        };

        self.create_room_panel.begin();
        match self.api.create_room(&draft).await {
            Ok(room) => {
                self.create_room_panel.succeed("Success - Room created!");
                self.create_room_panel.show(&room);
                self.get_all_rooms().await;
            }
            Err(err) => self.create_room_panel.fail(err),
        }
    }

    // Pre-fill the update form from the backend when the target id changes.
    // A failed preload is logged and otherwise ignored; the user can still
    // type values by hand.
    pub async fn load_room_for_update(&mut self) {
        let id = match self.update_room_id.parse::<i64>() {
            Ok(id) => id,
            Err(_) => return,
        };
        match self.api.get_room(id).await {
            Ok(room) => {
                self.update_room_form = RoomForm {
                    description: room.description.unwrap_or_default(),
                    number_of_person: Some(room.number_of_person),
                    price: Some(room.price),
                    have_private_bathroom: room.have_private_bathroom,
                };
            }
            Err(err) => tracing::error!("error loading room: {}", err),
        }
    }

    pub async fn update_room(&mut self) {
        let id = match self.update_room_id.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                self.update_room_panel.fail("Please enter a room ID");
                return;
            }
        };

        let form = &self.update_room_form;
        if form.description.trim().is_empty()
            && form.number_of_person.is_none()
            && form.price.is_none()
        {
            self.update_room_panel
                .fail("Please enter at least one field to update");
            return;
        }

        // Only the provided fields go into the body; the bathroom flag is
        // always sent because the checkbox always has a value.
        let draft = RoomDraft {
            description: if form.description.trim().is_empty() {
                None
            } else {
                Some(form.description.clone())
            },
            number_of_person: form.number_of_person,
            price: form.price,
            have_private_bathroom: Some(form.have_private_bathroom),
        };

        self.update_room_panel.begin();
        match self.api.update_room(id, &draft).await {
            Ok(()) => {
                self.update_room_panel.succeed("Success - Room updated!");
                self.get_all_rooms().await;
            }
            Err(err) => self.update_room_panel.fail(err),
        }
    }

    pub async fn delete_room(&mut self) {
        let id = match self.delete_room_id.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                self.delete_room_panel.fail("Please enter a room ID");
                return;
            }
        };
        self.delete_room_panel.begin();
        match self.api.delete_room(id).await {
            Ok(()) => {
                self.delete_room_panel.succeed("Success - Room deleted!");
                self.delete_room_id.clear();
                self.get_all_rooms().await;
            }
            Err(err) => self.delete_room_panel.fail(err),
        }
    }
}
