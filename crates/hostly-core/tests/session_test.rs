//! Integration tests for `PropertySession` against a mock backend.
//!
//! Uses wiremock to exercise the refresh fan-out, degraded-slice
//! notices, tab gating, and command routing end to end.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hostly_api::AdminClient;
use hostly_core::{
    Command, CommandResult, CoreError, Property, PropertyKind, PropertySession, RoomRequest,
    RoomStatus, RoomType, SessionState, SliceKind, TabId,
};

// ── Helpers ──────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Arc<AdminClient>) {
    let server = MockServer::start().await;
    let client = AdminClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, Arc::new(client))
}

fn hotel(id: i64) -> Property {
    Property {
        id,
        name: "Sea Breeze".into(),
        kinds: vec![PropertyKind::Hotel],
        location: Some("Goa".into()),
        address: None,
        active: true,
        listing: None,
        amenity_ids: vec![2, 5],
    }
}

fn cafe(id: i64) -> Property {
    Property {
        id,
        name: "Dockside Cafe".into(),
        kinds: vec![PropertyKind::Cafe],
        location: None,
        address: None,
        active: true,
        listing: None,
        amenity_ids: Vec::new(),
    }
}

fn room_json(id: i64, number: &str) -> serde_json::Value {
    json!({
        "id": id,
        "propertyId": 7,
        "roomNumber": number,
        "roomType": "DELUXE",
        "basePrice": 4200.0,
        "maxOccupancy": 2,
        "status": "AVAILABLE",
        "active": true,
        "bookable": true
    })
}

fn gallery_json(id: i64, property_id: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "propertyId": property_id,
        "category": "ROOM",
        "media": {"url": "https://cdn/img.jpg", "fileName": "img.jpg", "type": "image/jpeg"}
    })
}

async fn mount_rooms(server: &MockServer, rooms: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": rooms})))
        .mount(server)
        .await;
}

async fn mount_gallery(server: &MockServer, items: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/galleries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"data": items}})))
        .mount(server)
        .await;
}

async fn mount_policies(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/properties/7/policies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "policyOptions": [{"id": 1, "name": "No smoking"}],
            "checkInTime": "14:00 PM",
            "checkOutTime": "11:00 AM",
            "cancellationPolicy": "Free until 48h"
        })))
        .mount(server)
        .await;
}

async fn mount_primary(server: &MockServer) {
    mount_rooms(server, json!([room_json(1, "101"), room_json(2, "102")])).await;
    mount_gallery(server, json!([gallery_json(10, json!(7))])).await;
    mount_policies(server).await;
}

// ── Open / refresh ───────────────────────────────────────────────────

#[tokio::test]
async fn open_populates_primary_slices() {
    let (server, client) = setup().await;
    mount_primary(&server).await;

    let session = PropertySession::open(client, hotel(7)).await;

    assert_eq!(session.current_state(), SessionState::Ready);
    assert_eq!(session.rooms().len(), 2);
    assert_eq!(session.gallery().len(), 1);

    let policies = session.policies().unwrap();
    // Payload times normalize to input format.
    assert_eq!(policies.check_in_time.as_deref(), Some("14:00"));
    assert_eq!(policies.check_out_time.as_deref(), Some("11:00"));
    assert_eq!(policies.options.len(), 1);
}

#[tokio::test]
async fn refresh_replaces_slices_wholesale() {
    let (server, client) = setup().await;
    mount_primary(&server).await;

    let session = PropertySession::open(Arc::clone(&client), hotel(7)).await;
    assert_eq!(session.rooms().len(), 2);

    // The next refresh returns a different set; no merging happens.
    server.reset().await;
    mount_rooms(&server, json!([room_json(3, "201")])).await;
    mount_gallery(&server, json!([])).await;
    mount_policies(&server).await;

    session.request_refresh().await;

    let rooms = session.rooms();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].room_number, "201");
    assert!(session.gallery().is_empty());
}

#[tokio::test]
async fn refresh_is_idempotent_against_stable_backend() {
    let (server, client) = setup().await;
    mount_primary(&server).await;

    let session = PropertySession::open(client, hotel(7)).await;

    let rooms_first = session.rooms();
    let gallery_first = session.gallery();
    let policies_first = session.policies();

    // Same mocks, no intervening mutation: the composite record must
    // come out identical.
    session.request_refresh().await;

    assert_eq!(session.current_state(), SessionState::Ready);
    assert_eq!(session.rooms(), rooms_first);
    assert_eq!(session.gallery(), gallery_first);
    assert_eq!(session.policies(), policies_first);
}

#[tokio::test]
async fn gallery_walk_uses_configured_page_size() {
    let server = MockServer::start().await;
    let client = AdminClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .unwrap()
        .with_page_size(2);

    mount_rooms(&server, json!([])).await;
    mount_policies(&server).await;

    // Two full pages of size 2, then a short page ending the walk.
    Mock::given(method("GET"))
        .and(path("/api/galleries"))
        .and(query_param("page", "0"))
        .and(query_param("size", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"data": {"data": [gallery_json(10, json!(7)), gallery_json(11, json!(7))]}}),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/galleries"))
        .and(query_param("page", "1"))
        .and(query_param("size", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"data": [gallery_json(12, json!("7"))]}})),
        )
        .mount(&server)
        .await;

    let session = PropertySession::open(Arc::new(client), hotel(7)).await;

    let gallery = session.gallery();
    assert_eq!(gallery.len(), 3);
    assert_eq!(gallery[2].id, 12);
}

#[tokio::test]
async fn gallery_matches_property_ids_numerically() {
    let (server, client) = setup().await;
    mount_rooms(&server, json!([])).await;
    mount_policies(&server).await;
    // Mixed id spellings: 7 and "7" belong to this property, 70 and a
    // non-numeric string do not.
    mount_gallery(
        &server,
        json!([
            gallery_json(10, json!(7)),
            gallery_json(11, json!("7")),
            gallery_json(12, json!(70)),
            gallery_json(13, json!("oops")),
        ]),
    )
    .await;

    let session = PropertySession::open(client, hotel(7)).await;

    let gallery = session.gallery();
    assert_eq!(gallery.len(), 2);
    assert_eq!(gallery[0].id, 10);
    assert_eq!(gallery[1].id, 11);
}

#[tokio::test]
async fn failed_slice_keeps_value_and_emits_one_notice() {
    let (server, client) = setup().await;
    mount_primary(&server).await;

    let session = PropertySession::open(client, hotel(7)).await;
    assert_eq!(session.gallery().len(), 1);

    let mut notices = session.notices();

    // Gallery starts failing; rooms and policies stay healthy.
    server.reset().await;
    mount_rooms(&server, json!([room_json(1, "101")])).await;
    mount_policies(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/galleries"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    session.request_refresh().await;

    // Healthy slices refreshed; the failed one keeps its last value.
    assert_eq!(session.current_state(), SessionState::Ready);
    assert_eq!(session.rooms().len(), 1);
    assert_eq!(session.gallery().len(), 1);

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.slice, SliceKind::Gallery);
    assert!(notices.try_recv().is_err(), "expected exactly one notice");
}

// ── Tabs ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn cafe_tab_set_excludes_hotel_tabs() {
    let (server, client) = setup().await;
    mount_rooms(&server, json!([])).await;
    mount_gallery(&server, json!([])).await;
    Mock::given(method("GET"))
        .and(path("/api/properties/7/policies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let session = PropertySession::open(client, cafe(7)).await;

    assert_eq!(
        session.available_tabs(),
        vec![TabId::Overview, TabId::Menu, TabId::Tables, TabId::Gallery]
    );

    session.switch_tab(TabId::Menu).unwrap();
    assert_eq!(session.active_tab(), TabId::Menu);

    // A hotel-only tab is rejected and the active tab is unchanged.
    let err = session.switch_tab(TabId::Pricing).unwrap_err();
    assert!(matches!(err, CoreError::TabNotAvailable { tab: TabId::Pricing }));
    assert_eq!(session.active_tab(), TabId::Menu);
}

#[tokio::test]
async fn ensure_loaded_fetches_menu_once() {
    let (server, client) = setup().await;
    mount_rooms(&server, json!([])).await;
    mount_gallery(&server, json!([])).await;
    mount_policies(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/menu-items"))
        .and(query_param("propertyId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [
            {"id": 1, "propertyId": 7, "name": "Masala Chai", "price": 60.0, "category": "Drinks"}
        ]})))
        .expect(1)
        .mount(&server)
        .await;

    let session = PropertySession::open(client, cafe(7)).await;
    assert!(session.menu().is_empty());

    session.ensure_loaded(TabId::Menu).await.unwrap();
    assert_eq!(session.menu().len(), 1);
    assert_eq!(session.menu()[0].name, "Masala Chai");

    // Already loaded: no second fetch.
    session.ensure_loaded(TabId::Menu).await.unwrap();
}

#[tokio::test]
async fn events_filter_out_past_inactive_and_foreign() {
    let (server, client) = setup().await;
    mount_primary(&server).await;

    let future = (chrono::Utc::now().date_naive() + chrono::Days::new(30))
        .format("%Y-%m-%d")
        .to_string();

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(query_param("locationId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [
            {"id": 1, "title": "Wine tasting", "locationId": 7, "date": future, "active": true},
            {"id": 2, "title": "Old gala", "locationId": 7, "date": "2020-01-01", "active": true},
            {"id": 3, "title": "Cancelled", "locationId": 7, "date": future, "active": false},
            {"id": 4, "title": "Elsewhere", "locationId": 9, "date": future, "active": true},
            {"id": 5, "title": "Undated", "locationId": "7", "active": true}
        ]})))
        .mount(&server)
        .await;

    let session = PropertySession::open(client, hotel(7)).await;
    session.ensure_loaded(TabId::Events).await.unwrap();

    let events = session.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Wine tasting");
    assert_eq!(events[1].title, "Undated");
}

// ── Commands ─────────────────────────────────────────────────────────

#[tokio::test]
async fn set_amenities_sends_exact_id_array() {
    let (server, client) = setup().await;
    mount_primary(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/properties/7/amenities"))
        .and(body_json(json!([2, 5])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    // Post-command refresh refetches the property record.
    Mock::given(method("GET"))
        .and(path("/api/properties/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "propertyName": "Sea Breeze",
            "propertyTypes": ["Hotel"],
            "isActive": true,
            "amenityFeatureIds": [2, 5]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = PropertySession::open(client, hotel(7)).await;
    let result = session
        .execute(Command::SetAmenities {
            amenity_ids: vec![2, 5],
        })
        .await
        .unwrap();

    assert!(matches!(result, CommandResult::Done));
    assert_eq!(session.overview().unwrap().amenity_ids, vec![2, 5]);
    assert_eq!(session.current_state(), SessionState::Ready);
}

#[tokio::test]
async fn invalid_command_never_reaches_backend() {
    let (server, client) = setup().await;
    mount_primary(&server).await;

    let session = PropertySession::open(client, hotel(7)).await;

    // No POST mock is mounted; a network call would fail loudly.
    let err = session
        .execute(Command::CreateRoom(RoomRequest {
            room_number: "301".into(),
            room_type: RoomType::Suite,
            base_price: -10.0,
            max_occupancy: 2,
            status: RoomStatus::Available,
            active: true,
            bookable: true,
            amenity_ids: Vec::new(),
        }))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::ValidationFailed { .. }));
}

#[tokio::test]
async fn rejected_mutation_surfaces_error_and_notice() {
    let (server, client) = setup().await;
    mount_primary(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/properties/7/rooms"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Room number already exists",
            "code": "VALIDATION_ERROR"
        })))
        .mount(&server)
        .await;

    let session = PropertySession::open(client, hotel(7)).await;
    let mut notices = session.notices();

    let err = session
        .execute(Command::CreateRoom(RoomRequest {
            room_number: "101".into(),
            room_type: RoomType::Deluxe,
            base_price: 4200.0,
            max_occupancy: 2,
            status: RoomStatus::Available,
            active: true,
            bookable: true,
            amenity_ids: Vec::new(),
        }))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Rejected { .. }));
    assert_eq!(session.current_state(), SessionState::Ready);

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.slice, SliceKind::Rooms);
}

#[tokio::test]
async fn successful_room_create_refreshes_primary() {
    let (server, client) = setup().await;
    mount_rooms(&server, json!([room_json(1, "101")])).await;
    mount_gallery(&server, json!([])).await;
    mount_policies(&server).await;

    let session = PropertySession::open(Arc::clone(&client), hotel(7)).await;
    assert_eq!(session.rooms().len(), 1);

    server.reset().await;
    Mock::given(method("POST"))
        .and(path("/api/properties/7/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(room_json(2, "102")))
        .expect(1)
        .mount(&server)
        .await;
    mount_rooms(&server, json!([room_json(1, "101"), room_json(2, "102")])).await;
    mount_gallery(&server, json!([])).await;
    mount_policies(&server).await;

    let result = session
        .execute(Command::CreateRoom(RoomRequest {
            room_number: "102".into(),
            room_type: RoomType::Deluxe,
            base_price: 4200.0,
            max_occupancy: 2,
            status: RoomStatus::Available,
            active: true,
            bookable: true,
            amenity_ids: Vec::new(),
        }))
        .await
        .unwrap();

    let CommandResult::Room(room) = result else {
        panic!("expected room result");
    };
    assert_eq!(room.room_number, "102");
    assert_eq!(session.rooms().len(), 2);
}

// ── Subscriptions ────────────────────────────────────────────────────

#[tokio::test]
async fn room_subscribers_see_refresh_snapshots() {
    let (server, client) = setup().await;
    mount_primary(&server).await;

    let session = PropertySession::open(client, hotel(7)).await;

    let mut rooms = session.subscribe_rooms();
    assert_eq!(rooms.current().len(), 2);

    let mut tabs = session.tab_changes();
    session.switch_tab(TabId::Rooms).unwrap();
    tabs.changed().await.unwrap();
    assert_eq!(*tabs.borrow_and_update(), TabId::Rooms);

    server.reset().await;
    mount_rooms(&server, json!([room_json(3, "301")])).await;
    mount_gallery(&server, json!([])).await;
    mount_policies(&server).await;

    session.request_refresh().await;

    let snap = rooms.changed().await.unwrap();
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].room_number, "301");
}

// ── Lifecycle ────────────────────────────────────────────────────────

#[tokio::test]
async fn closed_session_rejects_work() {
    let (server, client) = setup().await;
    mount_primary(&server).await;

    let session = PropertySession::open(client, hotel(7)).await;
    session.close();

    assert!(session.is_closed());
    assert_eq!(session.current_state(), SessionState::Idle);

    let err = session
        .execute(Command::EnableProperty)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::SessionClosed));

    let err = session.ensure_loaded(TabId::Events).await.unwrap_err();
    assert!(matches!(err, CoreError::SessionClosed));
}
