// Integration tests for `AdminClient` using wiremock.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hostly_api::types::{
    AttachPoliciesBody, GalleryUploadFile, PropertyCategoryWrite, PropertyTypeWrite, RoomWrite,
};
use hostly_api::{AdminClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, AdminClient) {
    let server = MockServer::start().await;
    let client = AdminClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_properties_double_envelope() {
    let (server, client) = setup().await;

    // The property list arrives double-wrapped, with rows in both the
    // nested and flat shapes, and ids as numbers or numeric strings.
    let body = json!({
        "data": {
            "data": [
                {
                    "propertyResponseDTO": {
                        "id": 1,
                        "propertyName": "Sea Breeze Hotel",
                        "propertyTypes": ["Hotel"],
                        "locationName": "Goa",
                        "isActive": true,
                        "listings": [{"price": 4200.0, "capacity": 2, "rating": 4.5}]
                    }
                },
                {
                    "id": "2",
                    "propertyName": "Dockside Cafe",
                    "propertyTypes": ["Cafe"],
                    "isActive": false
                },
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let properties = client.list_properties().await.unwrap();

    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].property_name, "Sea Breeze Hotel");
    assert!(properties[0].id.matches(1));
    assert_eq!(properties[0].listings[0].price, Some(4200.0));
    assert!(properties[1].id.matches(2));
    assert!(!properties[1].is_active);
}

#[tokio::test]
async fn test_get_property_flat() {
    let (server, client) = setup().await;

    let body = json!({
        "id": 7,
        "propertyName": "Harbor View",
        "propertyTypes": ["Hotel", "Restaurant"],
        "address": "12 Marine Drive",
        "isActive": true,
        "amenityFeatureIds": [3, 9]
    });

    Mock::given(method("GET"))
        .and(path("/api/properties/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let property = client.get_property(7).await.unwrap();

    assert_eq!(property.property_name, "Harbor View");
    assert_eq!(property.property_types, vec!["Hotel", "Restaurant"]);
    assert_eq!(property.amenity_feature_ids, vec![3, 9]);
}

#[tokio::test]
async fn test_property_type_and_category_crud() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/property-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "name": "Hotel"}, {"id": 2, "name": "Cafe"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/property-categories"))
        .and(body_json(json!({"name": "Boutique"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 5, "name": "Boutique"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/property-types/2"))
        .and(body_json(json!({"name": "Coffee House"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 2, "name": "Coffee House"})),
        )
        .mount(&server)
        .await;

    let types = client.list_property_types().await.unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[0].name, "Hotel");

    let category = client
        .create_property_category(&PropertyCategoryWrite {
            name: "Boutique".into(),
        })
        .await
        .unwrap();
    assert_eq!(category.id, 5);

    let renamed = client
        .update_property_type(
            2,
            &PropertyTypeWrite {
                name: "Coffee House".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Coffee House");
}

#[tokio::test]
async fn test_list_rooms_with_property_filter() {
    let (server, client) = setup().await;

    let body = json!({
        "data": [
            {
                "id": 11,
                "propertyId": "7",
                "roomNumber": "101",
                "roomType": "DELUXE",
                "basePrice": 5500.0,
                "maxOccupancy": 3,
                "status": "AVAILABLE",
                "active": true,
                "bookable": true
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/rooms"))
        .and(query_param("propertyId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let rooms = client.list_rooms(7).await.unwrap();

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].room_number, "101");
    assert_eq!(rooms[0].room_type, "DELUXE");
    assert!(rooms[0].property_id.as_ref().unwrap().matches(7));
}

#[tokio::test]
async fn test_create_room() {
    let (server, client) = setup().await;

    let req = RoomWrite {
        room_number: "204".into(),
        room_type: "SUITE".into(),
        base_price: 9000.0,
        max_occupancy: 4,
        status: "AVAILABLE".into(),
        active: true,
        bookable: true,
        amenity_feature_ids: vec![1, 2],
    };

    let response_body = json!({
        "id": 42,
        "propertyId": 7,
        "roomNumber": "204",
        "roomType": "SUITE",
        "basePrice": 9000.0,
        "maxOccupancy": 4,
        "status": "AVAILABLE",
        "active": true,
        "bookable": true,
        "amenityFeatureIds": [1, 2]
    });

    Mock::given(method("POST"))
        .and(path("/api/properties/7/rooms"))
        .and(body_json(&req))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .mount(&server)
        .await;

    let room = client.create_room(7, &req).await.unwrap();

    assert!(room.id.matches(42));
    assert_eq!(room.room_number, "204");
    assert_eq!(room.amenity_feature_ids, vec![1, 2]);
}

#[tokio::test]
async fn test_set_property_amenities_sends_full_id_array() {
    let (server, client) = setup().await;

    // Full replace: the body must be exactly the selected id set.
    Mock::given(method("POST"))
        .and(path("/api/properties/7/amenities"))
        .and(body_json(json!([2, 5, 8])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.set_property_amenities(7, &[2, 5, 8]).await.unwrap();
}

#[tokio::test]
async fn test_list_galleries_paged_with_filter() {
    let (server, client) = setup().await;

    let body = json!({
        "data": [
            {
                "id": 31,
                "propertyId": 7,
                "category": "ROOM",
                "media": {"url": "https://cdn/a.jpg", "fileName": "a.jpg", "type": "image/jpeg"}
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/galleries"))
        .and(query_param("page", "0"))
        .and(query_param("size", "50"))
        .and(query_param("propertyId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let items = client.list_galleries(0, 50, Some(7)).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, "ROOM");
    assert_eq!(items[0].media.url, "https://cdn/a.jpg");
}

#[tokio::test]
async fn test_upload_gallery_media_multipart() {
    let (server, client) = setup().await;

    let body = json!({
        "data": [
            {
                "id": 90,
                "propertyId": 7,
                "category": "FOOD",
                "media": {"url": "https://cdn/dish.png", "fileName": "dish.png", "type": "image/png"}
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/api/galleries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let files = vec![GalleryUploadFile {
        file_name: "dish.png".into(),
        content_type: "image/png".into(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }];

    let items = client.upload_gallery_media(7, "FOOD", files).await.unwrap();

    assert_eq!(items.len(), 1);
    assert!(items[0].id.matches(90));
}

#[tokio::test]
async fn test_attach_policies() {
    let (server, client) = setup().await;

    let req = AttachPoliciesBody {
        property_id: 7,
        policy_option_ids: vec![1, 4],
        check_in_time: "02:00 PM".into(),
        check_out_time: "11:00 AM".into(),
        cancellation_policy: Some("Free until 48h before check-in".into()),
    };

    Mock::given(method("POST"))
        .and(path("/api/policies/attach"))
        .and(body_json(&req))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.attach_policies(&req).await.unwrap();
}

#[tokio::test]
async fn test_list_events_with_location_filter() {
    let (server, client) = setup().await;

    let body = json!([
        {"id": 5, "title": "Wine Tasting", "locationId": "7", "date": "2026-09-12"},
        {"id": 6, "title": "Jazz Night", "locationId": 8, "date": "2026-09-13"}
    ]);

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(query_param("locationId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    // The filter is forwarded server-side; rows for other locations may
    // still come back from older backends and are kept here (the caller
    // post-filters).
    let events = client.list_events(Some(7)).await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Wine Tasting");
    assert!(events[0].location_id.as_ref().unwrap().matches(7));
}

#[tokio::test]
async fn test_delete_room() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/rooms/11"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_room(11).await.unwrap();
}

#[tokio::test]
async fn test_paginate_all_stops_on_short_page() {
    let (server, client) = setup().await;

    let full_page: Vec<_> = (0..3)
        .map(|i| {
            json!({
                "id": 30 + i,
                "propertyId": 7,
                "category": "PROPERTY",
                "media": {"url": format!("https://cdn/{i}.jpg")}
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/galleries"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": full_page})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/galleries"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [
            {
                "id": 40,
                "propertyId": 7,
                "category": "PROPERTY",
                "media": {"url": "https://cdn/last.jpg"}
            }
        ]})))
        .mount(&server)
        .await;

    let items = client
        .paginate_all(3, |page, size| client.list_galleries(page, size, None))
        .await
        .unwrap();

    // Page 0 is full (3 items), page 1 is short (1 item) and ends the walk.
    assert_eq!(items.len(), 4);
    assert!(items[3].id.matches(40));
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_401_unauthorized() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_properties().await;

    assert!(
        matches!(result, Err(Error::InvalidApiKey)),
        "expected InvalidApiKey, got: {result:?}"
    );
}

#[tokio::test]
async fn test_error_404_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/properties/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not found" })))
        .mount(&server)
        .await;

    let result = client.get_property(999).await;

    match result {
        Err(Error::Api {
            status,
            ref message,
            ..
        }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not found");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
    assert!(client.get_property(999).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_error_422_validation() {
    let (server, client) = setup().await;

    let req = RoomWrite {
        room_number: String::new(),
        room_type: "SINGLE".into(),
        base_price: -1.0,
        max_occupancy: 1,
        status: "AVAILABLE".into(),
        active: true,
        bookable: true,
        amenity_feature_ids: vec![],
    };

    Mock::given(method("POST"))
        .and(path("/api/properties/7/rooms"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Base price must be non-negative",
            "code": "VALIDATION_ERROR"
        })))
        .mount(&server)
        .await;

    let result = client.create_room(7, &req).await;

    match result {
        Err(Error::Api {
            status,
            ref message,
            ref code,
        }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "Base price must be non-negative");
            assert_eq!(code.as_deref(), Some("VALIDATION_ERROR"));
        }
        other => panic!("expected Api 422 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_500_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.list_properties().await;

    match result {
        Err(Error::Api {
            status, ref code, ..
        }) => {
            assert_eq!(status, 500);
            assert!(code.is_none());
        }
        other => panic!("expected Api 500 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/properties/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let result = client.get_property(7).await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("proxy error"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
