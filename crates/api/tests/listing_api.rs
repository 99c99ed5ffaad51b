//! Integration tests for the `/listings` resource over the in-memory
//! backend, exercised through the full middleware stack.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, empty_app, get, seeded_app, send, send_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create -> Get round trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_get_round_trip_with_defaults() {
    let app = empty_app();

    let response = send_json(
        &app,
        Method::POST,
        "/listings",
        json!({"title": "T", "price": 100}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert!(created["id"].is_string(), "id must be a JSON string");
    assert_eq!(created["title"], "T");
    assert_eq!(created["price"], 100.0);
    assert_eq!(created["description"], "");
    assert_eq!(created["location"], "");
    assert_eq!(created["transactionType"], "rental");
    assert_eq!(created["propertyType"], "apartment");
    assert_eq!(created["landCategory"], "");
    assert_eq!(created["ownerName"], "Owner A");
    assert_eq!(created["photos"], json!([]));
    assert_eq!(created["booked"], false);

    let id = created["id"].as_str().unwrap().to_string();
    let response = get(&app, &format!("/listings/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["id"], id.as_str());
    assert_eq!(fetched["title"], "T");
    assert_eq!(fetched["price"], 100.0);
}

#[tokio::test]
async fn created_listing_keeps_supplied_fields() {
    let app = empty_app();

    let response = send_json(
        &app,
        Method::POST,
        "/listings",
        json!({
            "title": "Open Plot",
            "price": 800,
            "location": "Sector 9",
            "transactionType": "sale",
            "propertyType": "land",
            "landCategory": "farming",
            "booked": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["location"], "Sector 9");
    assert_eq!(created["transactionType"], "sale");
    assert_eq!(created["propertyType"], "land");
    assert_eq!(created["landCategory"], "farming");
    assert_eq!(created["booked"], true);
}

// ---------------------------------------------------------------------------
// Validation gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_without_title_or_price_returns_400_without_mutation() {
    let app = empty_app();

    for body in [
        json!({"price": 5}),
        json!({"title": "X"}),
        json!({"title": "", "price": 5}),
        json!({}),
    ] {
        let response = send_json(&app, Method::POST, "/listings", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = body_json(response).await;
        assert_eq!(error["error"], "title and price are required");
    }

    // The collection stayed untouched throughout.
    let response = get(&app, "/listings").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_allows_zero_price() {
    let app = empty_app();
    let response = send_json(
        &app,
        Method::POST,
        "/listings",
        json!({"title": "Free", "price": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn malformed_json_body_returns_400() {
    let app = empty_app();
    let response = send_json(&app, Method::POST, "/listings", json!("not an object")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Partial update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn partial_update_preserves_untouched_fields() {
    let app = empty_app();

    let response = send_json(
        &app,
        Method::POST,
        "/listings",
        json!({
            "title": "Keep me",
            "price": 100,
            "location": "Downtown",
            "photos": ["https://example.com/a.jpg"]
        }),
    )
    .await;
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = send_json(
        &app,
        Method::PUT,
        &format!("/listings/{id}"),
        json!({"price": 200}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["price"], 200.0);
    assert_eq!(updated["title"], "Keep me");
    assert_eq!(updated["location"], "Downtown");
    assert_eq!(updated["photos"], json!(["https://example.com/a.jpg"]));
}

#[tokio::test]
async fn update_unknown_id_returns_404() {
    let app = empty_app();
    let response = send_json(
        &app,
        Method::PUT,
        "/listings/999",
        json!({"price": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_can_flip_booked() {
    let app = empty_app();
    let created = body_json(
        send_json(
            &app,
            Method::POST,
            "/listings",
            json!({"title": "B", "price": 10}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let updated = body_json(
        send_json(
            &app,
            Method::PUT,
            &format!("/listings/{id}"),
            json!({"booked": true}),
        )
        .await,
    )
    .await;
    assert_eq!(updated["booked"], true);
    assert_eq!(updated["title"], "B");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_returns_the_record_and_is_terminal() {
    let app = empty_app();
    let created = body_json(
        send_json(
            &app,
            Method::POST,
            "/listings",
            json!({"title": "gone", "price": 1}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = send(&app, Method::DELETE, &format!("/listings/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let removed = body_json(response).await;
    assert_eq!(removed["title"], "gone");

    let response = get(&app, &format!("/listings/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A second delete fails the same way, it does not crash.
    let response = send(&app, Method::DELETE, &format!("/listings/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Lookup edge cases
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_and_non_numeric_ids_return_404() {
    let app = empty_app();

    let response = get(&app, "/listings/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = body_json(response).await;
    assert!(error["error"].is_string());
    assert_eq!(error["code"], "NOT_FOUND");

    let response = get(&app, "/listings/not-a-number").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Photos
// ---------------------------------------------------------------------------

#[tokio::test]
async fn photos_pass_through_without_a_media_host() {
    let app = empty_app();

    // Hosted URLs and inline data both survive verbatim: with no host
    // configured, no upload is ever attempted.
    let photos = json!([
        "https://example.com/a.jpg",
        "data:image/png;base64,AAAA"
    ]);
    let created = body_json(
        send_json(
            &app,
            Method::POST,
            "/listings",
            json!({"title": "P", "price": 1, "photos": photos}),
        )
        .await,
    )
    .await;
    assert_eq!(created["photos"], photos);
}

#[tokio::test]
async fn non_array_photos_are_treated_as_empty() {
    let app = empty_app();
    let created = body_json(
        send_json(
            &app,
            Method::POST,
            "/listings",
            json!({"title": "P", "price": 1, "photos": "nope"}),
        )
        .await,
    )
    .await;
    assert_eq!(created["photos"], json!([]));
}

#[tokio::test]
async fn update_with_photos_replaces_them() {
    let app = empty_app();
    let created = body_json(
        send_json(
            &app,
            Method::POST,
            "/listings",
            json!({"title": "P", "price": 1, "photos": ["https://example.com/old.jpg"]}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let updated = body_json(
        send_json(
            &app,
            Method::PUT,
            &format!("/listings/{id}"),
            json!({"photos": ["https://example.com/new.jpg"]}),
        )
        .await,
    )
    .await;
    assert_eq!(updated["photos"], json!(["https://example.com/new.jpg"]));
}

// ---------------------------------------------------------------------------
// Seeded catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeded_catalog_lists_every_type_pair_with_string_ids() {
    let app = seeded_app();

    let response = get(&app, "/listings").await;
    assert_eq!(response.status(), StatusCode::OK);

    let listings = body_json(response).await;
    let listings = listings.as_array().unwrap();
    assert!(!listings.is_empty());
    assert!(listings.iter().all(|l| l["id"].is_string()));

    for property_type in ["apartment", "house", "villa", "studio", "land"] {
        for transaction_type in ["rental", "sale"] {
            assert!(
                listings.iter().any(|l| l["propertyType"] == property_type
                    && l["transactionType"] == transaction_type),
                "seed misses {property_type}/{transaction_type}"
            );
        }
    }
}
