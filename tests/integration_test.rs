//! Integration tests for shelfr
//!
//! These tests verify end-to-end functionality: fetching a catalog from a
//! local HTTP endpoint, seeding the store, and running complete
//! search/paginate/mutate workflows against it.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use shelfr::api::{ApiError, CatalogClient};
use shelfr::catalog::{CatalogStore, CommitOutcome, EditorSession, Product, ProductDraft, Rating};

/// Helper function to build a product with explicit rating
fn make_product(id: u64, title: &str, rate: f64, count: u64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: 19.99,
        description: format!("{title} description"),
        category: "clothing".to_string(),
        image: format!("https://example.com/{id}.jpg"),
        rating: Rating { rate, count },
    }
}

/// Helper function to build a seeded store
fn seeded_store(count: usize, per_page: usize) -> CatalogStore {
    let products = (1..=count as u64)
        .map(|id| make_product(id, &format!("Item {id}"), 4.0, 10))
        .collect();
    let mut store = CatalogStore::new(per_page);
    store.seed(products);
    store
}

/// Serve one canned HTTP response on an ephemeral port and return the URL
fn serve_once(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();

        // Drain the request headers before answering
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            match stream.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    request.extend_from_slice(&buf[..n]);
                    if request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                Err(_) => break,
            }
        }

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
    });

    format!("http://127.0.0.1:{port}/products")
}

#[test]
fn test_fetch_and_seed_from_http_endpoint() {
    let products = vec![
        make_product(1, "Shirt", 3.9, 120),
        make_product(2, "Backpack", 4.1, 259),
        make_product(3, "Jacket", 4.7, 500),
    ];
    let body = serde_json::to_string(&products).unwrap();
    let url = serve_once("HTTP/1.1 200 OK", body);

    let client = CatalogClient::new(url, Duration::from_secs(2)).unwrap();
    let fetched = client.fetch_products().unwrap();
    assert_eq!(fetched, products);

    let mut store = CatalogStore::new(5);
    store.seed(fetched);
    assert_eq!(store.products().len(), 3);
    assert_eq!(store.filtered().len(), 3);
    assert_eq!(store.get(2).unwrap().title, "Backpack");
}

#[test]
fn test_fetch_error_status_is_reported() {
    let url = serve_once("HTTP/1.1 500 Internal Server Error", "{}".to_string());

    let client = CatalogClient::new(url, Duration::from_secs(2)).unwrap();
    match client.fetch_products() {
        Err(ApiError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("Expected status error, got {other:?}"),
    }
}

#[test]
fn test_fetch_malformed_body_is_request_error() {
    let url = serve_once("HTTP/1.1 200 OK", "not json at all".to_string());

    let client = CatalogClient::new(url, Duration::from_secs(2)).unwrap();
    match client.fetch_products() {
        Err(ApiError::Request(_)) => {}
        other => panic!("Expected request error, got {other:?}"),
    }
}

#[test]
fn test_search_then_paginate_workflow() {
    let mut store = CatalogStore::new(5);
    let mut products: Vec<Product> = (1..=20)
        .map(|id| make_product(id, &format!("Shirt {id}"), 4.0, 1))
        .collect();
    products.extend((21..=25).map(|id| make_product(id, &format!("Mug {id}"), 4.0, 1)));
    store.seed(products);

    store.search("shirt");
    assert_eq!(store.filtered().len(), 20);
    assert_eq!(store.page_count(), 4);
    assert_eq!(store.current_page(), 1);

    store.set_page(4);
    let last_page = store.current_page_items();
    assert_eq!(last_page.len(), 5);
    assert_eq!(last_page[0].id, 16);

    // The page cursor follows the projection, not the full catalog
    store.search("mug");
    assert_eq!(store.current_page(), 1);
    assert_eq!(store.page_count(), 1);
    assert_eq!(store.current_page_items().len(), 5);
}

#[test]
fn test_full_mutation_workflow_under_search() {
    let mut store = seeded_store(12, 5);

    store.search("item 1");
    // "Item 1", "Item 10", "Item 11", "Item 12"
    assert_eq!(store.filtered().len(), 4);

    // Add a matching product; it appears in the projection immediately
    let added_id = store.add(&ProductDraft {
        title: Some("Item 13".to_string()),
        price: Some(5.0),
        ..Default::default()
    });
    assert_eq!(added_id, 13);
    assert_eq!(store.filtered().len(), 5);

    // Edit it away from the query; the projection shrinks again
    let changed = store.update(
        added_id,
        &ProductDraft {
            title: Some("Lamp".to_string()),
            ..Default::default()
        },
    );
    assert!(changed);
    assert_eq!(store.filtered().len(), 4);
    assert_eq!(store.get(added_id).unwrap().title, "Lamp");

    // Delete it and verify the catalog shrinks while the filter holds
    assert!(store.delete(added_id));
    assert_eq!(store.products().len(), 12);
    assert_eq!(store.filtered().len(), 4);
}

#[test]
fn test_editor_session_roundtrip_against_store() {
    let mut store = seeded_store(3, 5);
    let mut session = EditorSession::new();

    // Create
    session.begin_create();
    session.draft_mut().unwrap().title = Some("Poster".to_string());
    session.draft_mut().unwrap().rating_rate = Some(2.5);
    let outcome = session.commit(&mut store).unwrap();
    assert_eq!(outcome, CommitOutcome::Created(4));
    assert_eq!(store.get(4).unwrap().rating.rate, 2.5);
    assert_eq!(store.get(4).unwrap().rating.count, 0);

    // Edit, dropping the rating fields: stored values survive
    let target = store.get(4).unwrap().clone();
    session.begin_edit(&target);
    {
        let draft = session.draft_mut().unwrap();
        draft.title = Some("Poster XL".to_string());
        draft.rating_rate = None;
        draft.rating_count = None;
    }
    let outcome = session.commit(&mut store).unwrap();
    assert_eq!(outcome, CommitOutcome::Updated(4));

    let updated = store.get(4).unwrap();
    assert_eq!(updated.title, "Poster XL");
    assert_eq!(updated.rating.rate, 2.5);

    // Cancelled sessions leave no trace
    session.begin_edit(updated);
    session.cancel();
    assert!(!session.is_active());
    assert_eq!(store.get(4).unwrap().title, "Poster XL");
}

#[test]
fn test_add_and_update_defaulting_policies_differ() {
    let mut store = CatalogStore::new(5);
    store.seed(vec![make_product(1, "Shirt", 4.0, 2)]);

    // Add with absent rating fields zeroes them
    let id = store.add(&ProductDraft {
        title: Some("Fresh".to_string()),
        ..Default::default()
    });
    assert_eq!(store.get(id).unwrap().rating, Rating { rate: 0.0, count: 0 });

    // Update with absent rating fields keeps the stored values
    store.update(
        1,
        &ProductDraft {
            title: Some("New".to_string()),
            ..Default::default()
        },
    );
    let updated = store.get(1).unwrap();
    assert_eq!(updated.title, "New");
    assert_eq!(updated.price, 0.0);
    assert_eq!(updated.description, "");
    assert_eq!(updated.category, "");
    assert_eq!(updated.image, "");
    assert_eq!(updated.rating, Rating { rate: 4.0, count: 2 });
}

#[test]
fn test_deleted_ids_are_never_reassigned() {
    let mut store = seeded_store(3, 5);

    store.delete(3);
    store.delete(2);
    let id_a = store.add(&ProductDraft::default());
    let id_b = store.add(&ProductDraft::default());

    assert_eq!(id_a, 4);
    assert_eq!(id_b, 5);

    let ids: Vec<u64> = store.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 4, 5]);
}

#[test]
fn test_fakestore_shaped_payload_parses() {
    // Shape check against the upstream API's documented record layout
    let body = r#"[
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "description": "Slim-fitting style, contrast raglan long sleeve.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        }
    ]"#;

    let products: Vec<Product> = serde_json::from_str(body).unwrap();
    assert_eq!(products.len(), 2);

    let mut store = CatalogStore::new(5);
    store.seed(products);

    store.search("backpack");
    assert_eq!(store.filtered().len(), 1);
    assert_eq!(store.filtered()[0].id, 1);
}
