//! Integration tests for bulk import and export.

use aura_store::RepositoryError;

use aura_integration_tests::admin_service_in;

fn import_payload() -> serde_json::Value {
    serde_json::json!({
        "products": [
            {
                "id": "prod-x-001",
                "name": "Imported Poster",
                "description": "From a backup file.",
                "price": "18",
                "category": "Imported Posters",
                "subcategory": "Movie Posters",
                "rating": 4.2,
                "reviews": 31,
                "imageUrl": "https://example.com/poster.jpg",
                "subImageUrls": []
            }
        ],
        "categories": [
            {
                "id": "cat-x-posters",
                "name": "Imported Posters",
                "subcategories": [
                    {"id": "sub-x-movie", "name": "Movie Posters"}
                ]
            }
        ]
    })
}

#[tokio::test]
async fn import_round_trips_through_get_store_data() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut admin = admin_service_in(dir.path()).await;

    let payload = import_payload();
    admin.import_store_data(&payload).await.expect("import");

    // As an admin session, no sync overwrite happens on read; the data
    // comes back exactly as imported.
    let data = admin.get_store_data().await.expect("read");
    let round = serde_json::json!({
        "products": data.products,
        "categories": data.categories,
    });
    assert_eq!(round, payload);
}

#[tokio::test]
async fn import_replaces_wholesale_without_merging() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut admin = admin_service_in(dir.path()).await;

    // Materialize the seed catalog first.
    let before = admin.get_store_data().await.expect("read");
    assert!(before.products.len() > 1);

    admin
        .import_store_data(&import_payload())
        .await
        .expect("import");

    let after = admin.get_store_data().await.expect("re-read");
    assert_eq!(after.products.len(), 1);
    assert_eq!(after.categories.len(), 1);
}

#[tokio::test]
async fn import_does_not_validate_cross_references() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut admin = admin_service_in(dir.path()).await;

    // A product referencing a category that is not in the payload is
    // accepted: import is a trusted overwrite.
    let dangling = serde_json::json!({
        "products": [
            {
                "id": "prod-dangling",
                "name": "Orphan",
                "description": "",
                "price": "5",
                "category": "No Such Category",
                "rating": 4.0,
                "reviews": 0,
                "imageUrl": "",
                "subImageUrls": []
            }
        ],
        "categories": []
    });
    admin.import_store_data(&dangling).await.expect("import");
}

#[tokio::test]
async fn import_rejects_payloads_missing_either_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut admin = admin_service_in(dir.path()).await;

    for payload in [
        serde_json::json!(null),
        serde_json::json!({"products": []}),
        serde_json::json!({"categories": []}),
        serde_json::json!({"products": "nope", "categories": []}),
    ] {
        let result = admin.import_store_data(&payload).await;
        assert!(
            matches!(result, Err(RepositoryError::InvalidShape(_))),
            "accepted {payload}"
        );
    }
}

#[tokio::test]
async fn export_import_round_trip_is_lossless() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut admin = admin_service_in(dir.path()).await;

    admin.get_store_data().await.expect("materialize seed");
    let exported = admin.export_store_data().await.expect("export");

    admin.import_store_data(&exported).await.expect("re-import");
    let exported_again = admin.export_store_data().await.expect("export again");
    assert_eq!(exported, exported_again);
}
