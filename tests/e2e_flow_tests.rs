mod harness;
mod support;

use axum::http::StatusCode;
use dealerdesk::adapter::inbound::http::build_router;
use dealerdesk::adapter::inbound::http::dto::OpportunityView;
use dealerdesk::application::OpportunityService;
use dealerdesk::domain::{DealerIdentity, OpportunityId, Stage};
use dealerdesk::testkit::domain::{create_payload, dealer_query, draft};
use dealerdesk::testkit::store::seed;
use serde_json::json;

use harness::temp_db::TempDb;
use support::{get, post_json, MAX_PAYLOAD};

#[tokio::test]
async fn create_then_fetch_over_sqlite() {
    let db = TempDb::create("create-fetch");
    let seeded = seed(db.store()).await.expect("seed sqlite store");
    let router = build_router(seeded.service.clone(), MAX_PAYLOAD);

    let body = create_payload("Acme", &seeded.dealer, 65);
    let (status, created) = post_json(&router, "/new_customer", &body).await;
    assert_eq!(status, StatusCode::OK, "{created}");
    let id = created["opportunity_id"].as_str().unwrap().to_string();

    let uri = format!(
        "/single-customer?{}&opportunity_id={id}",
        dealer_query(&seeded.dealer)
    );
    let (status, first) = get(&router, &uri).await;
    assert_eq!(status, StatusCode::OK, "{first}");
    assert_eq!(first["stage"], json!("Value Proposition"));
    assert_eq!(first["amount"], json!(12500.5));

    let (_, second) = get(&router, &uri).await;
    let first: OpportunityView = serde_json::from_value(first).unwrap();
    let second: OpportunityView = serde_json::from_value(second).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.opportunity_id.as_str(), id);
}

#[tokio::test]
async fn list_over_sqlite_uses_dealer_code() {
    let db = TempDb::create("list");
    let seeded = seed(db.store()).await.unwrap();
    let bob = seeded.service.provision_dealer("C1", "Bob").await.unwrap();
    let router = build_router(seeded.service.clone(), MAX_PAYLOAD);

    for dealer in [&seeded.dealer, &bob] {
        let (status, _) =
            post_json(&router, "/new_customer", &create_payload("Acme", dealer, 100)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, listed) = get(
        &router,
        &format!("/get_customers?{}", dealer_query(&seeded.dealer)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|o| o["stage"] == json!("Closed Won")));
}

#[tokio::test]
async fn service_persists_across_pool_connections() {
    let db = TempDb::create("service");
    let seeded = seed(db.store()).await.unwrap();
    let identity = seeded.dealer.identity();

    let created = seeded
        .service
        .create("Acme", &identity, draft(83))
        .await
        .unwrap();

    let reopened = OpportunityService::new(db.store());
    let fetched = reopened.fetch(&identity, &created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.stage, Stage::PerceptionAnalysis);

    let stranger = DealerIdentity::new(seeded.dealer.id.clone(), "C1", "Mallory");
    assert!(reopened.fetch(&stranger, &created.id).await.is_err());
    assert!(reopened
        .fetch(&identity, &OpportunityId::from("missing"))
        .await
        .is_err());
}

#[tokio::test]
async fn health_over_sqlite() {
    let db = TempDb::create("health");
    let service = OpportunityService::new(db.store());
    let router = build_router(service, MAX_PAYLOAD);

    let (status, body) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
    assert!(db.path().exists());
}
