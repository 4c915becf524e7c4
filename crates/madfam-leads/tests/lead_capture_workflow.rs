//! End-to-end scenarios for lead intake through the public service facade and HTTP router.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use madfam_leads::leads::{
        LeadCaptureService, LeadId, LeadNotification, LeadNotifier, LeadRecord, LeadRepository,
        LeadWebhook, NotificationError, RepositoryError, WebhookDispatcher, WebhookError,
    };

    #[derive(Default, Clone)]
    pub(super) struct Store {
        records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
    }

    impl LeadRepository for Store {
        fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("store mutex poisoned");
            if guard.contains_key(&record.lead_id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(record.lead_id.clone(), record.clone());
            Ok(record)
        }

        fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("store mutex poisoned")
                .get(id)
                .cloned())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct Outbox {
        pub(super) mail: Arc<Mutex<Vec<LeadNotification>>>,
        pub(super) hooks: Arc<Mutex<Vec<LeadWebhook>>>,
    }

    impl LeadNotifier for Outbox {
        fn enqueue(&self, notification: LeadNotification) -> Result<(), NotificationError> {
            self.mail
                .lock()
                .expect("outbox mutex poisoned")
                .push(notification);
            Ok(())
        }
    }

    impl WebhookDispatcher for Outbox {
        fn dispatch(&self, webhook: LeadWebhook) -> Result<(), WebhookError> {
            self.hooks
                .lock()
                .expect("outbox mutex poisoned")
                .push(webhook);
            Ok(())
        }
    }

    pub(super) fn service() -> (LeadCaptureService<Store, Outbox, Outbox>, Arc<Outbox>) {
        let outbox = Arc::new(Outbox::default());
        let service = LeadCaptureService::new(
            Arc::new(Store::default()),
            outbox.clone(),
            outbox.clone(),
        );
        (service, outbox)
    }
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use madfam_leads::leads::{lead_router, FormKind, LeadSubmission, Locale, ScoreTier};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[test]
fn spanish_contact_lead_is_captured_with_base_score() {
    let (service, outbox) = common::service();
    let submission: LeadSubmission = serde_json::from_value(json!({
        "email": "maria@hotmail.com",
        "role": "Coordinadora",
        "useCase": "Facturación electrónica"
    }))
    .expect("payload parses");

    let receipt = service
        .submit(FormKind::Contact, submission)
        .expect("lead captured");

    assert_eq!(receipt.score, 25);
    assert_eq!(receipt.tier, ScoreTier::Cold);
    assert_eq!(receipt.locale, Locale::Es);
    assert!(receipt
        .tags
        .contains(&"usecase:facturación-electrónica".to_string()));
    assert_eq!(outbox.mail.lock().expect("outbox").len(), 1);
    assert_eq!(outbox.hooks.lock().expect("outbox").len(), 1);
}

#[tokio::test]
async fn roi_lead_round_trip_through_router() {
    let (service, outbox) = common::service();
    let router = lead_router(Arc::new(service));

    let request = Request::post("/api/v1/leads/roi")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "email": "finanzas@constructora-sol.com.mx",
                "company": "Constructora Sol",
                "role": "CFO",
                "useCase": "Project cost control",
                "preferredLanguage": "pt",
                "roi": {
                    "inputs": {
                        "currentCosts": 50000,
                        "employeeHours": 160,
                        "projectsPerMonth": 5,
                        "averageProjectValue": 20000,
                        "serviceTier": "enterprise"
                    }
                }
            })
            .to_string(),
        ))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_json(response).await;
    assert_eq!(payload["success"], json!(true));
    // base 25 + domain 15 + company 10 + ROI 270% 15 + savings 10
    assert_eq!(payload["score"], json!(75));
    assert_eq!(
        payload["message"],
        json!("Pronto! Enviamos a análise de ROI para o seu e-mail.")
    );

    let hooks = outbox.hooks.lock().expect("outbox");
    assert_eq!(hooks.len(), 1);
    assert!(hooks[0].tags.contains(&"tier:enterprise".to_string()));
    assert_eq!(hooks[0].locale, Locale::Pt);
}
