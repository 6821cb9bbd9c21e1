//! Admin API router.
//!
//! Everything lives under `/api/admin`. Only `/login` is reachable without a
//! bearer token; every other route sits behind [`require_admin`].

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::handler::{appointments, auth, dashboard, records};
use crate::api::middleware::require_admin;
use crate::models::{AppState, Appointment, Doctor, Patient};

pub fn create_router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let protected = Router::new()
        .route("/verify", get(auth::verify))
        .route(
            "/appointments",
            get(records::list::<Appointment>).post(records::create::<Appointment>),
        )
        .route(
            "/appointments/{id}",
            get(records::get::<Appointment>).put(records::update::<Appointment>),
        )
        .route("/appointments/{id}/status", patch(appointments::set_status))
        .route(
            "/patients",
            get(records::list::<Patient>).post(records::create::<Patient>),
        )
        .route(
            "/patients/{id}",
            get(records::get::<Patient>).put(records::update::<Patient>),
        )
        .route(
            "/doctors",
            get(records::list::<Doctor>).post(records::create::<Doctor>),
        )
        .route(
            "/doctors/{id}",
            get(records::get::<Doctor>).put(records::update::<Doctor>),
        )
        .route("/dashboard/stats", get(dashboard::stats))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let public = Router::new().route("/login", post(auth::login));

    Router::new()
        .nest("/api/admin", public.merge(protected))
        .with_state(state)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::db::AdminStore;
    use crate::services::SessionIssuer;

    const ADMIN: &str = "admin@clinic.test";
    const PASSWORD: &str = "Admin@1234";

    fn test_state() -> Arc<AppState> {
        let issuer = SessionIssuer::new(
            ADMIN.into(),
            PASSWORD.into(),
            b"router-test-secret-0123",
            Duration::hours(24),
        );
        Arc::new(AppState::new(AdminStore::seeded(), issuer))
    }

    fn app(state: &Arc<AppState>) -> Router {
        create_router(Arc::clone(state), &[])
    }

    fn token(state: &AppState) -> String {
        state.issuer.login(ADMIN, PASSWORD).unwrap().access_token
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(t) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
        }
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(state: &Arc<AppState>, req: Request<Body>) -> (StatusCode, Value) {
        let response = app(state).oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    fn new_appointment() -> Value {
        json!({
            "patient_name": "Grace Hopper",
            "doctor": "Dr. Johnson",
            "date": "2024-03-01",
            "time": "11:00"
        })
    }

    #[tokio::test]
    async fn login_with_admin_credentials_returns_bearer_token() {
        let state = test_state();
        let (status, body) = send(
            &state,
            request(
                "POST",
                "/api/admin/login",
                None,
                Some(json!({"email": ADMIN, "password": PASSWORD})),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "bearer");
        let token = body["access_token"].as_str().unwrap();
        assert_eq!(state.issuer.verify(token).unwrap(), ADMIN);

        let expires_at: DateTime<Utc> = body["expires_at"].as_str().unwrap().parse().unwrap();
        let remaining = expires_at - Utc::now();
        assert!(remaining > Duration::hours(23) && remaining <= Duration::hours(24));
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_401() {
        let state = test_state();
        let (status, body) = send(
            &state,
            request(
                "POST",
                "/api/admin/login",
                None,
                Some(json!({"email": ADMIN, "password": "guess"})),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Invalid credentials");
    }

    #[tokio::test]
    async fn verify_reports_the_admin() {
        let state = test_state();
        let t = token(&state);
        let (status, body) = send(&state, request("GET", "/api/admin/verify", Some(&t), None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"valid": true, "user": ADMIN}));
    }

    #[tokio::test]
    async fn protected_routes_reject_missing_malformed_and_expired_tokens() {
        let state = test_state();
        let expired = state
            .issuer
            .login_at(ADMIN, PASSWORD, Utc.timestamp_opt(1_600_000_000, 0).unwrap())
            .unwrap()
            .access_token;

        let routes = [
            ("GET", "/api/admin/verify"),
            ("GET", "/api/admin/appointments"),
            ("GET", "/api/admin/patients"),
            ("GET", "/api/admin/doctors"),
            ("GET", "/api/admin/dashboard/stats"),
        ];
        for (method, uri) in routes {
            for t in [None, Some("garbage"), Some(expired.as_str())] {
                let (status, _) = send(&state, request(method, uri, t, None)).await;
                assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri} with {t:?}");
            }
        }
    }

    #[tokio::test]
    async fn rejected_writes_leave_collections_untouched() {
        let state = test_state();
        let expired = state
            .issuer
            .login_at(ADMIN, PASSWORD, Utc.timestamp_opt(1_600_000_000, 0).unwrap())
            .unwrap()
            .access_token;
        let before = state.store.appointments.list().await;

        let writes = [
            ("POST", "/api/admin/appointments", new_appointment()),
            ("PUT", "/api/admin/appointments/1", new_appointment()),
            ("PATCH", "/api/admin/appointments/1/status", json!({"status": "Cancelled"})),
        ];
        for (method, uri, body) in writes {
            for t in [None, Some("garbage"), Some(expired.as_str())] {
                let (status, _) = send(&state, request(method, uri, t, Some(body.clone()))).await;
                assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri} with {t:?}");
            }
        }

        let appointments = state.store.appointments.list().await;
        assert_eq!(appointments, before);
        assert_eq!(appointments[0].patient_name, "John Smith");
        assert_eq!(appointments[0].status, "Confirmed");
    }

    #[tokio::test]
    async fn unauthorized_response_carries_bearer_challenge() {
        let state = test_state();
        let response = app(&state)
            .oneshot(request("GET", "/api/admin/appointments", None, None))
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[tokio::test]
    async fn lists_return_seeded_rows_in_order() {
        let state = test_state();
        let t = token(&state);

        let (status, body) = send(&state, request("GET", "/api/admin/appointments", Some(&t), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "1");
        assert_eq!(body[1]["patient_name"], "Sarah Wilson");

        let (_, body) = send(&state, request("GET", "/api/admin/patients", Some(&t), None)).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["member_id"], "BC123456");

        let (_, body) = send(&state, request("GET", "/api/admin/doctors", Some(&t), None)).await;
        assert_eq!(body[1]["specialty"], "Internal Medicine");
        assert_eq!(body[0]["availability"][0], "09:00");
    }

    #[tokio::test]
    async fn create_appointment_assigns_next_id_and_defaults() {
        let state = test_state();
        let t = token(&state);
        let mut payload = new_appointment();
        payload["id"] = json!("1");

        let (status, body) = send(
            &state,
            request("POST", "/api/admin/appointments", Some(&t), Some(payload)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "3");
        assert_eq!(body["status"], "Confirmed");
        assert_eq!(body["patient_type"], "New");
        assert_eq!(body["phone"], Value::Null);
        assert_eq!(state.store.appointments.list().await.len(), 3);
    }

    #[tokio::test]
    async fn create_with_missing_field_is_rejected() {
        let state = test_state();
        let t = token(&state);
        let (status, _) = send(
            &state,
            request(
                "POST",
                "/api/admin/appointments",
                Some(&t),
                Some(json!({"patient_name": "Nobody"})),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(state.store.appointments.list().await.len(), 2);
    }

    #[tokio::test]
    async fn update_appointment_replaces_record_and_keeps_id() {
        let state = test_state();
        let t = token(&state);
        let mut payload = new_appointment();
        payload["status"] = json!("Pending");
        payload["id"] = json!("77");

        let (status, body) = send(
            &state,
            request("PUT", "/api/admin/appointments/1", Some(&t), Some(payload)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Appointment updated"}));

        let stored = state.store.appointments.get("1").await.unwrap();
        assert_eq!(stored.id.as_deref(), Some("1"));
        assert_eq!(stored.patient_name, "Grace Hopper");
        assert_eq!(stored.status, "Pending");
        assert_eq!(stored.phone, None);
    }

    #[tokio::test]
    async fn get_by_id_returns_one_record_per_collection() {
        let state = test_state();
        let t = token(&state);

        let (status, body) =
            send(&state, request("GET", "/api/admin/appointments/2", Some(&t), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "2");
        assert_eq!(body["patient_name"], "Sarah Wilson");

        let (status, body) = send(&state, request("GET", "/api/admin/patients/1", Some(&t), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["member_id"], "BC123456");

        let (status, body) = send(&state, request("GET", "/api/admin/doctors/1", Some(&t), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "1");
    }

    #[tokio::test]
    async fn get_by_id_is_404_for_unknown_or_non_canonical_ids() {
        let state = test_state();
        let t = token(&state);

        for uri in ["/api/admin/appointments/42", "/api/admin/appointments/01"] {
            let (status, body) = send(&state, request("GET", uri, Some(&t), None)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body["detail"], "Appointment not found");
        }

        let (status, _) = send(&state, request("GET", "/api/admin/appointments/1", None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn update_missing_appointment_is_404() {
        let state = test_state();
        let t = token(&state);
        let before = state.store.appointments.list().await;

        let (status, body) = send(
            &state,
            request("PUT", "/api/admin/appointments/42", Some(&t), Some(new_appointment())),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Appointment not found");
        assert_eq!(state.store.appointments.list().await, before);
    }

    #[tokio::test]
    async fn status_patch_changes_only_status() {
        let state = test_state();
        let t = token(&state);

        let (status, body) = send(
            &state,
            request(
                "PATCH",
                "/api/admin/appointments/2/status",
                Some(&t),
                Some(json!({"status": "Confirmed"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Confirmed");
        assert_eq!(body["patient_name"], "Sarah Wilson");

        let (status, _) = send(
            &state,
            request(
                "PATCH",
                "/api/admin/appointments/9/status",
                Some(&t),
                Some(json!({"status": "Confirmed"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn patients_and_doctors_support_create_and_update() {
        let state = test_state();
        let t = token(&state);

        let (status, body) = send(
            &state,
            request(
                "POST",
                "/api/admin/patients",
                Some(&t),
                Some(json!({
                    "name": "Grace Hopper",
                    "dob": "1906-12-09",
                    "phone": "(555) 000-0000",
                    "email": "grace@example.com",
                    "patient_type": "New"
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "3");
        assert_eq!(body["insurance_carrier"], Value::Null);

        let (status, body) = send(
            &state,
            request(
                "PUT",
                "/api/admin/doctors/2",
                Some(&t),
                Some(json!({"name": "Dr. Brown", "specialty": "Cardiology"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Doctor updated");

        let doctor = state.store.doctors.get("2").await.unwrap();
        assert_eq!(doctor.specialty, "Cardiology");
        assert!(doctor.availability.is_empty());

        let (status, body) = send(
            &state,
            request(
                "PUT",
                "/api/admin/patients/5",
                Some(&t),
                Some(json!({
                    "name": "X", "dob": "2000-01-01", "phone": "1",
                    "email": "x@example.com", "patient_type": "New"
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Patient not found");
    }

    #[tokio::test]
    async fn dashboard_stats_on_seed_data() {
        let state = test_state();
        let t = token(&state);
        let (status, body) = send(&state, request("GET", "/api/admin/dashboard/stats", Some(&t), None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "total_appointments": 2,
                "confirmed_appointments": 1,
                "pending_appointments": 1,
                "total_patients": 2,
                "new_patients": 1,
                "returning_patients": 1
            })
        );
    }

    #[tokio::test]
    async fn cors_preflight_allows_configured_origin() {
        let state = test_state();
        let router = create_router(Arc::clone(&state), &["http://localhost:5173".to_string()]);
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/api/admin/appointments")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(req).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:5173"
        );
    }
}
