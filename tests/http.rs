use std::io::Write;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use rotor_temperature::{AppState, Config, router};
use tempfile::NamedTempFile;
use tower::ServiceExt;

const READINGS: &str = "u_q=1.0&coolant=18.8&stator_winding=19.1&u_d=-0.35&stator_tooth=18.3\
                        &motor_speed=200&i_d=-0.004&i_q=-4&stator_yoke=18.3&torque=0.19";

fn config(model_path: &std::path::Path) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        model_path: model_path.to_path_buf(),
    }
}

fn model_app() -> (Router, NamedTempFile) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "feature_names": ["u_q", "coolant", "stator_winding", "u_d", "stator_tooth",
                              "motor_speed", "i_d", "i_q", "stator_yoke", "torque"],
            "regressor": { "linear": {
                "coefficients": [0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                "intercept": 10.0
            } }
        }"#,
    )
    .unwrap();

    let state = AppState::load(&config(file.path()));
    assert!(state.model().is_some());
    (router(state), file)
}

fn demo_app() -> Router {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::load(&config(&dir.path().join("best_model.json")));
    assert!(state.model().is_none());
    router(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post(app: Router, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/y_predict")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn home_and_manual_predict_render_bare_form() {
    for uri in ["/", "/manual_predict"] {
        let (status, body) = get(demo_app(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<form action="/y_predict" method="post">"#));
        assert!(!body.contains("prediction_text"));
    }
}

#[tokio::test]
async fn predicts_with_loaded_model() {
    let (app, _file) = model_app();
    let (status, body) = post(app, READINGS).await;

    // 10 + coolant + stator_winding
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Predicted Rotor Temperature: 47.90°C"));
    assert!(body.contains(r#"name="coolant" value="18.8""#));
    assert!(body.contains(r#"name="i_q" value="-4""#));
}

#[tokio::test]
async fn demo_prediction_without_model() {
    let (status, body) = post(demo_app(), READINGS).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Model not loaded. Demo prediction: 5.00°C"));
    assert!(body.contains(r#"name="motor_speed" value="200""#));
}

#[tokio::test]
async fn non_numeric_field_is_rejected() {
    let body = READINGS.replacen("u_q=1.0", "u_q=abc", 1);
    let (app, _file) = model_app();
    let (status, body) = post(app, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error: Please enter valid numeric values for all fields."));
    assert!(!body.contains("Predicted Rotor Temperature"));
    assert!(body.contains(r#"name="u_q" value="""#));
}

#[tokio::test]
async fn missing_field_is_rejected() {
    let body = READINGS.replacen("&torque=0.19", "", 1);
    let (status, body) = post(demo_app(), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error: Please enter valid numeric values for all fields."));
    assert!(!body.contains("Demo prediction"));
}

#[tokio::test]
async fn wrong_content_type_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/y_predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, body) = send(demo_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error: Please enter valid numeric values for all fields."));
}

#[tokio::test]
async fn model_failure_is_rendered() {
    let body = READINGS
        .replacen("coolant=18.8", "coolant=inf", 1)
        .replacen("stator_winding=19.1", "stator_winding=-inf", 1);
    let (app, _file) = model_app();
    let (status, body) = post(app, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Prediction failed: prediction is not a finite number"));
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let (app, _file) = model_app();

    let (_, first) = post(app.clone(), READINGS).await;
    let (_, second) = post(app, READINGS).await;
    assert_eq!(first, second);
}
