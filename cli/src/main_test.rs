use std::net::SocketAddr;

use axum::Router;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::post;

use super::*;

fn det(class_name: &str, confidence: f64) -> Detection {
    Detection { class_name: class_name.to_owned(), confidence, bbox: None }
}

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("objectdetect-cli-{name}-{}", std::process::id()))
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn context(endpoint: String) -> CliContext {
    CliContext { endpoint, client: reqwest::Client::new() }
}

// =============================================================================
// Output helpers
// =============================================================================

#[test]
fn report_lines_number_detections_with_two_decimals() {
    let lines = report_lines(&[det("person", 0.9312), det("helmet", 0.5)], 0.0);
    assert_eq!(
        lines,
        vec![
            "Detected 2 objects:".to_owned(),
            "  1. person (confidence: 93.12%)".to_owned(),
            "  2. helmet (confidence: 50.00%)".to_owned(),
        ]
    );
}

#[test]
fn report_lines_apply_min_confidence() {
    let lines = report_lines(&[det("person", 0.93), det("cup", 0.2)], 0.5);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Detected 1 objects:");
}

#[test]
fn annotated_path_uses_stem() {
    let path = annotated_path(Path::new("shots/street.png"), Path::new("out"));
    assert_eq!(path, PathBuf::from("out/street_annotated.jpg"));
}

#[test]
fn content_type_follows_extension() {
    assert_eq!(content_type_for(Path::new("a.JPG")), "image/jpeg");
    assert_eq!(content_type_for(Path::new("a.png")), "image/png");
    assert_eq!(content_type_for(Path::new("a")), "application/octet-stream");
}

#[test]
fn timeout_must_be_positive() {
    assert!(Cli::try_parse_from(["objectdetect-cli", "--timeout", "0", "health"]).is_err());
    let cli = Cli::try_parse_from(["objectdetect-cli", "--timeout", "5", "health"]).expect("parse");
    assert_eq!(cli.timeout, 5);
}

#[test]
fn timeout_defaults_to_sixty_seconds() {
    let cli = Cli::try_parse_from(["objectdetect-cli", "health"]).expect("parse");
    assert_eq!(cli.timeout, 60);
}

#[test]
fn health_line_mentions_model_state() {
    let loaded = HealthReport { status: "healthy".to_owned(), model_loaded: true };
    let empty = HealthReport { status: "healthy".to_owned(), model_loaded: false };
    assert_eq!(health_line(&loaded), "ok (model loaded)");
    assert_eq!(health_line(&empty), "healthy (model not loaded)");
}

// =============================================================================
// Round trips against a stub endpoint
// =============================================================================

#[tokio::test]
async fn predict_posts_image_field_and_saves_annotation() {
    let router = Router::new().route(
        "/predict",
        post(|mut form: Multipart| async move {
            let field = form.next_field().await.unwrap().unwrap();
            assert_eq!(field.name(), Some("image"));
            assert_eq!(field.file_name(), Some("frame.jpg"));
            let bytes = field.bytes().await.unwrap();
            axum::Json(serde_json::json!({
                "image": "data:image/jpeg;base64,AAEC",
                "detections": [{ "class": "person", "confidence": 0.93 }],
                "summary": format!("{} bytes", bytes.len()),
            }))
        }),
    );
    let addr = serve(router).await;
    let dir = scratch_dir("predict");
    let image = dir.join("frame.jpg");
    tokio::fs::create_dir_all(&dir).await.unwrap();
    tokio::fs::write(&image, [0xff_u8, 0xd8, 0xff]).await.unwrap();

    let ctx = context(format!("http://{addr}/predict"));
    let response = run_predict(&ctx, &image).await.unwrap();
    assert_eq!(response.detections[0].class_name, "person");
    assert_eq!(response.summary.as_deref(), Some("3 bytes"));

    let saved = save_annotated(&response, &image, &dir.join("out")).await.unwrap();
    assert_eq!(tokio::fs::read(&saved).await.unwrap(), vec![0, 1, 2]);

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn predict_surfaces_endpoint_error() {
    let router = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::BAD_REQUEST, axum::Json(serde_json::json!({ "error": "No image provided" }))) }),
    );
    let addr = serve(router).await;
    let dir = scratch_dir("error");
    let image = dir.join("frame.png");
    tokio::fs::create_dir_all(&dir).await.unwrap();
    tokio::fs::write(&image, [1_u8]).await.unwrap();

    let err = run_predict(&context(format!("http://{addr}/predict")), &image).await.unwrap_err();
    assert!(err.to_string().contains("No image provided"));

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn predict_reports_missing_file() {
    let err = run_predict(&context("http://127.0.0.1:9/predict".to_owned()), Path::new("/nonexistent/x.jpg"))
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::ReadImage { .. }));
}
