use std::path::PathBuf;

use actix_files::NamedFile;
use actix_web::{web, HttpResponse};
use log::{error, info};
use shared::{ComparisonRequest, COMPARE_PATH, IMAGES_PATH};
use uuid::Uuid;

use crate::engine::ComparisonEngine;
use crate::error::GatewayError;

/// Directory the engine writes downloaded photos into.
#[derive(Clone)]
pub struct ImageStore {
    pub dir: PathBuf,
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        GatewayError::Validation(format!("Invalid request body: {}", err)).into()
    }))
    .service(web::resource(COMPARE_PATH).route(web::post().to(handle_compare)))
    .service(
        web::resource(format!("{}/{{filename}}", IMAGES_PATH)).route(web::get().to(serve_image)),
    );
}

async fn handle_compare(
    engine: web::Data<ComparisonEngine>,
    body: web::Json<ComparisonRequest>,
) -> Result<HttpResponse, GatewayError> {
    let request = validate(body.into_inner())?;
    let request_id = Uuid::new_v4();

    info!(
        "[{}] {} comparison of {} / {} at threshold {:.2}",
        request_id, request.method, request.source_a_id, request.source_b_id, request.threshold
    );

    match engine.compare(&request).await {
        Ok(response) => {
            info!(
                "[{}] {} of {} pairs matched",
                request_id, response.match_count, response.total_comparisons
            );
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            error!("[{}] comparison failed: {}", request_id, e);
            Err(e)
        }
    }
}

fn validate(request: ComparisonRequest) -> Result<ComparisonRequest, GatewayError> {
    let source_a_id = request.source_a_id.trim().to_string();
    let source_b_id = request.source_b_id.trim().to_string();

    if source_a_id.is_empty() || source_b_id.is_empty() {
        return Err(GatewayError::Validation(
            "Both source_a_id and source_b_id are required".into(),
        ));
    }
    if !(0.0..=1.0).contains(&request.threshold) {
        return Err(GatewayError::Validation(format!(
            "threshold must be between 0 and 1, got {}",
            request.threshold
        )));
    }

    Ok(ComparisonRequest {
        source_a_id,
        source_b_id,
        ..request
    })
}

async fn serve_image(
    store: web::Data<ImageStore>,
    path: web::Path<String>,
) -> Result<NamedFile, GatewayError> {
    let filename = path.into_inner();
    if !is_plain_file_name(&filename) {
        return Err(GatewayError::InvalidImageName);
    }

    NamedFile::open_async(store.dir.join(&filename))
        .await
        .map_err(|_| GatewayError::ImageNotFound(filename))
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains("..")
        && !name.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::ServerHandle;
    use actix_web::http::StatusCode;
    use actix_web::{test, App, HttpServer};
    use serde_json::{json, Value};
    use std::time::Duration;

    fn engine_at(url: &str) -> ComparisonEngine {
        let url = url::Url::parse(url).unwrap();
        ComparisonEngine::new(url, Duration::from_secs(5)).unwrap()
    }

    fn unreachable_engine() -> ComparisonEngine {
        // Port 1 on loopback refuses connections.
        engine_at("http://127.0.0.1:1/compare")
    }

    async fn engine_download_failure() -> HttpResponse {
        HttpResponse::InternalServerError().json(json!({ "error": "airtrip download failed" }))
    }

    async fn engine_clip_result() -> HttpResponse {
        HttpResponse::Ok().json(json!({
            "source_a_count": 3,
            "source_b_count": 2,
            "total_comparisons": 6,
            "threshold": 0.3,
            "match_count": 1,
            "matches": [{
                "method": "embedding-similarity",
                "image1": "tour_123_1.jpg",
                "image2": "airtrip_456_2.jpg",
                "similarity": 0.92,
                "clip_model": "ViT-B/32"
            }]
        }))
    }

    /// Starts a stand-in comparison engine on an ephemeral loopback port.
    fn start_fake_engine() -> (String, ServerHandle) {
        let server = HttpServer::new(|| {
            App::new()
                .route("/fail", web::post().to(engine_download_failure))
                .route("/clip", web::post().to(engine_clip_result))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let base = format!("http://{}", server.addrs()[0]);
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        (base, handle)
    }

    macro_rules! app {
        ($images:expr) => {
            app!($images, unreachable_engine())
        };
        ($images:expr, $engine:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($engine))
                    .app_data(web::Data::new(ImageStore { dir: $images }))
                    .configure(configure_api),
            )
            .await
        };
    }

    fn compare_request(method: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri(COMPARE_PATH)
            .set_json(json!({
                "source_a_id": " 123 ",
                "source_b_id": "456",
                "threshold": 0.3,
                "method": method
            }))
    }

    #[actix_web::test]
    async fn empty_identifier_is_rejected_before_relay() {
        let app = app!(PathBuf::from("images"));
        let req = test::TestRequest::post()
            .uri(COMPARE_PATH)
            .set_json(json!({
                "source_a_id": "  ",
                "source_b_id": "456",
                "threshold": 0.9,
                "method": "average-hash"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Both source_a_id and source_b_id are required");
    }

    #[actix_web::test]
    async fn unknown_method_is_a_json_error() {
        let app = app!(PathBuf::from("images"));
        let req = test::TestRequest::post()
            .uri(COMPARE_PATH)
            .set_json(json!({
                "source_a_id": "123",
                "source_b_id": "456",
                "threshold": 0.9,
                "method": "clip"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[actix_web::test]
    async fn threshold_outside_unit_range_is_rejected() {
        let app = app!(PathBuf::from("images"));
        let req = test::TestRequest::post()
            .uri(COMPARE_PATH)
            .set_json(json!({
                "source_a_id": "123",
                "source_b_id": "456",
                "threshold": 1.5,
                "method": "ai-judgment"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unreachable_engine_is_bad_gateway() {
        let app = app!(PathBuf::from("images"));
        let req = test::TestRequest::post()
            .uri(COMPARE_PATH)
            .set_json(json!({
                "source_a_id": "123",
                "source_b_id": "456",
                "threshold": 0.8,
                "method": "embedding-similarity"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Comparison engine is unreachable"));
    }

    #[actix_web::test]
    async fn engine_error_status_and_message_pass_through() {
        let (base, engine) = start_fake_engine();
        let app = app!(PathBuf::from("images"), engine_at(&format!("{}/fail", base)));

        let req = compare_request("average-hash").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "airtrip download failed" }));

        engine.stop(false).await;
    }

    #[actix_web::test]
    async fn engine_result_is_relayed_with_canonical_fields() {
        let (base, engine) = start_fake_engine();
        let app = app!(PathBuf::from("images"), engine_at(&format!("{}/clip", base)));

        let req = compare_request("embedding-similarity").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["match_count"], 1);
        assert_eq!(body["total_comparisons"], 6);
        let record = &body["matches"][0];
        assert_eq!(record["model_name"], "ViT-B/32");
        assert!(record.get("clip_model").is_none());
        assert_eq!(record["image2"], "airtrip_456_2.jpg");

        engine.stop(false).await;
    }

    #[actix_web::test]
    async fn serves_images_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tour_123_1.jpg"), b"jpeg bytes").unwrap();
        let app = app!(dir.path().to_path_buf());

        let req = test::TestRequest::get()
            .uri("/images/tour_123_1.jpg")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await.as_ref(), b"jpeg bytes");

        let req = test::TestRequest::get().uri("/images/missing.jpg").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn hidden_and_parent_names_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let app = app!(dir.path().to_path_buf());

        for uri in ["/images/..secret", "/images/.env"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn plain_file_names() {
        assert!(is_plain_file_name("airtrip_456_3.webp"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name("../etc/passwd"));
        assert!(!is_plain_file_name("a\\b.jpg"));
    }
}
