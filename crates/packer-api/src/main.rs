use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use packer_core::{Packer, PackerError, PackingRequest, PackingResult, ValidationResult};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

const OPENAPI_SPEC: &str = include_str!("../../../openapi.yaml");
const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Container Packing API Docs</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {
            SwaggerUIBundle({
                url: '/openapi.yaml',
                dom_id: '#swagger-ui',
                presets: [SwaggerUIBundle.presets.apis],
                layout: 'BaseLayout',
            });
        };
    </script>
</body>
</html>"#;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Container Packing API");

    // Build application
    let app = Router::new()
        .route("/", get(serve_ui))
        .route("/api/health", get(health_check))
        .route("/api/pack", post(pack))
        .route("/api/validate", post(validate))
        .route("/api/generate/svg", post(generate_svg))
        .route("/openapi.yaml", get(serve_openapi_spec))
        .route("/docs", get(serve_swagger_ui))
        .layer(CorsLayer::permissive());

    // Start server
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Failed to bind to port 3000");

    info!("API server listening on http://0.0.0.0:3000");
    info!("Try: curl http://localhost:3000/api/health");

    axum::serve(listener, app).await.expect("Server error");
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "container-packing-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Main packing endpoint
async fn pack(Json(request): Json<PackingRequest>) -> Result<Json<PackingResult>, AppError> {
    info!(
        "Received packing request for container '{}' with {} item types",
        request.container_type,
        request.items.len()
    );

    let packer = Packer::new(request)?;
    let result = packer.calculate()?;

    info!(
        "Packing complete: {}/{} units fitted, {:.1}% volume used",
        result.total_fitted, result.total_requested, result.utilization.volume_percent
    );

    Ok(Json(result))
}

/// Quick feasibility check without running the allocation loop
async fn validate(Json(request): Json<PackingRequest>) -> Result<Json<ValidationResult>, AppError> {
    info!(
        "Received validation request for container '{}' with {} item types",
        request.container_type,
        request.items.len()
    );

    let packer = Packer::new(request)?;
    let result = packer.validate()?;

    Ok(Json(result))
}

/// Generate SVG report
async fn generate_svg(Json(result): Json<PackingResult>) -> Result<Response, AppError> {
    info!("Generating SVG report for {} item types", result.items.len());

    let svg = generate_svg_content(&result)?;

    Ok((StatusCode::OK, [("Content-Type", "image/svg+xml")], svg).into_response())
}

/// Generate SVG content from a packing result
fn generate_svg_content(result: &PackingResult) -> Result<String, AppError> {
    use std::fmt::Write;

    let mut svg = String::new();
    let margin = 20.0;
    let label_width = 170.0;
    let bar_width = 420.0;
    let row_height = 28.0;
    let header_height = 120.0;

    let svg_width = label_width + bar_width + (2.0 * margin);
    let svg_height = header_height + (result.items.len() as f64 * row_height) + 40.0;

    // SVG header
    writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        svg_width, svg_height, svg_width, svg_height
    )
    .unwrap();

    // Background
    writeln!(
        &mut svg,
        r##"  <rect width="100%" height="100%" fill="#f5f5f5"/>"##
    )
    .unwrap();

    // Title
    writeln!(
        &mut svg,
        r##"  <text x="{}" y="{}" font-family="Arial" font-size="16" fill="#333">Container {} ({} x {} x {} cm, {} CBM)</text>"##,
        margin,
        margin + 12.0,
        result.container_type,
        result.container_dimensions.width_cm,
        result.container_dimensions.height_cm,
        result.container_dimensions.depth_cm,
        result.container_dimensions.cbm
    )
    .unwrap();

    // Utilization meters
    for (idx, (label, percent)) in [
        ("Volume", result.utilization.volume_percent),
        ("Weight", result.utilization.weight_percent),
    ]
    .iter()
    .enumerate()
    {
        let y = margin + 36.0 + (idx as f64 * 26.0);
        let fill = if *percent > 95.0 { "#F44336" } else { "#4CAF50" };
        let meter = (percent.min(100.0) / 100.0) * bar_width;

        writeln!(
            &mut svg,
            r##"  <text x="{}" y="{}" font-family="Arial" font-size="12" fill="#333">{}: {:.1}%</text>"##,
            margin,
            y + 12.0,
            label,
            percent
        )
        .unwrap();
        writeln!(
            &mut svg,
            r##"  <rect x="{}" y="{}" width="{}" height="16" fill="#e0e0e0"/>"##,
            margin + label_width,
            y,
            bar_width
        )
        .unwrap();
        writeln!(
            &mut svg,
            r##"  <rect x="{}" y="{}" width="{}" height="16" fill="{}" opacity="0.85"/>"##,
            margin + label_width,
            y,
            meter,
            fill
        )
        .unwrap();
    }

    // Per-item fitted/unfitted bars
    let mut y_offset = header_height;

    for item in &result.items {
        let fraction = if item.requested > 0 {
            f64::from(item.fitted) / f64::from(item.requested)
        } else {
            0.0
        };
        let fitted_width = fraction * bar_width;

        writeln!(
            &mut svg,
            r##"  <text x="{}" y="{}" font-family="Arial" font-size="12" fill="#333">{}</text>"##,
            margin,
            y_offset + 14.0,
            item.name
        )
        .unwrap();
        writeln!(
            &mut svg,
            r##"  <rect x="{}" y="{}" width="{}" height="18" fill="#E57373"/>"##,
            margin + label_width,
            y_offset,
            bar_width
        )
        .unwrap();
        writeln!(
            &mut svg,
            r##"  <rect x="{}" y="{}" width="{}" height="18" fill="#4CAF50"/>"##,
            margin + label_width,
            y_offset,
            fitted_width
        )
        .unwrap();
        writeln!(
            &mut svg,
            r##"  <text x="{}" y="{}" font-family="Arial" font-size="11" fill="#fff" text-anchor="end">{} / {}</text>"##,
            margin + label_width + bar_width - 6.0,
            y_offset + 13.0,
            item.fitted,
            item.requested
        )
        .unwrap();

        y_offset += row_height;
    }

    // Summary
    writeln!(
        &mut svg,
        r##"  <text x="{}" y="{}" font-family="Arial" font-size="12" fill="#666">Fitted: {} / {} units | Warnings: {}</text>"##,
        margin,
        y_offset + 22.0,
        result.total_fitted,
        result.total_requested,
        result.warnings.len()
    )
    .unwrap();

    writeln!(&mut svg, "</svg>").unwrap();

    Ok(svg)
}

/// Application error type
struct AppError(anyhow::Error);

impl From<PackerError> for AppError {
    fn from(err: PackerError) -> Self {
        AppError(err.into())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request error: {}", self.0);

        let message = self.0.to_string();
        let status = if message.contains("Unknown container type")
            || message.contains("Invalid input")
        {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status,
            Json(json!({
                "error": message,
            })),
        )
            .into_response()
    }
}

async fn serve_ui() -> impl IntoResponse {
    // Read the UI file
    match std::fs::read_to_string("web/index.html") {
        Ok(html) => Html(html),
        Err(_) => Html(
            r#"
            <!DOCTYPE html>
            <html>
            <head>
                <title>Container Packing</title>
            </head>
            <body>
                <h1>Container Packing API</h1>
                <p>Web UI file not found. Please ensure web/index.html exists.</p>
                <h2>API Endpoints:</h2>
                <ul>
                    <li>GET /api/health - Health check</li>
                    <li>POST /api/pack - Run packing calculation</li>
                    <li>POST /api/validate - Quick feasibility check</li>
                    <li>POST /api/generate/svg - Generate SVG report</li>
                </ul>
            </body>
            </html>
        "#
            .to_string(),
        ),
    }
}

async fn serve_openapi_spec() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("Content-Type", "application/yaml")],
        OPENAPI_SPEC,
    )
}

async fn serve_swagger_ui() -> impl IntoResponse {
    Html(SWAGGER_UI_HTML)
}
