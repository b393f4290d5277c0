use axum::extract::Path;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::Json;
use axum::Router;
use randkit::compose::ColorFormat;
use randkit::fixtures;
use randkit::fixtures::FixtureKind;
use randkit::Casing;
use randkit::Sampler;
use serde::Deserialize;
use serde_json::json;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

const MAX_FIXTURES: usize = 1_000;

pub fn router() -> Router {
    Router::new()
        .route("/int", get(int))
        .route("/letter", get(letter))
        .route("/string", get(string))
        .route("/word", get(word))
        .route("/sentence", get(sentence))
        .route("/paragraph", get(paragraph))
        .route("/name", get(name))
        .route("/uuid", get(random_uuid))
        .route("/color", get(color))
        .route("/status", get(status))
        .route("/fixtures/:kind", get(fixture))
}

#[derive(Debug)]
pub struct ApiError(StatusCode, String);

impl From<randkit::Error> for ApiError {
    fn from(error: randkit::Error) -> Self {
        Self(StatusCode::BAD_REQUEST, error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.0, error = %self.1);
        (self.0, Json(json!({ "error": self.1 }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct Bounds {
    min: f64,
    max: f64,
}

async fn int(Query(Bounds { min, max }): Query<Bounds>) -> Result<Json<i64>, ApiError> {
    Ok(Json(Sampler::thread_rng().int_between_fractional(min, max)?))
}

#[derive(Debug, Deserialize)]
pub struct LetterQuery {
    casing: Option<Casing>,
    start: Option<char>,
    end: Option<char>,
}

async fn letter(Query(query): Query<LetterQuery>) -> Json<char> {
    Json(Sampler::thread_rng().letter(query.casing, query.start, query.end))
}

#[derive(Debug, Deserialize)]
pub struct Pattern {
    min: String,
    max: String,
}

async fn string(Query(Pattern { min, max }): Query<Pattern>) -> Result<Json<String>, ApiError> {
    Ok(Json(Sampler::thread_rng().arbitrary_string(&min, &max)?))
}

async fn word() -> Json<&'static str> {
    Json(Sampler::thread_rng().word())
}

#[derive(Debug, Deserialize)]
pub struct Count {
    count: Option<usize>,
}

async fn sentence(Query(Count { count }): Query<Count>) -> Json<String> {
    Json(Sampler::thread_rng().sentence(count))
}

async fn paragraph(Query(Count { count }): Query<Count>) -> Json<String> {
    Json(Sampler::thread_rng().paragraph(count))
}

async fn name() -> Json<String> {
    Json(Sampler::thread_rng().full_name())
}

async fn random_uuid() -> Json<Uuid> {
    Json(Sampler::thread_rng().uuid())
}

#[derive(Debug, Deserialize)]
pub struct ColorQuery {
    format: Option<ColorFormat>,
}

async fn color(Query(ColorQuery { format }): Query<ColorQuery>) -> Json<String> {
    Json(Sampler::thread_rng().color().format(format.unwrap_or_default()))
}

async fn status() -> Json<u16> {
    Json(Sampler::thread_rng().http_status())
}

async fn fixture(
    Path(kind): Path<FixtureKind>,
    Query(Count { count }): Query<Count>,
) -> Result<Json<Value>, ApiError> {
    let count = count.unwrap_or(1);
    if count > MAX_FIXTURES {
        return Err(ApiError(
            StatusCode::BAD_REQUEST,
            format!("count must not exceed {MAX_FIXTURES}"),
        ));
    }
    fixtures::generate(&Sampler::thread_rng(), kind, count)
        .map(Json)
        .map_err(|error| ApiError(StatusCode::INTERNAL_SERVER_ERROR, error.to_string()))
}
