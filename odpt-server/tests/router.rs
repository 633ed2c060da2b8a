//! End-to-end tests of the HTTP surface against the mock catalog.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use odpt_server::catalog::Catalog;
use odpt_server::odpt::{
    Endpoint, LocalizedText, MockOdptClient, OperatorDto, RailwayDto, RailwayFareDto, StationDto,
    TrainInformationDto,
};
use odpt_server::web::{AppState, create_router};

const JR: &str = "odpt.Operator:JR-East";
const YAMANOTE: &str = "odpt.Railway:JR-East.Yamanote";
const CHUO: &str = "odpt.Railway:JR-East.ChuoRapid";

fn station(id: &str, name: &str, line: &str) -> StationDto {
    StationDto {
        id: id.to_string(),
        title: name.to_string(),
        same_as: format!("odpt.Station:JR-East.{line}.{name}"),
        operator: JR.to_string(),
        railway: format!("odpt.Railway:JR-East.{line}"),
    }
}

fn source() -> MockOdptClient {
    MockOdptClient::new()
        .with_operators(vec![OperatorDto {
            id: "op-jr".to_string(),
            title: "JR東日本".to_string(),
            same_as: JR.to_string(),
        }])
        .with_railways(vec![
            RailwayDto {
                id: "yamanote".to_string(),
                title: "山手線".to_string(),
                same_as: YAMANOTE.to_string(),
                operator: JR.to_string(),
            },
            RailwayDto {
                id: "chuo".to_string(),
                title: "中央線快速".to_string(),
                same_as: CHUO.to_string(),
                operator: JR.to_string(),
            },
        ])
        .with_stations(vec![
            station("shinjuku-chuo", "Shinjuku", "ChuoRapid"),
            station("shinjuku-yamanote", "Shinjuku", "Yamanote"),
            station("tokyo-chuo", "Tokyo", "ChuoRapid"),
            station("shibuya-yamanote", "Shibuya", "Yamanote"),
        ])
        .with_information(vec![TrainInformationDto {
            id: "info-yamanote".to_string(),
            date: Some("2024-05-01T10:15:00+09:00".to_string()),
            operator: JR.to_string(),
            railway: Some(YAMANOTE.to_string()),
            information_text: Some(LocalizedText::Plain("遅延しています。".to_string())),
        }])
        .with_fares(vec![RailwayFareDto {
            id: "fare-1".to_string(),
            same_as: "odpt.RailwayFare:JR-East.Yamanote.Shinjuku.JR-East.Yamanote.Shibuya"
                .to_string(),
            operator: JR.to_string(),
            from_station: "odpt.Station:JR-East.Yamanote.Shinjuku".to_string(),
            to_station: "odpt.Station:JR-East.Yamanote.Shibuya".to_string(),
            ticket_fare: Some(170),
            ic_card_fare: Some(167),
        }])
}

async fn app_with(lookup: MockOdptClient) -> axum::Router {
    let catalog = Catalog::load(&source()).await.unwrap();
    create_router(AppState::new(catalog, lookup))
}

async fn app() -> axum::Router {
    app_with(source()).await
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn search_request(body: Value) -> Request<Body> {
    Request::post("/api/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health() {
    let response = app()
        .await
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn candidates_without_selection_lists_everything() {
    let response = app()
        .await
        .oneshot(Request::get("/api/candidates").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["departures"].as_array().unwrap().len(), 3);
    assert_eq!(body["railways"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn candidates_narrow_by_railway_and_station() {
    let response = app()
        .await
        .oneshot(
            Request::get("/api/candidates?railway=chuo&departure=shibuya-yamanote")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = json_body(response).await;
    let departures: Vec<&str> = body["departures"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(departures, vec!["Shinjuku", "Tokyo"]);

    let railways: Vec<&str> = body["railways"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(railways, vec!["yamanote"]);
}

#[tokio::test]
async fn search_returns_snapshot() {
    let response = app()
        .await
        .oneshot(search_request(json!({
            "departure": "shinjuku-chuo",
            "arrival": "shibuya-yamanote",
            "railway": "yamanote",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["departure"]["name"], "Shinjuku");
    assert_eq!(body["railway"]["operator_name"], "JR東日本");
    assert_eq!(body["information"]["text"], "遅延しています。");
    assert_eq!(body["fare"]["ticket_fare"], 170);
    assert_eq!(
        body["from_station_key"],
        "odpt.Station:JR-East.Yamanote.Shinjuku"
    );
}

#[tokio::test]
async fn search_without_fare_on_file_succeeds() {
    let response = app()
        .await
        .oneshot(search_request(json!({
            "departure": "tokyo-chuo",
            "arrival": "shinjuku-chuo",
            "railway": "chuo",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["fare"].is_null());
    assert!(body["information"].is_null());
}

#[tokio::test]
async fn incomplete_search_is_bad_request() {
    let response = app()
        .await
        .oneshot(search_request(json!({
            "departure": "tokyo-chuo",
            "railway": "chuo",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("arrival"));
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let app = app_with(source().failing(Endpoint::TrainInformation)).await;

    let response = app
        .oneshot(search_request(json!({
            "departure": "shinjuku-chuo",
            "arrival": "shibuya-yamanote",
            "railway": "yamanote",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn search_page_renders_result() {
    let response = app()
        .await
        .oneshot(
            Request::get("/search?departure=shinjuku-chuo&arrival=shibuya-yamanote&railway=yamanote")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("遅延しています。"));
    assert!(html.contains("170円 (IC 167円)"));
}

#[tokio::test]
async fn search_page_keeps_picks_on_error() {
    let response = app()
        .await
        .oneshot(
            Request::get("/search?departure=shinjuku-chuo&railway=yamanote")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("no arrival station selected"));
    assert!(html.contains(r#"value="shinjuku-chuo" selected"#));
}

#[tokio::test]
async fn toggling_the_selected_railway_clears_it() {
    let response = app()
        .await
        .oneshot(
            Request::get("/api/candidates?railway=chuo&toggle=railway:chuo")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["departures"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn page_toggle_deselects_station() {
    let response = app()
        .await
        .oneshot(
            Request::get("/?departure=shinjuku-chuo&toggle=departure:shinjuku-chuo")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!html.contains(r#"value="shinjuku-chuo" selected"#));
    assert!(!html.contains("解除"));
}

#[tokio::test]
async fn page_offers_clear_for_each_pick() {
    let response = app()
        .await
        .oneshot(
            Request::get("/?departure=shinjuku-chuo&railway=yamanote")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains(r#"value="departure:shinjuku-chuo""#));
    assert!(html.contains(r#"value="railway:yamanote""#));
    assert!(!html.contains(r#"value="arrival:"#));
}
