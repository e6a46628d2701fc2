use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use neki_ki_deewar::{app, AppState};
use tower::ServiceExt;

fn router() -> Router {
    app(AppState::with_fixtures().expect("state"))
}

fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/donate/form")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

fn query_value<'a>(location: &'a str, key: &str) -> Option<&'a str> {
    location
        .split_once('?')?
        .1
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

#[tokio::test]
async fn resources_submission_redirects_to_confirmation() {
    let response = router()
        .oneshot(form_post("name=A&email=a%40a.com&phone=1&donation_type=resources&resources=Books"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location")
        .to_string();
    assert!(location.starts_with("/donate/confirmation?"));

    let id = query_value(&location, "id").expect("id");
    let hash = query_value(&location, "hash").expect("hash");
    assert!(id.starts_with("DON"));
    assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
    assert!(hash.starts_with("0x"));
    assert!(hash.len() > 2);
}

#[tokio::test]
async fn funds_without_amount_shows_notice_and_stays_on_form() {
    let response = router()
        .oneshot(form_post("name=A&email=a%40a.com&phone=1&donation_type=funds&amount="))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.headers().get(header::LOCATION).is_none());
    let html = body_text(response).await;
    assert!(html.contains("Amount Required"));
    assert!(html.contains("Please enter donation amount"));
    // Input survives the round trip.
    assert!(html.contains("value=\"A\""));
}

#[tokio::test]
async fn missing_contact_details_are_reported() {
    let response = router()
        .oneshot(form_post("name=&email=a%40a.com&phone=1&resources=Books"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("Missing Information"));
}

#[tokio::test]
async fn resources_without_selection_are_reported() {
    let response = router()
        .oneshot(form_post("name=A&email=a%40a.com&phone=1&donation_type=resources"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("Resources Required"));
}

#[tokio::test]
async fn confirmation_renders_query_values() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/donate/confirmation?id=DON1700000000000&hash=0xabc123")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("DON1700000000000"));
    assert!(html.contains("0xabc123"));
    assert!(html.contains("Donation Successful!"));
}

#[tokio::test]
async fn confirmation_without_params_is_not_an_error() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/donate/confirmation")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<p class=\"mono\" id=\"donation-id\"></p>"));
}

#[tokio::test]
async fn form_names_the_selected_ngo() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/donate/form?ngo=1")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("to Hope Foundation"));
    assert!(html.contains("name=\"ngo\" value=\"1\""));
}

#[tokio::test]
async fn api_submission_returns_receipt() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/donations")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"donation_type":"funds","name":"A","email":"a@a.com","phone":"1","amount":"250"}"#,
                ))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).expect("json");
    assert!(json["id"].as_str().unwrap_or_default().starts_with("DON"));
    assert!(json["hash"].as_str().unwrap_or_default().starts_with("0x"));
}

#[tokio::test]
async fn api_unknown_donation_type_is_treated_as_resources() {
    for donation_type in [r#""crypto""#, "null"] {
        let body = format!(
            r#"{{"donation_type":{donation_type},"name":"A","email":"a@a.com","phone":"1","resources":["Books"]}}"#
        );
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/donations")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::CREATED, "{donation_type}");
    }
}

#[tokio::test]
async fn confirmation_with_repeated_keys_shows_first_value() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/donate/confirmation?id=DON1&id=DON2&hash=0xa")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<p class="mono" id="donation-id">DON1</p>"#));
    assert!(!html.contains("DON2"));
}

#[tokio::test]
async fn api_rejection_names_the_error_kind() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/donations")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"donation_type":"funds","name":"A","email":"a@a.com","phone":"1"}"#))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).expect("json");
    assert_eq!(json["error"], "MissingAmount");
    assert_eq!(json["title"], "Amount Required");
}

#[tokio::test]
async fn receipt_download_is_an_attachment() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/donate/confirmation/receipt?id=DON42&hash=0xfeed")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    let text = body_text(response).await;
    assert!(text.contains("Donation ID: DON42"));
    assert!(text.contains("0xfeed"));
}
