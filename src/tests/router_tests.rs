use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::{Body, Request};
use std::io::Read;

fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = "GET".parse().unwrap();
    *req.uri_mut() = path.parse().unwrap();
    req
}

fn body_string(resp: &mut astra::Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn dashboard_renders_with_the_shipped_dataset() {
    let mut resp = handle(get("/")).expect("dashboard should render");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Airbnb Data Analysis Dashboard"));
    assert!(body.contains("Summary Statistics"));
    assert!(body.contains("Top 10 Listings with Best Ratings"));
    // charts are inlined as SVG
    assert!(body.contains("<svg"));
}

#[test]
fn dashboard_is_idempotent_across_requests() {
    let mut first = handle(get("/")).unwrap();
    let mut second = handle(get("/")).unwrap();

    let strip_footer = |body: String| {
        // the generated-at footer is the only part that may differ
        match body.find("Report generated at") {
            Some(idx) => body[..idx].to_string(),
            None => body,
        }
    };

    assert_eq!(
        strip_footer(body_string(&mut first)),
        strip_footer(body_string(&mut second))
    );
}

#[test]
fn stylesheet_is_served() {
    let resp = handle(get("/static/main.css")).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("Content-Type")
            .unwrap()
            .to_str()
            .unwrap(),
        "text/css; charset=utf-8"
    );
}

#[test]
fn unknown_path_is_not_found() {
    let err = handle(get("/nope")).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(error_to_response(err).status(), 404);
}

#[test]
fn load_failure_maps_to_unprocessable() {
    let resp = error_to_response(ServerError::MissingColumn("Ratings".into()));
    assert_eq!(resp.status(), 422);
}
