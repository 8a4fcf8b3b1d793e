use crate::dataset::load_listings;
use crate::errors::ServerError;
use crate::report;
use crate::responses::{css_response, html_response, ResultResp};
use crate::templates;
use astra::Request;

pub fn handle(req: Request) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        // The whole pipeline runs again on every load: re-read the file,
        // recompute every statistic, re-render every chart.
        ("GET", "/") => {
            let listings = load_listings(report::DATA_PATH)?;
            let report = report::generate(&listings)?;
            html_response(templates::pages::dashboard_page(&report))
        }
        ("GET", "/static/main.css") => css_response(),
        _ => Err(ServerError::NotFound),
    }
}
