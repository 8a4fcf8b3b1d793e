use crate::dataset::load_listings;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod charts;
mod dataset;
mod errors;
mod report;
mod responses;
mod router;
mod stats;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // Check the dataset up front so a missing or malformed file fails at
    // startup with its real cause instead of on the first request.
    match load_listings(report::DATA_PATH) {
        Ok(listings) => println!("Loaded {} listings from {}", listings.len(), report::DATA_PATH),
        Err(e) => {
            eprintln!("Dataset check failed: {e}");
            std::process::exit(1);
        }
    }

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
