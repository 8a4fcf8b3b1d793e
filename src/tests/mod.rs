mod router_tests;
mod stats_tests;
mod utils;
