//! Site Server Binary
//!
//! Serves the whole site: API, auth gate, and static pages.
//! Runs on BIND_ADDR (e.g. 0.0.0.0:5000).

#[tokio::main]
async fn main() {
    tpr_core::log();
    tpr_server::run().await.unwrap();
}
