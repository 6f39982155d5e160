//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for every screen in the
//! process. Output is filtered by `RUST_LOG` and uses the compact format with
//! module targets hidden; screens identify themselves with a `screen` field.
//!
//! ## What Gets Traced
//!
//! - **Screen Lifecycle**: mounting, mounted, unmounted
//! - **Commands**: every command (debug), rejections (warn)
//! - **Remote Calls**: method and path (debug), failures (warn)
//!
//! ```bash
//! RUST_LOG=info cargo run                          # lifecycle + outcomes
//! RUST_LOG=debug cargo run                         # full command payloads
//! RUST_LOG=screen_framework=debug,catalog_app=info cargo run
//! ```
//!
//! Running with `RUST_LOG=debug` shows lines like:
//!
//! ```text
//! INFO Screen mounting screen="AdminScreen"
//! DEBUG GET /product?page=1&pageSize=20
//! INFO Products loaded count=12
//! DEBUG Command screen="AdminScreen" command=SetFilter("su")
//! ```

/// Initializes the global tracing subscriber. Call once, from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
