
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use stylize_api_gateway::{
    api,
    config,
    jobs,
    provider,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config::Config::print_env_vars();
    // Create the provider client and job plumbing
    let provider_client = provider::client::ProviderClient::new(
        config.provider_api_url.clone(),
        config.provider_api_token.clone(),
    );
    let tracker = jobs::tracker::JobTracker::new(Arc::new(jobs::store::InMemoryJobStore::new()));
    let models = jobs::submitter::ModelCatalog {
        image: config.image_model.clone(),
        video: config.video_model.clone(),
        dance_video: config.dance_video_model.clone(),
    };
    let state = Arc::new(api::routes::AppState {
        submitter: jobs::submitter::JobSubmitter::new(provider_client.clone(), models, tracker.clone()),
        provider_client,
        tracker,
    });

    // Build our application with a route
    let app = Router::new()
        .route("/", get(api::handlers::root))
        .route("/transform_image", post(api::handlers::transform_image))
        .route("/animate_image", post(api::handlers::animate_image))
        .route("/transform_status", get(api::handlers::transform_status))
        .route("/animate_status", get(api::handlers::animate_status))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.api_port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", host_str);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 8190", port_str);
        8190
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)

        .serve(app.into_make_service())
        .await
        .unwrap();
}
