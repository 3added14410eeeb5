use axum::{Router, middleware};
use database::{
    db::create_connection,
    services::seed::{SeedOutcome, SeedService},
};
use log::info;
use migration::{Migrator, MigratorTrait};
use server::{
    app::{protected_routes, public_routes},
    auth::claims_to_subject,
    config::Config,
    state::AppState,
    utils::shutdown::shutdown_signal,
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Config::from_env().expect("Invalid configuration");

    let db = create_connection(&config.database_url)
        .await
        .expect("Failed to connect to the database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations");

    if config.seed_data {
        match SeedService::seed_if_empty(&db)
            .await
            .expect("Failed to seed the database")
        {
            SeedOutcome::Seeded => info!("Initial database data loaded"),
            SeedOutcome::AlreadyPopulated => info!("Existing data found, seeding skipped"),
        }
    }

    let oauth2_resource_server = <OAuth2ResourceServer>::builder()
        .issuer_url(&config.oidc_issuer_url)
        .build()
        .await
        .expect("Failed to build OAuth2ResourceServer");

    // Token validation runs first, then the subject is copied out of the claims
    let protected = protected_routes().layer(
        ServiceBuilder::new()
            .layer(oauth2_resource_server.into_layer())
            .layer(middleware::from_fn(claims_to_subject)),
    );

    let app = Router::new()
        .merge(public_routes())
        .merge(protected)
        .layer(CompressionLayer::new())
        .with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listener");
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
