use doctor_invite::{
    AppState, build_app,
    config::Config,
    db,
    services::PgReferralStore,
};
use std::{net::SocketAddr, sync::Arc};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    doctor_invite::init_tracing(&config.logging());

    let pool = db::create_pool(&config.database())?;
    let store = Arc::new(PgReferralStore::new(pool));
    let state = Arc::new(AppState::new(store, &config));

    let app = build_app(state, &config.server());

    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!(%addr, "Server running");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
