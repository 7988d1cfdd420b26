use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use freshkeep_api::{
    application::{
        http::server::http_server::{router, state},
        logging::init_logging,
    },
    args::Args,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logging(&args.log)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    info!("listening on {addr}");
    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
