//! HTTP server initialization and runtime setup.
//!
//! Builds the AWS clients once, wires repositories and services together,
//! and runs the Axum server. Nothing here is re-initialized per request;
//! handlers only ever see the injected [`AppState`].

use crate::application::services::{
    AdminGate, BlogpostService, ExperienceService, ImageService, PortfolioService,
};
use crate::config::Config;
use crate::infrastructure::object_store::S3ImageStore;
use crate::infrastructure::persistence::{
    DynamoBlogpostRepository, DynamoExperienceRepository, DynamoPortfolioRepository, DynamoStore,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use aws_config::BehaviorVersion;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the listener cannot be
/// bound, or the server fails at runtime. AWS clients are constructed lazily
/// by the SDK; a wrong region or endpoint surfaces on the first request, not
/// here.
pub async fn run(config: Config) -> Result<()> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(endpoint) = &config.aws_endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }
    let sdk_config = loader.load().await;

    let dynamo_client = aws_sdk_dynamodb::Client::new(&sdk_config);

    // Path-style addressing is what LocalStack-style endpoints expect;
    // against real S3 the default virtual-hosted style stays in effect.
    let s3_client = if config.aws_endpoint_url.is_some() {
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build();
        aws_sdk_s3::Client::from_conf(s3_config)
    } else {
        aws_sdk_s3::Client::new(&sdk_config)
    };

    let store = Arc::new(DynamoStore::new(dynamo_client));

    let blogpost_repository = Arc::new(DynamoBlogpostRepository::new(
        store.clone(),
        &config.blogpost_table,
    ));
    let portfolio_repository = Arc::new(DynamoPortfolioRepository::new(
        store.clone(),
        &config.portfolio_table,
    ));
    let experience_repository = Arc::new(DynamoExperienceRepository::new(
        store.clone(),
        &config.experience_table,
    ));
    let image_store = Arc::new(S3ImageStore::new(
        s3_client,
        &config.s3_bucket,
        config.s3_public_base_url.clone(),
    ));

    let state = AppState::new(
        Arc::new(BlogpostService::new(blogpost_repository)),
        Arc::new(PortfolioService::new(portfolio_repository)),
        Arc::new(ExperienceService::new(experience_repository)),
        Arc::new(ImageService::new(image_store)),
        Arc::new(AdminGate::new(config.secret_token.clone())),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
