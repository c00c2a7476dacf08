use anyhow::{anyhow, Context};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::{info, Instrument};
use tracing_subscriber::{fmt, EnvFilter};

use media_processor::{
    HandlerResponse, RasterCodec, ResizeConfig, ResizeHandler, S3Event, S3ObjectStore,
};

type Handler = ResizeHandler<S3ObjectStore, RasterCodec>;

async fn function_handler(
    event: LambdaEvent<S3Event>,
    handler: &Handler,
) -> Result<HandlerResponse, Error> {
    let (payload, context) = event.into_parts();
    let span = tracing::info_span!("resize", request_id = %context.request_id);

    Ok(handler.handle(payload).instrument(span).await)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // CloudWatch が取り込み時刻を付けるため、時刻とモジュール名は出さない
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    if json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ResizeConfig::from_env().context("failed to load configuration")?;
    info!(
        target_width = config.target_width,
        source_prefix = %config.layout.source_prefix,
        destination_prefix = %config.layout.destination_prefix,
        marker = %config.layout.marker,
        "starting media processor"
    );

    let store = S3ObjectStore::from_config(&config).await;
    let codec = RasterCodec::new(config.quality);
    let handler = ResizeHandler::new(store, codec, config);

    run(service_fn(|event| function_handler(event, &handler)))
        .await
        .map_err(|e| anyhow!("{:?}", e))
}
