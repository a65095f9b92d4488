use actix_web::{web, App, HttpServer};
use tour_backend::config::app::Config;
use tour_backend::infra::state::build_state;
use tour_backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use tour_backend::{routes, telemetry};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment comes from the runtime (docker env_file, or a sourced .env locally).
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_env(config.runtime_env)
        .with_db(config.db_kind)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "starting tour backend");

    let data = web::Data::new(app_state);
    let payload_limit = config.max_json_payload_size;

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .app_data(web::PayloadConfig::new(payload_limit))
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
