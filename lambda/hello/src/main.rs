use lambda_http::{run, service_fn, tracing, Error};
mod config;
mod error;
mod http_handler;
mod table;
use config::Config;
use http_handler::function_handler;
use table::DynamoTable;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Config::from_env();
    let table = DynamoTable::open(&config).await;

    run(service_fn(|event| function_handler(&table, event))).await
}
