mod cli;
mod demo;
mod evaluate;
mod infra;
mod render;
mod routes;
mod server;

use hf_therapy::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
