mod cli;
mod infra;
mod quote;
mod routes;
mod server;

use resale_calculator::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
