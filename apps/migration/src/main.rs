//! Migration CLI tool.

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    sea_orm_migration::cli::run_cli(migration::Migrator).await;
}
