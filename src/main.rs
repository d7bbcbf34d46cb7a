use database::{Database, DatabaseLoader};
use env_logger::Env;
use log::info;
use standings::utils::TimeEstimation;
use web::{AppData, LeagueTableServer, ServerConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().filter_or("LOG_LEVEL", "info")).init();

    let config = ServerConfig::from_env();

    let database = Database::new(config.store_timeout);

    if let Some(path) = &config.seed_file {
        let (seed, estimated) = TimeEstimation::estimate(|| DatabaseLoader::load(path));

        database.seed(seed?).await?;

        info!("seed loaded from {}: {} ms", path.display(), estimated);
    }

    LeagueTableServer::new(AppData::new(database), config)
        .run()
        .await?;

    Ok(())
}
