use rotor_temperature::{AppState, Config, serve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let state = AppState::load(&config);

    serve(&config, state).await
}
