use mini_idp::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    let state = AppState::new(config.clone());
    let app = router(state);

    Server::new(config).serve(app).await
}
