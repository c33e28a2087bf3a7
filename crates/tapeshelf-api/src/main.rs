use tapeshelf_api::{setup, CollaboratorRoutes};
use tapeshelf_core::Config;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    // Auth and video-tape routes are provided by their own services; none are mounted here.
    let (_state, router) =
        setup::initialize_app(config.clone(), CollaboratorRoutes::default()).await?;

    setup::server::start_server(&config, router).await?;

    Ok(())
}
