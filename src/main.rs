use lemmy_stream::config::{self, Resource};
use lemmy_stream::err::FatalErr;
use lemmy_stream::event::{CommentView, PostView, StreamItem, Submission};
use lemmy_stream::request::Client;
use lemmy_stream::response::{Cooldown, Engine, Supervisor};

use tokio::runtime::Runtime;
use tokio::signal;

fn main() -> Result<(), FatalErr> {
    config::merge_dotenv()?;
    pretty_env_logger::try_init()?;
    let (lemmy_cfg, stream_cfg) = config::from_env(dotenv::vars().collect())?;

    let client = Client::new(&lemmy_cfg)?;
    let runtime = Runtime::new()?;
    let client = runtime.block_on(async move {
        match *stream_cfg.resource {
            Resource::Comments => supervise::<CommentView>(client, &stream_cfg).await,
            Resource::Posts => supervise::<PostView>(client, &stream_cfg).await,
        }
    });
    client.close();
    Ok(())
}

async fn supervise<T>(client: Client, cfg: &config::Stream) -> Client
where
    T: StreamItem + Into<Submission>,
{
    log::info!("Streaming new {} until interrupted", *cfg.resource);
    let engine: Engine<Client, T> = Engine::from_cfg(client, cfg);
    let supervisor = Supervisor::new(engine, Cooldown::from_cfg(cfg));
    supervisor
        .run(
            |item: T| async move {
                let item: Submission = item.into();
                log::info!("New {}: {} by {}", *cfg.resource, item.id(), item.author().name);
            },
            shutdown_signal(),
        )
        .await
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => log::info!("Received Ctrl-C; shutting down"),
        Err(e) => {
            log::error!("Cannot listen for Ctrl-C ({}); streaming until killed", e);
            std::future::pending::<()>().await
        }
    }
}
