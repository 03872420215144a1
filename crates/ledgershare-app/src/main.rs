//! LedgerShare — application entry point.
//!
//! Usage: `ledgershare [login <email> | logout | open <path>]`. Without a
//! command the dashboard is opened.

mod context;
mod routes;
mod settings;

use std::sync::Arc;

use anyhow::Context as _;
use chrono::Utc;
use ledgershare_auth::LoginInput;
use ledgershare_core::notify::TracingNotifier;
use ledgershare_core::repository::SessionStorage;
use ledgershare_store::{FileSessionStorage, MemorySessionStorage};
use tracing_subscriber::EnvFilter;

use crate::context::Portal;
use crate::routes::Route;
use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ledgershare=info".parse()?))
        .json()
        .init();

    let settings = Settings::new().context("loading settings")?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    tracing::info!("Starting LedgerShare...");
    match settings.session.storage_dir.clone() {
        Some(dir) => run(&settings, FileSessionStorage::new(dir), &args).await?,
        None => run(&settings, MemorySessionStorage::new(), &args).await?,
    }
    tracing::info!("LedgerShare stopped.");
    Ok(())
}

async fn run<S: SessionStorage>(
    settings: &Settings,
    storage: S,
    args: &[String],
) -> anyhow::Result<()> {
    let portal = Portal::new(settings, storage, Arc::new(TracingNotifier));
    portal.start().await?;

    let target = match args {
        [cmd, email] if cmd == "login" => {
            portal
                .session
                .login(LoginInput {
                    email: email.clone(),
                    password: String::new(),
                })
                .await?;
            "/dashboard".to_owned()
        }
        [cmd] if cmd == "logout" => {
            portal.session.logout().await?;
            "/".to_owned()
        }
        [cmd, path] if cmd == "open" => path.clone(),
        [] => "/dashboard".to_owned(),
        other => anyhow::bail!("unrecognized arguments: {other:?}"),
    };

    let route = portal.navigate(&target).await?;
    tracing::info!(requested = %target, landed = %route.path(), "navigation resolved");

    if route == Route::Dashboard {
        if let Some(dashboard) = portal.dashboard(Utc::now()).await? {
            let summary = serde_json::to_string(&dashboard)?;
            tracing::info!(%summary, "dashboard");
        }
    }
    Ok(())
}
