//! Application context: every store built once at startup and handed to
//! the presentation layer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use ledgershare_auth::SessionService;
use ledgershare_core::error::PortalResult;
use ledgershare_core::notify::{Notice, Notifier};
use ledgershare_core::repository::SessionStorage;
use ledgershare_portal::{
    AccountantDashboard, ClientDashboard, ClientRegistry, DocumentRegistry, RegistryConfig,
};
use ledgershare_store::{
    InMemoryBackend, InMemoryClientRepository, InMemoryDocumentRepository,
    InMemoryIdentityRepository,
};
use serde::Serialize;
use tracing::info;

use crate::routes::{self, Route};
use crate::settings::Settings;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Dashboard {
    Accountant(AccountantDashboard),
    Client(ClientDashboard),
}

pub struct Portal<S: SessionStorage> {
    pub session: SessionService<InMemoryIdentityRepository, S>,
    pub clients: ClientRegistry<InMemoryClientRepository, InMemoryDocumentRepository>,
    pub documents: DocumentRegistry<InMemoryDocumentRepository>,
    notifier: Arc<dyn Notifier>,
    registry: RegistryConfig,
}

impl<S: SessionStorage> Portal<S> {
    pub fn new(settings: &Settings, storage: S, notifier: Arc<dyn Notifier>) -> Self {
        let backend = InMemoryBackend::from_config(&settings.store);
        Self {
            session: SessionService::new(
                backend.identities,
                storage,
                notifier.clone(),
                settings.auth.clone(),
            ),
            clients: ClientRegistry::new(
                backend.clients,
                backend.documents.clone(),
                notifier.clone(),
                settings.registry.clone(),
            ),
            documents: DocumentRegistry::new(backend.documents, notifier.clone()),
            notifier,
            registry: settings.registry.clone(),
        }
    }

    /// Restore the persisted session, if any.
    pub async fn start(&self) -> PortalResult<()> {
        match self.session.restore().await? {
            Some(identity) => info!(id = %identity.id, "resuming session"),
            None => info!("starting without a session"),
        }
        Ok(())
    }

    /// Resolve the view a visitor lands on for `target`.
    ///
    /// Beyond the session guard, a client detail page for a client that
    /// no longer exists falls back to the client list.
    pub async fn navigate(&self, target: &str) -> PortalResult<Route> {
        let viewer = self.session.current().await;
        let route = routes::guard(Route::parse(target), viewer.as_ref());

        if let Route::ClientDetail(id) = &route {
            if self.clients.get(id).await?.is_none() {
                self.notifier.notify(Notice::error("Client not found"));
                return Ok(Route::Clients);
            }
        }
        Ok(route)
    }

    /// Dashboard for whoever is signed in; `None` without a session.
    pub async fn dashboard(&self, now: DateTime<Utc>) -> PortalResult<Option<Dashboard>> {
        let Some(viewer) = self.session.current().await else {
            return Ok(None);
        };
        let documents = self.documents.list().await?;
        let limit = self.registry.recent_limit;

        let dashboard = if viewer.is_accountant() {
            let clients = self.clients.list().await?;
            Dashboard::Accountant(AccountantDashboard::build(&clients, &documents, now, limit))
        } else {
            Dashboard::Client(ClientDashboard::build(&viewer, &documents, now, limit))
        };
        Ok(Some(dashboard))
    }
}
