//! Per-run wiring: configuration, credential store and API client.

use crate::cli::Cli;
use crate::error::TasknotesError;

use client_core::credential_store::{CredentialStore, MemoryCredentialStore, platform_store};
use client_core::list_sync::{ListController, ListOptions, LogNotifier, Notifier, PageFetcher};
use client_core::{ApiClient, ClientConfig, Session};

use models::{Note, Task};

use std::sync::Arc;

use log::debug;

pub struct AppContext {
    pub config: ClientConfig,
    pub client: ApiClient,
}

impl AppContext {
    /// Resolve config, pick the credential store and build the client.
    pub fn bootstrap(cli: &Cli) -> Result<Self, TasknotesError> {
        let config = ClientConfig::load(cli.config.as_deref())?;

        let store: Arc<dyn CredentialStore> = if cli.ephemeral {
            debug!("Ephemeral session: token kept in memory");
            Arc::new(MemoryCredentialStore::new())
        } else {
            platform_store()?
        };

        Ok(Self::new(config, Session::new(store))?)
    }

    pub fn new(config: ClientConfig, session: Session) -> Result<Self, client_core::error::ApiClientError> {
        let client = ApiClient::new(&config, session)?;
        Ok(Self { config, client })
    }

    pub fn task_list(&self) -> ListController<Task> {
        self.list(Arc::new(self.client.task_pages()), "tasks")
    }

    pub fn note_list(&self) -> ListController<Note> {
        self.list(Arc::new(self.client.note_pages()), "notes")
    }

    fn list<T>(&self, fetcher: Arc<dyn PageFetcher<T>>, label: &str) -> ListController<T>
    where
        T: Send + 'static,
    {
        let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);
        ListController::new(fetcher, notifier, ListOptions::from_config(&self.config, label))
    }
}
