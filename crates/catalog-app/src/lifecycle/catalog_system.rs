use crate::api::CatalogApi;
use crate::clients::{AdminClient, BrowseClient};
use crate::config::CatalogConfig;
use crate::context::CatalogContext;
use crate::{admin_screen, browse_screen};
use std::sync::Arc;
use tracing::{error, info};

/// Runs the admin and browse screens.
///
/// The two screens share nothing but the API handle; each loads its own data
/// on mount.
pub struct CatalogSystem {
    /// Client for the catalog admin screen
    pub admin: AdminClient,

    /// Client for the category browse screen
    pub browse: BrowseClient,

    /// Task handles for both screens (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Spawns both screens. Each starts loading as soon as it is mounted.
    ///
    /// `category` is the browse screen's initial navigation parameter.
    pub fn start(
        api: Arc<dyn CatalogApi>,
        config: &CatalogConfig,
        category: Option<String>,
    ) -> Self {
        let context = CatalogContext::from_config(api, config);

        let (admin_actor, admin_client) = admin_screen::new(config.channel_capacity);
        let (browse_actor, browse_client) = browse_screen::new(category, config.channel_capacity);

        let admin_handle = tokio::spawn(admin_actor.run(context.clone()));
        let browse_handle = tokio::spawn(browse_actor.run(context));

        Self {
            admin: AdminClient::new(admin_client),
            browse: BrowseClient::new(browse_client),
            handles: vec![admin_handle, browse_handle],
        }
    }

    /// Drops both clients and waits for the screens to unmount.
    ///
    /// Returns an error if a screen task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down screens...");

        drop(self.admin);
        drop(self.browse);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Screen task failed: {:?}", e);
                return Err(format!("Screen task failed: {:?}", e));
            }
        }

        info!("Screens shut down.");
        Ok(())
    }
}
