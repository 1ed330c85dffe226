use crate::cart_actor;
use crate::catalog_actor;
use crate::clients::{CartClient, CatalogClient};
use crate::persist::{NoopSnapshotStore, SnapshotStore};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running storefront: both actors spawned, clients ready.
///
/// ```ignore
/// let system = StorefrontSystem::new();
///
/// let products = system.catalog_client.list_products().await?;
/// system.cart_client.add_item(products[0].clone()).await?;
///
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for the catalog actor.
    pub catalog_client: CatalogClient,

    /// Client for the cart actor.
    pub cart_client: CartClient,

    /// Task handles for the running actors, used for graceful shutdown.
    handles: Vec<JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Builds the system without cart persistence.
    pub fn new() -> Self {
        Self::with_snapshots(NoopSnapshotStore)
    }

    /// Builds the system with the given snapshot store injected into the
    /// cart actor. Must be called from within a Tokio runtime.
    pub fn with_snapshots(snapshots: impl SnapshotStore + 'static) -> Self {
        // 1. Create actors (no dependencies yet).
        let (catalog_actor, catalog_client) = catalog_actor::new();
        let (cart_actor, cart_client) = cart_actor::new();

        // 2. Start actors with their context injected at run time. The
        // catalog has none; the cart receives its snapshot store.
        let catalog_handle = tokio::spawn(catalog_actor.run());
        let cart_handle = tokio::spawn(cart_actor.run(snapshots));

        info!("Storefront system started");
        Self {
            catalog_client,
            cart_client,
            handles: vec![catalog_handle, cart_handle],
        }
    }

    /// Gracefully stops the system.
    ///
    /// Drops the clients so each actor sees its channel close, drains its
    /// queue, and exits; then awaits both task handles so nothing is
    /// lost. Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront system");
        drop(self.catalog_client);
        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {e:?}");
                return Err(format!("Actor task failed: {e:?}"));
            }
        }
        info!("Storefront system stopped");
        Ok(())
    }
}
