use std::future::Future;

use tokio::runtime::{Builder, Handle, Runtime};

use super::{PgProber, Prober, ProberOptions};
use crate::error::ProbeError;
use crate::types::{Field, Relation, Table};

/// A [`Prober`] that drives a [`PgProber`] on its own current-thread runtime.
///
/// Every call blocks until its queries complete. Calls on one instance are
/// meant to be sequential.
pub struct BlockingProber {
    inner: PgProber,
    // Only taken in `Drop`.
    runtime: Option<Runtime>,
}

impl BlockingProber {
    /// Connects to `url` and prepares the catalog statements.
    ///
    /// # Panics
    /// Panics when called from within a Tokio runtime, since it blocks on its
    /// own. Use [`PgProber`] directly from async code.
    pub fn connect(url: &str, options: ProberOptions) -> Result<Self, ProbeError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProbeError::Runtime)?;
        let inner = runtime.block_on(PgProber::connect(url, options))?;
        Ok(Self {
            inner,
            runtime: Some(runtime),
        })
    }

    /// The wrapped async prober.
    pub fn inner(&self) -> &PgProber {
        &self.inner
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime
            .as_ref()
            .expect("runtime is present until drop")
            .block_on(future)
    }
}

impl Prober for BlockingProber {
    fn list_relations(&self) -> Result<Vec<Relation>, ProbeError> {
        self.block_on(self.inner.list_relations())
    }

    fn fetch_fields(&self, table_name: &str) -> Result<Vec<Field>, ProbeError> {
        self.block_on(self.inner.fetch_fields(table_name))
    }

    fn fetch_table(&self, table_name: &str) -> Result<Table, ProbeError> {
        self.block_on(self.inner.fetch_table(table_name))
    }
}

impl Drop for BlockingProber {
    /// Closes the pool and stops the runtime.
    ///
    /// Inside another Tokio runtime neither blocking nor a blocking runtime
    /// shutdown is allowed, so the pool is not closed explicitly and the
    /// runtime is shut down in the background.
    fn drop(&mut self) {
        let Some(runtime) = self.runtime.take() else {
            return;
        };
        if Handle::try_current().is_ok() {
            runtime.shutdown_background();
            return;
        }
        runtime.block_on(self.inner.close());
    }
}
