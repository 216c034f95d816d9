use async_trait::async_trait;

use crate::domain::errors::Result;
use crate::domain::value_objects::{Endpoint, StatsSnapshot};

/// Port for the network client delivering snapshots
#[async_trait]
pub trait StatsTransport: Send + Sync {
    /// POST the snapshot as JSON and return the response status code
    ///
    /// Connection, DNS and timeout failures are reported as
    /// `DomainError::Transport`; any HTTP response is `Ok`.
    async fn post_snapshot(&self, endpoint: &Endpoint, snapshot: &StatsSnapshot) -> Result<u16>;
}
