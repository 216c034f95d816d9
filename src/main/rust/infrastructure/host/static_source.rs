use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::ports::StatsSource;

/// Stats source holding counts set by the owner
///
/// Stands in for a live bot when the reporter runs as a standalone daemon;
/// counts can be updated while the reporter is running.
#[derive(Debug, Default)]
pub struct StaticStatsSource {
    servers: AtomicU64,
    shards: AtomicU64,
}

impl StaticStatsSource {
    pub fn new(servers: u64, shards: u64) -> Self {
        Self {
            servers: AtomicU64::new(servers),
            shards: AtomicU64::new(shards),
        }
    }

    pub fn set_servers(&self, servers: u64) {
        self.servers.store(servers, Ordering::SeqCst);
    }

    pub fn set_shards(&self, shards: u64) {
        self.shards.store(shards, Ordering::SeqCst);
    }
}

impl StatsSource for StaticStatsSource {
    fn server_count(&self) -> u64 {
        self.servers.load(Ordering::SeqCst)
    }

    fn shard_count(&self) -> u64 {
        self.shards.load(Ordering::SeqCst)
    }
}
