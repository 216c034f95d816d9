use crate::domain::value_objects::StatsSnapshot;

/// Port for the host application whose statistics are published
///
/// Reads are synchronous and must not perform I/O; they are taken fresh
/// on every send.
pub trait StatsSource: Send + Sync {
    fn server_count(&self) -> u64;
    fn shard_count(&self) -> u64;

    fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot::new(self.server_count(), self.shard_count())
    }
}
