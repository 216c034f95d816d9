mod static_source;

pub use static_source::StaticStatsSource;
