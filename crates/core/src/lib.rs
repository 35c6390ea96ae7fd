pub mod catalog;
pub mod config;
pub mod remote;
pub mod search;
pub mod testing;

pub use catalog::{
    filter_by_status, partition_by_status, Book, BookCatalog, CatalogError, ReadingStatus,
    SqliteCatalog, UNASSIGNED_ID,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DatabaseConfig,
    RemoteConfig, SearchConfig,
};
pub use remote::{
    normalize, GoogleBooksClient, GoogleBooksConfig, NormalizeContext, RemoteCatalog, RemoteError,
    SearchCandidate,
};
pub use search::{SearchController, SearchOptions, SearchPhase, SearchState};
