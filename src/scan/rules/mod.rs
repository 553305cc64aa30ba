//! Built-in scan rules.
//!
//! Each rule inspects one artifact class. Line-oriented rules
//! ([`CredentialsRule`], [`SqlInjectionRule`]) report every match with a
//! location; hygiene rules ([`DockerfileRule`], [`ProxyHeadersRule`],
//! [`DatastoreRule`], [`BackupRule`]) only ever warn.

pub mod backup;
pub mod credentials;
pub mod datastore;
pub mod debug_mode;
pub mod dockerfile;
pub mod env_file;
pub mod ignore_file;
pub mod pinning;
pub mod proxy_headers;
pub mod sql_injection;

pub use backup::BackupRule;
pub use credentials::CredentialsRule;
pub use datastore::DatastoreRule;
pub use debug_mode::DebugModeRule;
pub use dockerfile::DockerfileRule;
pub use env_file::EnvFileRule;
pub use ignore_file::IgnoreFileRule;
pub use pinning::DependencyPinningRule;
pub use proxy_headers::ProxyHeadersRule;
pub use sql_injection::SqlInjectionRule;
