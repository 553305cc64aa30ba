//! shipcheck - Pre-deploy security posture checks.
//!
//! shipcheck statically inspects a web application's source tree and its
//! deployment artifacts (environment file, ignore file, dependency
//! manifest, container and proxy configuration, orchestration manifest,
//! backup tooling), reports each observation as passed, warning or issue,
//! and derives a single verdict that maps to the process exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Scan configuration and deployment stage configuration
//! - [`error`] - Error types and result aliases
//! - [`scan`] - Rules, findings, scanning and report rendering
//! - [`ui`] - Terminal output and styling
//!
//! # Example
//!
//! ```no_run
//! use shipcheck::config::ScanConfig;
//! use shipcheck::scan::{HumanFormatter, ScanContext, Scanner};
//!
//! let ctx = ScanContext::new("/srv/app", ScanConfig::default());
//! let report = Scanner::with_builtins().collect(&ctx);
//! let verdict = report
//!     .render(&HumanFormatter::new(false), &mut std::io::stdout())
//!     .unwrap();
//! std::process::exit(i32::from(verdict.exit_code()));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod scan;
pub mod ui;

pub use error::{Result, ShipcheckError};
