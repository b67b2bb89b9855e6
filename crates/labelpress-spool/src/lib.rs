//! # labelpress-spool: Settings, Discovery and Raw Transport
//!
//! Everything around the pure engine that touches the outside world.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     labelpress-spool (THIS CRATE)                       │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌─────────────────────────────┐   │
//! │  │   settings   │  │  discovery   │  │           queue             │   │
//! │  │              │  │              │  │                             │   │
//! │  │ station.toml │  │ lsusb 0a5f:  │  │ lp -d <name> -o raw -       │   │
//! │  │ env override │  │ lpstat -p    │  │ cancel -a <name>            │   │
//! │  └──────┬───────┘  └──────┬───────┘  └──────────────┬──────────────┘   │
//! │         │                 │                         │                   │
//! │         └────────┬────────┴────────┬────────────────┘                   │
//! │                  ▼                 ▼                                    │
//! │          ┌──────────────────────────────┐                              │
//! │          │          dispatch            │  compile → warn → submit     │
//! │          └──────────────────────────────┘                              │
//! │                                                                         │
//! │  DEPENDENCIES:                                                         │
//! │  • labelpress-core: value types, units::resolve, zpl::compile          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`settings`] - Station settings persistence (TOML + env overrides)
//! - [`discovery`] - USB attachment and CUPS queue registration probes
//! - [`queue`] - Raw print queue transport (no byte is ever transformed)
//! - [`dispatch`] - Compile-then-submit orchestration with advisory logging
//! - [`error`] - Spool error types

pub mod discovery;
pub mod dispatch;
pub mod error;
pub mod queue;
pub mod settings;

pub use discovery::PrinterStatus;
pub use dispatch::dispatch;
pub use error::{SpoolError, SpoolResult};
pub use queue::RawPrintQueue;
pub use settings::StationSettings;
