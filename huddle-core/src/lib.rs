//! Huddle core: window session state and game models
//!
//! Everything here is platform-independent and synchronous. The desktop UI
//! keeps a [`ShellCoordinator`] in a signal, feeds it [`ShellEvent`]s from
//! pointer and click handlers, and renders from [`ShellSnapshot`].
//!
//! - `panel` / `geometry` - identifiers and offsets
//! - `window` / `registry` / `coordinator` - the window session
//! - `games` / `countdown` / `catalog` - per-panel game state and content
//! - `config` / `clock` - shell settings and menu-bar text

pub mod catalog;
pub mod clock;
pub mod config;
pub mod coordinator;
pub mod countdown;
pub mod games;
pub mod geometry;
pub mod panel;
pub mod registry;
pub mod snapshot;
pub mod window;

pub use catalog::{load_catalog, CatalogError, GameCatalog, ParkTheme};
pub use config::{load_shell_config, ConfigError, FullScreenExitPolicy, ShellConfig};
pub use coordinator::{ShellCoordinator, ShellEvent};
pub use countdown::{Countdown, TickOutcome};
pub use geometry::Offset;
pub use panel::{PanelKind, ParsePanelError};
pub use registry::WindowRegistry;
pub use snapshot::{LauncherView, ShellSnapshot, WindowView};
pub use window::{DragSession, WindowEntry};
