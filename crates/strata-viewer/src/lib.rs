//! # strata-viewer
//!
//! Orchestration for Strata: [`Viewer`] runs the whole pipeline for one value,
//! and [`run`] shows the resulting element full screen.
//!
//! ```text
//! Value ──render(registry)──▶ ComponentOutput ──hydrate(map)──▶ Element ──run──▶ terminal
//! ```
//!
//! ## Keys
//!
//! | key | action |
//! |---|---|
//! | `q` `Esc` `Ctrl+C` | quit |
//! | `↓` `j` / `↑` `k` | scroll one step |
//! | `PageDown` / `PageUp` | scroll one screen |
//! | `Home` / `End` | jump to top / bottom |

mod app;
mod event;
mod run;
mod terminal;
mod ui;
mod viewer;

pub use app::App;
pub use event::{
    is_end_event, is_home_event, is_page_down_event, is_page_up_event, is_quit_event,
    is_scroll_down_event, is_scroll_up_event, poll_event, AppEvent,
};
pub use run::run;
pub use terminal::{init, restore, TerminalGuard, Tui};
pub use viewer::Viewer;

pub use strata_core::{Result, StrataError};
