//! Console application support: configuration, the shared context, menu commands, pagination
//! and table rendering. Terminal I/O itself lives in the `rental-explorer` binary.

pub mod command;
pub mod config;
pub mod context;
pub mod pagination;
pub mod render;

pub use command::{execute, Command, Outcome};
pub use config::AppConfig;
pub use context::AppContext;
pub use pagination::{paginate, Page, PageNav};
pub use render::{render_page, render_rows, render_table};
