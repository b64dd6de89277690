//! Storefront Server - storefront and content management backend
//!
//! # Architecture
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # configuration, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, migrations, repositories
//! ├── services/      # upload storage, reviews, page composition
//! └── utils/         # logging
//! ```
//!
//! Entities and payload validation live in the `shared` crate so the typed
//! client can reuse them.

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use api::{build_app, build_router};
pub use core::{Config, Server, ServerState, serve};
pub use db::DbService;
pub use utils::init_logger;

pub fn print_banner() {
    println!(
        r#"
   _____ __                  ____                 __
  / ___// /_____  ________  / __/________  ____  / /_
  \__ \/ __/ __ \/ ___/ _ \/ /_/ ___/ __ \/ __ \/ __/
 ___/ / /_/ /_/ / /  /  __/ __/ /  / /_/ / / / / /_
/____/\__/\____/_/   \___/_/ /_/   \____/_/ /_/\__/
    "#
    );
}
