mod app;
mod args;
mod bench;
mod config;
mod content;
mod entry;
mod error;
mod logger;
mod metrics;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
