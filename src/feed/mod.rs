mod client;
mod error;
mod handle;
mod seed;

pub use client::ChatFeed;
pub use error::FeedError;
pub use handle::FeedHandle;
pub use seed::load_seed;
