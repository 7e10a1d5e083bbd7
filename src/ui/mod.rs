mod app;
pub mod collapse;
pub mod components;
pub mod compose;
pub mod layout;
pub mod scroll;
mod state;

pub use app::ChatApp;
