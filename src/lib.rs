//! E-Connect: a small chat room client built on egui.
//!
//! The [`feed`] task owns the message sequence; the [`ui`] subscribes to it
//! and only ever appends through a [`feed::FeedHandle`].

pub mod common;
pub mod config;
pub mod feed;
pub mod ui;

pub use common::{Message, MessageSequence};
