use chrono::Utc;
use eframe::egui;

use crate::common::MessageSequence;
use crate::config::AppConfig;
use crate::feed::{FeedError, FeedHandle};

use super::components::{header, input_bar, message_list};
use super::compose;
use super::state::AppState;

pub struct ChatApp {
    state: AppState,
    feed: FeedHandle,
    title: String,
    collapsed_lines: usize,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, feed: FeedHandle, config: &AppConfig) -> Self {
        Self::with_context(&cc.egui_ctx, feed, config)
    }

    fn with_context(ctx: &egui::Context, feed: FeedHandle, config: &AppConfig) -> Self {
        // Repaint when the feed appends instead of on every frame.
        let repaint = ctx.clone();
        feed.notify_on_change(move || repaint.request_repaint());

        Self {
            state: AppState::new(),
            feed,
            title: config.title.clone(),
            collapsed_lines: config.collapsed_lines,
        }
    }

    fn show(&mut self, ctx: &egui::Context) {
        let messages = self.feed.messages();
        self.state.expansion.retain_present(&messages);
        let scroll_target = self.state.scroll.observe(&messages);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::render(ui, &self.title);
        });

        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            ui.add_space(12.0);
            if input_bar::render(ui, &mut self.state.draft) {
                self.submit_draft(ui, &messages);
            }
            ui.add_space(12.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            message_list::render(
                ui,
                &messages,
                &mut self.state.expansion,
                scroll_target,
                self.collapsed_lines,
            );
        });
    }

    fn submit_draft(&mut self, ui: &egui::Ui, messages: &MessageSequence) {
        let feed = &self.feed;
        let next_id = messages.next_id();
        let result = compose::submit_draft(
            &mut self.state.draft,
            next_id.unwrap_or_default(),
            Utc::now(),
            |message| match next_id {
                Some(_) => feed.send_message(message),
                None => Err(FeedError::IdsExhausted),
            },
        );
        if let Err(err) = result {
            log::warn!("Failed to send message: {err}");
        }

        // A single-line field drops focus on Enter, whatever the outcome.
        ui.memory_mut(|memory| memory.request_focus(input_bar::field_id()));
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
