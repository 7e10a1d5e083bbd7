use eframe::egui;

use crate::common::Message;

/// Share of the list width a single bubble may take.
pub const BUBBLE_WIDTH_FRACTION: f32 = 0.7;
pub const BUBBLE_RADIUS: u8 = 8;
pub const TAIL_SIZE: f32 = 8.0;

/// Which edge of the list a bubble hugs: the local user's own messages on
/// the right, everyone else's on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn of(message: &Message) -> Self {
        if message.sent_by_local_user {
            Side::Right
        } else {
            Side::Left
        }
    }

    /// Cross-axis alignment for a top-down layout.
    pub fn align(self) -> egui::Align {
        match self {
            Side::Left => egui::Align::Min,
            Side::Right => egui::Align::Max,
        }
    }

    /// Bubble corners; the corner the tail attaches to stays square.
    pub fn corner_radius(self) -> egui::CornerRadius {
        let r = BUBBLE_RADIUS;
        match self {
            Side::Left => egui::CornerRadius {
                nw: 0,
                ne: r,
                sw: r,
                se: r,
            },
            Side::Right => egui::CornerRadius {
                nw: r,
                ne: 0,
                sw: r,
                se: r,
            },
        }
    }

    /// Triangle hanging off the bubble's top corner on this side.
    pub fn tail(self, bubble: egui::Rect) -> [egui::Pos2; 3] {
        let top = bubble.top();
        match self {
            Side::Left => {
                let x = bubble.left();
                [
                    egui::pos2(x + TAIL_SIZE, top),
                    egui::pos2(x - TAIL_SIZE, top),
                    egui::pos2(x + TAIL_SIZE, top + 2.0 * TAIL_SIZE),
                ]
            }
            Side::Right => {
                let x = bubble.right();
                [
                    egui::pos2(x - TAIL_SIZE, top),
                    egui::pos2(x - TAIL_SIZE, top + 2.0 * TAIL_SIZE),
                    egui::pos2(x + TAIL_SIZE, top),
                ]
            }
        }
    }
}
