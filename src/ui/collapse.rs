//! Read more / read less support for long messages.
//!
//! A message is collapsed to a fixed number of text lines when its laid-out
//! height exceeds that budget. Expansion state lives per message id and is
//! dropped as soon as the message text changes.

use std::collections::{HashMap, HashSet};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::common::{Message, MessageSequence};

pub const DEFAULT_COLLAPSED_LINES: usize = 5;

// Fraction of a line. Layout rounding can push an exact N-line galley a hair
// over N rows, and a real extra line always adds a whole row.
const LINE_TOLERANCE: f32 = 0.5;

/// Laid-out size of a message body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub natural_height: f32,
    pub line_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Fits,
    Overflows,
    /// No usable measurement; the text is shown in full.
    Unmeasured,
}

impl Overflow {
    pub fn shows_toggle(self) -> bool {
        self == Overflow::Overflows
    }
}

pub fn detect_overflow(measurement: Option<Measurement>, max_lines: usize) -> Overflow {
    let Some(measurement) = measurement else {
        return Overflow::Unmeasured;
    };
    let Measurement {
        natural_height,
        line_height,
    } = measurement;

    if !line_height.is_finite() || line_height <= 0.0 || !natural_height.is_finite() {
        return Overflow::Unmeasured;
    }

    let budget = collapsed_height(line_height, max_lines) + line_height * LINE_TOLERANCE;
    if natural_height > budget {
        Overflow::Overflows
    } else {
        Overflow::Fits
    }
}

pub fn collapsed_height(line_height: f32, max_lines: usize) -> f32 {
    line_height * max_lines as f32
}

/// Height to show for a message body.
///
/// `openness` runs from 0.0 (collapsed) to 1.0 (expanded) while the
/// transition animates.
pub fn visible_height(
    overflow: Overflow,
    measurement: Measurement,
    max_lines: usize,
    openness: f32,
) -> f32 {
    match overflow {
        Overflow::Overflows => {
            let cap = collapsed_height(measurement.line_height, max_lines);
            let openness = openness.clamp(0.0, 1.0);
            cap + (measurement.natural_height - cap) * openness
        }
        Overflow::Fits | Overflow::Unmeasured => measurement.natural_height,
    }
}

pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded { "Read less" } else { "Read more" }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    fingerprint: u64,
    expanded: bool,
}

/// Expanded/collapsed flag per message id.
#[derive(Debug, Default)]
pub struct ExpansionStore {
    entries: HashMap<u64, Entry>,
}

impl ExpansionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&mut self, message: &Message) -> bool {
        self.entry(message).expanded
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&mut self, message: &Message) -> bool {
        let entry = self.entry(message);
        entry.expanded = !entry.expanded;
        entry.expanded
    }

    /// Forgets messages that are no longer in `sequence`.
    pub fn retain_present(&mut self, sequence: &MessageSequence) {
        if self.entries.is_empty() {
            return;
        }
        let present: HashSet<u64> = sequence.iter().map(|message| message.id).collect();
        self.entries.retain(|id, _| present.contains(id));
    }

    fn entry(&mut self, message: &Message) -> &mut Entry {
        let fingerprint = fingerprint(&message.text);
        let entry = self.entries.entry(message.id).or_insert(Entry {
            fingerprint,
            expanded: false,
        });
        if entry.fingerprint != fingerprint {
            *entry = Entry {
                fingerprint,
                expanded: false,
            };
        }
        entry
    }
}

fn fingerprint(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}
