// SPDX-License-Identifier: MPL-2.0
//! Text layout helpers for the report: greedy word wrapping and the
//! measurement summary lines.

use crate::ui::state::MeasurementRecord;

/// Greedy word wrap to a maximum line length in characters. Words longer
/// than the limit get a line of their own rather than being split.
#[must_use]
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
            } else if line.chars().count() + 1 + word.chars().count() <= max_chars {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines
}

/// One summary line per measurement, numbered from 1.
#[must_use]
pub fn measurement_line(index: usize, record: &MeasurementRecord) -> String {
    format!(
        "Measurement {}: {:.1} ms ({:.1} px)",
        index + 1,
        record.time_distance,
        record.pixel_distance
    )
}
