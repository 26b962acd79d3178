// SPDX-License-Identifier: MPL-2.0
//! Explanation panel below the panes: diagnosis summary, similar-case line,
//! and the analysis explanation with clickable citation links.

use crate::domain::{parse_citations, AnalysisOutcome, CitationSegment, Diagnosis, SimilarEcg};
use crate::ui::comparison::component::Message;
use iced::widget::{button, Column, Row, Text};
use iced::Element;

pub fn view<'a>(
    diagnosis: Option<&'a Diagnosis>,
    similar: Option<&'a SimilarEcg>,
    outcome: Option<&'a AnalysisOutcome>,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(6);

    if let Some(diagnosis) = diagnosis {
        column = column.push(Text::new(format!(
            "Diagnosis: {} ({:.1}% confidence)",
            diagnosis.labels_to_string(),
            diagnosis.confidence * 100.0
        )));
        if let Some(severity) = &diagnosis.severity {
            column = column.push(Text::new(format!("Severity: {severity}")));
        }
    }

    if let Some(similar) = similar {
        column = column.push(Text::new(format!(
            "Similar case: {} ({:.0}% similarity, {})",
            similar.diagnosis.labels_to_string(),
            similar.similarity * 100.0,
            similar.date
        )));
    }

    if let Some(outcome) = outcome {
        if !outcome.explanation.is_empty() {
            column = column.push(explanation(&outcome.explanation, &outcome.citations));
        }
    } else if let Some(diagnosis) = diagnosis {
        if !diagnosis.explanation.is_empty() {
            column = column.push(explanation(&diagnosis.explanation, &[]));
        }
    }

    column.into()
}

/// Renders an explanation with its `[n]` tokens turned into link buttons.
fn explanation<'a>(text: &str, citations: &[String]) -> Element<'a, Message> {
    let mut row = Row::new().align_y(iced::Alignment::Center);

    for segment in parse_citations(text, citations) {
        row = match segment {
            CitationSegment::Text(chunk) => row.push(Text::new(chunk)),
            CitationSegment::Link { label, url } => row.push(
                button(Text::new(label))
                    .padding(0)
                    .style(button::text)
                    .on_press(Message::OpenCitation(url)),
            ),
        };
    }

    row.into()
}
