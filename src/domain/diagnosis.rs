// SPDX-License-Identifier: MPL-2.0
//! Diagnosis payloads produced by the analysis backend.
//!
//! The backend serves JSON; field names follow its camelCase wire format.
//! Markers use percentage-of-image coordinates and never re-project under
//! the viewer's pan/zoom transform.

use serde::{Deserialize, Serialize};

/// Category of a diagnostic region, as classified by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerKind {
    StElevation,
    QWave,
    Arrhythmia,
}

/// A diagnostic bounding box over the scan, in percentages of the image's
/// native box (`x`, `y` top-left corner; `width`, `height` extents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: MarkerKind,
}

/// A diagnosis for one scan: classification labels, confidence, a free-text
/// explanation, and the marker overlay regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    /// Classification labels. Older payloads carry a single `label` string;
    /// both spellings are accepted on input.
    #[serde(alias = "label", deserialize_with = "one_or_many", default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Model confidence in `[0, 1]`.
    pub confidence: f32,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub severity: Option<String>,
}

impl Diagnosis {
    /// Joined label list for display, matching the dashboard's formatting.
    #[must_use]
    pub fn labels_to_string(&self) -> String {
        self.labels.join(", ")
    }
}

/// A historically similar case retrieved for side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarEcg {
    #[serde(default)]
    pub image_url: Option<String>,
    /// Retrieval similarity in `[0, 1]`.
    pub similarity: f32,
    pub diagnosis: Diagnosis,
    /// Acquisition date of the historical case, as reported by the backend.
    pub date: String,
}

/// Result of the asynchronous upload/analysis pipeline: confidence, labels,
/// an explanation possibly containing `"[n]"` citation tokens, and the
/// ordered citation URL list those tokens index into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub confidence: f32,
    #[serde(alias = "label", deserialize_with = "one_or_many", default)]
    pub labels: Vec<String>,
    #[serde(alias = "diagnosis_text", default)]
    pub explanation: String,
    #[serde(alias = "links", default)]
    pub citations: Vec<String>,
}

/// On-disk stand-in for the retrieval backend: a JSON document bundling the
/// primary diagnosis with the retrieved similar case and the pipeline outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseFile {
    pub diagnosis: Diagnosis,
    #[serde(default)]
    pub similar: Option<SimilarEcg>,
    #[serde(default)]
    pub outcome: Option<AnalysisOutcome>,
}

impl CaseFile {
    /// Loads and parses a case file from disk.
    pub fn load(path: &std::path::Path) -> crate::error::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let case = serde_json::from_str(&contents)?;
        Ok(case)
    }
}

/// Accepts either a single string or a list of strings.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(label) => vec![label],
        OneOrMany::Many(labels) => labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_kind_uses_kebab_case_wire_names() {
        let json = r#"{"x":15.0,"y":30.0,"width":25.0,"height":15.0,"label":"AF burden","type":"arrhythmia"}"#;
        let marker: Marker = serde_json::from_str(json).expect("parse marker");
        assert_eq!(marker.kind, MarkerKind::Arrhythmia);
        assert_eq!(marker.x, 15.0);
        assert_eq!(marker.height, 15.0);

        let st: MarkerKind = serde_json::from_str("\"st-elevation\"").expect("parse kind");
        assert_eq!(st, MarkerKind::StElevation);
    }

    #[test]
    fn diagnosis_accepts_single_label_alias() {
        let json = r#"{"label":"STEMI","confidence":0.93,"explanation":"","markers":[]}"#;
        let diagnosis: Diagnosis = serde_json::from_str(json).expect("parse diagnosis");
        assert_eq!(diagnosis.labels, vec!["STEMI".to_string()]);
    }

    #[test]
    fn diagnosis_accepts_label_list() {
        let json = r#"{"labels":["STEMI","LBBB"],"confidence":0.8}"#;
        let diagnosis: Diagnosis = serde_json::from_str(json).expect("parse diagnosis");
        assert_eq!(diagnosis.labels_to_string(), "STEMI, LBBB");
        assert!(diagnosis.markers.is_empty());
    }

    #[test]
    fn case_file_round_trips() {
        let case = CaseFile {
            diagnosis: Diagnosis {
                labels: vec!["STEMI".into()],
                image_url: Some("scans/base.png".into()),
                confidence: 0.93,
                explanation: "ST elevation in V2-V4 [1]".into(),
                markers: vec![Marker {
                    x: 15.0,
                    y: 30.0,
                    width: 25.0,
                    height: 15.0,
                    label: "ST".into(),
                    kind: MarkerKind::StElevation,
                }],
                severity: Some("high".into()),
            },
            similar: Some(SimilarEcg {
                image_url: Some("scans/similar.png".into()),
                similarity: 0.87,
                diagnosis: Diagnosis {
                    labels: vec!["STEMI".into()],
                    image_url: None,
                    confidence: 0.9,
                    explanation: String::new(),
                    markers: Vec::new(),
                    severity: None,
                },
                date: "2023-11-02".into(),
            }),
            outcome: None,
        };

        let json = serde_json::to_string(&case).expect("serialize");
        let parsed: CaseFile = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, case);
    }

    #[test]
    fn outcome_accepts_backend_field_aliases() {
        let json = r#"{"confidence":0.7,"label":"NSR","diagnosis_text":"See [1]","links":["https://example.org/a"]}"#;
        let outcome: AnalysisOutcome = serde_json::from_str(json).expect("parse outcome");
        assert_eq!(outcome.labels, vec!["NSR".to_string()]);
        assert_eq!(outcome.citations.len(), 1);
        assert_eq!(outcome.explanation, "See [1]");
    }
}
