// SPDX-License-Identifier: MPL-2.0
//! Data supplied by the diagnosis/retrieval collaborator.
//!
//! Everything here is externally produced and immutable from the viewer's
//! point of view: diagnostic markers, similar-case records, and analysis
//! explanations with citation tokens.

pub mod citation;
pub mod diagnosis;

pub use citation::{parse_citations, CitationSegment};
pub use diagnosis::{AnalysisOutcome, CaseFile, Diagnosis, Marker, MarkerKind, SimilarEcg};
