//! Label Classifier
//!
//! Pure function of the fused sub-scores to the four-level label, evaluated
//! as a fixed first-match threshold ladder. Lower scores can never produce a
//! safer label than higher scores. The explainability score never shifts the
//! label; it is surfaced so callers can discount low-confidence verdicts.

use crate::types::{AnalysisLabel, FusedAssessment};

/// Below this authenticity, content is flagged RED
pub const RED_AUTHENTICITY_CEILING: f32 = 30.0;
/// Below this authenticity, at best ORANGE
pub const ORANGE_AUTHENTICITY_CEILING: f32 = 55.0;
/// Below this integrity, at best ORANGE
pub const ORANGE_INTEGRITY_FLOOR: f32 = 35.0;
/// Below this authenticity, at best YELLOW
pub const YELLOW_AUTHENTICITY_CEILING: f32 = 80.0;
/// Below this integrity, at best YELLOW
pub const YELLOW_INTEGRITY_FLOOR: f32 = 65.0;

/// Classify a fused assessment
pub fn classify(assessment: &FusedAssessment) -> AnalysisLabel {
    classify_scores(
        assessment.content_authenticity_score,
        assessment.source_integrity_score,
    )
}

/// Classify from the two label-relevant scores (first match wins)
pub fn classify_scores(content_authenticity: f32, source_integrity: f32) -> AnalysisLabel {
    if content_authenticity < RED_AUTHENTICITY_CEILING {
        AnalysisLabel::Red
    } else if content_authenticity < ORANGE_AUTHENTICITY_CEILING
        || source_integrity < ORANGE_INTEGRITY_FLOOR
    {
        AnalysisLabel::Orange
    } else if content_authenticity < YELLOW_AUTHENTICITY_CEILING
        || source_integrity < YELLOW_INTEGRITY_FLOOR
    {
        AnalysisLabel::Yellow
    } else {
        AnalysisLabel::Green
    }
}

// ============================================================================
// Tests
// ============================================================================
