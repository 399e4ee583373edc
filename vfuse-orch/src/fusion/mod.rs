//! Signal fusion layer
//!
//! Three pure stages run after the dispatcher's fan-in barrier:
//! - **aggregator**: collapse `SignalResult` records into a payload map plus
//!   human-readable information gaps
//! - **synthesizer**: fuse present signals into three bounded sub-scores via
//!   weighted, renormalizing rules, and merge the evidence list
//! - **label**: map the fused scores to the four-level ordinal label
//!
//! No stage here performs I/O or can fail; missing signals shape the result,
//! they never abort it.

pub mod aggregator;
pub mod label;
pub mod synthesizer;

pub use aggregator::{aggregate, AggregatedSignals};
pub use label::classify_scores;
pub use synthesizer::synthesize;
