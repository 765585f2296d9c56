pub mod align;
pub mod config;
pub mod cross;
pub mod meiosis;
pub mod pair;

use synapsis_engine::alignment::lcs_similarity;
use synapsis_engine::MetricSense;

fn lcs_distance(a: &[String], b: &[String]) -> f64 {
    1.0 - lcs_similarity(a, b)
}

/// Pairing metric between token sequences for the configured sense.
pub fn sequence_metric(sense: MetricSense) -> fn(&[String], &[String]) -> f64 {
    match sense {
        MetricSense::MoreIsMoreAlike => lcs_similarity::<String>,
        MetricSense::LessIsMoreAlike => lcs_distance,
    }
}
