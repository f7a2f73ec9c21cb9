//! The seeded EcoLearn lessons as ready-made quiz definitions.
//!
//! Option values are stringified option indices; the scoring endpoint
//! compares them against the stored index of the correct answer.

pub mod biodiversity;
pub mod climate;
pub mod waste;

pub use biodiversity::biodiversity;
pub use climate::climate_change;
pub use waste::waste_management;

use ecolearn_types::AnswerOption;

/// Build options whose submission values are their indices.
fn indexed_options<const N: usize>(labels: [&str; N]) -> Vec<AnswerOption> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| AnswerOption::new(index.to_string(), *label))
        .collect()
}
