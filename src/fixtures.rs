//! Whole serde records built from the compositors, for seeding fixtures.

use serde::Deserialize;
use serde::Serialize;

use crate::Sampler;
use crate::UniformSource;

pub mod exchange;
pub mod person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FixtureKind {
    Person,
    Exchange,
}

/// `count` records of the given kind, as a JSON array.
pub fn generate<S: UniformSource>(
    sampler: &Sampler<S>,
    kind: FixtureKind,
    count: usize,
) -> serde_json::Result<serde_json::Value> {
    match kind {
        FixtureKind::Person => {
            serde_json::to_value((0..count).map(|_| person::Person::rand(sampler)).collect::<Vec<_>>())
        }
        FixtureKind::Exchange => serde_json::to_value(
            (0..count)
                .map(|_| exchange::Exchange::rand(sampler))
                .collect::<Vec<_>>(),
        ),
    }
}
