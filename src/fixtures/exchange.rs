use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::Sampler;
use crate::UniformSource;

const METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];
const PATH_SEGMENTS: std::ops::RangeInclusive<i64> = 1..=4;
const LATENCY_MS: std::ops::RangeInclusive<i64> = 1..=2_000;

/// One HTTP request/response pair, as seen in an access log.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub id: Uuid,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub latency_ms: u64,
}

impl Exchange {
    pub fn rand<S: UniformSource>(sampler: &Sampler<S>) -> Self {
        let segments = sampler.int_between(*PATH_SEGMENTS.start(), *PATH_SEGMENTS.end());
        let path: String = (0..segments)
            .map(|_| format!("/{}", sampler.word()))
            .collect();
        let latency = sampler.int_between(*LATENCY_MS.start(), *LATENCY_MS.end());
        Self {
            id: sampler.uuid(),
            method: METHODS[sampler.index(METHODS.len())].to_string(),
            path,
            status: sampler.http_status(),
            latency_ms: u64::try_from(latency).unwrap_or_default(),
        }
    }
}
