use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::Sampler;
use crate::UniformSource;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub birthday: NaiveDate,
    pub favourite_color: String,
    pub bio: String,
}

impl Person {
    pub fn rand<S: UniformSource>(sampler: &Sampler<S>) -> Self {
        let earliest = NaiveDate::from_ymd_opt(1940, 1, 1).unwrap_or_default();
        let latest = NaiveDate::from_ymd_opt(2010, 12, 31).unwrap_or_default();
        Self {
            id: sampler.uuid(),
            name: sampler.full_name(),
            birthday: sampler.date_between(earliest, latest),
            favourite_color: sampler.color().to_hex(),
            bio: sampler.paragraph(Some(2)),
        }
    }
}
