use chrono::Datelike;
use chrono::NaiveDate;
use chrono::Weekday;

use crate::Sampler;
use crate::UniformSource;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

impl<S: UniformSource> Sampler<S> {
    /// A day of the week.
    pub fn day(&self) -> Weekday {
        WEEKDAYS[self.index(WEEKDAYS.len())]
    }

    /// A date in the inclusive range between `a` and `b`, in either order.
    pub fn date_between(&self, a: NaiveDate, b: NaiveDate) -> NaiveDate {
        let days = self.int_between(
            i64::from(a.num_days_from_ce()),
            i64::from(b.num_days_from_ce()),
        );
        // Both bounds are valid dates, so is every day between them.
        i32::try_from(days)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .unwrap_or(a)
    }
}
