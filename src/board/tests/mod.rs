//! Unit tests for the task board.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;


/// Clock pinned to a single local moment.
pub(super) struct FixedClock(DateTime<Local>);

impl FixedClock {
    /// Pins the clock to local noon on the given day.
    pub(super) fn on(year: i32, month: u32, day: u32) -> Self {
        let moment = Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("unambiguous local noon");
        Self(moment)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}
