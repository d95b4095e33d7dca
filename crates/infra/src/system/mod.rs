use chrono::{Local, NaiveDate, NaiveDateTime};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current local wall-clock time. The scheduler works on naive
    /// local time throughout, timezone handling is out of scope.
    fn local_datetime(&self) -> NaiveDateTime;

    /// The current local calendar day, used by the once-per-day run gate.
    fn today(&self) -> NaiveDate {
        self.local_datetime().date()
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn local_datetime(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
