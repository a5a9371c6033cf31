//! Implements ClockPort with the machine's local calendar day.

use crate::ports::ClockPort;
use chrono::{Local, NaiveDate};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
