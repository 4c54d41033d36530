//! Time and date skills

use crate::core::{Reply, Skill};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

/// Source of the current local time
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// "Current time is 03:07 PM"
#[derive(Debug)]
pub struct TimeSkill {
    clock: Arc<dyn Clock>,
}

impl TimeSkill {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl Skill for TimeSkill {
    async fn handle(&self, _command: &str) -> Reply {
        let now = self.clock.now();
        Reply::say(format!("Current time is {}", now.format("%I:%M %p")))
    }

    fn name(&self) -> &str {
        "time"
    }
}

/// "Today's date is Friday, March 01, 2024"
#[derive(Debug)]
pub struct DateSkill {
    clock: Arc<dyn Clock>,
}

impl DateSkill {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl Skill for DateSkill {
    async fn handle(&self, _command: &str) -> Reply {
        let now = self.clock.now();
        Reply::say(format!("Today's date is {}", now.format("%A, %B %d, %Y")))
    }

    fn name(&self) -> &str {
        "date"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug)]
    struct Fixed(NaiveDateTime);

    impl Clock for Fixed {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn fixed(h: u32, m: u32) -> Arc<dyn Clock> {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(h, m, 0))
            .expect("valid date");
        Arc::new(Fixed(dt))
    }

    #[tokio::test]
    async fn test_time_afternoon() {
        let skill = TimeSkill::new(fixed(15, 7));
        assert_eq!(skill.handle("time").await.text, "Current time is 03:07 PM");
    }

    #[tokio::test]
    async fn test_time_midnight() {
        let skill = TimeSkill::new(fixed(0, 30));
        assert_eq!(skill.handle("time").await.text, "Current time is 12:30 AM");
    }

    #[tokio::test]
    async fn test_date_format() {
        let skill = DateSkill::new(fixed(9, 0));
        assert_eq!(
            skill.handle("date").await.text,
            "Today's date is Friday, March 01, 2024"
        );
    }
}
