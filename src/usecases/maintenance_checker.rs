//! Maintenance check use case: compare the extracted date with today and send the reminder.
//!
//! The email goes out on a detached task; its result is logged by the task itself.

use crate::domain::{DateOrder, Notification, NotificationDecision};
use crate::ports::{ClockPort, NotifierPort, RunLogPort};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

pub const NOTIFICATION_SUBJECT: &str = "Truck Maintenance Notification";

/// Result of one check. `dispatch` is the email task when a notification was sent.
/// The pipeline drops the handle and lets the task run detached: send failures are
/// logged by the task, but a panic inside it is not reported anywhere.
#[derive(Debug)]
pub struct CheckOutcome {
    pub decision: NotificationDecision,
    pub dispatch: Option<JoinHandle<()>>,
}

pub struct MaintenanceChecker {
    notifier: Arc<dyn NotifierPort>,
    run_log: Arc<dyn RunLogPort>,
    clock: Arc<dyn ClockPort>,
    date_order: DateOrder,
}

impl MaintenanceChecker {
    pub fn new(
        notifier: Arc<dyn NotifierPort>,
        run_log: Arc<dyn RunLogPort>,
        clock: Arc<dyn ClockPort>,
        date_order: DateOrder,
    ) -> Self {
        Self {
            notifier,
            run_log,
            clock,
            date_order,
        }
    }

    /// Parse `token` with the configured field order and notify when it is today.
    /// An unparseable token counts as a non-match.
    pub async fn check(&self, token: &str) -> CheckOutcome {
        let today = self.clock.today();
        match NaiveDate::parse_from_str(token, self.date_order.format()) {
            Ok(date) if date == today => {
                info!(%date, "maintenance date is today; sending notification");
                let notification = Notification {
                    subject: NOTIFICATION_SUBJECT.to_string(),
                    body: format!("Check Truck Maintenance {}", today.format("%a %b %d %Y")),
                };
                CheckOutcome {
                    decision: NotificationDecision::Notify,
                    dispatch: Some(self.dispatch(notification)),
                }
            }
            Ok(date) => {
                info!(%date, %today, "maintenance date is not today");
                self.no_match().await
            }
            Err(e) => {
                warn!(token, order = ?self.date_order, error = %e, "unparseable maintenance date");
                self.no_match().await
            }
        }
    }

    async fn no_match(&self) -> CheckOutcome {
        self.run_log.record("No matching date found.").await;
        CheckOutcome {
            decision: NotificationDecision::NoMatch,
            dispatch: None,
        }
    }

    fn dispatch(&self, notification: Notification) -> JoinHandle<()> {
        let notifier = Arc::clone(&self.notifier);
        let run_log = Arc::clone(&self.run_log);
        tokio::spawn(async move {
            match notifier.send(&notification).await {
                Ok(response) => {
                    run_log.record(&format!("Email sent: {}", response)).await;
                }
                Err(e) => {
                    error!(error = %e, subject = %notification.subject, "email not sent");
                    run_log.record(&format!("Error sending email: {}", e)).await;
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{CountingNotifier, FixedClock, RecordingRunLog};

    fn june_5_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
    }

    fn checker(
        notifier: Arc<CountingNotifier>,
        log: Arc<RecordingRunLog>,
        order: DateOrder,
    ) -> MaintenanceChecker {
        MaintenanceChecker::new(notifier, log, Arc::new(FixedClock(june_5_2024())), order)
    }

    #[tokio::test]
    async fn test_same_day_sends_exactly_one_email() {
        let notifier = Arc::new(CountingNotifier::default());
        let log = Arc::new(RecordingRunLog::default());
        let c = checker(notifier.clone(), log.clone(), DateOrder::DayMonthYear);

        let outcome = c.check("05/06/24").await;
        assert_eq!(outcome.decision, NotificationDecision::Notify);
        outcome.dispatch.unwrap().await.unwrap();

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Truck Maintenance Notification");
        assert_eq!(sent[0].body, "Check Truck Maintenance Wed Jun 05 2024");
        assert_eq!(log.entries(), vec!["Email sent: 250 2.0.0 OK"]);
    }

    #[tokio::test]
    async fn test_other_day_sends_nothing() {
        let notifier = Arc::new(CountingNotifier::default());
        let log = Arc::new(RecordingRunLog::default());
        let c = checker(notifier.clone(), log.clone(), DateOrder::DayMonthYear);

        let outcome = c.check("06/06/24").await;

        assert_eq!(outcome.decision, NotificationDecision::NoMatch);
        assert!(outcome.dispatch.is_none());
        assert!(notifier.sent().is_empty());
        assert_eq!(log.entries(), vec!["No matching date found."]);
    }

    #[tokio::test]
    async fn test_month_first_order_reads_token_differently() {
        let notifier = Arc::new(CountingNotifier::default());
        let log = Arc::new(RecordingRunLog::default());
        let c = checker(notifier.clone(), log.clone(), DateOrder::MonthDayYear);

        // 05/06/24 is May 6th when read month-first.
        assert_eq!(c.check("05/06/24").await.decision, NotificationDecision::NoMatch);
        let outcome = c.check("06/05/24").await;
        assert_eq!(outcome.decision, NotificationDecision::Notify);
        outcome.dispatch.unwrap().await.unwrap();
        assert_eq!(notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_date_is_a_non_match() {
        let notifier = Arc::new(CountingNotifier::default());
        let log = Arc::new(RecordingRunLog::default());
        let c = checker(notifier.clone(), log.clone(), DateOrder::DayMonthYear);

        let outcome = c.check("31/02/24").await;

        assert_eq!(outcome.decision, NotificationDecision::NoMatch);
        assert!(notifier.sent().is_empty());
        assert_eq!(log.count_containing("No matching date found."), 1);
    }

    #[tokio::test]
    async fn test_send_failure_is_logged_not_raised() {
        let notifier = Arc::new(CountingNotifier::failing());
        let log = Arc::new(RecordingRunLog::default());
        let c = checker(notifier.clone(), log.clone(), DateOrder::DayMonthYear);

        let outcome = c.check("05/06/24").await;
        outcome.dispatch.unwrap().await.unwrap();

        assert_eq!(notifier.sent().len(), 1);
        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].starts_with("Error sending email: Notification failed: 535"));
    }
}
