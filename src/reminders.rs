use chrono::{DateTime, Local, LocalResult, NaiveTime, TimeZone};
use tracing::debug;
use uuid::Uuid;

/// A one-shot reminder for a task's due day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub task_id: Uuid,
    pub text: String,
    pub fire_at: DateTime<Local>,
}

impl Reminder {
    /// Notification body
    pub fn message(&self) -> String {
        format!("\"{}\" is due today!", self.text)
    }
}

/// In-memory queue of pending reminders
#[derive(Debug)]
pub struct ReminderScheduler {
    hour: u32,
    pending: Vec<Reminder>,
}

impl ReminderScheduler {
    pub fn new(hour: u32) -> Self {
        Self {
            hour,
            pending: Vec::new(),
        }
    }

    /// Trigger time: the due date's day at `hour:00` local time
    pub fn trigger_for(&self, due_date: DateTime<Local>) -> Option<DateTime<Local>> {
        let time = NaiveTime::from_hms_opt(self.hour, 0, 0)?;
        let naive = due_date.date_naive().and_time(time);
        match Local.from_local_datetime(&naive) {
            LocalResult::Single(t) => Some(t),
            LocalResult::Ambiguous(earliest, _) => Some(earliest),
            LocalResult::None => None,
        }
    }

    /// Schedule a reminder. Triggers that already passed are skipped.
    /// Rescheduling a task replaces its earlier reminder.
    pub fn schedule(
        &mut self,
        task_id: Uuid,
        text: &str,
        due_date: DateTime<Local>,
        now: DateTime<Local>,
    ) -> Option<DateTime<Local>> {
        let fire_at = self.trigger_for(due_date)?;
        if fire_at <= now {
            debug!(task_id = %task_id, %fire_at, "reminder time already passed, not scheduling");
            return None;
        }

        self.cancel(task_id);
        self.pending.push(Reminder {
            task_id,
            text: text.to_string(),
            fire_at,
        });
        debug!(task_id = %task_id, %fire_at, "reminder scheduled");
        Some(fire_at)
    }

    /// Drop the pending reminder for a task, if any
    pub fn cancel(&mut self, task_id: Uuid) -> bool {
        let before = self.pending.len();
        self.pending.retain(|r| r.task_id != task_id);
        before != self.pending.len()
    }

    /// Remove and return every reminder whose time has come
    pub fn take_due(&mut self, now: DateTime<Local>) -> Vec<Reminder> {
        let (due, pending): (Vec<Reminder>, Vec<Reminder>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|r| r.fire_at <= now);
        self.pending = pending;
        due
    }

    pub fn pending(&self) -> &[Reminder] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Timelike};

    #[test]
    fn test_trigger_at_configured_hour() {
        let scheduler = ReminderScheduler::new(9);
        let due = Local::now() + Duration::days(3);
        let trigger = scheduler.trigger_for(due).unwrap();

        assert_eq!(trigger.date_naive(), due.date_naive());
        assert_eq!(trigger.hour(), 9);
        assert_eq!(trigger.minute(), 0);
    }

    #[test]
    fn test_schedule_and_take_due() {
        let mut scheduler = ReminderScheduler::new(9);
        let now = Local::now();
        let id = Uuid::new_v4();

        let fire_at = scheduler
            .schedule(id, "File taxes", now + Duration::days(2), now)
            .unwrap();
        assert_eq!(scheduler.pending().len(), 1);

        assert!(scheduler.take_due(now).is_empty());

        let due = scheduler.take_due(fire_at);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].message(), "\"File taxes\" is due today!");
        assert!(scheduler.pending().is_empty());
    }

    #[test]
    fn test_past_trigger_not_scheduled() {
        let mut scheduler = ReminderScheduler::new(9);
        let now = Local::now();

        assert!(scheduler
            .schedule(Uuid::new_v4(), "Late", now - Duration::days(2), now)
            .is_none());
        assert!(scheduler.pending().is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = ReminderScheduler::new(9);
        let now = Local::now();
        let keep = Uuid::new_v4();
        let dropped = Uuid::new_v4();
        scheduler.schedule(keep, "Keep", now + Duration::days(2), now);
        scheduler.schedule(dropped, "Drop", now + Duration::days(2), now);

        assert!(scheduler.cancel(dropped));
        assert!(!scheduler.cancel(dropped));
        assert_eq!(scheduler.pending().len(), 1);
        assert_eq!(scheduler.pending()[0].task_id, keep);
    }

    #[test]
    fn test_reschedule_replaces() {
        let mut scheduler = ReminderScheduler::new(9);
        let now = Local::now();
        let id = Uuid::new_v4();
        scheduler.schedule(id, "Once", now + Duration::days(2), now);
        scheduler.schedule(id, "Once", now + Duration::days(4), now);

        assert_eq!(scheduler.pending().len(), 1);
    }
}
