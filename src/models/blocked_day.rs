use serde::{Deserialize, Serialize};

/// The six bookable one-hour slots shown in the schedule editor.
pub const TIME_SLOTS: [&str; 6] = [
    "10:00-11:00",
    "11:00-12:00",
    "12:00-13:00",
    "13:00-14:00",
    "14:00-15:00",
    "15:00-16:00",
];

/// Admin-declared unavailability for one calendar date, keyed by the
/// `dd.mm.yyyy` string. When `full_day` is set the `times` list is ignored
/// for blocking purposes and may go stale; it is not cleared automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BlockedDay {
    pub date: String,
    pub full_day: bool,
    pub times: Vec<String>,
}

impl BlockedDay {
    /// The record synthesized when no document exists for a date yet.
    pub fn empty(date: &str) -> Self {
        Self {
            date: date.to_string(),
            full_day: false,
            times: Vec::new(),
        }
    }

    pub fn toggle_full_day(&mut self) {
        self.full_day = !self.full_day;
    }

    /// Adds the slot if absent, removes it otherwise. Slot strings are not
    /// checked against [`TIME_SLOTS`]; the editor only ever offers those six.
    pub fn toggle_time_slot(&mut self, slot: &str) {
        if let Some(pos) = self.times.iter().position(|t| t == slot) {
            self.times.remove(pos);
        } else {
            self.times.push(slot.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_time_slot_involution() {
        let mut day = BlockedDay {
            date: "01.01.2026".to_string(),
            full_day: false,
            times: vec![],
        };

        day.toggle_time_slot("10:00-11:00");
        assert_eq!(day.times, vec!["10:00-11:00".to_string()]);

        day.toggle_time_slot("10:00-11:00");
        assert!(day.times.is_empty());
    }

    #[test]
    fn test_toggle_full_day_involution() {
        let mut day = BlockedDay::empty("01.01.2026");
        day.toggle_full_day();
        assert!(day.full_day);
        day.toggle_full_day();
        assert!(!day.full_day);
    }

    #[test]
    fn test_toggle_keeps_other_slots() {
        let mut day = BlockedDay::empty("02.01.2026");
        day.toggle_time_slot("10:00-11:00");
        day.toggle_time_slot("14:00-15:00");
        day.toggle_time_slot("10:00-11:00");
        assert_eq!(day.times, vec!["14:00-15:00".to_string()]);
    }
}
