use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::TimeOfDay;

/// Display text used when describing availability.
///
/// Templates may contain `{time}` and `{day}` placeholders. Fields missing from
/// a configuration source fall back to the English defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleLabels {
    pub closes_at: String,
    pub opens_at: String,
    pub opens_on: String,
    pub closed: String,
    pub closed_temporarily: String,
    /// Weekday names, Monday first
    pub weekdays: [String; 7],
    pub cancellation: CancellationLabels,
}

/// Explanations shown next to a customer's cancel action, one per open status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancellationLabels {
    pub pending: String,
    pub accepted: String,
    pub preparing: String,
    pub ready: String,
    pub out_for_delivery: String,
}

impl Default for CancellationLabels {
    fn default() -> Self {
        Self {
            pending: "Your order has not been accepted yet and can still be canceled.".to_string(),
            accepted: "Your order was accepted but preparation has not started; \
                       it can still be canceled."
                .to_string(),
            preparing: "Your order is being prepared and can no longer be canceled.".to_string(),
            ready: "Your order is ready and can no longer be canceled.".to_string(),
            out_for_delivery: "Your order is out for delivery and can no longer be canceled."
                .to_string(),
        }
    }
}

impl Default for LocaleLabels {
    fn default() -> Self {
        Self {
            closes_at: "Closes at {time}".to_string(),
            opens_at: "Opens at {time}".to_string(),
            opens_on: "Opens {day} at {time}".to_string(),
            closed: "Closed".to_string(),
            closed_temporarily: "Closed temporarily".to_string(),
            weekdays: [
                "Monday".to_string(),
                "Tuesday".to_string(),
                "Wednesday".to_string(),
                "Thursday".to_string(),
                "Friday".to_string(),
                "Saturday".to_string(),
                "Sunday".to_string(),
            ],
            cancellation: CancellationLabels::default(),
        }
    }
}

impl LocaleLabels {
    pub fn weekday(&self, day: Weekday) -> &str {
        &self.weekdays[day.num_days_from_monday() as usize]
    }

    pub fn closes_at(&self, time: TimeOfDay) -> String {
        render(&self.closes_at, None, time)
    }

    pub fn opens_at(&self, time: TimeOfDay) -> String {
        render(&self.opens_at, None, time)
    }

    pub fn opens_on(&self, day: Weekday, time: TimeOfDay) -> String {
        render(&self.opens_on, Some(self.weekday(day)), time)
    }
}

fn render(template: &str, day: Option<&str>, time: TimeOfDay) -> String {
    let text = template.replace("{time}", &time.to_string());
    match day {
        Some(day) => text.replace("{day}", day),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_english_rendering() {
        let labels = LocaleLabels::default();
        let nine = TimeOfDay::from_hm(9, 0).unwrap();

        assert_eq!(labels.closes_at(nine), "Closes at 09:00");
        assert_eq!(labels.opens_at(nine), "Opens at 09:00");
        assert_eq!(labels.opens_on(Weekday::Wed, nine), "Opens Wednesday at 09:00");
        assert_eq!(labels.weekday(Weekday::Sun), "Sunday");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let labels: LocaleLabels = serde_json::from_value(serde_json::json!({
            "closes_at": "Fecha às {time}",
            "opens_on": "Abre {day} às {time}",
            "weekdays": ["segunda", "terça", "quarta", "quinta", "sexta", "sábado", "domingo"]
        }))
        .unwrap();

        let time = TimeOfDay::from_hm(18, 30).unwrap();
        assert_eq!(labels.closes_at(time), "Fecha às 18:30");
        assert_eq!(labels.opens_on(Weekday::Tue, time), "Abre terça às 18:30");
        assert_eq!(labels.closed, "Closed");
        assert_eq!(labels.cancellation, CancellationLabels::default());
    }
}
