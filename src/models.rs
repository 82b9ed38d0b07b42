use serde::{Deserialize, Serialize};

/// A vehicle as returned by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i64,
    pub mileage: i64,
}

/// A maintenance record tied to a vehicle and a service id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub service_id: i64,
    pub vehicle_id: i64,
    pub service_date: String,
    pub part_code: String,
    pub rate: f64,
    pub taxable_amount: f64,
    pub final_amount: f64,
}

/// Payload for creating a maintenance record. The vehicle and service ids
/// travel in the URL, not in the body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewMaintenance {
    pub service_date: String,
    pub part_code: String,
    pub rate: f64,
    pub taxable_amount: f64,
    pub final_amount: f64,
}

/// Draft of the add-record form. Everything is text until submission.
#[derive(Clone, Debug, Default)]
pub struct MaintenanceForm {
    pub vehicle_id: String,
    pub service_id: String,
    pub service_date: String,
    pub part_code: String,
    pub rate: String,
    pub taxable_amount: String,
    pub final_amount: String,
}

impl MaintenanceForm {
    /// Both ids must be present before a request is issued
    pub fn has_required_ids(&self) -> bool {
        !self.vehicle_id.trim().is_empty() && !self.service_id.trim().is_empty()
    }

    /// Convert the draft into the POST payload. Blank or unparsable numeric
    /// fields become zero.
    pub fn to_payload(&self) -> NewMaintenance {
        NewMaintenance {
            service_date: self.service_date.clone(),
            part_code: self.part_code.clone(),
            rate: parse_money(&self.rate),
            taxable_amount: parse_money(&self.taxable_amount),
            final_amount: parse_money(&self.final_amount),
        }
    }
}

fn parse_money(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_ids() {
        let mut form = MaintenanceForm::default();
        assert!(!form.has_required_ids());

        form.vehicle_id = "1".to_string();
        assert!(!form.has_required_ids());

        form.service_id = "101".to_string();
        assert!(form.has_required_ids());

        form.service_id = "   ".to_string();
        assert!(!form.has_required_ids());
    }

    #[test]
    fn test_payload_parses_numbers_and_defaults_blank_to_zero() {
        let form = MaintenanceForm {
            vehicle_id: "1".to_string(),
            service_id: "101".to_string(),
            service_date: "2024-03-01".to_string(),
            part_code: "OIL-FLTR".to_string(),
            rate: "10.5".to_string(),
            taxable_amount: String::new(),
            final_amount: "12".to_string(),
        };

        let payload = form.to_payload();
        assert_eq!(payload.rate, 10.5);
        assert_eq!(payload.taxable_amount, 0.0);
        assert_eq!(payload.final_amount, 12.0);
        assert_eq!(payload.service_date, "2024-03-01");
        assert_eq!(payload.part_code, "OIL-FLTR");
    }

    #[test]
    fn test_payload_unparsable_number_becomes_zero() {
        let form = MaintenanceForm {
            rate: "abc".to_string(),
            ..MaintenanceForm::default()
        };
        assert_eq!(form.to_payload().rate, 0.0);
    }

    #[test]
    fn test_payload_serializes_expected_fields() {
        let form = MaintenanceForm {
            rate: "10.5".to_string(),
            ..MaintenanceForm::default()
        };
        let json = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(json["rate"], serde_json::json!(10.5));
        assert_eq!(json["taxable_amount"], serde_json::json!(0.0));
        assert!(json.get("vehicle_id").is_none());
    }
}
