#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use rollcall::libs::directory::{Employee, EmployeeDirectory};
    use rollcall::libs::formatter::{format_duration, format_report};
    use rollcall::libs::ledger::{AttendanceRecord, Session};

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(&Duration::minutes(30)), "00:30");
        assert_eq!(format_duration(&Duration::minutes(59)), "00:59");
        assert_eq!(format_duration(&Duration::minutes(1)), "00:01");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(&Duration::hours(8)), "08:00");
        assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(30))), "08:30");
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
    }

    #[test]
    fn test_format_duration_hours_unbounded() {
        assert_eq!(format_duration(&Duration::hours(24)), "24:00");
        assert_eq!(format_duration(&Duration::hours(100)), "100:00");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
        assert_eq!(format_duration(&Duration::hours(-5)), "00:00");
    }

    #[test]
    fn test_format_duration_seconds_truncated() {
        assert_eq!(format_duration(&(Duration::minutes(30) + Duration::seconds(59))), "00:30");
        assert_eq!(format_duration(&Duration::seconds(3661)), "01:01");
    }

    fn dt(h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn report_pairs() -> Vec<(Employee, AttendanceRecord)> {
        let mut directory = EmployeeDirectory::new();
        let grace = Employee {
            id: directory.next_id(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            role: "Engineer".to_string(),
            contact_number: 5550100,
            reporting_to: None,
        };
        let alan = Employee {
            id: directory.next_id(),
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
            role: "Engineer".to_string(),
            contact_number: 5550101,
            reporting_to: Some(grace.id),
        };

        vec![
            (
                grace.clone(),
                AttendanceRecord {
                    employee_id: grace.id,
                    session: Session::Closed {
                        check_in: dt(9, 0),
                        check_out: dt(17, 30),
                        working_hours: "08:30".to_string(),
                    },
                },
            ),
            (
                alan.clone(),
                AttendanceRecord {
                    employee_id: alan.id,
                    session: Session::Open { check_in: dt(10, 15) },
                },
            ),
        ]
    }

    #[test]
    fn test_format_report_closed_record() {
        let rows = format_report(&report_pairs());

        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].employee_id, "E001");
        assert_eq!(rows[0].employee, "Grace Hopper");
        assert_eq!(rows[0].check_in, "09:00");
        assert_eq!(rows[0].check_out, "17:30");
        assert_eq!(rows[0].working_hours, "08:30");
    }

    #[test]
    fn test_format_report_open_record_uses_placeholders() {
        let rows = format_report(&report_pairs());

        assert_eq!(rows[1].row, 2);
        assert_eq!(rows[1].check_in, "10:15");
        assert_eq!(rows[1].check_out, "-");
        assert_eq!(rows[1].working_hours, "--:--");
    }

    #[test]
    fn test_format_report_empty_input() {
        assert!(format_report(&[]).is_empty());
    }
}
