#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rollcall::libs::export::{ExportFormat, Exporter};
    use rollcall::libs::formatter::FormattedAttendance;

    fn rows() -> Vec<FormattedAttendance> {
        vec![
            FormattedAttendance {
                row: 1,
                employee_id: "E002".to_string(),
                employee: "Alan Turing".to_string(),
                check_in: "10:15".to_string(),
                check_out: "-".to_string(),
                working_hours: "--:--".to_string(),
            },
            FormattedAttendance {
                row: 2,
                employee_id: "E001".to_string(),
                employee: "Grace Hopper".to_string(),
                check_in: "09:00".to_string(),
                check_out: "17:30".to_string(),
                working_hours: "08:30".to_string(),
            },
        ]
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_csv_export_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(ExportFormat::Csv, Some(dir.path().to_path_buf()), date());

        let path = exporter.export(&rows()).unwrap();
        assert_eq!(path.file_name().unwrap(), "rollcall_report_2024-01-01.csv");

        let contents = std::fs::read_to_string(path).unwrap();
        let mut lines = contents.lines();
        assert!(lines.next().unwrap().contains("Working hours"));
        assert_eq!(lines.count(), 2);
        assert!(contents.contains("Grace Hopper"));
        assert!(contents.contains("08:30"));
    }

    #[test]
    fn test_json_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(ExportFormat::Json, Some(dir.path().to_path_buf()), date());

        let path = exporter.export(&rows()).unwrap();
        assert_eq!(path.file_name().unwrap(), "rollcall_report_2024-01-01.json");

        let contents = std::fs::read_to_string(path).unwrap();
        let parsed: Vec<FormattedAttendance> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].employee, "Alan Turing");
        assert_eq!(parsed[1].working_hours, "08:30");
    }

    #[test]
    fn test_export_rejects_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(ExportFormat::Csv, Some(dir.path().to_path_buf()), date());

        assert!(exporter.export(&[]).is_err());
        assert!(!dir.path().join("rollcall_report_2024-01-01.csv").exists());
    }
}
