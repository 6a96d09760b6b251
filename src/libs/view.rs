use super::directory::Employee;
use super::formatter::FormattedAttendance;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn employees(employees: &[&Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "ROLE", "CONTACT", "REPORTS TO"]);
        for employee in employees {
            table.add_row(row![
                employee.id,
                format!("{} {}", employee.first_name, employee.last_name),
                employee.role,
                employee.contact_number,
                employee
                    .reporting_to
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn report(rows: &[FormattedAttendance]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "ID", "EMPLOYEE", "CHECK IN", "CHECK OUT", "HOURS"]);
        for r in rows {
            table.add_row(row![r.row, r.employee_id, r.employee, r.check_in, r.check_out, r.working_hours]);
        }
        table.printstd();

        Ok(())
    }
}
