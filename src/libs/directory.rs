//! In-memory employee register.
//!
//! The directory owns identity assignment and the reporting-hierarchy rule.
//! Employees are immutable once added and are never removed; the directory
//! lives for the process lifetime, so a manager reference validated at
//! creation time can never go stale.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier issued to an employee by [`EmployeeDirectory::next_id`].
///
/// Ids are strictly increasing and never reused. They render as
/// `E001`-style tags and parse back from either the tagged (`E007`) or
/// bare (`7`) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:03}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid employee ID")]
pub struct ParseEmployeeIdError;

impl FromStr for EmployeeId {
    type Err = ParseEmployeeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix(['E', 'e']).unwrap_or(s);
        match digits.parse::<u32>() {
            Ok(n) if n > 0 => Ok(EmployeeId(n)),
            _ => Err(ParseEmployeeIdError),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub contact_number: u64,
    /// Manager reference, `None` when the employee reports to nobody.
    pub reporting_to: Option<EmployeeId>,
}

/// Failures surfaced while resolving employee references.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("reporting manager {0} not found")]
    InvalidManagerReference(EmployeeId),
    #[error("employee {0} not found")]
    UnknownEmployee(EmployeeId),
}

/// Stores employee records and answers existence and lookup queries.
///
/// No operation mutates an existing employee or removes one.
#[derive(Debug, Default)]
pub struct EmployeeDirectory {
    employees: BTreeMap<EmployeeId, Employee>,
    id_seq: u32,
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh identifier, strictly increasing across the
    /// directory's lifetime. An issued id is never handed out again,
    /// even when the caller ends up not storing an employee under it.
    pub fn next_id(&mut self) -> EmployeeId {
        self.id_seq += 1;
        EmployeeId(self.id_seq)
    }

    /// Stores `employee` keyed by its id. The id must come from
    /// [`Self::next_id`]; only the directory issues ids, so a colliding
    /// id is a caller bug rather than an input to reject.
    pub fn add(&mut self, employee: Employee) {
        debug_assert!(!self.employees.contains_key(&employee.id));
        self.employees.insert(employee.id, employee);
    }

    pub fn is_valid(&self, id: EmployeeId) -> bool {
        self.employees.contains_key(&id)
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    /// Resolves an id, reporting an unknown one as a typed error.
    pub fn resolve(&self, id: EmployeeId) -> Result<&Employee, DirectoryError> {
        self.get(id).ok_or(DirectoryError::UnknownEmployee(id))
    }

    /// All employees in the order they were added. Ids increase
    /// monotonically, so key order and insertion order coincide.
    pub fn list(&self) -> Vec<&Employee> {
        self.employees.values().collect()
    }

    /// The rule a caller must apply before [`Self::add`]: a manager
    /// reference is valid when it is absent or resolves to an existing
    /// employee. When the rule fails the new employee must not be added.
    pub fn validate_manager(&self, reporting_to: Option<EmployeeId>) -> bool {
        self.check_manager(reporting_to).is_ok()
    }

    /// Fallible form of [`Self::validate_manager`].
    pub fn check_manager(&self, reporting_to: Option<EmployeeId>) -> Result<(), DirectoryError> {
        match reporting_to {
            Some(id) if !self.is_valid(id) => Err(DirectoryError::InvalidManagerReference(id)),
            _ => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
