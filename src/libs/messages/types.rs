#[derive(Debug, Clone)]
pub enum Message {
    // === EMPLOYEE MESSAGES ===
    EmployeeAdded(String),
    EmployeeListHeader,
    NoEmployeesFound,
    InvalidContactNumber,

    // === ATTENDANCE MESSAGES ===
    CheckInRecorded(String, String),  // time, date
    CheckOutRecorded(String, String), // time, working hours

    // === REPORT MESSAGES ===
    ReportHeader(String),            // date
    ReportHeaderFor(String, String), // organization, date
    NoAttendanceForDate(String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    NothingToExport,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError,
    ConfigSaveError,

    // === PROMPTS ===
    PromptFirstName,
    PromptLastName,
    PromptRole,
    PromptContactNumber,
    PromptReportingTo,
    PromptEmployeeId,
    PromptCheckInTime,
    PromptCheckOutTime,
    PromptReportDate,
    PromptExportFormat,
    PromptOrganizationName,
    PromptExportDir,
    PromptMenuAction,

    // === GENERAL MESSAGES ===
    Goodbye,
}
