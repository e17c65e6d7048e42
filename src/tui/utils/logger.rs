use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Simple file logger for TUI application
pub struct FileLogger {
    log_file_path: PathBuf,
}

impl FileLogger {
    /// Create a new file logger
    pub fn new() -> Self {
        // Create logs directory in the user's home directory
        let mut log_path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        log_path.push(".slope-ski");

        // Create directory if it doesn't exist
        if let Err(e) = std::fs::create_dir_all(&log_path) {
            eprintln!("Warning: Could not create log directory: {}", e);
        }

        log_path.push("tui.log");

        Self {
            log_file_path: log_path,
        }
    }

    /// Log an error message with timestamp
    pub fn log_error(&self, message: &str) {
        self.write_log("ERROR", message);
    }

    /// Log a warning message with timestamp
    pub fn log_warning(&self, message: &str) {
        self.write_log("WARN", message);
    }

    /// Log an info message with timestamp
    pub fn log_info(&self, message: &str) {
        self.write_log("INFO", message);
    }

    /// Write a log entry to the file
    fn write_log(&self, level: &str, message: &str) {
        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!("[{}] {}: {}\n", timestamp, level, message);

        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)
        {
            if let Err(e) = file.write_all(log_entry.as_bytes()) {
                eprintln!("Warning: Could not write to log file: {}", e);
            }
        }
    }
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new()
    }
}
