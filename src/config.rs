//! Centralized configuration constants for wifisurvey

// WLAN API
pub const WLAN_CLIENT_VERSION: u32 = 2;

// Timing
// 802.11 requires a scan to finish within 4s; one extra second of margin.
pub const SCAN_TIMEOUT_SECS: u64 = 5;

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";

// Table output
pub const COLUMN_PADDING: usize = 2;
pub const TABLE_HEADINGS: [&str; 4] = ["band", "channel", "strength", "SSID"];
pub const UNKNOWN_CELL: &str = "?";

// Prompts
pub const ADAPTER_PROMPT: &str = "Enter the number of the adapter to scan on: ";
pub const SINGLE_ADAPTER_NOTICE: &str = "Only one adapter.  Scanning.";
