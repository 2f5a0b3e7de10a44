//! Typed errors for wireless survey operations

use std::time::Duration;
use thiserror::Error;

/// Result type alias for WLAN operations
pub type WifiResult<T> = Result<T, WifiError>;

/// Win32 status value for a successful call
pub const ERROR_SUCCESS: u32 = 0;

/// Win32 `ERROR_GEN_FAILURE`, used when the OS reports a failure without a code
pub const ERROR_GEN_FAILURE: u32 = 31;

/// Errors that can occur while enumerating adapters and scanning
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WifiError {
    #[error("Wireless subsystem unavailable: {}", win32_error_to_string(*.code))]
    DriverUnavailable { code: u32 },

    #[error("{operation} returned {code} ({})", win32_error_to_string(*.code))]
    DriverError { operation: &'static str, code: u32 },

    #[error("Scan for wireless networks failed to complete in {}s.", .timeout.as_secs())]
    ScanTimeout { timeout: Duration },

    #[error("Frequency {khz} is not a known 802.11 channel")]
    UnknownFrequency { khz: u32 },

    #[error("A scan is already in progress on this session")]
    ScanInProgress,

    #[error("No wireless adapter found")]
    NoAdapter,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Map a raw status code from a WLAN call to a result
pub fn check(operation: &'static str, code: u32) -> WifiResult<()> {
    if code == ERROR_SUCCESS {
        Ok(())
    } else {
        Err(WifiError::DriverError { operation, code })
    }
}

/// Convert a Win32 error code returned by the WLAN API to a human-readable string
pub fn win32_error_to_string(code: u32) -> String {
    match code {
        0 => "Success".to_string(),
        5 => "Access Denied".to_string(),
        6 => "Invalid Handle".to_string(),
        8 => "Not Enough Memory".to_string(),
        21 => "Device Not Ready".to_string(),
        31 => "General Failure".to_string(),
        50 => "Not Supported".to_string(),
        87 => "Invalid Parameter".to_string(),
        170 => "Resource Busy".to_string(),
        1062 => "Service Not Active".to_string(),
        1168 => "Not Found".to_string(),
        1220 => "Too Many Client Handles".to_string(),
        1460 => "Timeout".to_string(),
        // WLAN reason codes delivered with scan failure notifications
        0x00010001 => "Network Not Compatible".to_string(),
        0x0002800C => "Driver Operation Failure".to_string(),
        0x00038001 => "ACM Base".to_string(),
        0x00050001 => "Radio Off".to_string(),
        0x80342002 => "Dot11 Power State Invalid (Radio Off)".to_string(),
        _ => format!("Unknown Error (Code: {code}, 0x{code:X})"),
    }
}
