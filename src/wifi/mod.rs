//! Wireless scanning for wifisurvey
//!
//! This module drives a platform WLAN API through one blocking scan: list the
//! adapters, scan the chosen one, and map every BSS to its band and channel.

mod channel;
mod driver;
mod scan;
mod session;
mod types;

#[cfg(test)]
pub(crate) mod stub;
#[cfg(not(windows))]
mod unsupported;
#[cfg(windows)]
mod win32;

// Re-export public API
pub use channel::{FrequencyChannelMap, resolve};
pub use driver::WlanDriver;
pub use scan::{ScanSignal, scan_and_fetch, scan_blocking};
pub use session::WlanSession;
pub use types::{
    Adapter, AdapterId, InterfaceState, Network, ScanOutcome, SurveyedNetwork, ready_adapters,
};
#[cfg(not(windows))]
pub use unsupported::UnsupportedDriver;
#[cfg(windows)]
pub use win32::{Win32Driver, WlanHandle};

/// Backend for the current target
#[cfg(windows)]
pub type PlatformDriver = Win32Driver;
#[cfg(not(windows))]
pub type PlatformDriver = UnsupportedDriver;
