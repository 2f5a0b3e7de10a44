//! Fallback backend for targets without a native WLAN implementation

use crate::error::{WifiError, WifiResult};
use crate::wifi::driver::WlanDriver;
use crate::wifi::scan::ScanSignal;
use crate::wifi::types::{Adapter, Network};
use std::convert::Infallible;
use std::sync::Arc;

/// Win32 `ERROR_NOT_SUPPORTED`
const ERROR_NOT_SUPPORTED: u32 = 50;

/// Driver whose session can never be opened
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedDriver;

impl WlanDriver for UnsupportedDriver {
    type Session = Infallible;

    fn open(&self) -> WifiResult<Infallible> {
        Err(WifiError::DriverUnavailable {
            code: ERROR_NOT_SUPPORTED,
        })
    }

    fn list_adapters(&self, session: &Infallible) -> WifiResult<Vec<Adapter>> {
        match *session {}
    }

    fn register_scan_notification(
        &self,
        session: &Infallible,
        _adapter: &Adapter,
        _signal: Arc<ScanSignal>,
    ) -> WifiResult<()> {
        match *session {}
    }

    fn request_scan(&self, session: &Infallible, _adapter: &Adapter) -> WifiResult<()> {
        match *session {}
    }

    fn deregister_scan_notification(&self, session: &Infallible) -> WifiResult<()> {
        match *session {}
    }

    fn fetch_bss_list(&self, session: &Infallible, _adapter: &Adapter) -> WifiResult<Vec<Network>> {
        match *session {}
    }

    fn close(&self, session: Infallible) {
        match session {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wifi::session::WlanSession;

    #[test]
    fn open_reports_driver_unavailable() {
        let err = WlanSession::open(UnsupportedDriver).err().unwrap();
        assert_eq!(err, WifiError::DriverUnavailable { code: 50 });
        assert_eq!(err.to_string(), "Wireless subsystem unavailable: Not Supported");
    }
}
