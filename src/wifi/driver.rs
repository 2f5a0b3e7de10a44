use crate::error::WifiResult;
use crate::wifi::scan::{self, ScanSignal};
use crate::wifi::types::{Adapter, Network};
use std::sync::Arc;
use std::time::Duration;

/// Abstraction over a platform wireless API
///
/// The scan protocol itself lives in [`scan::scan_and_fetch`]; a backend only
/// supplies the primitive calls it sequences.
pub trait WlanDriver {
    /// Handle to an open client session with the wireless subsystem
    type Session;

    /// Open a session. Fails with `DriverUnavailable` if the subsystem
    /// cannot be initialized.
    fn open(&self) -> WifiResult<Self::Session>;

    /// List adapters that are not in the "not ready" state, in OS order
    fn list_adapters(&self, session: &Self::Session) -> WifiResult<Vec<Adapter>>;

    /// Arm `signal` to fire when a scan on `adapter` finishes
    fn register_scan_notification(
        &self,
        session: &Self::Session,
        adapter: &Adapter,
        signal: Arc<ScanSignal>,
    ) -> WifiResult<()>;

    fn request_scan(&self, session: &Self::Session, adapter: &Adapter) -> WifiResult<()>;

    fn deregister_scan_notification(&self, session: &Self::Session) -> WifiResult<()>;

    /// Read the BSS list currently cached for `adapter`
    fn fetch_bss_list(
        &self,
        session: &Self::Session,
        adapter: &Adapter,
    ) -> WifiResult<Vec<Network>>;

    /// Release the session. Failures are logged, never returned.
    fn close(&self, session: Self::Session);

    /// Scan `adapter` and return the networks it sees, failing with
    /// `ScanTimeout` if the scan does not finish within `timeout`
    fn scan_and_list_networks(
        &self,
        session: &Self::Session,
        adapter: &Adapter,
        timeout: Duration,
    ) -> WifiResult<Vec<Network>>
    where
        Self: Sized,
    {
        scan::scan_and_fetch(self, session, adapter, timeout)
    }
}
