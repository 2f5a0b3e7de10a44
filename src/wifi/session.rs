use crate::config;
use crate::error::{WifiError, WifiResult};
use crate::wifi::channel;
use crate::wifi::driver::WlanDriver;
use crate::wifi::types::{Adapter, Network, SurveyedNetwork};
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// An open session with the wireless subsystem.
///
/// Owns the driver handle and closes it exactly once when dropped.
pub struct WlanSession<D: WlanDriver> {
    driver: D,
    handle: Option<D::Session>,
    scan_timeout: Duration,
    scanning: AtomicBool,
}

/// Clears the in-progress flag when a scan call returns
struct ScanInProgress<'a>(&'a AtomicBool);

impl<'a> ScanInProgress<'a> {
    fn acquire(flag: &'a AtomicBool) -> WifiResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| WifiError::ScanInProgress)
    }
}

impl Drop for ScanInProgress<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<D: WlanDriver> WlanSession<D> {
    pub fn open(driver: D) -> WifiResult<Self> {
        let handle = driver.open()?;
        debug!("wlan session opened");
        Ok(Self {
            driver,
            handle: Some(handle),
            scan_timeout: Duration::from_secs(config::SCAN_TIMEOUT_SECS),
            scanning: AtomicBool::new(false),
        })
    }

    pub fn with_scan_timeout(mut self, timeout: Duration) -> Self {
        self.scan_timeout = timeout;
        self
    }

    fn handle(&self) -> WifiResult<&D::Session> {
        self.handle
            .as_ref()
            .ok_or_else(|| WifiError::Internal("wlan session already closed".to_string()))
    }

    pub fn enumerate_adapters(&self) -> WifiResult<Vec<Adapter>> {
        self.driver.list_adapters(self.handle()?)
    }

    /// Scan on `adapter` and attach band and channel to every network found.
    ///
    /// A frequency missing from the channel table only marks its own entry.
    pub fn enumerate_networks(&self, adapter: &Adapter) -> WifiResult<Vec<SurveyedNetwork>> {
        let _scan = ScanInProgress::acquire(&self.scanning)?;
        let networks = self
            .driver
            .scan_and_list_networks(self.handle()?, adapter, self.scan_timeout)?;
        Ok(networks.into_iter().map(survey).collect())
    }
}

impl<D: WlanDriver> Drop for WlanSession<D> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.driver.close(handle);
            debug!("wlan session closed");
        }
    }
}

fn survey(network: Network) -> SurveyedNetwork {
    let channel = channel::resolve(network.frequency_khz);
    SurveyedNetwork { network, channel }
}
