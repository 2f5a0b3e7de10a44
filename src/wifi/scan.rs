//! Blocking scan protocol
//!
//! Register for completion, request the scan, wait with a timeout, then
//! deregister on every path before the BSS list is read.

use crate::error::{ERROR_GEN_FAILURE, ERROR_SUCCESS, WifiError, WifiResult};
use crate::wifi::driver::WlanDriver;
use crate::wifi::types::{Adapter, Network, ScanOutcome};
use log::{debug, info, warn};
use std::sync::mpsc::{Receiver, RecvTimeoutError, SyncSender, sync_channel};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// One-shot completion signal handed to the driver's notification callback.
///
/// Only the first `notify` reaches the waiter; later calls are dropped.
#[derive(Debug)]
pub struct ScanSignal {
    sender: Mutex<Option<SyncSender<ScanOutcome>>>,
}

impl ScanSignal {
    pub fn new() -> (Arc<Self>, Receiver<ScanOutcome>) {
        let (tx, rx) = sync_channel(1);
        let signal = Arc::new(Self {
            sender: Mutex::new(Some(tx)),
        });
        (signal, rx)
    }

    /// Release the waiter. Returns false if the signal was already consumed.
    pub fn notify(&self, outcome: ScanOutcome) -> bool {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match sender {
            Some(tx) => tx.try_send(outcome).is_ok(),
            None => false,
        }
    }
}

/// Deregisters the scan notification when dropped
struct NotificationGuard<'a, D: WlanDriver> {
    driver: &'a D,
    session: &'a D::Session,
}

impl<D: WlanDriver> Drop for NotificationGuard<'_, D> {
    fn drop(&mut self) {
        match self.driver.deregister_scan_notification(self.session) {
            Ok(()) => debug!("scan notification deregistered"),
            Err(e) => warn!("failed to deregister scan notification: {e}"),
        }
    }
}

/// Request a scan on `adapter` and block until it completes, fails, or
/// `timeout` elapses.
pub fn scan_blocking<D: WlanDriver>(
    driver: &D,
    session: &D::Session,
    adapter: &Adapter,
    timeout: Duration,
) -> WifiResult<()> {
    let (signal, done) = ScanSignal::new();

    // Armed before the request so a fast scan cannot complete unobserved.
    driver.register_scan_notification(session, adapter, Arc::clone(&signal))?;
    let registration = NotificationGuard { driver, session };
    debug!("scan notification registered for {}", adapter.id);

    driver.request_scan(session, adapter)?;
    debug!("scan requested on {}", adapter.name);

    let started = Instant::now();
    let outcome = done.recv_timeout(timeout);
    drop(registration);

    match outcome {
        Ok(ScanOutcome::Completed) => {
            debug!("scan completed after {:?}", started.elapsed());
            Ok(())
        }
        Ok(ScanOutcome::Failed { reason }) => Err(WifiError::DriverError {
            operation: "WlanScan",
            code: if reason == ERROR_SUCCESS {
                ERROR_GEN_FAILURE
            } else {
                reason
            },
        }),
        Err(RecvTimeoutError::Timeout) => Err(WifiError::ScanTimeout { timeout }),
        Err(RecvTimeoutError::Disconnected) => Err(WifiError::Internal(
            "scan notification channel closed".to_string(),
        )),
    }
}

/// Full scan: wait for completion, then read the BSS list
pub fn scan_and_fetch<D: WlanDriver>(
    driver: &D,
    session: &D::Session,
    adapter: &Adapter,
    timeout: Duration,
) -> WifiResult<Vec<Network>> {
    scan_blocking(driver, session, adapter, timeout)?;
    let networks = driver.fetch_bss_list(session, adapter)?;
    info!("{} reported {} BSS entries", adapter.name, networks.len());
    Ok(networks)
}
