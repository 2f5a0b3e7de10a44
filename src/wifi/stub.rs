//! In-memory driver used by the unit tests

use crate::error::{WifiError, WifiResult, check};
use crate::wifi::driver::WlanDriver;
use crate::wifi::scan::{self, ScanSignal};
use crate::wifi::types::{
    Adapter, AdapterId, InterfaceState, Network, ScanOutcome, ready_adapters,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Open,
    ListAdapters,
    Register,
    RequestScan,
    Deregister,
    FetchBssList,
    ScanAndList,
    Close,
}

/// How the stub answers a scan request
#[derive(Debug, Clone, Copy)]
pub enum Completion {
    Signal,
    SignalTwice,
    After(Duration),
    Fail(u32),
    Never,
}

#[derive(Debug)]
pub struct StubSession;

pub struct StubDriver {
    pub interfaces: Vec<(Adapter, InterfaceState)>,
    pub networks: Vec<Network>,
    pub completion: Completion,
    pub fail_open: Option<u32>,
    pub fail_register: Option<u32>,
    pub fail_request: Option<u32>,
    pub fail_deregister: Option<u32>,
    pub fail_fetch: Option<u32>,
    /// When set, `scan_and_list_networks` answers directly with these networks
    pub scan_override: Option<Vec<Network>>,
    calls: Mutex<Vec<Call>>,
    registered: Mutex<Option<Arc<ScanSignal>>>,
    closed: Arc<AtomicUsize>,
}

pub fn stub_adapter() -> Adapter {
    Adapter {
        name: "Stub Wireless Adapter".to_string(),
        id: AdapterId(0x1234),
    }
}

pub fn network(ssid: &str, frequency_khz: u32, signal_strength_dbm: i32) -> Network {
    Network {
        ssid: ssid.as_bytes().to_vec(),
        frequency_khz,
        signal_strength_dbm,
    }
}

impl StubDriver {
    pub fn new(completion: Completion) -> Self {
        Self {
            interfaces: vec![(stub_adapter(), InterfaceState::Disconnected)],
            networks: vec![
                network("Home", 2_437_000, -50),
                network("Office", 5_180_000, -40),
            ],
            completion,
            fail_open: None,
            fail_register: None,
            fail_request: None,
            fail_deregister: None,
            fail_fetch: None,
            scan_override: None,
            calls: Mutex::new(Vec::new()),
            registered: Mutex::new(None),
            closed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Close counter that outlives the driver
    pub fn close_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.closed)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn fail(&self, operation: &'static str, code: Option<u32>) -> WifiResult<()> {
        check(operation, code.unwrap_or(0))
    }
}

impl WlanDriver for StubDriver {
    type Session = StubSession;

    fn open(&self) -> WifiResult<StubSession> {
        self.record(Call::Open);
        match self.fail_open {
            Some(code) => Err(WifiError::DriverUnavailable { code }),
            None => Ok(StubSession),
        }
    }

    fn list_adapters(&self, _session: &StubSession) -> WifiResult<Vec<Adapter>> {
        self.record(Call::ListAdapters);
        Ok(ready_adapters(self.interfaces.clone()))
    }

    fn register_scan_notification(
        &self,
        _session: &StubSession,
        _adapter: &Adapter,
        signal: Arc<ScanSignal>,
    ) -> WifiResult<()> {
        self.record(Call::Register);
        self.fail("WlanRegisterNotification", self.fail_register)?;
        *self.registered.lock().unwrap() = Some(signal);
        Ok(())
    }

    fn request_scan(&self, _session: &StubSession, _adapter: &Adapter) -> WifiResult<()> {
        self.record(Call::RequestScan);
        self.fail("WlanScan", self.fail_request)?;

        let Some(signal) = self.registered.lock().unwrap().clone() else {
            return Err(WifiError::Internal("scan requested before registration".into()));
        };
        let (delay, outcomes) = match self.completion {
            Completion::Signal => (Duration::from_millis(10), vec![ScanOutcome::Completed]),
            Completion::SignalTwice => (
                Duration::from_millis(10),
                vec![ScanOutcome::Completed, ScanOutcome::Completed],
            ),
            Completion::After(delay) => (delay, vec![ScanOutcome::Completed]),
            Completion::Fail(reason) => {
                (Duration::from_millis(10), vec![ScanOutcome::Failed { reason }])
            }
            Completion::Never => return Ok(()),
        };
        // Notifications arrive on a thread the caller does not own.
        thread::spawn(move || {
            thread::sleep(delay);
            for outcome in outcomes {
                signal.notify(outcome);
            }
        });
        Ok(())
    }

    fn deregister_scan_notification(&self, _session: &StubSession) -> WifiResult<()> {
        self.record(Call::Deregister);
        self.registered.lock().unwrap().take();
        self.fail("WlanRegisterNotification", self.fail_deregister)
    }

    fn fetch_bss_list(
        &self,
        _session: &StubSession,
        _adapter: &Adapter,
    ) -> WifiResult<Vec<Network>> {
        self.record(Call::FetchBssList);
        self.fail("WlanGetNetworkBssList", self.fail_fetch)?;
        Ok(self.networks.clone())
    }

    fn scan_and_list_networks(
        &self,
        session: &StubSession,
        adapter: &Adapter,
        timeout: Duration,
    ) -> WifiResult<Vec<Network>> {
        self.record(Call::ScanAndList);
        match &self.scan_override {
            Some(networks) => Ok(networks.clone()),
            None => scan::scan_and_fetch(self, session, adapter, timeout),
        }
    }

    fn close(&self, _session: StubSession) {
        self.record(Call::Close);
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}
