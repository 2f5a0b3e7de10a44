use crate::error::WifiResult;
use crate::wifi::channel::FrequencyChannelMap;
use std::fmt;

/// Opaque adapter identifier handed back to the driver to select an adapter.
/// On Windows this is the interface GUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdapterId(pub u128);

impl fmt::Display for AdapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:04X}-{:012X}}}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v & 0xFFFF_FFFF_FFFF
        )
    }
}

/// A wireless interface that is ready to scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    pub name: String,
    pub id: AdapterId,
}

/// Interface state as reported by the OS during enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceState {
    NotReady,
    Connected,
    AdHocNetworkFormed,
    Disconnecting,
    Disconnected,
    Associating,
    Discovering,
    Authenticating,
    Unknown(i32),
}

impl InterfaceState {
    /// Map a raw `WLAN_INTERFACE_STATE` value
    pub fn from_raw(value: i32) -> Self {
        match value {
            0 => InterfaceState::NotReady,
            1 => InterfaceState::Connected,
            2 => InterfaceState::AdHocNetworkFormed,
            3 => InterfaceState::Disconnecting,
            4 => InterfaceState::Disconnected,
            5 => InterfaceState::Associating,
            6 => InterfaceState::Discovering,
            7 => InterfaceState::Authenticating,
            other => InterfaceState::Unknown(other),
        }
    }

    pub fn is_ready(&self) -> bool {
        *self != InterfaceState::NotReady
    }
}

/// Keep the interfaces that can scan, preserving enumeration order
pub fn ready_adapters<I>(interfaces: I) -> Vec<Adapter>
where
    I: IntoIterator<Item = (Adapter, InterfaceState)>,
{
    interfaces
        .into_iter()
        .filter_map(|(adapter, state)| {
            if state.is_ready() {
                Some(adapter)
            } else {
                log::debug!("skipping adapter {} ({state:?})", adapter.name);
                None
            }
        })
        .collect()
}

/// One BSS observed by a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    /// Raw SSID bytes, at most 32 and not necessarily UTF-8
    pub ssid: Vec<u8>,
    pub frequency_khz: u32,
    pub signal_strength_dbm: i32,
}

impl Network {
    pub fn ssid_lossy(&self) -> String {
        String::from_utf8_lossy(&self.ssid).to_string()
    }
}

/// A network together with its resolved band and channel.
/// Resolution failures stay attached to the entry they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyedNetwork {
    pub network: Network,
    pub channel: WifiResult<FrequencyChannelMap>,
}

/// Outcome delivered by the driver's scan notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Completed,
    Failed { reason: u32 },
}
