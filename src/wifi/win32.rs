//! Native WLAN API backend (`wlanapi.dll`)

use crate::config;
use crate::error::{ERROR_GEN_FAILURE, ERROR_SUCCESS, WifiError, WifiResult, check};
use crate::wifi::driver::WlanDriver;
use crate::wifi::scan::ScanSignal;
use crate::wifi::types::{Adapter, AdapterId, InterfaceState, Network, ScanOutcome, ready_adapters};
use log::{debug, warn};
use std::sync::{Arc, Mutex, PoisonError};
use windows::{Win32::Foundation::HANDLE, Win32::NetworkManagement::WiFi::*, core::GUID};

/// Buffer allocated by the WLAN API, released with `WlanFreeMemory` on drop
struct WlanMemory<T>(*mut T);

impl<T> WlanMemory<T> {
    fn get(&self) -> &T {
        // SAFETY: only constructed from a pointer the API filled on success
        unsafe { &*self.0 }
    }
}

impl<T> Drop for WlanMemory<T> {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe {
                WlanFreeMemory(self.0 as *mut _);
            }
        }
    }
}

/// State the notification callback reads while a scan is armed
struct NotificationContext {
    adapter: GUID,
    signal: Arc<ScanSignal>,
}

struct Registration(*mut NotificationContext);

// The context is only dereferenced by the WLAN service thread while registered.
unsafe impl Send for Registration {}

impl Registration {
    fn release(self) {
        // SAFETY: created by Box::into_raw in register_scan_notification and no
        // longer reachable from the callback once notifications are cancelled.
        drop(unsafe { Box::from_raw(self.0) });
    }
}

/// Safe wrapper around a WLAN client handle that closes it on drop
#[derive(Debug)]
pub struct WlanHandle {
    handle: HANDLE,
    registration: Mutex<Option<Registration>>,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Registration").field(&self.0).finish()
    }
}

impl WlanHandle {
    pub fn open() -> WifiResult<Self> {
        let mut negotiated_version = 0;
        let mut handle = HANDLE::default();
        let result = unsafe {
            WlanOpenHandle(
                config::WLAN_CLIENT_VERSION,
                None,
                &mut negotiated_version,
                &mut handle,
            )
        };
        if result != ERROR_SUCCESS {
            return Err(WifiError::DriverUnavailable { code: result });
        }
        debug!("WLAN handle opened, negotiated version {negotiated_version}");
        Ok(Self {
            handle,
            registration: Mutex::new(None),
        })
    }

    pub fn as_raw(&self) -> HANDLE {
        self.handle
    }

    fn registration(&self) -> std::sync::MutexGuard<'_, Option<Registration>> {
        self.registration
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for WlanHandle {
    fn drop(&mut self) {
        let result = unsafe { WlanCloseHandle(self.handle, None) };
        if result != ERROR_SUCCESS {
            warn!(
                "{}",
                WifiError::DriverError {
                    operation: "WlanCloseHandle",
                    code: result
                }
            );
        }
        // Closing the handle cancels any notification still registered on it.
        if let Some(registration) = self.registration().take() {
            registration.release();
        }
    }
}

unsafe extern "system" fn scan_notification_callback(
    data: *mut L2_NOTIFICATION_DATA,
    context: *mut std::ffi::c_void,
) {
    if data.is_null() || context.is_null() {
        return;
    }

    // SAFETY: context is the NotificationContext registered alongside this
    // callback and outlives the registration.
    let (data, context) = unsafe { (&*data, &*(context as *const NotificationContext)) };

    if data.NotificationSource != WLAN_NOTIFICATION_SOURCE_ACM
        || data.InterfaceGuid != context.adapter
    {
        return;
    }

    if data.NotificationCode == wlan_notification_acm_scan_complete.0 as u32 {
        context.signal.notify(ScanOutcome::Completed);
    } else if data.NotificationCode == wlan_notification_acm_scan_fail.0 as u32 {
        // pData holds a WLAN_REASON_CODE for scan failures
        let reason = if !data.pData.is_null()
            && data.dwDataSize >= std::mem::size_of::<u32>() as u32
        {
            unsafe { *(data.pData as *const u32) }
        } else {
            ERROR_GEN_FAILURE
        };
        context.signal.notify(ScanOutcome::Failed { reason });
    }
}

fn wide_to_string(wide: &[u16]) -> String {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..len])
}

/// Driver backed by the Windows Native Wifi API
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Driver;

impl WlanDriver for Win32Driver {
    type Session = WlanHandle;

    fn open(&self) -> WifiResult<WlanHandle> {
        WlanHandle::open()
    }

    fn list_adapters(&self, session: &WlanHandle) -> WifiResult<Vec<Adapter>> {
        let mut interface_list: *mut WLAN_INTERFACE_INFO_LIST = std::ptr::null_mut();
        let result = unsafe { WlanEnumInterfaces(session.as_raw(), None, &mut interface_list) };
        check("WlanEnumInterfaces", result)?;
        let interface_list = WlanMemory(interface_list);

        let list = interface_list.get();
        let items = unsafe {
            std::slice::from_raw_parts(
                list.InterfaceInfo.as_ptr(),
                list.dwNumberOfItems as usize,
            )
        };

        let interfaces: Vec<_> = items
            .iter()
            .map(|info| {
                let adapter = Adapter {
                    name: wide_to_string(&info.strInterfaceDescription),
                    id: AdapterId(info.InterfaceGuid.to_u128()),
                };
                (adapter, InterfaceState::from_raw(info.isState.0))
            })
            .collect();

        Ok(ready_adapters(interfaces))
    }

    fn register_scan_notification(
        &self,
        session: &WlanHandle,
        adapter: &Adapter,
        signal: Arc<ScanSignal>,
    ) -> WifiResult<()> {
        let mut slot = session.registration();
        if slot.is_some() {
            return Err(WifiError::ScanInProgress);
        }

        let context = Box::into_raw(Box::new(NotificationContext {
            adapter: GUID::from_u128(adapter.id.0),
            signal,
        }));

        let result = unsafe {
            WlanRegisterNotification(
                session.as_raw(),
                WLAN_NOTIFICATION_SOURCE_ACM,
                false,
                Some(scan_notification_callback),
                Some(context as *mut std::ffi::c_void),
                None,
                None,
            )
        };

        let registration = Registration(context);
        if result != ERROR_SUCCESS {
            registration.release();
            return Err(WifiError::DriverError {
                operation: "WlanRegisterNotification",
                code: result,
            });
        }

        *slot = Some(registration);
        Ok(())
    }

    fn request_scan(&self, session: &WlanHandle, adapter: &Adapter) -> WifiResult<()> {
        let guid = GUID::from_u128(adapter.id.0);
        let result = unsafe { WlanScan(session.as_raw(), &guid, None, None, None) };
        check("WlanScan", result)
    }

    fn deregister_scan_notification(&self, session: &WlanHandle) -> WifiResult<()> {
        let result = unsafe {
            WlanRegisterNotification(
                session.as_raw(),
                WLAN_NOTIFICATION_SOURCE_NONE,
                false,
                None,
                None,
                None,
                None,
            )
        };
        // On failure the context stays registered and is released with the handle.
        check("WlanRegisterNotification", result)?;

        if let Some(registration) = session.registration().take() {
            registration.release();
        }
        Ok(())
    }

    fn fetch_bss_list(&self, session: &WlanHandle, adapter: &Adapter) -> WifiResult<Vec<Network>> {
        let guid = GUID::from_u128(adapter.id.0);
        let mut bss_list: *mut WLAN_BSS_LIST = std::ptr::null_mut();
        let result = unsafe {
            WlanGetNetworkBssList(
                session.as_raw(),
                &guid,
                None,
                dot11_BSS_type_any,
                false,
                None,
                &mut bss_list,
            )
        };
        check("WlanGetNetworkBssList", result)?;
        let bss_list = WlanMemory(bss_list);

        let list = bss_list.get();
        let entries = unsafe {
            std::slice::from_raw_parts(list.wlanBssEntries.as_ptr(), list.dwNumberOfItems as usize)
        };

        Ok(entries
            .iter()
            .map(|entry| {
                let ssid = &entry.dot11Ssid;
                let ssid_len = (ssid.uSSIDLength as usize).min(ssid.ucSSID.len());
                Network {
                    ssid: ssid.ucSSID[..ssid_len].to_vec(),
                    frequency_khz: entry.ulChCenterFrequency,
                    signal_strength_dbm: entry.lRssi,
                }
            })
            .collect())
    }

    fn close(&self, session: WlanHandle) {
        drop(session);
    }
}
