//! Direct3D device lifecycle tracking
//!
//! The device belongs to the game. A plugin only observes it between
//! `device_initialize` and the matching `device_release`; [`DeviceInterest`]
//! keeps that window explicit so the reference cannot be used outside it.
//!
//! ```text
//! Uninterested ──register──▶ InterestedNoDevice ──attach──▶ InterestedWithDevice
//!                                     ▲                            │
//!                                     └────────── detach ──────────┘
//! any ──shutdown──▶ Released
//! ```

use std::ptr::NonNull;

use rmod_sdk::{IDirect3DDevice9, Rect, D3DPRESENT_PARAMETERS, HWND, RGNDATA};

/// Non-owning reference to the game's `IDirect3DDevice9`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRef {
    ptr: NonNull<IDirect3DDevice9>,
}

// SAFETY: the reference is only handed out inside the host's documented
// device window and never dereferenced by this crate.
unsafe impl Send for DeviceRef {}
unsafe impl Sync for DeviceRef {}

impl DeviceRef {
    /// Wrap the pointer passed to `Direct3DInitialize`, `None` if null
    pub fn from_raw(ptr: *mut IDirect3DDevice9) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    /// A well-aligned placeholder that must never be called through
    pub fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
        }
    }

    pub fn as_ptr(&self) -> *mut IDirect3DDevice9 {
        self.ptr.as_ptr()
    }
}

/// Non-owning `D3DPRESENT_PARAMETERS*` passed through device reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentParams(Option<NonNull<D3DPRESENT_PARAMETERS>>);

impl PresentParams {
    pub fn from_raw(ptr: *mut D3DPRESENT_PARAMETERS) -> Self {
        Self(NonNull::new(ptr))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

/// Arguments of `IDirect3DDevice9::Present`
#[derive(Debug, Clone, Copy)]
pub struct PresentArgs<'a> {
    pub source_rect: Option<&'a Rect>,
    pub dest_rect: Option<&'a Rect>,
    pub dest_window_override: HWND,
    pub dirty_region: Option<NonNull<RGNDATA>>,
}

impl PresentArgs<'_> {
    /// Present of the whole back buffer to the device window
    pub fn full_frame() -> Self {
        PresentArgs {
            source_rect: None,
            dest_rect: None,
            dest_window_override: std::ptr::null_mut(),
            dirty_region: None,
        }
    }
}

/// Where a plugin stands in the device lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceInterest {
    /// Plugin not initialized yet
    #[default]
    Uninterested,
    /// Initialized, waiting for a device
    InterestedNoDevice,
    /// Device available until the next release
    InterestedWithDevice(DeviceRef),
    /// Plugin released; terminal
    Released,
}

impl DeviceInterest {
    /// Plugin initialized successfully
    pub fn register(&mut self) {
        if *self == Self::Uninterested {
            *self = Self::InterestedNoDevice;
        }
    }

    /// Device became available
    ///
    /// Returns `false` once released. A second attach without a release in
    /// between replaces the stored device.
    pub fn attach(&mut self, device: DeviceRef) -> bool {
        match *self {
            Self::Released => false,
            Self::Uninterested => {
                tracing::debug!("Device attached before plugin initialization");
                *self = Self::InterestedWithDevice(device);
                true
            }
            _ => {
                *self = Self::InterestedWithDevice(device);
                true
            }
        }
    }

    /// Device is going away; returns the device that was held
    pub fn detach(&mut self) -> Option<DeviceRef> {
        match *self {
            Self::InterestedWithDevice(device) => {
                *self = Self::InterestedNoDevice;
                Some(device)
            }
            _ => None,
        }
    }

    /// Plugin released; no further transitions
    pub fn shutdown(&mut self) {
        *self = Self::Released;
    }

    /// The device, only while inside the initialize/release window
    pub fn device(&self) -> Option<DeviceRef> {
        match *self {
            Self::InterestedWithDevice(device) => Some(device),
            _ => None,
        }
    }
}
