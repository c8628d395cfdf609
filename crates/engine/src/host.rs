//! Non-owning wrappers around rMod host interfaces

use std::ffi::{c_char, c_void, CString};
use std::ptr::NonNull;

use rmod_sdk::vtable::host_indices;
use rmod_sdk::{D3dColor, IConsole, IHookCore};

use crate::error::HostError;

/// Function signature for IHookCore::GetConsole
/// IConsole* GetConsole(void)
type GetConsoleFn = unsafe extern "C" fn(this: *mut IHookCore) -> *mut IConsole;

/// Function signature for IConsole::Write
/// void Write(D3DCOLOR color, const char* text)
type ConsoleWriteFn =
    unsafe extern "C" fn(this: *mut IConsole, color: D3dColor, text: *const c_char);

/// Read a virtual function pointer from an object's vtable
///
/// # Safety
/// `object` must point to a live C++ object whose vtable has at least
/// `index + 1` entries.
#[inline]
unsafe fn virtual_fn(object: *mut c_void, index: usize) -> *const c_void {
    let vtable = *(object as *const *const *const c_void);
    *vtable.add(index)
}

/// Handle to the host's `IHookCore`
///
/// Never owns the host object. Valid for the whole lifetime of the plugin
/// instance it was handed to.
#[derive(Debug, Clone, Copy)]
pub struct NativeHookCore {
    ptr: NonNull<IHookCore>,
}

// SAFETY: IHookCore lives for the entire plugin lifetime and the host
// serializes callbacks into a plugin instance.
unsafe impl Send for NativeHookCore {}
unsafe impl Sync for NativeHookCore {}

impl NativeHookCore {
    /// Wrap the pointer rMod passed to `IPlugin::Initialize`
    ///
    /// # Safety
    /// `ptr` must be null or point to the host's live `IHookCore`.
    pub unsafe fn from_raw(ptr: *mut IHookCore) -> Result<Self, HostError> {
        let ptr = NonNull::new(ptr).ok_or(HostError::NullPointer("IHookCore"))?;
        tracing::debug!("IHookCore: {:p}", ptr.as_ptr());
        Ok(Self { ptr })
    }

    /// Get the raw interface pointer
    pub fn as_ptr(&self) -> *mut IHookCore {
        self.ptr.as_ptr()
    }

    /// Fetch the host console
    pub fn console(&self) -> Result<NativeConsole, HostError> {
        unsafe {
            let get_console: GetConsoleFn = std::mem::transmute(virtual_fn(
                self.ptr.as_ptr().cast(),
                host_indices::HOOK_CORE_GET_CONSOLE,
            ));
            NativeConsole::from_raw(get_console(self.ptr.as_ptr()))
        }
    }
}

/// Handle to the host's `IConsole`
#[derive(Debug, Clone, Copy)]
pub struct NativeConsole {
    ptr: NonNull<IConsole>,
}

// SAFETY: same lifetime guarantee as the owning IHookCore.
unsafe impl Send for NativeConsole {}
unsafe impl Sync for NativeConsole {}

impl NativeConsole {
    /// # Safety
    /// `ptr` must be null or point to the host's live `IConsole`.
    pub unsafe fn from_raw(ptr: *mut IConsole) -> Result<Self, HostError> {
        NonNull::new(ptr)
            .map(|ptr| Self { ptr })
            .ok_or(HostError::NullPointer("IConsole"))
    }

    /// Write a colored line to the in-game console
    pub fn write(&self, color: D3dColor, text: &str) -> Result<(), HostError> {
        let text = CString::new(text)?;
        unsafe {
            let write: ConsoleWriteFn = std::mem::transmute(virtual_fn(
                self.ptr.as_ptr().cast(),
                host_indices::CONSOLE_WRITE,
            ));
            write(self.ptr.as_ptr(), color, text.as_ptr());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_hook_core_rejected() {
        let result = unsafe { NativeHookCore::from_raw(std::ptr::null_mut()) };
        assert!(matches!(result, Err(HostError::NullPointer("IHookCore"))));
    }

    #[test]
    fn test_null_console_rejected() {
        let result = unsafe { NativeConsole::from_raw(std::ptr::null_mut()) };
        assert!(matches!(result, Err(HostError::NullPointer("IConsole"))));
    }

    use std::cell::{Cell, RefCell};
    use std::ffi::CStr;

    #[repr(C)]
    struct FakeObject {
        vtbl: *const c_void,
    }

    thread_local! {
        static WRITES: RefCell<Vec<(D3dColor, String)>> = const { RefCell::new(Vec::new()) };
        static CONSOLE: Cell<*mut IConsole> = const { Cell::new(std::ptr::null_mut()) };
    }

    unsafe extern "C" fn fake_write(_this: *mut IConsole, color: D3dColor, text: *const c_char) {
        let text = CStr::from_ptr(text).to_string_lossy().into_owned();
        WRITES.with(|w| w.borrow_mut().push((color, text)));
    }

    unsafe extern "C" fn fake_get_console(_this: *mut IHookCore) -> *mut IConsole {
        CONSOLE.with(|c| c.get())
    }

    static CONSOLE_VTBL: [ConsoleWriteFn; 1] = [fake_write];
    static HOOK_CORE_VTBL: [GetConsoleFn; 2] = [fake_get_console, fake_get_console];

    #[test]
    fn test_console_write_through_vtable() {
        let mut console = FakeObject {
            vtbl: CONSOLE_VTBL.as_ptr().cast(),
        };
        let mut core = FakeObject {
            vtbl: HOOK_CORE_VTBL.as_ptr().cast(),
        };
        CONSOLE.with(|c| c.set((&mut console as *mut FakeObject).cast()));

        let core =
            unsafe { NativeHookCore::from_raw((&mut core as *mut FakeObject).cast()) }.unwrap();
        core.console().unwrap().write(0xFF00_FF00, "hello").unwrap();

        WRITES.with(|w| {
            assert_eq!(w.borrow().as_slice(), &[(0xFF00_FF00, "hello".to_string())]);
        });
    }

    #[test]
    fn test_console_write_rejects_nul() {
        let mut console = FakeObject {
            vtbl: CONSOLE_VTBL.as_ptr().cast(),
        };
        let console =
            unsafe { NativeConsole::from_raw((&mut console as *mut FakeObject).cast()) }.unwrap();
        assert!(matches!(
            console.write(0, "bad\0text"),
            Err(HostError::InvalidText(_))
        ));
        WRITES.with(|w| assert!(w.borrow().is_empty()));
    }

    #[test]
    fn test_virtual_fn_reads_slot() {
        let table: [usize; 3] = [0x10, 0x20, 0x30];
        let mut object: *const usize = table.as_ptr();
        let slot = unsafe { virtual_fn((&mut object as *mut *const usize).cast(), 2) };
        assert_eq!(slot as usize, 0x30);
    }
}
