//! `plugininfo_t` - plugin information record
//!
//! The host allocates this record and passes it to the `CreatePluginInfo`
//! export. The plugin fills it in place and must never free it.

use std::ffi::CStr;

/// Size of the author buffer, including the NUL terminator
pub const AUTHOR_LEN: usize = 256;

/// Size of the name buffer, including the NUL terminator
pub const NAME_LEN: usize = 256;

/// Host-defined plugin information record
#[repr(C)]
#[derive(Clone, Copy)]
pub struct PluginInfo {
    pub author: [u8; AUTHOR_LEN],
    pub name: [u8; NAME_LEN],
    pub interface_version: f64,
    pub plugin_version: f32,
    /// Callback ordering relative to other loaded plugins
    pub priority: i32,
}

impl PluginInfo {
    /// An all-zero record, as the host hands it over
    pub const fn zeroed() -> Self {
        Self {
            author: [0; AUTHOR_LEN],
            name: [0; NAME_LEN],
            interface_version: 0.0,
            plugin_version: 0.0,
            priority: 0,
        }
    }

    /// Author as a string, up to the first NUL
    pub fn author_str(&self) -> &str {
        buffer_str(&self.author)
    }

    /// Name as a string, up to the first NUL
    pub fn name_str(&self) -> &str {
        buffer_str(&self.name)
    }
}

impl Default for PluginInfo {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl std::fmt::Debug for PluginInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginInfo")
            .field("author", &self.author_str())
            .field("name", &self.name_str())
            .field("interface_version", &self.interface_version)
            .field("plugin_version", &self.plugin_version)
            .field("priority", &self.priority)
            .finish()
    }
}

fn buffer_str(buf: &[u8]) -> &str {
    CStr::from_bytes_until_nul(buf)
        .ok()
        .and_then(|s| s.to_str().ok())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_reads_empty() {
        let info = PluginInfo::zeroed();
        assert_eq!(info.author_str(), "");
        assert_eq!(info.name_str(), "");
        assert_eq!(info.priority, 0);
    }

    #[test]
    fn test_buffer_str_stops_at_nul() {
        let mut info = PluginInfo::zeroed();
        info.name[..3].copy_from_slice(b"abc");
        info.name[4] = b'x';
        assert_eq!(info.name_str(), "abc");
    }
}
