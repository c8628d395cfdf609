//! Plugin descriptor
//!
//! Plugins describe themselves with an ordinary [`PluginDescriptor`]. It is
//! converted to the host's fixed-size `plugininfo_t` only at the boundary,
//! via [`PluginDescriptor::write_to`].

use rmod_sdk::{PluginInfo, HOOK_INTERFACE_VERSION};

/// Errors converting a descriptor into the host record
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DescriptorError {
    /// String does not fit the host buffer (one byte is kept for NUL)
    #[error("{field} is {len} bytes, the host allows at most {max}")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// String contains a NUL byte and would be truncated by the host
    #[error("{0} contains a NUL byte")]
    InteriorNul(&'static str),
}

/// Static information identifying a plugin to the host
#[derive(Debug, Clone, PartialEq)]
pub struct PluginDescriptor {
    pub author: String,
    pub name: String,
    /// SDK revision the plugin was built against
    pub interface_version: f64,
    pub plugin_version: f32,
    /// Lower values are called first
    pub priority: i32,
}

impl PluginDescriptor {
    /// Descriptor for the current interface version, plugin version 1.0,
    /// priority 0
    pub fn new(author: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            name: name.into(),
            interface_version: HOOK_INTERFACE_VERSION,
            plugin_version: 1.0,
            priority: 0,
        }
    }

    pub fn with_plugin_version(mut self, version: f32) -> Self {
        self.plugin_version = version;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Fill a host-owned record in place
    ///
    /// Both strings are validated before anything is written, so on error the
    /// record is left untouched.
    pub fn write_to(&self, info: &mut PluginInfo) -> Result<(), DescriptorError> {
        check_bounded("author", &self.author, info.author.len())?;
        check_bounded("name", &self.name, info.name.len())?;

        copy_bounded(&self.author, &mut info.author);
        copy_bounded(&self.name, &mut info.name);
        info.interface_version = self.interface_version;
        info.plugin_version = self.plugin_version;
        info.priority = self.priority;
        Ok(())
    }
}

fn check_bounded(field: &'static str, value: &str, capacity: usize) -> Result<(), DescriptorError> {
    if value.as_bytes().contains(&0) {
        return Err(DescriptorError::InteriorNul(field));
    }
    if value.len() >= capacity {
        return Err(DescriptorError::TooLong {
            field,
            len: value.len(),
            max: capacity - 1,
        });
    }
    Ok(())
}

fn copy_bounded(value: &str, buf: &mut [u8]) {
    buf.fill(0);
    buf[..value.len()].copy_from_slice(value.as_bytes());
}
