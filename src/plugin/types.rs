//! Type definitions for the plugin system

use crate::plugin::builtin::Plugin;
use crate::plugin::error::{PluginError, PluginResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Common prefix of the built-in plugin ids
pub const ID_PREFIX: &str = "com.verificationgentleman.gradle.hdvl";

static ID_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9-]*(\.[a-z0-9][a-z0-9-]*)+$").expect("valid plugin id regex")
});

/// Globally unique, dotted plugin identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluginId(Cow<'static, str>);

impl PluginId {
    /// Validate and wrap an id such as `com.example.hdvl.lint`
    pub fn new(id: &str) -> PluginResult<Self> {
        if ID_FORMAT.is_match(id) {
            Ok(Self(Cow::Owned(id.to_string())))
        } else {
            Err(PluginError::InvalidId {
                id: id.to_string(),
                reason: "expected dot-separated lowercase segments, e.g. 'com.example.lint'"
                    .to_string(),
            })
        }
    }

    /// Wrap a compile-time id without validation
    pub(crate) const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        ID_FORMAT.is_match(&self.0)
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PluginId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Registry entry describing a plugin and how to instantiate it
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    pub id: PluginId,
    /// Short name accepted wherever an id is
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub factory: fn() -> Plugin,
}

impl PluginDescriptor {
    pub fn instantiate(&self) -> Plugin {
        (self.factory)()
    }
}
