//! Microphone permission seam
//!
//! The controller queries permission exactly once, at construction. Real
//! deployments wrap whatever permission subsystem the host platform has;
//! [`StaticPermissions`] covers tests, demos, and platforms without one.

/// Source of the "microphone access granted" flag
pub trait PermissionProbe: Send + Sync {
    /// Check whether the caller may record audio
    fn microphone_access_granted(&self) -> bool;
}

/// Permission probe with a fixed answer
#[derive(Debug, Clone, Copy)]
pub struct StaticPermissions {
    granted: bool,
}

impl StaticPermissions {
    /// Probe that always grants access
    pub fn granted() -> Self {
        Self { granted: true }
    }

    /// Probe that always denies access
    pub fn denied() -> Self {
        Self { granted: false }
    }
}

impl PermissionProbe for StaticPermissions {
    fn microphone_access_granted(&self) -> bool {
        self.granted
    }
}
