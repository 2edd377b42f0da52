//! Host platform detection

use crate::domain::ports::PlatformProbe;
use crate::domain::value_objects::HostPlatform;

/// Reads the platform the binary was compiled for
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPlatform;

impl PlatformProbe for SystemPlatform {
    fn host_platform(&self) -> HostPlatform {
        HostPlatform::from_os(std::env::consts::OS)
    }
}
