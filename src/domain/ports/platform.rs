//! PlatformProbe port - which OS are we running on

use crate::domain::value_objects::HostPlatform;

pub trait PlatformProbe {
    fn host_platform(&self) -> HostPlatform;
}

/// Fixed answer, used by tests
impl PlatformProbe for HostPlatform {
    fn host_platform(&self) -> HostPlatform {
        self.clone()
    }
}
