//! Toolchain port - is the cross-compilation SDK installed?

/// Capability probe for the cross-compilation toolchain (emscripten).
///
/// Must not fail: anything short of a usable SDK reports `false`.
pub trait ToolchainProbe {
    /// Human-readable toolchain name, used in log lines
    fn name(&self) -> &str;

    fn check_exists(&self) -> bool;
}

impl<T: ToolchainProbe + ?Sized> ToolchainProbe for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn check_exists(&self) -> bool {
        (**self).check_exists()
    }
}
