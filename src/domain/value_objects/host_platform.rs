//! Host platform value object - which OS the verb runs on

use std::fmt;

/// Host operating system, as far as the serve stage cares.
///
/// `Unknown` keeps the raw OS string so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    MacOs,
    Windows,
    Linux,
    Unknown(String),
}

impl HostPlatform {
    /// Map an OS identifier (as in `std::env::consts::OS`) to a platform.
    ///
    /// The short fips names (`osx`, `win`) are accepted as well.
    pub fn from_os(os: &str) -> Self {
        match os.to_ascii_lowercase().as_str() {
            "macos" | "osx" => HostPlatform::MacOs,
            "windows" | "win" => HostPlatform::Windows,
            "linux" => HostPlatform::Linux,
            _ => HostPlatform::Unknown(os.to_string()),
        }
    }

    /// The short name fips uses for this platform
    pub fn fips_name(&self) -> &str {
        match self {
            HostPlatform::MacOs => "osx",
            HostPlatform::Windows => "win",
            HostPlatform::Linux => "linux",
            HostPlatform::Unknown(os) => os.as_str(),
        }
    }

    /// Command that opens a URL in the default browser.
    ///
    /// `None` for unknown platforms.
    pub fn open_url_command(&self, url: &str) -> Option<String> {
        match self {
            HostPlatform::MacOs => Some(format!("open {url}")),
            HostPlatform::Windows => Some(format!("cmd /c start {url}")),
            HostPlatform::Linux => Some(format!("xdg-open {url}")),
            HostPlatform::Unknown(_) => None,
        }
    }

    /// Compose "open browser, then run server" into one shell line.
    ///
    /// On Windows the server only starts if `start` succeeded (`&&`); elsewhere
    /// the server starts regardless (`;`).
    pub fn serve_command(&self, url: &str, server: &str) -> Option<String> {
        let open = self.open_url_command(url)?;
        let line = match self {
            HostPlatform::MacOs => format!("{open} ; {server}"),
            HostPlatform::Windows => format!("{open} && {server}"),
            HostPlatform::Linux => format!("{open}; {server}"),
            HostPlatform::Unknown(_) => return None,
        };
        Some(line)
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fips_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_os_maps_rust_and_fips_names() {
        assert_eq!(HostPlatform::from_os("macos"), HostPlatform::MacOs);
        assert_eq!(HostPlatform::from_os("osx"), HostPlatform::MacOs);
        assert_eq!(HostPlatform::from_os("windows"), HostPlatform::Windows);
        assert_eq!(HostPlatform::from_os("win"), HostPlatform::Windows);
        assert_eq!(HostPlatform::from_os("linux"), HostPlatform::Linux);
        assert_eq!(
            HostPlatform::from_os("freebsd"),
            HostPlatform::Unknown("freebsd".to_string())
        );
    }

    #[test]
    fn serve_command_per_platform() {
        let url = "http://localhost:8000";
        let server = "python /ws/fips/mod/httpserver.py";

        assert_eq!(
            HostPlatform::MacOs.serve_command(url, server).unwrap(),
            "open http://localhost:8000 ; python /ws/fips/mod/httpserver.py"
        );
        assert_eq!(
            HostPlatform::Windows.serve_command(url, server).unwrap(),
            "cmd /c start http://localhost:8000 && python /ws/fips/mod/httpserver.py"
        );
        assert_eq!(
            HostPlatform::Linux.serve_command(url, server).unwrap(),
            "xdg-open http://localhost:8000; python /ws/fips/mod/httpserver.py"
        );
    }

    #[test]
    fn unknown_platform_has_no_command() {
        let p = HostPlatform::from_os("haiku");
        assert!(matches!(p, HostPlatform::Unknown(_)));
        assert_eq!(p.serve_command("http://localhost:8000", "python s.py"), None);
        assert_eq!(p.to_string(), "haiku");
    }
}
