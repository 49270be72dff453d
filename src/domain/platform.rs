use std::fmt;

use crate::domain::AppError;

/// A target platform for build outputs.
///
/// Each selected platform contributes one `Build/<Platform>` entry to the
/// directory catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    Android,
    Ios,
    PlayStation,
    Xbox,
    Nintendo,
    Web,
}

impl Platform {
    /// All supported platforms in display order.
    pub const ALL: [Platform; 9] = [
        Platform::Windows,
        Platform::MacOS,
        Platform::Linux,
        Platform::Android,
        Platform::Ios,
        Platform::PlayStation,
        Platform::Xbox,
        Platform::Nintendo,
        Platform::Web,
    ];

    /// Directory name under `Build/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOS => "MacOS",
            Platform::Linux => "Linux",
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::PlayStation => "PlayStation",
            Platform::Xbox => "Xbox",
            Platform::Nintendo => "Nintendo",
            Platform::Web => "Web",
        }
    }

    /// Parse a platform from its name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Platform> {
        match name.trim().to_lowercase().as_str() {
            "windows" => Some(Platform::Windows),
            "macos" => Some(Platform::MacOS),
            "linux" => Some(Platform::Linux),
            "android" => Some(Platform::Android),
            "ios" => Some(Platform::Ios),
            "playstation" => Some(Platform::PlayStation),
            "xbox" => Some(Platform::Xbox),
            "nintendo" => Some(Platform::Nintendo),
            "web" => Some(Platform::Web),
            _ => None,
        }
    }

    fn available() -> String {
        Platform::ALL.map(|p| p.dir_name()).join(", ")
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Parse a comma-separated platform list.
///
/// Duplicates collapse; order of first mention is preserved. Empty segments
/// are ignored so trailing commas are harmless.
pub fn parse_platform_list(value: &str) -> Result<Vec<Platform>, AppError> {
    let mut platforms = Vec::new();
    for segment in value.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let platform = Platform::from_name(segment).ok_or_else(|| AppError::InvalidPlatform {
            name: segment.to_string(),
            available: Platform::available(),
        })?;
        if !platforms.contains(&platform) {
            platforms.push(platform);
        }
    }
    Ok(platforms)
}

/// Join platform names for display, `"none"` when empty.
pub fn display_platform_list(platforms: &[Platform]) -> String {
    if platforms.is_empty() {
        "none".to_string()
    } else {
        platforms.iter().map(|p| p.dir_name()).collect::<Vec<_>>().join(", ")
    }
}
