//! Common constants used throughout loki.

/// Font used when none is given
pub const DEFAULT_FONT: &str = "standard";

/// Fonts offered by the interactive form
pub const SUPPORTED_FONTS: [&str; 6] = ["standard", "small", "script", "mini", "bubbles", "jerusalim"];

/// Directories searched for FIGlet font files
pub const FONT_DIRS: [&str; 2] = ["/usr/share/figlet", "/usr/local/share/figlet"];

/// FIGlet font file extension
pub const FONT_EXTENSION: &str = "flf";

/// Format of the optional date banner, e.g. `18 Oct 2026`
pub const DATE_FORMAT: &str = "%d %b %Y";

/// Permission bits of a generated script
#[cfg(unix)]
pub const SCRIPT_MODE: u32 = 0o755;
