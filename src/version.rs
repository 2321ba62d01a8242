//! Version and build.

/// Return the program name.
pub const fn name() -> &'static str {
    match option_env!("PROGRAM_NAME") {
        Some(s) => s,
        None => "coordsparser",
    }
}

/// Return the program version.
pub const fn version() -> Option<&'static str> {
    option_env!("CARGO_PKG_VERSION")
}

/// Return the program name together with its version, if known.
pub fn full_name() -> String {
    match version() {
        Some(v) => format!("{} {}", name(), v),
        None => name().to_string(),
    }
}
