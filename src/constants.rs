//! Constants used throughout the botsmith application

/// Manifest file name expected after package-manager init
pub const MANIFEST_FILE: &str = "package.json";

/// Relative path of the generated entry point inside the project
pub const ENTRY_POINT: &str = "src/index.js";

/// Version written into every normalized manifest
pub const INITIAL_VERSION: &str = "0.1.0";

/// Procfile content shared by all nodejs variants
pub const PROCFILE_CONTENT: &str = "process: node ./src/index.js";

/// Default permission mode for materialized files
pub const FILE_MODE: u32 = 0o644;

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
