/// Default interface the form server binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port for the form server. The validation service owns 8080.
pub const DEFAULT_PORT: u16 = 3000;

/// Time the server waits for in-flight requests on shutdown.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECONDS: u64 = 5;
