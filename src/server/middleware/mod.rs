pub mod security;

pub use security::{with_security_headers, SecurityHeaders};
