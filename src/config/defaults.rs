/// Default page title
pub fn default_title() -> String {
    "mrkdwn".to_string()
}

/// Default table of contents heading
pub fn default_toc_title() -> String {
    "Contents".to_string()
}

pub fn default_true() -> bool {
    true
}

/// Level 1 is the document title, so the contents start at h2
pub fn default_toc_min_level() -> u8 {
    2
}

pub fn default_toc_max_level() -> u8 {
    3
}

/// Default bind address
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default port
pub fn default_port() -> u16 {
    8787
}

/// 1 MiB
pub fn default_max_body_bytes() -> usize {
    1024 * 1024
}

pub fn default_request_timeout_secs() -> u64 {
    30
}
