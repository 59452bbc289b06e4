// Code generated by errgen; DO NOT EDIT.

/// A centrally defined error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error {
    pub code: &'static str,
    pub msg: &'static str,
    pub cause: &'static str,
    pub http_status: u16,
    pub category: &'static str,
    pub severity: &'static str,
    pub is_retryable: bool,
    pub solution: &'static str,
    pub tags: &'static [&'static str],
}

pub const OR0001: &Error = &Error {
    code: "ORDER_FAILED",
    msg: "Order \"42\" failed",
    cause: "Gateway at C:\\pay\\gw",
    http_status: 500,
    category: "order",
    severity: "critical",
    is_retryable: true,
    solution: "Retry later\r\nor contact support",
    tags: &[
        "payment",
        "order",
    ],
};

pub const UR0001: &Error = &Error {
    code: "USER_NOT_FOUND",
    msg: "User not found",
    cause: "User ID missing",
    http_status: 404,
    category: "user",
    severity: "low",
    is_retryable: false,
    solution: "Provide correct user ID",
    tags: &[],
};

#[allow(non_upper_case_globals)]
pub const index: &Error = &Error {
    code: "INDEX_STALE",
    msg: "Search index stale",
    cause: "Reindex lagging",
    http_status: 503,
    category: "search",
    severity: "medium",
    is_retryable: true,
    solution: "Wait for reindex",
    tags: &[
        "search",
    ],
};

#[allow(non_upper_case_globals)]
pub const key: &Error = &Error {
    code: "KEY_REVOKED",
    msg: "API key revoked",
    cause: "Key rotated",
    http_status: 401,
    category: "auth",
    severity: "high",
    is_retryable: false,
    solution: "Issue a new key",
    tags: &[],
};

/// Every error keyed by registry key, sorted ascending by key.
pub static ERROR_MAP: &[(&str, &Error)] = &[
    ("OR0001", OR0001),
    ("UR0001", UR0001),
    ("index", index),
    ("key", key),
];

/// Look up an error by registry key.
pub fn lookup(__key: &str) -> Option<&'static Error> {
    ERROR_MAP
        .binary_search_by(|(__candidate, _)| __candidate.cmp(&__key))
        .ok()
        .map(|__index| ERROR_MAP[__index].1)
}
