use uuid::Uuid;

use crate::Sampler;
use crate::UniformSource;

pub const HTTP_STATUS_CODES: &[u16] = &[
    100, 101, 102, 103, 200, 201, 202, 203, 204, 205, 206, 207, 208, 226, 300, 301, 302, 303, 304,
    305, 307, 308, 400, 401, 402, 403, 404, 405, 406, 407, 408, 409, 410, 411, 412, 413, 414, 415,
    416, 417, 418, 421, 422, 423, 424, 425, 426, 428, 429, 431, 451, 500, 501, 502, 503, 504, 505,
    506, 507, 508, 510, 511,
];

pub const BOOLEAN_STRINGS: [&str; 4] = ["true", "false", "TRUE", "FALSE"];

impl<S: UniformSource> Sampler<S> {
    /// A version 4 UUID whose random bits come from this sampler.
    pub fn uuid(&self) -> Uuid {
        let mut bytes = [0u8; 16];
        for byte in &mut bytes {
            *byte = self.byte();
        }
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }

    /// A registered HTTP status code.
    pub fn http_status(&self) -> u16 {
        HTTP_STATUS_CODES[self.index(HTTP_STATUS_CODES.len())]
    }

    /// `true` or `false`, in lower or upper case.
    pub fn boolean_string(&self) -> &'static str {
        BOOLEAN_STRINGS[self.index(BOOLEAN_STRINGS.len())]
    }
}
