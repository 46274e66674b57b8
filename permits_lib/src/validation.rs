use permits_api::SortDirection;

use crate::error::PermitsError;

pub const MAX_PERMIT_TYPE_LENGTH: usize = 100;

/// Replace ASCII control characters with spaces, trim whitespace, and cut
/// the result to at most `max_len` bytes on a char boundary. Never fails; an
/// empty result is allowed.
pub fn sanitize_text(input: &str, max_len: usize) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if c.is_ascii_control() { ' ' } else { c })
        .collect();
    let trimmed = cleaned.trim();
    let mut end = trimmed.len().min(max_len);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].trim_end().to_string()
}

/// Normalize the permit type search text. Blank input matches every permit.
pub fn validate_permit_type(input: &str) -> String {
    sanitize_text(input, MAX_PERMIT_TYPE_LENGTH)
}

/// Validate the order direction: `asc` or `desc`, case-insensitive.
pub fn validate_order(input: &str) -> Result<SortDirection, PermitsError> {
    input.parse::<SortDirection>().map_err(PermitsError::from)
}
