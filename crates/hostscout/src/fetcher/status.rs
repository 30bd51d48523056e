//! Response status policy.

use reqwest::StatusCode;

/// Whether a `/peers` response should be read as a peer list.
///
/// Only 2xx counts; redirects are followed by the client before this runs.
pub fn check_status(status: StatusCode) -> bool {
    status.is_success()
}
