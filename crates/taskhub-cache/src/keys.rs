//! Cache key builders for all Taskhub cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

use uuid::Uuid;

/// Key for a refresh token's revocation-ledger entry (allowlist).
pub fn refresh_ledger(jti: Uuid) -> String {
    format!("auth:refresh:{jti}")
}

/// Key for a workspace's dashboard summary.
pub fn workspace_dashboard(workspace_id: Uuid) -> String {
    format!("cache:ws:{workspace_id}:dashboard")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_ledger_key() {
        let jti = Uuid::nil();
        assert_eq!(
            refresh_ledger(jti),
            "auth:refresh:00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_dashboard_key() {
        let id = Uuid::nil();
        assert_eq!(
            workspace_dashboard(id),
            "cache:ws:00000000-0000-0000-0000-000000000000:dashboard"
        );
    }
}
