//! Wire types for the non-CRUD endpoints.

use serde::{Deserialize, Serialize};

/// Aggregated dashboard figures returned by `GET /api/dashboard-stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of member records.
    pub total_members: u64,
    /// Number of activity records.
    pub total_activities: u64,
    /// Sum of all donation amounts; 0 when there are none.
    pub total_donations: f64,
    /// Sum of all expense amounts; 0 when there are none.
    pub total_expenses: f64,
    /// `total_donations - total_expenses`.
    pub net_balance: f64,
}

/// Reported reachability of the persistence layer.
///
/// Process liveness is independent of this: the health endpoint answers
/// 200 either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseStatus {
    /// The record store is reachable.
    Connected,
    /// The record store is closed or unreachable.
    Disconnected,
}

impl DatabaseStatus {
    /// Returns true for [`DatabaseStatus::Connected`].
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, DatabaseStatus::Connected)
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Process status; always `"OK"` when the process can answer at all.
    pub status: String,
    /// Human-readable banner.
    pub message: String,
    /// Current persistence connectivity.
    pub database: DatabaseStatus,
    /// RFC 3339 timestamp of the probe.
    pub timestamp: String,
}

/// Body of a successful `DELETE /api/<kind>/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    /// e.g. `"Member deleted successfully"`.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_wire_names() {
        let stats = DashboardStats {
            total_members: 12,
            total_activities: 3,
            total_donations: 800.0,
            total_expenses: 150.5,
            net_balance: 649.5,
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalMembers"], 12);
        assert_eq!(json["netBalance"], 649.5);
    }

    #[test]
    fn database_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&DatabaseStatus::Connected).unwrap(),
            "\"Connected\""
        );
        assert_eq!(
            serde_json::to_string(&DatabaseStatus::Disconnected).unwrap(),
            "\"Disconnected\""
        );
    }

    #[test]
    fn health_report_roundtrip() {
        let report = HealthReport {
            status: "OK".into(),
            message: "clubsync API is running".into(),
            database: DatabaseStatus::Disconnected,
            timestamp: "2025-03-01T12:00:00Z".into(),
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: HealthReport = serde_json::from_str(&json).unwrap();
        assert!(!back.database.is_connected());
        assert_eq!(back.status, "OK");
    }
}
