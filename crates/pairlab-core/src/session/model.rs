//! Session read models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Lifecycle status of a conversation session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
}

/// Conversation depth band derived from the 0-10 depth score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthBand {
    Low,
    Medium,
    High,
}

impl DepthBand {
    /// Bands: `>= 8` high, `>= 5` medium, anything lower low.
    pub fn from_score(score: u32) -> Self {
        if score >= 8 {
            Self::High
        } else if score >= 5 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One conversation session between a matched pair.
///
/// Metrics (`message_count`, `depth_score`, `ai_interventions`) come from
/// the external conversation runtime. The console treats records as
/// read-only facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Unique session identifier (`session_` prefix + UUID)
    pub id: String,
    /// The match this session belongs to
    pub match_id: String,
    pub status: SessionStatus,
    /// Start timestamp (RFC 3339)
    pub started_at: String,
    /// End timestamp (RFC 3339), present once completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    #[serde(default)]
    pub message_count: u32,
    /// Conversation depth score, 0-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_score: Option<u32>,
    /// Number of times the AI concierge stepped in
    #[serde(default)]
    pub ai_interventions: u32,
}

impl SessionRecord {
    /// Creates a fresh active session for a match.
    pub fn new(match_id: impl Into<String>) -> Self {
        Self {
            id: format!("session_{}", Uuid::new_v4().simple()),
            match_id: match_id.into(),
            status: SessionStatus::Active,
            started_at: Utc::now().to_rfc3339(),
            ended_at: None,
            message_count: 0,
            depth_score: None,
            ai_interventions: 0,
        }
    }

    /// The depth band, when a score was recorded.
    pub fn depth_band(&self) -> Option<DepthBand> {
        self.depth_score.map(DepthBand::from_score)
    }

    /// Elapsed minutes from start to end, or to now for active sessions.
    ///
    /// `None` when the stored timestamps do not parse.
    pub fn duration_minutes(&self) -> Option<i64> {
        let started = parse_timestamp(&self.started_at)?;
        let ended = match &self.ended_at {
            Some(raw) => parse_timestamp(raw)?,
            None => Utc::now(),
        };
        Some((ended - started).num_minutes().max(0))
    }

    /// Duration formatted for the board: `42m` under an hour, `2h 10m` over.
    pub fn duration_label(&self) -> Option<String> {
        let minutes = self.duration_minutes()?;
        if minutes < 60 {
            Some(format!("{}m", minutes))
        } else {
            Some(format!("{}h {}m", minutes / 60, minutes % 60))
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(started: &str, ended: &str) -> SessionRecord {
        let mut session = SessionRecord::new("match_1");
        session.status = SessionStatus::Completed;
        session.started_at = started.to_string();
        session.ended_at = Some(ended.to_string());
        session
    }

    #[test]
    fn test_new_session_defaults() {
        let session = SessionRecord::new("match_7");
        assert!(session.id.starts_with("session_"));
        assert_eq!(session.match_id, "match_7");
        assert_eq!(session.status, SessionStatus::Active);
        assert!(session.ended_at.is_none());
        assert_eq!(session.message_count, 0);
        assert!(session.depth_band().is_none());
    }

    #[test]
    fn test_depth_bands() {
        assert_eq!(DepthBand::from_score(0), DepthBand::Low);
        assert_eq!(DepthBand::from_score(4), DepthBand::Low);
        assert_eq!(DepthBand::from_score(5), DepthBand::Medium);
        assert_eq!(DepthBand::from_score(7), DepthBand::Medium);
        assert_eq!(DepthBand::from_score(8), DepthBand::High);
        assert_eq!(DepthBand::from_score(10), DepthBand::High);
    }

    #[test]
    fn test_duration_under_an_hour() {
        let session = completed("2026-03-02T19:00:00+00:00", "2026-03-02T19:42:00+00:00");
        assert_eq!(session.duration_minutes(), Some(42));
        assert_eq!(session.duration_label().unwrap(), "42m");
    }

    #[test]
    fn test_duration_over_an_hour() {
        let session = completed("2026-03-02T19:00:00+00:00", "2026-03-02T21:10:00+00:00");
        assert_eq!(session.duration_label().unwrap(), "2h 10m");
    }

    #[test]
    fn test_duration_exact_hours_keeps_minutes() {
        let session = completed("2026-03-02T19:00:00+00:00", "2026-03-02T21:00:00+00:00");
        assert_eq!(session.duration_label().unwrap(), "2h 0m");
    }

    #[test]
    fn test_duration_none_on_malformed_timestamp() {
        let session = completed("yesterday evening", "2026-03-02T21:00:00+00:00");
        assert!(session.duration_minutes().is_none());
        assert!(session.duration_label().is_none());
    }

    #[test]
    fn test_active_session_duration_uses_now() {
        let mut session = SessionRecord::new("match_1");
        session.started_at = "2026-01-01T00:00:00+00:00".to_string();
        // Far enough in the past that the live clock always exceeds it.
        assert!(session.duration_minutes().unwrap() > 60);
    }

    #[test]
    fn test_serde_camel_case() {
        let mut session = completed("2026-03-02T19:00:00+00:00", "2026-03-02T20:00:00+00:00");
        session.depth_score = Some(8);
        session.ai_interventions = 2;
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["matchId"], "match_1");
        assert_eq!(json["status"], "completed");
        assert_eq!(json["depthScore"], 8);
        assert_eq!(json["aiInterventions"], 2);
        assert_eq!(json["endedAt"], "2026-03-02T20:00:00+00:00");
    }
}
