//! Trigger actions reported to the backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The action a triggering request reports on behalf of a user session.
///
/// The backend recognizes exactly two trigger tags; anything else is a
/// caller defect, so unknown tags are rejected at the boundary instead of
/// being carried as free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerAction {
    /// Goal triggering. The action value is the goal name.
    #[serde(rename = "sc_trk")]
    Goal,
    /// Campaign triggering. The action value is the campaign id.
    #[serde(rename = "sc_camp")]
    Campaign,
}

impl TriggerAction {
    /// Wire tag for goal triggering.
    pub const GOAL_TAG: &'static str = "sc_trk";
    /// Wire tag for campaign triggering.
    pub const CAMPAIGN_TAG: &'static str = "sc_camp";

    /// The tag sent on the wire for this action.
    pub fn as_tag(self) -> &'static str {
        match self {
            TriggerAction::Goal => Self::GOAL_TAG,
            TriggerAction::Campaign => Self::CAMPAIGN_TAG,
        }
    }

    /// Parse a wire tag. Answers `None` for anything but the two known
    /// tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            Self::GOAL_TAG => Some(TriggerAction::Goal),
            Self::CAMPAIGN_TAG => Some(TriggerAction::Campaign),
            _ => None,
        }
    }
}

impl fmt::Display for TriggerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_round_trip() {
        assert_eq!(TriggerAction::Goal.as_tag(), "sc_trk");
        assert_eq!(TriggerAction::Campaign.as_tag(), "sc_camp");
        assert_eq!(TriggerAction::from_tag("sc_trk"), Some(TriggerAction::Goal));
        assert_eq!(
            TriggerAction::from_tag("sc_camp"),
            Some(TriggerAction::Campaign)
        );
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert_eq!(TriggerAction::from_tag("sc_event"), None);
        assert_eq!(TriggerAction::from_tag(""), None);
        assert_eq!(TriggerAction::from_tag("SC_TRK"), None);
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        assert_eq!(
            serde_json::to_value(TriggerAction::Goal).unwrap(),
            json!("sc_trk")
        );

        let parsed: TriggerAction = serde_json::from_value(json!("sc_camp")).unwrap();
        assert_eq!(parsed, TriggerAction::Campaign);

        assert!(serde_json::from_value::<TriggerAction>(json!("sc_other")).is_err());
    }

    #[test]
    fn test_display_is_wire_tag() {
        assert_eq!(TriggerAction::Campaign.to_string(), "sc_camp");
    }
}
