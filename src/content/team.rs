//! Team member model

use serde::{Deserialize, Serialize};

/// A member entry from the team document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    /// Image path, rooted under the public team-asset prefix at load time
    pub image: String,
    pub social: MemberSocial,
}

/// Per-platform profile links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberSocial {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

/// Team document shape, `{ "team": [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TeamFile {
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

impl TeamMember {
    /// Root `image` under `prefix`.
    ///
    /// Bare file names and relative paths are treated as files inside the
    /// public team-asset directory. Paths already rooted there and full
    /// URLs pass through, which makes a second normalization a no-op.
    pub fn normalize_image(&mut self, prefix: &str) {
        let prefix = prefix.trim_end_matches('/');
        if self.image.is_empty() {
            return;
        }
        if self.image.starts_with("http://") || self.image.starts_with("https://") {
            return;
        }
        if self.image == prefix || self.image.starts_with(&format!("{}/", prefix)) {
            return;
        }
        self.image = format!("{}/{}", prefix, self.image.trim_start_matches('/'));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(image: &str) -> TeamMember {
        TeamMember {
            name: "Alice".to_string(),
            image: image.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_bare_file_name_is_prefixed() {
        let mut m = member("alice.png");
        m.normalize_image("/team-members");
        assert_eq!(m.image, "/team-members/alice.png");
    }

    #[test]
    fn test_already_prefixed_path_is_unchanged() {
        let mut m = member("/team-members/alice.png");
        m.normalize_image("/team-members");
        assert_eq!(m.image, "/team-members/alice.png");
    }

    #[test]
    fn test_other_absolute_path_is_rerooted() {
        let mut m = member("/avatars/alice.png");
        m.normalize_image("/team-members");
        assert_eq!(m.image, "/team-members/avatars/alice.png");
    }

    #[test]
    fn test_full_url_passes_through() {
        let mut m = member("https://cdn.example.com/alice.png");
        m.normalize_image("/team-members");
        assert_eq!(m.image, "https://cdn.example.com/alice.png");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let mut m = member("alice.png");
        m.normalize_image("/team-members");
        m.normalize_image("/team-members");
        assert_eq!(m.image, "/team-members/alice.png");
    }

    #[test]
    fn test_empty_image_stays_empty() {
        let mut m = member("");
        m.normalize_image("/team-members");
        assert_eq!(m.image, "");
    }

    #[test]
    fn test_team_file_shape() {
        let json = r#"{
            "team": [
                {
                    "name": "Alice",
                    "role": "Founder",
                    "bio": "Builds things.",
                    "image": "alice.png",
                    "social": {"github": "https://github.com/alice"}
                }
            ]
        }"#;
        let file: TeamFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.team.len(), 1);
        assert_eq!(file.team[0].role, "Founder");
        assert_eq!(
            file.team[0].social.github.as_deref(),
            Some("https://github.com/alice")
        );
        assert!(file.team[0].social.linkedin.is_none());
    }
}
