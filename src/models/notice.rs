use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SiteError;

/// Author label used when no admin e-mail is available for `created_by`.
pub const DEFAULT_AUTHOR: &str = "Administração";

/// A notice row as stored by the hosted backend. Field names match the
/// `notices` table exactly; id and created_at are assigned remotely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_by: String,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

/// Display order: pinned notices first, then most recent first.
pub fn display_ordering(a: &Notice, b: &Notice) -> Ordering {
    b.is_pinned
        .cmp(&a.is_pinned)
        .then(b.created_at.cmp(&a.created_at))
}

/// Admin form payload for publishing a notice. The default value doubles
/// as the blank form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewNotice {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_pinned: bool,
}

impl NewNotice {
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(SiteError::Validation(
                "Preencha o título e o conteúdo do aviso!".into(),
            ));
        }
        Ok(())
    }

    /// Insert payload: blank image URL becomes NULL, author falls back to the
    /// fixed label when no admin e-mail is known.
    pub fn into_insert(self, author: Option<String>) -> NoticeInsert {
        let image_url = Some(self.image_url.trim().to_string()).filter(|u| !u.is_empty());
        NoticeInsert {
            title: self.title,
            content: self.content,
            image_url,
            created_by: author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            is_pinned: self.is_pinned,
        }
    }
}

/// Row sent to the backend on insert. id/created_at are assigned remotely.
#[derive(Debug, Clone, Serialize)]
pub struct NoticeInsert {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_by: String,
    pub is_pinned: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn notice(title: &str, is_pinned: bool, ts: i64) -> Notice {
        Notice {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: "conteúdo".to_string(),
            image_url: None,
            created_by: DEFAULT_AUTHOR.to_string(),
            is_pinned,
            created_at: Utc.timestamp_opt(ts, 0).unwrap(),
        }
    }

    #[test]
    fn pinned_notices_come_first_regardless_of_recency() {
        let mut list = vec![
            notice("recente", false, 2_000),
            notice("Exam Schedule", true, 1_000),
            notice("antigo", false, 500),
        ];
        list.sort_by(display_ordering);

        assert_eq!(list[0].title, "Exam Schedule");
        assert_eq!(list[1].title, "recente");
        assert_eq!(list[2].title, "antigo");
    }

    #[test]
    fn within_each_group_more_recent_comes_first() {
        let mut list = vec![
            notice("fixado antigo", true, 100),
            notice("solto novo", false, 400),
            notice("fixado novo", true, 300),
            notice("solto antigo", false, 200),
        ];
        list.sort_by(display_ordering);

        let titles: Vec<&str> = list.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(
            titles,
            ["fixado novo", "fixado antigo", "solto novo", "solto antigo"]
        );
    }

    #[test]
    fn validate_rejects_empty_title_or_content() {
        let new = NewNotice {
            title: "".into(),
            content: "algo".into(),
            image_url: "".into(),
            is_pinned: false,
        };
        assert!(new.validate().unwrap_err().is_validation());

        let new = NewNotice {
            title: "Aviso".into(),
            content: "   ".into(),
            image_url: "".into(),
            is_pinned: false,
        };
        assert!(new.validate().unwrap_err().is_validation());
    }

    #[test]
    fn blank_image_url_becomes_none() {
        let new = NewNotice {
            title: "Aviso".into(),
            content: "texto".into(),
            image_url: "  ".into(),
            is_pinned: false,
        };
        let insert = new.into_insert(None);
        assert_eq!(insert.image_url, None);
        assert_eq!(insert.created_by, DEFAULT_AUTHOR);
    }

    #[test]
    fn author_email_is_used_when_present() {
        let new = NewNotice {
            title: "Aviso".into(),
            content: "texto".into(),
            image_url: "https://exemplo.com/foto.png".into(),
            is_pinned: true,
        };
        let insert = new.into_insert(Some("diretoria@escola.com".into()));
        assert_eq!(insert.created_by, "diretoria@escola.com");
        assert_eq!(insert.image_url.as_deref(), Some("https://exemplo.com/foto.png"));
        assert!(insert.is_pinned);
    }
}
