use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SiteError;
use crate::rating::RatingWidget;

/// A feedback row as stored by the hosted backend (`feedback` table).
/// Visible only in the admin panel; there is no public surface for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

/// Display order: most recent first.
pub fn display_ordering(a: &Feedback, b: &Feedback) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

/// Visitor form payload. The rating arrives from the star strip's radio
/// group; a missing radio selection deserializes to None. The default
/// value doubles as the blank form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl NewFeedback {
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(SiteError::Validation(
                "Preencha todos os campos do feedback!".into(),
            ));
        }
        match self.rating {
            Some(r) if RatingWidget::accepts(r) => Ok(()),
            _ => Err(SiteError::Validation(
                "Selecione uma avaliação de 1 a 5 estrelas!".into(),
            )),
        }
    }

    /// Insert payload; call only after `validate`.
    pub fn into_insert(self) -> FeedbackInsert {
        FeedbackInsert {
            name: self.name,
            email: self.email,
            message: self.message,
            rating: self.rating.unwrap_or_default(),
        }
    }

    /// Widget state for re-rendering the form after a failed submission:
    /// a valid selection stays committed, anything else stays cleared.
    pub fn widget(&self) -> RatingWidget {
        match self.rating {
            Some(r) if RatingWidget::accepts(r) => RatingWidget::with_committed(r),
            _ => RatingWidget::new(),
        }
    }
}

/// Row sent to the backend on insert. id/created_at are assigned remotely.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackInsert {
    pub name: String,
    pub email: String,
    pub message: String,
    pub rating: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(rating: u8) -> NewFeedback {
        NewFeedback {
            name: "Maria".into(),
            email: "maria@exemplo.com".into(),
            message: "Ótima escola.".into(),
            rating: Some(rating),
        }
    }

    #[test]
    fn all_fields_required() {
        let mut f = entry(4);
        f.message = "".into();
        assert!(f.validate().unwrap_err().is_validation());

        let mut f = entry(4);
        f.rating = None;
        assert!(f.validate().unwrap_err().is_validation());
    }

    #[test]
    fn rating_must_be_in_widget_range() {
        assert!(entry(0).validate().is_err());
        assert!(entry(6).validate().is_err());
        for r in 1..=5 {
            assert!(entry(r).validate().is_ok());
        }
    }

    #[test]
    fn widget_state_survives_a_failed_submission() {
        let mut f = entry(3);
        f.name = "".into();
        assert!(f.validate().is_err());
        assert_eq!(f.widget().committed(), 3);

        f.rating = Some(9);
        assert_eq!(f.widget().committed(), 0);
    }

    #[test]
    fn most_recent_feedback_comes_first() {
        let mk = |ts: i64| Feedback {
            id: Uuid::new_v4(),
            name: "a".into(),
            email: "a@b.c".into(),
            message: "m".into(),
            rating: 5,
            created_at: Utc.timestamp_opt(ts, 0).unwrap(),
        };
        let mut list = vec![mk(10), mk(30), mk(20)];
        list.sort_by(display_ordering);
        let stamps: Vec<i64> = list.iter().map(|f| f.created_at.timestamp()).collect();
        assert_eq!(stamps, [30, 20, 10]);
    }
}
