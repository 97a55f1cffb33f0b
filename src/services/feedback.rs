use crate::error::SiteError;
use crate::models::feedback::{self, Feedback, NewFeedback};
use crate::services::supabase::Supabase;

const TABLE: &str = "feedback";
const ORDER: &str = "created_at.desc";

/// Store adapter for the `feedback` table. Inserts come from the public
/// form; the rows are only ever read back inside the admin panel.
pub struct FeedbackService;

impl FeedbackService {
    /// Every feedback entry, most recent first.
    pub async fn list(supabase: &Supabase) -> Result<Vec<Feedback>, SiteError> {
        let mut entries: Vec<Feedback> = supabase.select_all(TABLE, ORDER).await?;
        entries.sort_by(feedback::display_ordering);
        Ok(entries)
    }

    /// Record a visitor's feedback. Anonymous insert; validation runs
    /// before anything goes on the wire.
    pub async fn create(supabase: &Supabase, new: NewFeedback) -> Result<(), SiteError> {
        new.validate()?;
        let row = new.into_insert();
        supabase.insert(TABLE, &row, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_supabase() -> Supabase {
        Supabase::new("http://127.0.0.1:9", "anon")
    }

    #[tokio::test]
    async fn create_rejects_a_missing_rating_before_any_network_call() {
        let new = NewFeedback {
            name: "Maria".into(),
            email: "maria@exemplo.com".into(),
            message: "Ótima escola.".into(),
            rating: None,
        };
        let err = FeedbackService::create(&offline_supabase(), new)
            .await
            .unwrap_err();
        assert!(matches!(err, SiteError::Validation(_)));
    }

    #[tokio::test]
    async fn valid_feedback_reaches_the_wire() {
        let new = NewFeedback {
            name: "Maria".into(),
            email: "maria@exemplo.com".into(),
            message: "Ótima escola.".into(),
            rating: Some(5),
        };
        let err = FeedbackService::create(&offline_supabase(), new)
            .await
            .unwrap_err();
        assert!(matches!(err, SiteError::Mutation(_)));
    }
}
