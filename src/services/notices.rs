use uuid::Uuid;

use crate::error::SiteError;
use crate::models::notice::{self, NewNotice, Notice};
use crate::services::supabase::Supabase;

const TABLE: &str = "notices";

/// Order asked of the backend; re-asserted locally after decoding so the
/// invariant holds even if the query parameter is ignored.
const ORDER: &str = "is_pinned.desc,created_at.desc";

/// Store adapter for the `notices` table. Never caches: every page render
/// calls `list` again, and mutations leave re-fetching to the caller.
pub struct NoticeService;

impl NoticeService {
    /// Every notice, pinned first, then most recent first within each group.
    pub async fn list(supabase: &Supabase) -> Result<Vec<Notice>, SiteError> {
        let mut notices: Vec<Notice> = supabase.select_all(TABLE, ORDER).await?;
        notices.sort_by(notice::display_ordering);
        Ok(notices)
    }

    /// Publish a notice as the signed-in admin. Validation runs before
    /// anything goes on the wire; the backend's row policies have the final
    /// say on whether this token may write.
    pub async fn create(
        supabase: &Supabase,
        access_token: &str,
        author: Option<String>,
        new: NewNotice,
    ) -> Result<(), SiteError> {
        new.validate()?;
        let row = new.into_insert(author);
        supabase.insert(TABLE, &row, Some(access_token)).await
    }

    pub async fn delete(
        supabase: &Supabase,
        access_token: &str,
        id: Uuid,
    ) -> Result<(), SiteError> {
        supabase.delete_by_id(TABLE, id, Some(access_token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_supabase() -> Supabase {
        Supabase::new("http://127.0.0.1:9", "anon")
    }

    #[tokio::test]
    async fn create_rejects_blank_fields_before_any_network_call() {
        let new = NewNotice {
            title: "  ".into(),
            content: "conteúdo".into(),
            image_url: "".into(),
            is_pinned: false,
        };
        let err = NoticeService::create(&offline_supabase(), "tok", None, new)
            .await
            .unwrap_err();
        assert!(matches!(err, SiteError::Validation(_)));
    }

    #[tokio::test]
    async fn list_surfaces_an_unreachable_backend_as_a_fetch_error() {
        let err = NoticeService::list(&offline_supabase()).await.unwrap_err();
        assert!(matches!(err, SiteError::Fetch(_)));
    }
}
