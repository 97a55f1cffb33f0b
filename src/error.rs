use thiserror::Error;

/// Error taxonomy for the site.
///
/// `Validation` is raised before any network call and carries a ready-to-show
/// message. `Fetch` and `Mutation` carry the collaborator's raw message text;
/// the hosted backend makes no distinction between a network failure and a
/// rejected request, and neither do we.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Mutation(String),
}

impl SiteError {
    /// Text for the alert banner: validation messages are already user-facing,
    /// backend failures get the fixed prefix in front of the raw message.
    pub fn alert_text(&self) -> String {
        match self {
            SiteError::Validation(msg) => msg.clone(),
            SiteError::Fetch(msg) | SiteError::Mutation(msg) => format!("Erro: {msg}"),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SiteError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_text_is_shown_as_is() {
        let err = SiteError::Validation("Preencha todos os campos!".into());
        assert_eq!(err.alert_text(), "Preencha todos os campos!");
    }

    #[test]
    fn backend_errors_get_the_fixed_prefix() {
        let err = SiteError::Fetch("connection refused".into());
        assert_eq!(err.alert_text(), "Erro: connection refused");

        let err = SiteError::Mutation("new row violates row-level security policy".into());
        assert_eq!(
            err.alert_text(),
            "Erro: new row violates row-level security policy"
        );
    }
}
