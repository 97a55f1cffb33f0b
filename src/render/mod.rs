pub mod feedback;
pub mod notices;
pub mod pages;

use crate::error::SiteError;

/// Site name shown in the shell header and page titles.
pub const SCHOOL_NAME: &str = "Escola Municipal Monteiro Lobato";

/// One-shot banner on the next render, standing in for the original page's
/// blocking alerts. Success and error differ only in styling.
#[derive(Debug, Clone)]
pub enum Alert {
    Success(String),
    Error(String),
}

impl Alert {
    pub fn success(text: impl Into<String>) -> Self {
        Alert::Success(text.into())
    }

    pub fn error(err: &SiteError) -> Self {
        Alert::Error(err.alert_text())
    }
}

pub fn alert_banner(alert: Option<&Alert>) -> String {
    match alert {
        None => String::new(),
        Some(Alert::Success(text)) => {
            format!(r#"<div class="alert alert-success" role="alert">{text}</div>"#)
        }
        Some(Alert::Error(text)) => {
            format!(r#"<div class="alert alert-error" role="alert">{text}</div>"#)
        }
    }
}

/// Shared page shell. Values are interpolated raw; presence checks at
/// validation time are the only sanitization anywhere.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} · {SCHOOL_NAME}</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <header class="site-header">
    <span class="brand">{SCHOOL_NAME}</span>
    <nav>
      <a class="nav-link" href="/#inicio">Início</a>
      <a class="nav-link" href="/#avisos">Avisos</a>
      <a class="nav-link" href="/#feedback">Feedback</a>
      <a class="nav-link" href="/admin">Admin</a>
    </nav>
  </header>
  <main>
{body}
  </main>
  <footer class="site-footer">
    <p>{SCHOOL_NAME}</p>
  </footer>
</body>
</html>"#
    )
}
