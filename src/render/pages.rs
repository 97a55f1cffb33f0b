use crate::models::feedback::{Feedback, NewFeedback};
use crate::models::notice::{NewNotice, Notice};
use crate::models::session::Session;

use super::{alert_banner, feedback, layout, notices, Alert};

/// The public page: welcome blurb, the notices board, the feedback form.
pub fn home_page(alert: Option<&Alert>, board: &[Notice], draft: &NewFeedback) -> String {
    let banner = alert_banner(alert);
    let list = notices::notices_fragment(board);
    let form = feedback::feedback_form(draft);

    let body = format!(
        r#"{banner}
<section id="inicio">
  <h1>Bem-vindo à nossa escola</h1>
  <p>Acompanhe os avisos da escola e deixe o seu feedback.</p>
</section>
<section id="avisos">
  <h2>Avisos</h2>
  <div id="noticesList">
{list}
  </div>
</section>
<section id="feedback">
  <h2>Deixe seu feedback</h2>
{form}
</section>"#
    );
    layout("Início", &body)
}

/// The admin page when nobody is signed in: login and registration forms.
/// Passwords are never echoed back; only the login e-mail survives a
/// failed attempt.
pub fn admin_auth_page(alert: Option<&Alert>, login_email: &str) -> String {
    let banner = alert_banner(alert);

    let body = format!(
        r#"{banner}
<section id="authSection">
  <h1>Área administrativa</h1>
  <form id="loginForm" method="post" action="/admin/login">
    <h2>Entrar</h2>
    <label for="adminEmail">E-mail</label>
    <input id="adminEmail" name="email" type="email" value="{login_email}">
    <label for="adminPassword">Senha</label>
    <input id="adminPassword" name="password" type="password" value="">
    <button type="submit">Entrar</button>
  </form>
  <form id="registerForm" method="post" action="/admin/register">
    <h2>Criar conta</h2>
    <label for="regEmail">E-mail</label>
    <input id="regEmail" name="email" type="email" value="">
    <label for="regPassword">Senha</label>
    <input id="regPassword" name="password" type="password" value="">
    <button type="submit">Cadastrar</button>
  </form>
</section>"#
    );
    layout("Admin", &body)
}

/// The admin page when a session is live: publish form, the board with
/// delete controls, and the received feedback.
pub fn admin_panel_page(
    alert: Option<&Alert>,
    session: &Session,
    draft: &NewNotice,
    board: &[Notice],
    entries: &[Feedback],
) -> String {
    let banner = alert_banner(alert);
    let email = &session.user.email;
    let form = notices::notice_form(draft);
    let list = notices::admin_notices_fragment(board);
    let received = feedback::feedback_fragment(entries);

    let body = format!(
        r#"{banner}
<section id="adminPanel">
  <header class="panel-header">
    <h1>Painel administrativo</h1>
    <p>Conectado como <strong>{email}</strong></p>
    <form method="post" action="/admin/logout">
      <button type="submit" class="danger">Sair</button>
    </form>
  </header>
  <section id="publishNotice">
    <h2>Publicar aviso</h2>
{form}
  </section>
  <section id="manageNotices">
    <h2>Avisos publicados</h2>
{list}
  </section>
  <section id="receivedFeedback">
    <h2>Feedback recebido</h2>
{received}
  </section>
</section>"#
    );
    layout("Painel administrativo", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::AuthUser;
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            access_token: "tok".into(),
            user: AuthUser {
                id: Uuid::new_v4(),
                email: "diretoria@escola.com".into(),
            },
        }
    }

    #[test]
    fn home_page_carries_the_board_and_the_form() {
        let html = home_page(None, &[], &NewFeedback::default());
        assert!(html.contains(r#"id="noticesList""#));
        assert!(html.contains(r#"id="feedbackForm""#));
        assert!(html.contains(notices::EMPTY_NOTICES));
    }

    #[test]
    fn auth_page_never_echoes_a_password() {
        let html = admin_auth_page(None, "admin@escola.com");
        assert!(html.contains(r#"id="authSection""#));
        assert!(html.contains(r#"value="admin@escola.com""#));
        assert_eq!(html.matches(r#"type="password" value="""#).count(), 2);
    }

    #[test]
    fn panel_page_greets_the_session_user() {
        let html = admin_panel_page(
            None,
            &session(),
            &NewNotice::default(),
            &[],
            &[],
        );
        assert!(html.contains(r#"id="adminPanel""#));
        assert!(html.contains("diretoria@escola.com"));
        assert!(html.contains(r#"action="/admin/logout""#));
    }

    #[test]
    fn an_alert_lands_at_the_top_of_any_page() {
        let alert = Alert::success("Aviso publicado!");
        let html = admin_panel_page(
            Some(&alert),
            &session(),
            &NewNotice::default(),
            &[],
            &[],
        );
        assert!(html.contains("Aviso publicado!"));
    }
}
