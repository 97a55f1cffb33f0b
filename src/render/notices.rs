use crate::models::notice::{NewNotice, Notice};

/// Placeholder for an empty board; a failed fetch collapses to the same text.
pub const EMPTY_NOTICES: &str = "Nenhum aviso publicado ainda.";

/// One public notice card. Cards appear inside `#noticesList` exactly in
/// the order the slice gives them.
pub fn notice_card(notice: &Notice) -> String {
    let title = &notice.title;
    let content = &notice.content;
    let created_by = &notice.created_by;
    let stamp = notice.created_at.format("%d/%m/%Y %H:%M");
    let badge = if notice.is_pinned {
        r#" <span class="badge">Fixado</span>"#
    } else {
        ""
    };
    let image = match &notice.image_url {
        Some(url) => format!("\n  <img class=\"notice-image\" src=\"{url}\" alt=\"{title}\">"),
        None => String::new(),
    };

    format!(
        r#"<article class="notice-card">
  <h3>{title}{badge}</h3>{image}
  <p>{content}</p>
  <footer>{created_by} · {stamp}</footer>
</article>"#
    )
}

pub fn notices_fragment(board: &[Notice]) -> String {
    if board.is_empty() {
        return format!(r#"<p class="empty">{EMPTY_NOTICES}</p>"#);
    }
    board.iter().map(notice_card).collect()
}

/// Admin view of a notice: the public card plus its delete control. The
/// inline `confirm` is the interactive confirmation step.
pub fn admin_notice_row(notice: &Notice) -> String {
    let card = notice_card(notice);
    let id = notice.id;
    format!(
        r#"<div class="admin-notice">
{card}
<form method="post" action="/admin/notices/{id}/delete" onsubmit="return confirm('Excluir este aviso?')">
  <button type="submit" class="danger">Excluir</button>
</form>
</div>"#
    )
}

pub fn admin_notices_fragment(board: &[Notice]) -> String {
    if board.is_empty() {
        return format!(r#"<p class="empty">{EMPTY_NOTICES}</p>"#);
    }
    board.iter().map(admin_notice_row).collect()
}

/// The publish form, pre-filled with the draft so a failed submission
/// keeps what the admin typed.
pub fn notice_form(draft: &NewNotice) -> String {
    let title = &draft.title;
    let content = &draft.content;
    let image_url = &draft.image_url;
    let pinned = if draft.is_pinned { " checked" } else { "" };

    format!(
        r#"<form id="noticeForm" method="post" action="/admin/notices">
  <label for="noticeTitle">Título</label>
  <input id="noticeTitle" name="title" type="text" value="{title}">
  <label for="noticeContent">Conteúdo</label>
  <textarea id="noticeContent" name="content" rows="4">{content}</textarea>
  <label for="noticeImage">URL da imagem (opcional)</label>
  <input id="noticeImage" name="image_url" type="url" value="{image_url}">
  <label class="pin"><input name="is_pinned" type="checkbox" value="true"{pinned}> Fixar no topo</label>
  <button type="submit">Publicar aviso</button>
</form>"#
    )
}
