use crate::models::feedback::{Feedback, NewFeedback};
use crate::rating::{RatingWidget, STAR_COUNT};

pub const EMPTY_FEEDBACK: &str = "Nenhum feedback recebido ainda.";

/// `rating` filled glyphs, then the remainder empty. Out-of-range input
/// renders malformed output silently; it never panics.
pub fn stars(rating: u8) -> String {
    let filled = "★".repeat(rating as usize);
    let empty = "☆".repeat((STAR_COUNT as usize).saturating_sub(rating as usize));
    format!("{filled}{empty}")
}

pub fn feedback_card(entry: &Feedback) -> String {
    let name = &entry.name;
    let email = &entry.email;
    let message = &entry.message;
    let strip = stars(entry.rating);
    let stamp = entry.created_at.format("%d/%m/%Y %H:%M");

    format!(
        r#"<article class="feedback-card">
  <h3>{name} <span class="stars">{strip}</span></h3>
  <p>{message}</p>
  <footer>{email} · {stamp}</footer>
</article>"#
    )
}

pub fn feedback_fragment(entries: &[Feedback]) -> String {
    if entries.is_empty() {
        return format!(r#"<p class="empty">{EMPTY_FEEDBACK}</p>"#);
    }
    entries.iter().map(feedback_card).collect()
}

/// The star strip as a radio group mirroring the widget's paint. Hover
/// preview in the browser is pure CSS over this markup; the widget held
/// here decides only which stars start lit and which radio starts checked.
pub fn rating_strip(widget: &RatingWidget) -> String {
    let painted = widget.painted();
    let mut strip = String::from(r#"<div class="rating-strip" id="ratingStars">"#);
    for value in (1..=STAR_COUNT).rev() {
        let lit = if painted[(value - 1) as usize] { " lit" } else { "" };
        let checked = if widget.committed() == value { " checked" } else { "" };
        strip.push_str(&format!(
            r#"<label class="star{lit}"><input type="radio" name="rating" value="{value}"{checked}><span>★</span></label>"#
        ));
    }
    strip.push_str("</div>");
    strip
}

/// The public feedback form, pre-filled with the draft so a failed
/// submission keeps what the visitor typed and rated.
pub fn feedback_form(draft: &NewFeedback) -> String {
    let name = &draft.name;
    let email = &draft.email;
    let message = &draft.message;
    let strip = rating_strip(&draft.widget());

    format!(
        r#"<form id="feedbackForm" method="post" action="/feedback">
  <label for="fbName">Nome</label>
  <input id="fbName" name="name" type="text" value="{name}">
  <label for="fbEmail">E-mail</label>
  <input id="fbEmail" name="email" type="email" value="{email}">
  <label for="fbMessage">Mensagem</label>
  <textarea id="fbMessage" name="message" rows="4">{message}</textarea>
  <label>Sua avaliação</label>
  {strip}
  <button type="submit">Enviar feedback</button>
</form>"#
    )
}
