//! Project cards as markup.
//!
//! Rendering is a full replace: the host clears the grid and inserts every
//! card in [`RenderOutcome::cards`] in order. No diffing, no sorting.

use std::fmt::Write as _;

use crate::escape::escape_html;
use crate::messages::Messages;
use crate::project::ProjectRecord;

/// Element tag of one card.
pub const CARD_TAG: &str = "article";
/// Class list of one card.
pub const CARD_CLASS: &str = "project card";

/// Markup for one project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMarkup {
    /// Inner HTML of the `<article class="project card">` element.
    pub inner_html: String,
}

/// Result of a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Cards in input order.
    pub cards: Vec<CardMarkup>,
}

impl RenderOutcome {
    /// The empty-state element is visible iff there are no cards.
    #[must_use]
    pub fn show_empty_state(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Build one card per project, preserving input order.
pub fn render_projects<'a, I>(projects: I, messages: &Messages) -> RenderOutcome
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let cards: Vec<CardMarkup> = projects
        .into_iter()
        .map(|project| render_card(project, messages))
        .collect();
    tracing::debug!(cards = cards.len(), "render pass");
    RenderOutcome { cards }
}

/// Inner markup of a single card.
#[must_use]
pub fn render_card(project: &ProjectRecord, messages: &Messages) -> CardMarkup {
    let title = escape_html(&project.title);
    let mut html = String::with_capacity(512);

    // `write!` into a String cannot fail.
    let _ = write!(
        html,
        r#"<div class="project__thumb"><img src="{image}" alt="{title} {suffix}" loading="lazy" /></div>"#,
        image = project.image,
        suffix = escape_html(messages.screenshot_suffix),
    );
    let _ = write!(
        html,
        r#"<div><h3 class="project__title">{title}</h3><p class="project__summary">{summary}</p><div class="chips">"#,
        summary = escape_html(&project.summary),
    );
    for tech in &project.tech {
        let _ = write!(html, r#"<span class="chip">{}</span>"#, escape_html(tech));
    }
    html.push_str(r#"</div></div><div class="links">"#);
    if let Some(url) = project.github_link() {
        let _ = write!(
            html,
            r#"<a class="btn btn-outline" href="{url}" target="_blank" rel="noopener">GitHub</a>"#
        );
    }
    if let Some(url) = project.live_link() {
        let _ = write!(
            html,
            r#"<a class="btn" href="{url}" target="_blank" rel="noopener">Live</a>"#
        );
    }
    html.push_str("</div>");

    CardMarkup { inner_html: html }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::sample;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_shows_empty_state() {
        let none: [ProjectRecord; 0] = [];
        let outcome = render_projects(&none, &Messages::TURKISH);
        assert!(outcome.cards.is_empty());
        assert!(outcome.show_empty_state());
    }

    #[test]
    fn non_empty_input_hides_empty_state_and_keeps_order() {
        let projects = vec![sample("B", false), sample("A", true), sample("C", false)];
        let outcome = render_projects(&projects, &Messages::TURKISH);
        assert!(!outcome.show_empty_state());
        assert_eq!(outcome.cards.len(), 3);
        for (title, card) in ["B", "A", "C"].iter().zip(&outcome.cards) {
            assert!(card.inner_html.contains(&format!(">{title}</h3>")));
        }
    }

    #[test]
    fn text_fields_are_escaped_urls_are_not() {
        let mut project = sample("<b>X</b>", false);
        project.summary = "Fish & \"Chips\"".to_string();
        project.tech = vec!["C++ <3".to_string()];
        project.image = "img/a.png?x=1&y=2".to_string();
        let html = render_card(&project, &Messages::ENGLISH).inner_html;

        assert!(html.contains(r#"<h3 class="project__title">&lt;b&gt;X&lt;/b&gt;</h3>"#));
        assert!(html.contains("Fish &amp; &quot;Chips&quot;"));
        assert!(html.contains(r#"<span class="chip">C++ &lt;3</span>"#));
        assert!(html.contains(r#"alt="&lt;b&gt;X&lt;/b&gt; screenshot""#));
        assert!(html.contains(r#"src="img/a.png?x=1&y=2""#));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn chips_follow_tech_order() {
        let mut project = sample("A", false);
        project.tech = vec!["Zig".into(), "Ada".into(), "Rust".into()];
        let html = render_card(&project, &Messages::TURKISH).inner_html;
        let zig = html.find(">Zig<").unwrap();
        let ada = html.find(">Ada<").unwrap();
        let rust = html.find(">Rust<").unwrap();
        assert!(zig < ada && ada < rust);
    }

    #[test]
    fn links_appear_only_when_present() {
        let mut project = sample("A", false);
        let html = render_card(&project, &Messages::TURKISH).inner_html;
        assert!(!html.contains("GitHub"));
        assert!(!html.contains(">Live<"));

        project.github_url = Some("https://github.com/me/a".into());
        let html = render_card(&project, &Messages::TURKISH).inner_html;
        assert!(html.contains(
            r#"<a class="btn btn-outline" href="https://github.com/me/a" target="_blank" rel="noopener">GitHub</a>"#
        ));
        assert!(!html.contains(">Live<"));

        project.live_url = Some("https://a.me.dev".into());
        project.github_url = Some(String::new());
        let html = render_card(&project, &Messages::TURKISH).inner_html;
        assert!(!html.contains("GitHub"));
        assert!(html.contains(
            r#"<a class="btn" href="https://a.me.dev" target="_blank" rel="noopener">Live</a>"#
        ));
    }

    #[test]
    fn same_input_renders_same_markup() {
        let projects = vec![sample("A", true), sample("B", false)];
        assert_eq!(
            render_projects(&projects, &Messages::TURKISH),
            render_projects(&projects, &Messages::TURKISH)
        );
    }
}
