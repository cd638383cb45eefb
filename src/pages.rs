//! HTML for the navigation bar and the static pages.
//!
//! Pages are rendered to strings and dropped into the page container by the
//! router. Game routes have no static markup; their views mount themselves.

use std::fmt::Write;

use crate::content::{COMING_SOON, KIDS_GAMES, NAV_LINKS, PATENTS, SITE_OWNER, TALKS, WORK_SECTIONS};
use crate::routes::Route;

/// Minimal HTML escaping for text and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn link(route: Route, class: &str, inner: &str) -> String {
    styled_link(route, class, None, inner)
}

fn styled_link(route: Route, class: &str, style: Option<&str>, inner: &str) -> String {
    let style = style.map(|s| format!(r#" style="{}""#, escape(s))).unwrap_or_default();
    format!(
        r#"<a href="{p}" data-route="{p}" class="{class}"{style}>{inner}</a>"#,
        p = route.path()
    )
}

fn back_link(route: Route) -> String {
    match route.parent() {
        Some(parent) => link(parent, "back", &format!("← {}", escape(parent.title()))),
        None => String::new(),
    }
}

pub fn render_nav() -> String {
    let mut html = String::from(r#"<nav class="site-nav">"#);
    html.push_str(&link(Route::Home, "brand", &escape(SITE_OWNER)));
    html.push_str("<div>");
    for l in NAV_LINKS.iter() {
        html.push_str(&link(l.route, "nav-link", &escape(l.label)));
    }
    html.push_str("</div></nav>");
    html
}

/// Markup for a static route; `None` for the game routes.
pub fn render_page(route: Route) -> Option<String> {
    let body = match route {
        Route::Home => home(),
        Route::About => about(),
        Route::Work => work(),
        Route::Patents => patents(),
        Route::ProductLaunchTalks => talks(),
        Route::Kids => kids(),
        Route::Alphabet | Route::Hockey => return None,
    };
    Some(format!(r#"<section class="page">{}{}</section>"#, back_link(route), body))
}

pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<section class="page"><h1>Not found</h1><p>Nothing lives at <code>{}</code>.</p>{}</section>"#,
        escape(path),
        link(Route::Home, "back", "← Home")
    )
}

fn home() -> String {
    let mut html = String::from(r#"<h1>Dylan&#39;s Website</h1><p class="lede">Welcome!</p>"#);
    html.push_str(&link(
        Route::Kids,
        "card kids",
        r#"<div class="big">🎮</div><h2>Kids Games</h2><p>Fun learning games for little ones</p>"#,
    ));
    html.push_str(r#"<p class="muted">More coming soon</p>"#);
    html
}

fn about() -> String {
    r#"<p class="eyebrow">About</p><h1>Coming soon.</h1><p class="lede">The longer version of the story.</p>"#
        .to_string()
}

fn work() -> String {
    let mut html = String::from(
        r#"<p class="eyebrow">Work</p><h1>Work</h1><p class="lede">Projects, patents, and things I&#39;ve shipped.</p><div class="list">"#,
    );
    for s in WORK_SECTIONS.iter() {
        let inner = format!(
            r#"<div><p class="tag">{}</p><h2>{}</h2><p>{}</p></div><span>→</span>"#,
            escape(s.tag),
            escape(s.title),
            escape(s.description)
        );
        html.push_str(&link(s.route, "row", &inner));
    }
    html.push_str("</div>");
    html
}

fn patents() -> String {
    let mut html = String::from(
        r#"<p class="eyebrow">Intellectual Property</p><h1>Patents</h1><p class="lede">Granted and published patents from my time at HubSpot.</p><div class="list">"#,
    );
    for p in PATENTS.iter() {
        let class = if p.featured { "patent featured" } else { "patent" };
        let _ = write!(
            html,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{}">"#,
            escape(p.href),
            class
        );
        if p.featured {
            html.push_str(r#"<p class="tag">Featured</p>"#);
        }
        let _ = write!(
            html,
            r#"<h2>{}</h2><p>{}</p><div class="meta"><span class="mono">{}</span>"#,
            escape(p.title),
            escape(p.description),
            escape(p.number)
        );
        if !p.co_inventors.is_empty() {
            let _ = write!(
                html,
                "<span>Co-invented with <strong>{}</strong></span>",
                escape(&p.co_inventors.join(", "))
            );
        }
        html.push_str("</div><span>↗</span></a>");
    }
    html.push_str("</div>");
    html
}

fn talks() -> String {
    let mut html = String::from(
        r#"<p class="eyebrow">Speaking</p><h1>Product Launch Talks</h1><p class="lede">On-stage at HubSpot&#39;s INBOUND conference.</p><div class="grid">"#,
    );
    for t in TALKS.iter() {
        let _ = write!(
            html,
            r#"<div class="talk"><div class="video"><iframe src="https://www.youtube.com/embed/{id}" title="{title}" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe></div><p class="title">{title}</p><p class="event">{event}</p></div>"#,
            id = escape(t.video_id),
            title = escape(t.title),
            event = escape(t.event)
        );
    }
    html.push_str("</div>");
    html
}

fn kids() -> String {
    let mut html = String::from(r#"<h1>Kids Games</h1><p class="lede">Pick a game to play!</p><div class="grid">"#);
    for g in KIDS_GAMES.iter() {
        let inner = format!(
            r#"<div class="big">{}</div><h2>{}</h2><p>{}</p>"#,
            g.emoji,
            escape(g.title),
            escape(g.description)
        );
        let gradient = format!("background:linear-gradient(135deg,{},{})", g.colors.0, g.colors.1);
        html.push_str(&styled_link(g.route, "card game", Some(&gradient), &inner));
    }
    for (emoji, title, (from, to)) in COMING_SOON.iter() {
        let _ = write!(
            html,
            r#"<div class="card soon" style="background:linear-gradient(135deg,{from},{to})"><div class="big">{emoji}</div><h2>{}</h2><p>Coming soon</p></div>"#,
            escape(title)
        );
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn nav_links_are_routable() {
        let nav = render_nav();
        for path in ["/kids", "/work", "/about", "/"] {
            assert!(nav.contains(&format!(r#"data-route="{path}""#)), "nav lacks {path}");
        }
    }

    #[test]
    fn game_routes_have_no_static_page() {
        assert!(render_page(Route::Alphabet).is_none());
        assert!(render_page(Route::Hockey).is_none());
        for r in Route::ALL.iter().filter(|r| !r.is_game()) {
            assert!(render_page(*r).is_some(), "{r:?} has no page");
        }
    }

    #[test]
    fn patents_page_lists_every_patent() {
        let html = render_page(Route::Patents).unwrap();
        for p in PATENTS.iter() {
            assert!(html.contains(p.number));
        }
        assert_eq!(html.matches("Co-invented with").count(), 1);
        assert!(html.contains(r#"data-route="/work""#), "missing back link");
    }

    #[test]
    fn talks_embed_videos() {
        let html = render_page(Route::ProductLaunchTalks).unwrap();
        assert_eq!(html.matches("youtube.com/embed/").count(), TALKS.len());
    }

    #[test]
    fn kids_hub_links_both_games() {
        let html = render_page(Route::Kids).unwrap();
        assert!(html.contains(r#"data-route="/kids/alphabet""#));
        assert!(html.contains(r#"data-route="/kids/hockey""#));
        assert_eq!(html.matches("Coming soon").count(), COMING_SOON.len());
    }

    #[test]
    fn game_tiles_carry_their_gradient_on_the_link() {
        let html = render_page(Route::Kids).unwrap();
        for g in KIDS_GAMES.iter() {
            let tag = format!(
                r#"<a href="{p}" data-route="{p}" class="card game" style="background:linear-gradient(135deg,{},{})">"#,
                g.colors.0,
                g.colors.1,
                p = g.route.path()
            );
            assert!(html.contains(&tag), "missing tile tag {tag}");
        }
        assert!(!render_nav().contains("style="));
    }

    #[test]
    fn not_found_escapes_path() {
        let html = render_not_found("/<script>");
        assert!(html.contains("/&lt;script&gt;"));
    }
}
