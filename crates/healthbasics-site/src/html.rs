//! HTML page renderer.
//!
//! Produces one self-contained HTML document per route, with all CSS/JS
//! inlined. The quiz and contact form are rendered from the same state types
//! the core uses, and the inline script drives them in the browser.

use chrono::Datelike;

use healthbasics_core::catalog::ContentCatalog;
use healthbasics_core::contact::SubmissionOutcome;
use healthbasics_core::model::{Question, Resource};
use healthbasics_core::quiz::QuizSession;
use healthbasics_core::route::Route;

/// Escape a string for safe HTML insertion.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Everything a page needs that does not change between visits.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub catalog: &'a ContentCatalog,
    /// Where the contact form posts to.
    pub contact_endpoint: &'a str,
    /// Year printed in the footer copyright line.
    pub year: i32,
}

impl<'a> PageContext<'a> {
    pub fn new(catalog: &'a ContentCatalog, contact_endpoint: &'a str) -> Self {
        Self {
            catalog,
            contact_endpoint,
            year: chrono::Utc::now().year(),
        }
    }
}

/// Per-visit state a view can be rendered with.
///
/// `None` fields render the initial state: an unanswered quiz and an empty
/// contact form.
#[derive(Debug, Clone, Default)]
pub struct ViewState<'s, 'q> {
    pub quiz: Option<&'s QuizSession<'q>>,
    pub contact_outcome: Option<SubmissionOutcome>,
}

/// Render the view for a navigation path, or `None` if no route matches.
pub fn render_path(path: &str, ctx: &PageContext<'_>) -> Option<String> {
    Route::from_path(path).map(|route| render_page(route, ctx, &ViewState::default()))
}

/// Render a complete HTML document for `route`.
pub fn render_page(route: Route, ctx: &PageContext<'_>, state: &ViewState<'_, '_>) -> String {
    let site = &ctx.catalog.site;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let title = match route {
        Route::Home => html_escape(&site.name),
        other => format!("{} — {}", other.label(), html_escape(&site.name)),
    };
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str(&render_header(route, ctx));
    html.push_str("<main>\n");
    let body = match route {
        Route::Home => render_home(ctx),
        Route::Nutrition => render_nutrition(ctx, state.quiz),
        Route::Exercise => render_exercise(ctx),
        Route::Wellness => render_wellness(ctx),
        Route::Resources => render_resources(ctx),
        Route::Training => render_training(ctx),
        Route::About => render_about(ctx),
        Route::Contact => render_contact(ctx, state.contact_outcome),
    };
    html.push_str(&body);
    html.push_str("</main>\n");
    html.push_str(&render_footer(ctx));

    if matches!(route, Route::Nutrition | Route::Contact) {
        html.push_str("<script>\n");
        html.push_str(JS);
        html.push_str("</script>\n");
    }

    html.push_str("</body>\n</html>");
    html
}

fn render_header(current: Route, ctx: &PageContext<'_>) -> String {
    let site = &ctx.catalog.site;
    let mut html = String::from("<header class=\"site-header\">\n<div class=\"bar\">\n");
    html.push_str(&format!(
        "<a href=\"/\" class=\"logo\"><span class=\"logo-mark\">HL</span><span><strong>{}</strong><small>{}</small></span></a>\n",
        html_escape(&site.name),
        html_escape(&site.tagline)
    ));
    html.push_str("<nav>\n");
    for route in Route::ALL.into_iter().filter(|r| r.in_header_nav()) {
        let class = if route == current { " class=\"active\"" } else { "" };
        html.push_str(&format!(
            "<a href=\"{}\"{class}>{}</a>\n",
            route.path(),
            route.label()
        ));
    }
    html.push_str("</nav>\n</div>\n</header>\n");
    html
}

fn render_footer(ctx: &PageContext<'_>) -> String {
    let site = &ctx.catalog.site;
    let mut html = String::from("<footer>\n<div class=\"footer-grid\">\n");

    html.push_str(&format!(
        "<div><h4>{}</h4><p>{}</p></div>\n",
        html_escape(&site.name),
        html_escape(&site.footer_blurb)
    ));

    html.push_str("<div><h4>Quick Links</h4><ul>\n");
    for route in Route::ALL.into_iter().filter(|r| r.in_footer_links()) {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            route.path(),
            route.label()
        ));
    }
    html.push_str("</ul></div>\n");

    html.push_str("<div><h4>Stay Connected</h4><p class=\"social\">\n");
    for link in &site.social {
        html.push_str(&format!(
            "<a href=\"{}\">{}</a>\n",
            html_escape(&link.url),
            html_escape(&link.label)
        ));
    }
    html.push_str("</p></div>\n</div>\n");

    html.push_str(&format!(
        "<p class=\"copyright\">&copy; {} {} — All Rights Reserved.</p>\n",
        ctx.year,
        html_escape(&site.name)
    ));
    html.push_str("</footer>\n");
    html
}

fn render_home(ctx: &PageContext<'_>) -> String {
    let home = &ctx.catalog.home;
    let mut html = String::from("<section class=\"card split\">\n<div>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&home.heading)));
    html.push_str(&format!("<p>{}</p>\n", html_escape(&home.intro)));
    html.push_str(&bullet_list("ul", &home.highlights));
    html.push_str(&format!(
        "<p class=\"actions\"><a class=\"button\" href=\"{}\">Explore Nutrition</a> <a class=\"button outline\" href=\"{}\">Training Materials</a></p>\n",
        Route::Nutrition.path(),
        Route::Training.path()
    ));
    html.push_str("</div>\n");
    if let Some(url) = &home.image_url {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            html_escape(url),
            html_escape(&home.image_alt)
        ));
    }
    html.push_str("</section>\n");
    html
}

fn render_nutrition(ctx: &PageContext<'_>, quiz: Option<&QuizSession<'_>>) -> String {
    let page = &ctx.catalog.nutrition;
    let mut html = String::from("<section class=\"card\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", html_escape(&page.heading)));
    html.push_str(&format!("<p>{}</p>\n", html_escape(&page.intro)));
    if let Some(url) = &page.image_url {
        html.push_str(&format!(
            "<img class=\"narrow\" src=\"{}\" alt=\"{}\">\n",
            html_escape(url),
            html_escape(&page.image_alt)
        ));
    }

    if !ctx.catalog.questions.is_empty() {
        let fresh;
        let session = match quiz {
            Some(s) => s,
            None => {
                fresh = QuizSession::new(&ctx.catalog.questions);
                &fresh
            }
        };
        html.push_str(&render_quiz(&page.quiz_title, session));
    }

    html.push_str("</section>\n");
    html
}

/// Render the quiz block for a session: highlighted selections, and the
/// score line once the session has been scored.
pub fn render_quiz(title: &str, session: &QuizSession<'_>) -> String {
    let mut html = String::from("<div class=\"quiz\" id=\"quiz\">\n");
    html.push_str(&format!("<h4>{}</h4>\n", html_escape(title)));

    for q in session.questions() {
        html.push_str(&render_question(q, session.selection(q.id)));
    }

    html.push_str("<div class=\"quiz-actions\">\n<button type=\"button\" id=\"quiz-submit\">Submit</button>\n");
    let score_text = session
        .score()
        .map(|s| format!("Score: {s} / {}", session.total()))
        .unwrap_or_default();
    let hidden = if session.score().is_some() { "" } else { " hidden" };
    html.push_str(&format!(
        "<div class=\"score\" id=\"quiz-score\" data-total=\"{}\"{hidden}>{score_text}</div>\n",
        session.total()
    ));
    html.push_str("</div>\n</div>\n");
    html
}

fn render_question(q: &Question, selected: Option<usize>) -> String {
    let mut html = format!(
        "<div class=\"question\" data-question-id=\"{}\" data-correct=\"{}\">\n",
        q.id, q.correct_option
    );
    html.push_str(&format!(
        "<div class=\"prompt\">{}</div>\n<div class=\"options\">\n",
        html_escape(&q.prompt)
    ));
    for (i, option) in q.options.iter().enumerate() {
        let class = if selected == Some(i) {
            "option selected"
        } else {
            "option"
        };
        html.push_str(&format!(
            "<button type=\"button\" class=\"{class}\" data-option=\"{i}\">{}</button>\n",
            html_escape(option)
        ));
    }
    html.push_str("</div>\n</div>\n");
    html
}

fn render_exercise(ctx: &PageContext<'_>) -> String {
    let mut html = String::from("<section class=\"card\">\n<h2>Simple Exercises</h2>\n<div class=\"grid\">\n");
    for e in &ctx.catalog.exercises {
        html.push_str(&format!(
            "<div class=\"tile\"><h4>{}</h4><p>{}</p></div>\n",
            html_escape(&e.title),
            html_escape(&e.description)
        ));
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn render_wellness(ctx: &PageContext<'_>) -> String {
    let mut html = String::from("<section class=\"card\">\n<h2>Wellness Tips</h2>\n");
    html.push_str("<p>Wellness is about balancing physical, mental, and emotional health. Here are some key habits you can start practicing today:</p>\n");
    for tip in &ctx.catalog.wellness {
        html.push_str(&format!(
            "<div class=\"tip\"><h3>{}</h3><p>{}</p></div>\n",
            html_escape(&tip.title),
            html_escape(&tip.body)
        ));
    }
    html.push_str("</section>\n");
    html
}

fn render_resources(ctx: &PageContext<'_>) -> String {
    let mut html = String::from("<section class=\"wide\">\n<h2>Resources</h2>\n<div class=\"grid three\">\n");
    for r in &ctx.catalog.resources {
        html.push_str(&resource_card(r));
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn resource_card(r: &Resource) -> String {
    format!(
        "<a class=\"tile resource\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"><h4>{}</h4><p>{}</p><div class=\"category\">{}</div></a>\n",
        html_escape(&r.url),
        html_escape(&r.title),
        html_escape(&r.summary),
        r.category.to_string().to_uppercase()
    )
}

fn render_training(ctx: &PageContext<'_>) -> String {
    let page = &ctx.catalog.training;
    let mut html = String::from("<section class=\"card\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", html_escape(&page.heading)));
    html.push_str(&format!("<p>{}</p>\n", html_escape(&page.intro)));
    if !page.download_label.is_empty() {
        let href = page.download_url.as_deref().unwrap_or("#");
        html.push_str(&format!(
            "<a class=\"button\" href=\"{}\">{}</a>\n",
            html_escape(href),
            html_escape(&page.download_label)
        ));
    }
    if !page.outline.is_empty() {
        html.push_str("<h3>Workshop Outline (summary)</h3>\n");
        html.push_str(&bullet_list("ol", &page.outline));
    }
    html.push_str("</section>\n");
    html
}

fn render_about(ctx: &PageContext<'_>) -> String {
    let page = &ctx.catalog.about;
    let mut html = String::from("<section class=\"card\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", html_escape(&page.heading)));
    html.push_str(&format!("<p>{}</p>\n", html_escape(&page.bio)));
    if !page.skills.is_empty() {
        html.push_str("<h3>Skills</h3>\n");
        html.push_str(&bullet_list("ul", &page.skills));
    }
    html.push_str("</section>\n");
    html
}

fn render_contact(ctx: &PageContext<'_>, outcome: Option<SubmissionOutcome>) -> String {
    let mut html = String::from("<section class=\"card narrow-section\">\n<h2>Contact</h2>\n");
    html.push_str(&format!(
        "<form id=\"contact-form\" data-endpoint=\"{}\">\n",
        html_escape(ctx.contact_endpoint)
    ));
    html.push_str("<input name=\"name\" placeholder=\"Name\" required>\n");
    html.push_str("<input name=\"email\" type=\"email\" placeholder=\"Email\" required>\n");
    html.push_str("<textarea name=\"message\" rows=\"4\" placeholder=\"Message\" required></textarea>\n");
    html.push_str("<button type=\"submit\">Send</button>\n");

    for variant in [SubmissionOutcome::Sent, SubmissionOutcome::LocalFallback] {
        let hidden = if outcome == Some(variant) { "" } else { " hidden" };
        html.push_str(&format!(
            "<div class=\"status {variant}\" data-outcome=\"{variant}\"{hidden}>{}</div>\n",
            html_escape(variant.label())
        ));
    }

    html.push_str("</form>\n</section>\n");
    html
}

fn bullet_list(tag: &str, items: &[String]) -> String {
    let mut html = format!("<{tag}>\n");
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", html_escape(item)));
    }
    html.push_str(&format!("</{tag}>\n"));
    html
}

const CSS: &str = r#"
:root { --primary: #059669; --primary-dark: #047857; --primary-light: #a7f3d0; --bg: #f9fafb; --fg: #111827; --muted: #4b5563; --border: #e5e7eb; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; background: var(--bg); color: var(--fg); }
a { color: inherit; }
.site-header { background: linear-gradient(90deg, var(--primary-dark), var(--primary)); position: sticky; top: 0; z-index: 50; }
.bar { max-width: 72rem; margin: 0 auto; padding: 0.75rem 1rem; display: flex; align-items: center; justify-content: space-between; color: #fff; }
.logo { display: flex; gap: 0.75rem; align-items: center; text-decoration: none; }
.logo-mark { width: 2.5rem; height: 2.5rem; border-radius: 50%; background: #fff; color: var(--primary-dark); display: grid; place-items: center; font-weight: bold; }
.logo small { display: block; font-size: 0.75rem; color: #e5e7eb; }
nav a { padding: 0.25rem 0.75rem; font-size: 0.875rem; text-decoration: none; border-radius: 4px; }
nav a:hover, nav a.active { background: var(--primary-light); color: var(--fg); }
main { padding: 2rem 0; }
section { max-width: 56rem; margin: 0 auto; padding: 1.5rem; }
section.wide { max-width: 72rem; }
.card { background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.split { display: flex; gap: 1.5rem; align-items: center; flex-wrap: wrap; }
.split > * { flex: 1 1 20rem; }
img { max-width: 100%; border-radius: 8px; }
img.narrow { max-width: 24rem; }
p { color: var(--muted); }
.button, button { display: inline-block; padding: 0.5rem 1rem; background: var(--primary); color: #fff; border: none; border-radius: 4px; text-decoration: none; cursor: pointer; }
.button.outline { background: transparent; color: var(--fg); border: 1px solid var(--border); }
.grid { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); }
.tile { display: block; padding: 1rem; border: 1px solid var(--border); border-radius: 8px; text-decoration: none; }
.tile:hover { box-shadow: 0 4px 12px rgba(0,0,0,0.1); }
.category { font-size: 0.75rem; color: #9ca3af; margin-top: 0.75rem; }
.tip { padding: 1rem; border-left: 4px solid var(--primary); background: #ecfdf5; border-radius: 4px; margin: 1rem 0; }
.quiz { background: #ecfdf5; padding: 1rem; border-radius: 4px; margin-top: 1rem; }
.question { margin-bottom: 0.75rem; }
.prompt { font-weight: 500; }
.options { display: grid; gap: 0.5rem; grid-template-columns: repeat(auto-fill, minmax(12rem, 1fr)); margin-top: 0.5rem; }
.option { background: #fff; color: var(--fg); border: 1px solid var(--border); text-align: left; }
.option.selected { background: var(--primary-light); }
.quiz-actions { display: flex; gap: 0.75rem; align-items: center; }
.score { font-size: 0.875rem; }
form input, form textarea { display: block; width: 100%; box-sizing: border-box; padding: 0.5rem 0.75rem; margin-bottom: 0.75rem; border: 1px solid var(--border); border-radius: 4px; }
.status { font-size: 0.875rem; margin-top: 0.75rem; }
.status.sent { color: #16a34a; }
.status.local-fallback { color: #ca8a04; }
.narrow-section { max-width: 42rem; }
footer { background: #111827; color: #d1d5db; padding: 2.5rem 1rem; margin-top: 3rem; }
footer p { color: #9ca3af; }
.footer-grid { max-width: 72rem; margin: 0 auto; display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); font-size: 0.875rem; }
footer h4 { color: #fff; }
footer ul { list-style: none; padding: 0; }
.social a { margin-right: 0.75rem; }
.copyright { text-align: center; font-size: 0.75rem; color: #6b7280; }
[hidden] { display: none !important; }
"#;

const JS: &str = r#"
(function () {
  const quiz = document.getElementById('quiz');
  if (quiz) {
    const answers = {};
    const score = document.getElementById('quiz-score');
    quiz.querySelectorAll('.question').forEach(q => {
      const id = q.dataset.questionId;
      q.querySelectorAll('.option').forEach(btn => {
        if (btn.classList.contains('selected')) answers[id] = Number(btn.dataset.option);
        btn.addEventListener('click', () => {
          const idx = Number(btn.dataset.option);
          if (answers[id] !== idx) score.hidden = true;
          answers[id] = idx;
          q.querySelectorAll('.option').forEach(b => b.classList.toggle('selected', b === btn));
        });
      });
    });
    document.getElementById('quiz-submit').addEventListener('click', () => {
      let s = 0;
      quiz.querySelectorAll('.question').forEach(q => {
        if (answers[q.dataset.questionId] === Number(q.dataset.correct)) s += 1;
      });
      score.textContent = 'Score: ' + s + ' / ' + score.dataset.total;
      score.hidden = false;
    });
  }

  const form = document.getElementById('contact-form');
  if (form) {
    const show = outcome => form.querySelectorAll('.status').forEach(el => {
      el.hidden = el.dataset.outcome !== outcome;
    });
    form.addEventListener('submit', async e => {
      e.preventDefault();
      const fd = new FormData(form);
      const payload = { name: fd.get('name'), email: fd.get('email'), message: fd.get('message') };
      try {
        const res = await fetch(form.dataset.endpoint, {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(payload),
        });
        if (!res.ok) throw new Error('HTTP ' + res.status);
        show('sent');
        form.reset();
      } catch (err) {
        show('local-fallback');
      }
    });
  }
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ContentCatalog {
        ContentCatalog::builtin().unwrap()
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            html_escape("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn every_route_renders_a_full_document() {
        let catalog = catalog();
        let ctx = PageContext::new(&catalog, "/api/contacts");
        for route in Route::ALL {
            let html = render_page(route, &ctx, &ViewState::default());
            assert!(html.starts_with("<!DOCTYPE html>"), "{route}");
            assert!(html.ends_with("</html>"), "{route}");
            assert!(html.contains("Healthy Living Basics"), "{route}");
            assert!(html.contains("Quick Links"), "{route}");
        }
    }

    #[test]
    fn route_pages_contain_their_content() {
        let catalog = catalog();
        let ctx = PageContext::new(&catalog, "/api/contacts");
        let page = |path: &str| render_path(path, &ctx).unwrap();

        assert!(page("/").contains("Welcome to Healthy Living Basics"));
        assert!(page("/exercise").contains("Bodyweight Squats"));
        assert!(page("/wellness").contains("Work-Life Balance"));
        assert!(page("/resources").contains("https://www.who.int/"));
        assert!(page("/resources").contains("RESEARCH"));
        assert!(page("/training").contains("Website navigation practice"));
        assert!(page("/about").contains("Health communication and patient education"));
        assert!(render_path("/missing", &ctx).is_none());
    }

    #[test]
    fn active_route_is_marked_in_nav() {
        let catalog = catalog();
        let ctx = PageContext::new(&catalog, "/api/contacts");
        let html = render_path("/about", &ctx).unwrap();
        assert!(html.contains("<a href=\"/about\" class=\"active\">About</a>"));
        assert!(html.contains("<a href=\"/contact\">Contact</a>"));
    }

    #[test]
    fn fresh_quiz_has_hidden_score() {
        let catalog = catalog();
        let ctx = PageContext::new(&catalog, "/api/contacts");
        let html = render_path("/nutrition", &ctx).unwrap();
        assert!(html.contains("Nutrition Quiz"));
        assert!(html.contains("Which is a whole grain option?"));
        assert!(html.contains("id=\"quiz-score\" data-total=\"2\" hidden"));
        assert!(!html.contains("option selected"));
        assert!(html.contains("<script>"));
    }

    #[test]
    fn scored_quiz_shows_score_and_selection() {
        let catalog = catalog();
        let ctx = PageContext::new(&catalog, "/api/contacts");
        let mut session = QuizSession::new(&catalog.questions);
        session.select(1, 1).unwrap();
        session.submit_for_scoring();

        let state = ViewState {
            quiz: Some(&session),
            contact_outcome: None,
        };
        let html = render_page(Route::Nutrition, &ctx, &state);
        assert!(html.contains("Score: 1 / 2"));
        assert!(html.contains("class=\"option selected\" data-option=\"1\">Vegetables &amp; Fruits"));
    }

    #[test]
    fn contact_outcome_is_rendered() {
        let catalog = catalog();
        let ctx = PageContext::new(&catalog, "https://example.org/api/contacts");

        let initial = render_page(Route::Contact, &ctx, &ViewState::default());
        assert!(initial.contains("data-endpoint=\"https://example.org/api/contacts\""));
        assert!(initial.contains("data-outcome=\"sent\" hidden"));
        assert!(initial.contains("data-outcome=\"local-fallback\" hidden"));

        let state = ViewState {
            quiz: None,
            contact_outcome: Some(SubmissionOutcome::LocalFallback),
        };
        let html = render_page(Route::Contact, &ctx, &state);
        assert!(html.contains("data-outcome=\"local-fallback\">Draft saved locally"));
        assert!(html.contains("data-outcome=\"sent\" hidden"));
    }

    #[test]
    fn static_pages_skip_script() {
        let catalog = catalog();
        let ctx = PageContext::new(&catalog, "/api/contacts");
        let html = render_path("/about", &ctx).unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut catalog = catalog();
        catalog.about.bio = "<script>alert(1)</script>".into();
        let ctx = PageContext::new(&catalog, "/api/contacts");
        let html = render_path("/about", &ctx).unwrap();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn footer_carries_year() {
        let catalog = catalog();
        let mut ctx = PageContext::new(&catalog, "/api/contacts");
        ctx.year = 2031;
        let html = render_path("/", &ctx).unwrap();
        assert!(html.contains("&copy; 2031 Healthy Living Basics"));
    }
}
