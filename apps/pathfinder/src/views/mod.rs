//! Server-rendered HTML for the three wizard views.
//!
//! Plain `format!` templates; every piece of user or endpoint text goes
//! through [`escape`] before it reaches the page.

pub mod form;
pub mod landing;
pub mod results;

use crate::navigation::Route;

const STYLE: &str = r#"
      body { font-family: system-ui, sans-serif; margin: 0; color: #1f2933; background: #f7f7f8; }
      header.site { display: flex; align-items: center; gap: 0.5rem; padding: 1rem 2rem; background: #fff; border-bottom: 1px solid #e4e7eb; }
      header.site a { color: inherit; text-decoration: none; font-size: 1.5rem; font-weight: bold; }
      main { max-width: 56rem; margin: 0 auto; padding: 2rem; }
      .card { background: #fff; border: 1px solid #e4e7eb; border-radius: 0.75rem; padding: 1.5rem; margin-bottom: 1.5rem; }
      .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1rem; }
      .muted { color: #616e7c; }
      .accent { color: #5b3cc4; }
      .button { display: inline-block; background: #5b3cc4; color: #fff; border: 0; border-radius: 0.5rem; padding: 0.75rem 1.5rem; font-size: 1rem; text-decoration: none; cursor: pointer; }
      .button:disabled { background: #cbd2d9; cursor: not-allowed; }
      .button.secondary { background: #fff; color: #5b3cc4; border: 1px solid #5b3cc4; }
      .chips { display: flex; flex-wrap: wrap; gap: 0.5rem; list-style: none; padding: 0; }
      .chips li { background: #ede7fb; border-radius: 999px; padding: 0.25rem 0.75rem; }
      .chips button { background: none; border: 0; cursor: pointer; }
      input[type=text], textarea { width: 100%; box-sizing: border-box; padding: 0.6rem; border: 1px solid #cbd2d9; border-radius: 0.5rem; font-size: 1rem; }
      .row { display: flex; gap: 0.5rem; }
      .warning { background: #fff4e5; border: 1px solid #f0b429; border-radius: 0.5rem; padding: 1rem; margin-bottom: 1.5rem; }
      .loading { text-align: center; padding: 3rem; }
      .sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }
"#;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

/// Document head, site header and the opening `<main>`. Pair with
/// [`page_close`]; the results view streams content between the two.
pub fn page_open(title: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} · PathFinder</title>
    <style>{STYLE}</style>
  </head>
  <body>
    <header class="site" role="banner"><a href="{home}">🎯 PathFinder</a></header>
    <main>
"#,
        title = escape(title),
        home = Route::Landing.path(),
    )
}

pub fn page_close() -> String {
    "    </main>\n  </body>\n</html>\n".to_string()
}

pub fn page(title: &str, body: &str) -> String {
    format!("{}{}{}", page_open(title), body, page_close())
}

/// `<ul>` of escaped items with the given class.
fn list(class: &str, items: &[String]) -> String {
    let items = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect::<Vec<_>>()
        .join("");
    format!(r#"<ul class="{class}">{items}</ul>"#)
}
