use crate::insights::InsightOutcome;
use crate::models::insight::CareerPath;
use crate::models::profile::Profile;
use crate::navigation::Route;
use crate::views::{escape, list, page_close, page_open};

/// First chunk of the streamed results page: the loading indicator stays
/// on screen until [`render_outcome`] arrives.
pub fn render_loading(profile: &Profile) -> String {
    format!(
        r#"{open}      <div id="loading" class="card loading" role="status" aria-live="polite">
        <h2>Generating your career insights…</h2>
        <p class="muted">Analysing your {degree} background. This can take a few seconds.</p>
      </div>
"#,
        open = page_open("Your Career Insights"),
        degree = escape(&profile.degree),
    )
}

fn render_path(path: &CareerPath) -> String {
    let alignment = path
        .life_alignment
        .as_deref()
        .map(|text| {
            format!(
                r#"<p><strong>Life Alignment:</strong> {}</p>"#,
                escape(text)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="card">
  <h3>{title}</h3>
  <p>{description}</p>
  <h4>Next Steps</h4>
  {next_steps}
  <p class="accent"><em>{encouragement}</em></p>
  {alignment}
</article>"#,
        title = escape(&path.title),
        description = escape(&path.description),
        next_steps = list("steps", &path.next_steps),
        encouragement = escape(&path.encouragement),
    )
}

/// Second chunk: hides the loader and renders the insight, preceded by the
/// warning banner when the fallback was used. Closes the document.
pub fn render_outcome(outcome: &InsightOutcome) -> String {
    let insight = &outcome.insight;

    let warning = outcome
        .warning
        .as_deref()
        .map(|message| {
            format!(
                r#"<div class="warning" role="alert"><strong>We couldn't generate personalised insights right now.</strong> Showing general guidance instead. ({})</div>"#,
                escape(message)
            )
        })
        .unwrap_or_default();

    let paths = insight
        .career_paths
        .iter()
        .map(render_path)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"      <style>#loading {{ display: none; }}</style>
      <h1>Your Career <span class="accent">Insights</span></h1>
      <p class="muted">Based on your unique background and interests</p>
      {warning}
      <section class="card">
        <h2>Your Learning Journey</h2>
        <p>{summary}</p>
      </section>
      <section class="grid">
        <div class="card"><h3>Transferable Skills</h3>{transferable}</div>
        <div class="card"><h3>Technical Skills</h3>{technical}</div>
        <div class="card"><h3>Interest-Based Skills</h3>{interest}</div>
      </section>
      <h2>Career Paths <span class="accent">Just for You</span></h2>
      {paths}
      <p style="text-align:center"><a class="button" href="{form}">Explore Another Path</a></p>
{close}"#,
        summary = escape(&insight.summary),
        transferable = list("skills", &insight.transferable_skills),
        technical = list("skills", &insight.technical_skills),
        interest = list("skills", &insight.interest_skills),
        form = Route::Form.path(),
        close = page_close(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::fallback::fallback_insight;
    use crate::insights::tests::{sample_insight, sample_profile};

    #[test]
    fn test_loading_chunk_opens_page_with_indicator() {
        let html = render_loading(&sample_profile());
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains(r#"id="loading""#));
        assert!(!html.contains("</html>"));
    }

    #[test]
    fn test_outcome_reproduces_every_field() {
        let insight = sample_insight();
        let html = render_outcome(&InsightOutcome {
            insight: insight.clone(),
            warning: None,
        });

        assert!(html.contains(&insight.summary));
        for skill in insight
            .transferable_skills
            .iter()
            .chain(&insight.technical_skills)
            .chain(&insight.interest_skills)
        {
            assert!(html.contains(&format!("<li>{skill}</li>")));
        }
        for path in &insight.career_paths {
            assert!(html.contains(&path.title));
            assert!(html.contains(&path.description));
            assert!(html.contains(&path.encouragement));
            assert!(html.contains(path.life_alignment.as_deref().unwrap()));
            for step in &path.next_steps {
                assert!(html.contains(&format!("<li>{step}</li>")));
            }
        }
        assert!(!html.contains(r#"role="alert""#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_fallback_outcome_shows_warning() {
        let html = render_outcome(&InsightOutcome {
            insight: fallback_insight(&sample_profile()),
            warning: Some("Failed to generate career insights".to_string()),
        });
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("Failed to generate career insights"));
        assert!(html.contains("<li>Photography knowledge</li>"));
        assert!(!html.contains("Life Alignment"));
    }
}
