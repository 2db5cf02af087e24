use crate::navigation::Route;
use crate::views::page;

const FEATURES: &[(&str, &str)] = &[
    (
        "Personalised Analysis",
        "Tell us about your degree, favourite modules, and interests to get insights tailored specifically to you.",
    ),
    (
        "Skills Discovery",
        "Uncover your transferable skills, technical abilities, and unique strengths you might not have realised.",
    ),
    (
        "Career Roadmap",
        "Get specific career paths with actionable next steps and encouragement to help you move forward.",
    ),
];

const HOW_IT_WORKS: &[(&str, &str, &str)] = &[
    (
        "Tell Us About Yourself",
        "Share your degree, favourite modules, hobbies, and career goals. This takes just 2-3 minutes.",
        "The more details you provide, the more personalised your results will be.",
    ),
    (
        "AI Analysis",
        "Our intelligent system analyses your background to identify your unique strengths and transferable skills.",
        "We match your profile against a wide range of career paths.",
    ),
    (
        "Discover Career Paths",
        "Get personalised career recommendations with detailed descriptions and why they suit you.",
        "Each path includes specific next steps and actionable advice.",
    ),
    (
        "Take Action",
        "Follow your tailored roadmap with concrete steps to start your journey toward your ideal career.",
        "Get encouragement to move forward confidently.",
    ),
];

pub fn render_landing() -> String {
    let features = FEATURES
        .iter()
        .map(|(title, text)| {
            format!(r#"<div class="card"><h3>{title}</h3><p class="muted">{text}</p></div>"#)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let steps = HOW_IT_WORKS
        .iter()
        .enumerate()
        .map(|(i, (title, description, details))| {
            format!(
                r#"<li><h4>{n}. {title}</h4><p>{description}</p><p class="muted">{details}</p></li>"#,
                n = i + 1
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r##"<section class="card" style="text-align:center">
  <h1>Not sure where your degree will take you? <span class="accent">Let's find out.</span></h1>
  <p class="muted">Discover personalised career paths based on your studies, interests, and goals.
  Get AI-powered insights that reveal your unique strengths and show you exactly where to go next.</p>
  <p>
    <a class="button" href="{form}" aria-label="Start career discovery form">Get Started</a>
    <a class="button secondary" href="#how-it-works">See How It Works</a>
  </p>
</section>
<section class="grid">
{features}
</section>
<section class="card" id="how-it-works" aria-label="How PathFinder works">
  <h2>How PathFinder Works</h2>
  <ol style="list-style:none;padding:0">
{steps}
  </ol>
  <a class="button" href="{form}">Get Started Now</a>
</section>
"##,
        form = Route::Form.path(),
    );

    page("Discover your career path", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_has_hero_features_and_steps() {
        let html = render_landing();
        assert!(html.contains("Not sure where your degree will take you?"));
        assert!(html.contains("Let's find out."));
        for (title, _) in FEATURES {
            assert!(html.contains(title));
        }
        for (title, _, _) in HOW_IT_WORKS {
            assert!(html.contains(title));
        }
        assert!(html.contains(r#"href="/form""#));
    }
}
