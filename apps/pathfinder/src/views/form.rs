use crate::intake::{IntakeForm, ListField};
use crate::navigation::Route;
use crate::views::{escape, page};

fn chips(form: &IntakeForm, field: ListField, remove_name: &str, list_label: &str) -> String {
    let items = form.list(field);
    if items.is_empty() {
        return String::new();
    }
    let chips = items
        .iter()
        .map(|item| {
            let item = escape(item);
            format!(
                r#"<li>{item} <button type="submit" name="{remove_name}" value="{item}" aria-label="Remove {item} from {list_label} list">×</button></li>"#
            )
        })
        .collect::<Vec<_>>()
        .join("");
    format!(r#"<ul class="chips">{chips}</ul>"#)
}

fn hidden_list(form: &IntakeForm, field: ListField) -> String {
    let json = serde_json::to_string(form.list(field)).unwrap_or_default();
    format!(
        r#"<input type="hidden" name="{name}" value="{value}">"#,
        name = field.name(),
        value = escape(&json)
    )
}

/// The intake form. Every button posts the whole form back, so the page is
/// re-rendered from the submitted state after each action.
pub fn render_form(form: &IntakeForm) -> String {
    let report = form.completeness();
    let disabled = if report.is_complete() { "" } else { " disabled" };
    let missing_hint = if report.is_complete() {
        String::new()
    } else {
        format!(
            r#"<p class="muted" id="submit-hint">Still needed: {}. Use “Save answers” after typing to update.</p>"#,
            escape(&report.describe())
        )
    };

    let body = format!(
        r#"<section class="card">
  <h1>Tell us about yourself</h1>
  <p class="muted">The more we know about your studies and interests, the better we can help you discover your path.</p>
  <form method="post" action="{form_path}" aria-label="Career discovery form">
    <button type="submit" name="action" value="save" class="sr-only" tabindex="-1">Save</button>
    {hidden_modules}
    {hidden_interests}

    <p><label for="degree"><strong>What's your degree or field of study?</strong></label></p>
    <input type="text" id="degree" name="degree" value="{degree}" placeholder="e.g. Computer Science, History, Business" aria-label="Enter your degree or field of study" aria-describedby="degree-help">
    <p class="muted" id="degree-help">This helps us understand your academic background.</p>

    <p><label for="moduleInput"><strong>Which modules or topics have you enjoyed?</strong></label></p>
    <div class="row">
      <input type="text" id="moduleInput" name="moduleInput" value="{module_input}" placeholder="e.g. Data Structures, Marketing" aria-label="Enter a module or topic you enjoyed" aria-describedby="modules-help">
      <button class="button" type="submit" name="action" value="add_module" aria-label="Add module to list">Add</button>
    </div>
    <p class="muted" id="modules-help">Add modules one at a time. Press Enter or click Add.</p>
    {modules}

    <p><label for="interestInput"><strong>What are your hobbies and interests?</strong></label></p>
    <div class="row">
      <input type="text" id="interestInput" name="interestInput" value="{interest_input}" placeholder="e.g. Photography, Gaming, Volunteering" aria-label="Enter a hobby or interest" aria-describedby="interests-help">
      <button class="button" type="submit" name="action" value="add_interest" aria-label="Add interest to list">Add</button>
    </div>
    <p class="muted" id="interests-help">Add interests one at a time. Press Enter or click Add.</p>
    {interests}

    <p><label for="goals"><strong>Any specific career goals or dreams?</strong></label></p>
    <textarea id="goals" name="goals" rows="3" aria-label="Enter your career goals and dreams">{goals}</textarea>

    <p><label for="lifeGoals"><strong>What are your life goals and values?</strong></label></p>
    <textarea id="lifeGoals" name="lifeGoals" rows="3" aria-label="Enter your life goals and personal values" placeholder="e.g. work-life balance, making a difference, financial security">{life_goals}</textarea>

    <p>
      <button class="button secondary" type="submit" name="action" value="save">Save answers</button>
      <button class="button" type="submit" name="action" value="submit" formaction="{results_path}" aria-label="Submit form to discover career paths"{disabled}>Discover My Career Paths →</button>
    </p>
    {missing_hint}
  </form>
</section>
"#,
        form_path = Route::Form.path(),
        results_path = Route::Results.path(),
        hidden_modules = hidden_list(form, ListField::Modules),
        hidden_interests = hidden_list(form, ListField::Interests),
        degree = escape(form.degree()),
        module_input = escape(form.pending(ListField::Modules)),
        interest_input = escape(form.pending(ListField::Interests)),
        modules = chips(form, ListField::Modules, "removeModule", "modules"),
        interests = chips(form, ListField::Interests, "removeInterest", "interests"),
        goals = escape(form.goals()),
        life_goals = escape(form.life_goals()),
    );

    page("Tell us about yourself", &body)
}
