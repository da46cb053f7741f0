use ui_roast_app::domain::{FormState, RoastForm, Selection, SUBMIT_ERROR_MESSAGE};

pub const INCOMPLETE_FORM_MESSAGE: &str = "Pick a judge and add your UI first.";

/// Page for a form that has finished submitting.
pub fn render_form_state(form: &RoastForm) -> String {
    match form.state() {
        FormState::ResultShown(roast) => {
            let judge = Selection::from_tag(form.tag()).label();
            render_result_page(judge, roast)
        }
        FormState::ErrorShown(message) => render_error_page(message),
        FormState::Idle | FormState::Ready => render_error_page(INCOMPLETE_FORM_MESSAGE),
        FormState::Submitting { .. } => render_error_page(SUBMIT_ERROR_MESSAGE),
    }
}

pub fn render_result_page(judge: &str, roast_text: &str) -> String {
    let judge = escape_html(judge);
    let roast = escape_html(roast_text);
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Roasted by {judge}</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔥</text></svg>">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="roast">
            <h2 class="roast__title">Roast Result: {judge}</h2>
            <p class="roast__content">{roast}</p>
            <div class="roast__actions">
                <a href="/" class="roast__button--primary" style="text-decoration:none;display:inline-block;">Roast another UI</a>
            </div>
        </div>
    </main>
</body>
</html>"#, judge = judge, roast = roast, CSS = CSS)
}

pub fn render_error_page(message: &str) -> String {
    let message = escape_html(message);
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Error - UI Roast AI</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔥</text></svg>">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="error">
            <p class="error__title">Oops!</p>
            <p class="error__message">{message}</p>
            <a href="/" class="error__retry" style="text-decoration:none;display:inline-block;margin-top:1rem;">Try again</a>
        </div>
    </main>
</body>
</html>"#, message = message, CSS = CSS)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub const CSS: &str = r#"
:root {
    --base: #111827;
    --surface: #1f2937;
    --overlay: #374151;
    --muted: #9ca3af;
    --text: #f3f4f6;
    --love: #ef4444;
    --gold: #facc15;
    --pine: #2563eb;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 720px; margin: 0 auto; padding: 1.5rem; }
.roast {
    background: var(--surface); border: 2px solid var(--overlay);
    border-radius: 16px; padding: 1.5rem; margin: 2rem 0;
}
.roast__title { color: var(--gold); font-size: 1.4rem; margin-bottom: 1rem; padding-bottom: 0.75rem; border-bottom: 2px solid var(--overlay); }
.roast__content { line-height: 1.8; font-size: 1.05rem; white-space: pre-wrap; }
.roast__actions { margin-top: 1.5rem; padding-top: 1rem; border-top: 2px solid var(--overlay); }
.roast__button--primary { padding: 0.75rem 1.5rem; background: var(--pine); color: var(--text); border: none; border-radius: 12px; font-weight: 600; cursor: pointer; }
.error { background: #450a0a; border: 2px solid var(--love); border-radius: 12px; padding: 1.25rem; margin: 2rem 0; }
.error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
.error__message { color: #fecaca; }
.error__retry { padding: 0.5rem 1rem; background: var(--love); color: var(--text); border: none; border-radius: 8px; cursor: pointer; }
"#;
