mod pages;

use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    response::Html,
    routing::post,
    Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::compression::CompressionLayer;
use ui_roast_app::domain::{RoastForm, SUBMIT_ERROR_MESSAGE};
use ui_roast_app::http::{api_router, RoastSubmission};
use ui_roast_app::{AppContext, Config};
use ui_roast_errors::AppError;
use ui_roast_ui::App;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let config = Config::from_env().expect("Invalid configuration");
    tracing::debug!(?config, "Loaded configuration");

    let app_context = AppContext::from_config(&config).expect("Failed to build AI client");

    let routes = generate_route_list(App);

    let app = Router::new()
        .merge(api_router(app_context.clone()))
        .route(
            "/roast",
            post({
                let ctx = app_context.clone();
                move |multipart: Result<Multipart, MultipartRejection>| {
                    let ctx = ctx.clone();
                    async move { handle_roast_form(ctx, multipart).await }
                }
            })
            .layer(app_context.body_limit()),
        )
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let modality = app_context.modality;
                move || provide_context(modality)
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);
    tracing::info!(
        "Input modality: {}, demo mode: {}",
        app_context.modality,
        app_context.generate_roast.is_demo()
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

/// No-script path: the form posts here and gets a full page back.
async fn handle_roast_form(
    ctx: AppContext,
    multipart: Result<Multipart, MultipartRejection>,
) -> Html<String> {
    let submission = match multipart {
        Ok(multipart) => RoastSubmission::read(multipart, ctx.modality).await,
        Err(e) => Err(AppError::MalformedRequest(e.to_string())),
    };

    let mut form = RoastForm::new();
    match submission {
        Ok(submission) => {
            if let Some(tag) = submission.tag() {
                form.select_tag(tag);
            }
            if let Some(artifact) = submission.artifact {
                form.set_artifact(artifact);
            }
        }
        Err(e) => {
            tracing::warn!("Rejected roast form: {}", e);
            return Html(pages::render_error_page(SUBMIT_ERROR_MESSAGE));
        }
    }

    let Some(request) = form.submit() else {
        return Html(pages::render_form_state(&form));
    };

    let outcome = ctx.generate_roast.execute(request).await;
    form.resolve(outcome.map(|roast| roast.roast_text));

    Html(pages::render_form_state(&form))
}

fn shell(_options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    let css = r#"
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
        .hero { text-align: center; padding: 3rem 0 2rem; }
        .hero__title { font-size: clamp(2rem, 5vw, 3rem); font-weight: 800; margin-bottom: 0.75rem; }
        .hero__subtitle { color: var(--muted); font-size: 1.1rem; max-width: 500px; margin: 0 auto; }
        .roast-form { display: flex; flex-direction: column; gap: 1.5rem; background: var(--surface); border-radius: 16px; padding: 2rem; }
        .artifact { display: flex; flex-direction: column; align-items: center; gap: 0.5rem; padding: 1rem 1.25rem; border-radius: 12px; background: var(--overlay); color: var(--text); border: none; font-size: 1rem; }
        .artifact--file { cursor: pointer; }
        .artifact__hint { color: var(--muted); }
        .judges { border: none; display: flex; flex-direction: column; gap: 1rem; }
        .judges__title { font-weight: 700; margin-bottom: 0.5rem; }
        .judges__grid { display: grid; grid-template-columns: 1fr; gap: 1rem; }
        @media (min-width: 640px) { .judges__grid { grid-template-columns: repeat(3, 1fr); } }
        .judge-card { display: flex; flex-direction: column; align-items: center; gap: 0.25rem; padding: 1rem; border: 2px solid var(--overlay); border-radius: 12px; cursor: pointer; text-align: center; }
        .judge-card:has(.judge-card__radio:checked) { border-color: var(--love); background: #7f1d1d; }
        .judge-card__radio { display: none; }
        .judge-card__emoji { font-size: 2.25rem; }
        .judge-card__name { font-weight: 700; }
        .judge-card__desc { color: var(--muted); font-size: 0.85rem; }
        .judges__category { display: flex; flex-direction: column; gap: 0.5rem; color: var(--muted); }
        .judges__select { padding: 0.75rem; border-radius: 8px; background: var(--overlay); color: var(--text); border: none; }
        .roast-form__button {
            padding: 1rem 2rem; background: var(--pine); color: var(--text);
            border: none; border-radius: 12px; font-size: 1.1rem; font-weight: 600; cursor: pointer;
        }
        .roast-form__button:hover { opacity: 0.9; }
        .roast-form__button:disabled { opacity: 0.5; cursor: not-allowed; }
        .footer { text-align: center; padding: 2rem 0; color: var(--muted); font-size: 0.9rem; margin-top: 3rem; }
    "#;

    let validation_script = r#"
        document.addEventListener('DOMContentLoaded', function() {
            const form = document.querySelector('.roast-form');
            const button = document.querySelector('.roast-form__button');
            const artifact = form.querySelector('.artifact__input');
            const category = form.querySelector('.judges__select');

            function hasTag() {
                return form.querySelector('input[name="judge"]:checked') !== null
                    || category.value !== '';
            }

            function hasArtifact() {
                return artifact.type === 'file'
                    ? artifact.files.length > 0
                    : artifact.value.trim() !== '';
            }

            function updateButton() {
                button.disabled = !(hasTag() && hasArtifact());
            }

            form.addEventListener('submit', function(event) {
                if (button.disabled) {
                    event.preventDefault();
                    return;
                }
                button.disabled = true;
                button.textContent = 'Roasting...';
                button.style.cursor = 'wait';
            });

            form.addEventListener('input', updateButton);
            form.addEventListener('change', updateButton);
            updateButton();
        });
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"UI Roast AI"</title>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔥</text></svg>"/>
                <style>{css}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
                <script>{validation_script}</script>
            </body>
        </html>
    }
}
