use crate::components::{ArtifactInput, JudgeSelector};
use leptos::prelude::*;
use ui_roast_app::domain::InputModality;

#[component]
pub fn HomePage() -> impl IntoView {
    let modality = use_context::<InputModality>().unwrap_or_default();

    view! {
        <div class="hero">
            <h1 class="hero__title">"🔥 UI Roast AI 🤬"</h1>
            <p class="hero__subtitle">
                "Drop your UI, pick a judge, and get roasted with 3 tips to fix it"
            </p>
        </div>

        <form
            action="/roast"
            method="post"
            enctype="multipart/form-data"
            class="roast-form"
        >
            <ArtifactInput modality=modality/>
            <JudgeSelector/>
            <button type="submit" class="roast-form__button">
                "Roast my UI"
            </button>
        </form>

        <footer class="footer">"Roasts are AI-generated. Nothing is stored."</footer>
    }
}
