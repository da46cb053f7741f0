use leptos::prelude::*;
use ui_roast_app::domain::InputModality;

#[component]
pub fn ArtifactInput(modality: InputModality) -> impl IntoView {
    let name = modality.field_name();

    match modality {
        InputModality::File => view! {
            <label class="artifact artifact--file">
                <span class="artifact__hint">"Click to upload your screenshot"</span>
                <input type="file" name=name accept="image/*" class="artifact__input" required/>
            </label>
        }
        .into_any(),
        InputModality::ImageUrl => view! {
            <input
                type="url"
                name=name
                class="artifact artifact__input"
                placeholder="Paste a screenshot URL (https://...)"
                required
            />
        }
        .into_any(),
        InputModality::SiteUrl => view! {
            <input
                type="url"
                name=name
                class="artifact artifact__input"
                placeholder="Paste a website URL (https://...)"
                required
            />
        }
        .into_any(),
    }
}
