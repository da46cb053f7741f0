use leptos::prelude::*;
use ui_roast_app::domain::{Category, Judge};

/// Judge cards plus an optional review focus. A picked judge wins.
#[component]
pub fn JudgeSelector() -> impl IntoView {
    view! {
        <fieldset class="judges">
            <legend class="judges__title">"Pick your judge"</legend>
            <div class="judges__grid">
                {Judge::ALL
                    .into_iter()
                    .map(|judge| {
                        view! {
                            <label class="judge-card">
                                <input
                                    type="radio"
                                    name="judge"
                                    value=judge.id()
                                    class="judge-card__radio"
                                />
                                <span class="judge-card__emoji">{judge.emoji()}</span>
                                <span class="judge-card__name">{judge.name()}</span>
                                <span class="judge-card__desc">{judge.description()}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <label class="judges__category">
                "...or a review focus"
                <select name="category" class="judges__select">
                    <option value="">"None"</option>
                    {Category::ALL
                        .into_iter()
                        .map(|category| {
                            view! { <option value=category.id()>{category.label()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
        </fieldset>
    }
}
