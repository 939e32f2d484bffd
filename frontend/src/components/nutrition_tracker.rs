use crate::auth::use_client;
use arogyamitra_shared::nutrition::MealAnalysisRequest;
use arogyamitra_shared::{MacroField, MealSummary, non_blank};
use leptos::prelude::*;
use leptos::task::spawn_local;

const ANALYSIS_FAILED: &str = "Could not analyze the meal. Please try again.";

#[component]
pub fn NutritionTracker() -> impl IntoView {
    let client = use_client();

    let (description, set_description) = signal(String::new());
    let (result, set_result) = signal(Option::<MealSummary>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (is_analyzing, set_is_analyzing) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_analyzing.get_untracked() {
            return;
        }
        let Some(meal) = non_blank(&description.get_untracked()) else {
            return;
        };

        set_is_analyzing.set(true);
        set_error_msg.set(None);

        let client = client.clone();
        spawn_local(async move {
            match client.send(&MealAnalysisRequest::new(meal)).await {
                Ok(summary) => set_result.set(Some(summary)),
                Err(e) => {
                    tracing::warn!(error = %e, "meal analysis failed");
                    set_error_msg.set(Some(e.user_message(ANALYSIS_FAILED).to_string()));
                }
            }
            set_is_analyzing.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body space-y-3" on:submit=on_submit>
                <h3 class="card-title">"Nutrition Tracker"</h3>
                <textarea
                    class="textarea textarea-bordered"
                    rows="3"
                    placeholder="E.g. 2 boiled eggs, 1 cup rice, grilled chicken breast..."
                    prop:value=description
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <button class="btn btn-primary" disabled=move || is_analyzing.get()>
                    {move || if is_analyzing.get() { "Analyzing..." } else { "Analyze meal" }}
                </button>

                <Show when=move || result.get().is_some()>
                    <div class="stats stats-vertical md:stats-horizontal shadow bg-base-200">
                        {MacroField::ALL
                            .into_iter()
                            .map(|field| {
                                view! {
                                    <div class="stat">
                                        <div class="stat-title">{field.label()}</div>
                                        <div class="stat-value text-2xl">
                                            {move || {
                                                result.with(|r| {
                                                    r.as_ref()
                                                        .map(|s| s.display(field))
                                                        .unwrap_or_default()
                                                })
                                            }}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </form>
        </div>
    }
}
