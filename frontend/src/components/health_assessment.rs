use crate::auth::use_client;
use arogyamitra_shared::{AssessmentAnswers, QUESTIONS};
use leptos::prelude::*;
use leptos::task::spawn_local;

const SUBMIT_FAILED: &str = "Could not submit the assessment. Please try again.";

#[component]
pub fn HealthAssessment() -> impl IntoView {
    let client = use_client();

    let answers = RwSignal::new(AssessmentAnswers::new());
    let (summary, set_summary) = signal(Option::<String>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let request = match answers.with_untracked(AssessmentAnswers::to_request) {
            Ok(request) => request,
            Err(incomplete) => {
                set_error_msg.set(Some(format!("Please answer every question ({incomplete}).")));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let client = client.clone();
        spawn_local(async move {
            match client.send(&request).await {
                Ok(resp) => set_summary.set(resp.displayed_summary().map(str::to_string)),
                Err(e) => {
                    tracing::warn!(error = %e, "assessment submission failed");
                    set_error_msg.set(Some(e.user_message(SUBMIT_FAILED).to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body space-y-2" on:submit=on_submit>
                <h3 class="card-title">"Health Assessment"</h3>

                {QUESTIONS
                    .iter()
                    .enumerate()
                    .map(|(index, question)| {
                        view! {
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">{format!("{}. {}", index + 1, question)}</span>
                                </label>
                                <input
                                    type="text"
                                    class="input input-bordered input-sm"
                                    prop:value=move || answers.with(|a| a.get(index).to_string())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        answers.update(|a| a.set(index, value));
                                    }
                                />
                            </div>
                        }
                    })
                    .collect_view()}

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <button class="btn btn-primary mt-2" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Submitting..." } else { "Submit assessment" }}
                </button>

                <Show when=move || summary.get().is_some()>
                    <div class="mt-4 p-4 rounded-box bg-base-200">
                        <h4 class="font-semibold mb-1">"AROMI summary"</h4>
                        <p class="whitespace-pre-wrap">{move || summary.get().unwrap_or_default()}</p>
                    </div>
                </Show>
            </form>
        </div>
    }
}
