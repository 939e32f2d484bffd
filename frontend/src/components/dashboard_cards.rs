use arogyamitra_shared::DashboardData;
use leptos::prelude::*;

const NO_ASSESSMENT: &str = "No health assessment submitted yet.";

#[component]
pub fn DashboardCards(#[prop(into)] data: Signal<DashboardData>) -> impl IntoView {
    let summary = move || {
        data.with(|d| d.latest_summary().unwrap_or(NO_ASSESSMENT).to_string())
    };

    view! {
        <div class="space-y-4">
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Workouts created"</div>
                    <div class="stat-value text-primary">{move || data.with(|d| d.total_workouts)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Meals logged"</div>
                    <div class="stat-value text-secondary">{move || data.with(|d| d.total_meals)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Messages with AROMI"</div>
                    <div class="stat-value text-accent">{move || data.with(|d| d.total_messages)}</div>
                </div>
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Latest assessment summary"</h3>
                    <p class="whitespace-pre-wrap text-base-content/80">{summary}</p>
                </div>
            </div>
        </div>
    }
}
