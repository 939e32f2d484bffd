use crate::auth::use_client;
use crate::components::chat_panel::ChatPanel;
use crate::components::dashboard_cards::DashboardCards;
use crate::components::health_assessment::HealthAssessment;
use crate::components::nutrition_tracker::NutritionTracker;
use crate::components::sidebar::{Panel, Sidebar};
use arogyamitra_shared::{
    ChatSession, CurrentUserRequest, DashboardData, DashboardDataRequest, UserProfile,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = use_client();

    let (user, set_user) = signal(Option::<UserProfile>::None);
    let (data, set_data) = signal(DashboardData::default());
    let active = RwSignal::new(Panel::Dashboard);
    // Shared by every chat panel this mount renders.
    let chat_session = StoredValue::new(ChatSession::new());

    // Identity: without it the session is useless, so sign out.
    {
        let client = client.clone();
        spawn_local(async move {
            match client.send(&CurrentUserRequest).await {
                Ok(profile) => set_user.set(Some(profile)),
                Err(e) => {
                    tracing::warn!(error = %e, "could not load current user, signing out");
                    client.logout();
                }
            }
        });
    }

    // Summary counters degrade to zeros.
    {
        let client = client.clone();
        spawn_local(async move {
            match client.send(&DashboardDataRequest).await {
                Ok(summary) => set_data.set(summary),
                Err(e) => {
                    tracing::warn!(error = %e, "dashboard data unavailable");
                    set_data.set(DashboardData::default());
                }
            }
        });
    }

    let user_name = Signal::derive(move || {
        user.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default())
    });
    let on_logout = Callback::new(move |_: ()| client.logout());

    view! {
        <Show
            when=move || user.with(Option::is_some)
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen bg-base-200">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                    <span class="ml-3">"Loading..."</span>
                </div>
            }
        >
            <div class="min-h-screen bg-base-200 flex flex-col md:flex-row font-sans">
                <Sidebar active=active user_name=user_name on_logout=on_logout />
                <main class="flex-1 p-4 md:p-8 space-y-6">
                    {move || match active.get() {
                        Panel::Dashboard => view! {
                            <DashboardCards data=data />
                            <div class="grid gap-6 lg:grid-cols-2">
                                <HealthAssessment />
                                <ChatPanel session=chat_session />
                            </div>
                        }
                        .into_any(),
                        Panel::Assessment => view! { <HealthAssessment /> }.into_any(),
                        Panel::Coach => view! { <ChatPanel session=chat_session /> }.into_any(),
                        Panel::Nutrition => view! { <NutritionTracker /> }.into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}
