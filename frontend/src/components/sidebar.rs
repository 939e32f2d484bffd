use leptos::prelude::*;

/// Which feature panel the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Dashboard,
    Assessment,
    Coach,
    Nutrition,
}

impl Panel {
    pub const ALL: [Panel; 4] = [
        Panel::Dashboard,
        Panel::Assessment,
        Panel::Coach,
        Panel::Nutrition,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Assessment => "Health Assessment",
            Panel::Coach => "AI Coach (AROMI)",
            Panel::Nutrition => "Nutrition Tracker",
        }
    }
}

#[component]
pub fn Sidebar(
    active: RwSignal<Panel>,
    #[prop(into)] user_name: Signal<String>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <aside class="w-full md:w-64 bg-base-100 shadow-xl flex flex-col">
            <div class="p-6 border-b border-base-200">
                <h1 class="text-2xl font-bold text-primary">"ArogyaMitra"</h1>
                <p class="text-sm text-base-content/70">{move || user_name.get()}</p>
            </div>
            <ul class="menu p-4 flex-1 gap-1">
                {Panel::ALL
                    .into_iter()
                    .map(|panel| {
                        view! {
                            <li>
                                <a
                                    class=move || if active.get() == panel { "active" } else { "" }
                                    on:click=move |_| active.set(panel)
                                >
                                    {panel.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="p-4">
                <button class="btn btn-outline btn-error w-full" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
