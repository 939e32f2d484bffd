use crate::auth::use_client;
use crate::web::router::Link;
use arogyamitra::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

const LOGIN_FAILED: &str = "Login failed";

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = use_client();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let client = client.clone();
        spawn_local(async move {
            // On success the router sees the session change and moves on.
            if let Err(e) = client.login(&email.get_untracked(), &password.get_untracked()).await {
                tracing::warn!(error = %e, "login rejected");
                set_error_msg.set(Some(e.user_message(LOGIN_FAILED).to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold text-primary">"ArogyaMitra"</h1>
                    <p class="text-base-content/70">"Sign in to continue with AROMI"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Signing in..." } else { "Login" }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "New here? "
                            <Link route=AppRoute::Register class="link link-primary">
                                "Create an account"
                            </Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
