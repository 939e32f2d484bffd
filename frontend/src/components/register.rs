use crate::auth::use_client;
use crate::web::router::{Link, use_router};
use arogyamitra::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

const REGISTRATION_FAILED: &str = "Registration failed";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let client = use_client();
    let router = use_router();

    let (name, set_name) = signal(String::new());
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
            let result = client
                .register(
                    &name.get_untracked(),
                    &email.get_untracked(),
                    &password.get_untracked(),
                )
                .await;
            set_is_submitting.set(false);
            match result {
                // Register stays public, so move on explicitly.
                Ok(()) => router.navigate_to(AppRoute::auth_success_redirect()),
                Err(e) => {
                    tracing::warn!(error = %e, "registration rejected");
                    set_error_msg.set(Some(e.user_message(REGISTRATION_FAILED).to_string()));
                }
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold text-primary">"Join ArogyaMitra"</h1>
                    <p class="text-base-content/70">"Create an account to start with AROMI"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                                required
                            />
                        </div>
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
                                {move || if is_submitting.get() { "Creating account..." } else { "Register" }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Already registered? "
                            <Link route=AppRoute::Login class="link link-primary">
                                "Sign in"
                            </Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
