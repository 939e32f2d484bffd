use crate::auth::use_client;
use arogyamitra_shared::{ChatLog, ChatSession, non_blank};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Conversation with the AROMI coach.
///
/// The session belongs to the dashboard, so the server-side history survives
/// panel switches; the visible log is kept only while the panel is on screen.
#[component]
pub fn ChatPanel(session: StoredValue<ChatSession>) -> impl IntoView {
    let client = use_client();

    let log = RwSignal::new(ChatLog::new());
    let input = RwSignal::new(String::new());
    let (is_sending, set_is_sending) = signal(false);

    let send = move || {
        if is_sending.get_untracked() {
            return;
        }
        let Some(message) = non_blank(&input.get_untracked()) else {
            return;
        };

        log.update(|l| l.push_user(message.clone()));
        input.set(String::new());
        set_is_sending.set(true);

        let client = client.clone();
        let request = session.with_value(|s| s.request(message));
        spawn_local(async move {
            match client.send(&request).await {
                Ok(resp) => log.update(|l| l.push_reply(resp.reply)),
                Err(e) => {
                    tracing::warn!(error = %e, "chat request failed");
                    log.update(|l| l.push_fallback());
                }
            }
            set_is_sending.set(false);
        });
    };

    let on_keydown = {
        let send = send.clone();
        move |ev: leptos::web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                send();
            }
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl h-full">
            <div class="card-body flex flex-col">
                <h3 class="card-title">"AROMI AI Coach"</h3>

                <div class="flex-1 overflow-y-auto space-y-3 min-h-64 max-h-[28rem]">
                    <Show
                        when=move || !log.with(ChatLog::is_empty)
                        fallback=|| view! {
                            <p class="text-base-content/50 text-sm">
                                "Start a conversation with AROMI to get a personalized fitness guidance."
                            </p>
                        }
                    >
                        {move || {
                            log.with(|l| {
                                l.messages()
                                    .iter()
                                    .map(|m| {
                                        let side = if m.is_user() { "chat chat-end" } else { "chat chat-start" };
                                        let bubble = if m.is_user() {
                                            "chat-bubble chat-bubble-primary whitespace-pre-wrap"
                                        } else {
                                            "chat-bubble whitespace-pre-wrap"
                                        };
                                        let text = m.display_text().into_owned();
                                        view! {
                                            <div class=side>
                                                <div class=bubble>{text}</div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </Show>
                </div>

                <div class="flex items-end gap-2 mt-4">
                    <textarea
                        class="textarea textarea-bordered flex-1"
                        rows="2"
                        placeholder="Ask AROMI about workouts, recovery or meals..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    ></textarea>
                    <button
                        class="btn btn-primary"
                        disabled=move || is_sending.get()
                        on:click=move |_| send()
                    >
                        {move || if is_sending.get() { "Sending..." } else { "Send" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
