use crate::auth::use_auth;
use edutech::shared::protocol::UpdateProfileRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Blank fields are left out of the update, so they keep their value.
fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();
    let is_loading = auth.is_loading();

    let current = user.get_untracked();
    let (first_name, set_first_name) = signal(
        current.as_ref().map(|u| u.first_name.clone()).unwrap_or_default(),
    );
    let (last_name, set_last_name) = signal(
        current.as_ref().map(|u| u.last_name.clone()).unwrap_or_default(),
    );
    let (bio, set_bio) = signal(String::new());

    // Success and failure are both reported through the toast stack.
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = UpdateProfileRequest {
            first_name: non_empty(first_name.get()),
            last_name: non_empty(last_name.get()),
            bio: non_empty(bio.get()),
            ..Default::default()
        };
        spawn_local(async move {
            if let Err(e) = auth.update_profile(data).await {
                tracing::debug!(error = %e, "profile update rejected");
            }
        });
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{move || user.get().map(|u| u.display_name()).unwrap_or_default()}</h2>
                    <p class="text-base-content/70">{move || user.get().map(|u| u.email).unwrap_or_default()}</p>
                    <span class="badge badge-neutral">
                        {move || user.get().map(|u| u.role.to_string()).unwrap_or_default()}
                    </span>
                </div>
            </div>

            <form class="card bg-base-100 shadow" on:submit=on_submit>
                <div class="card-body gap-3">
                    <input
                        type="text"
                        placeholder="First name"
                        on:input=move |ev| set_first_name.set(event_target_value(&ev))
                        prop:value=first_name
                        class="input input-bordered"
                    />
                    <input
                        type="text"
                        placeholder="Last name"
                        on:input=move |ev| set_last_name.set(event_target_value(&ev))
                        prop:value=last_name
                        class="input input-bordered"
                    />
                    <textarea
                        placeholder="Bio"
                        on:input=move |ev| set_bio.set(event_target_value(&ev))
                        prop:value=bio
                        class="textarea textarea-bordered"
                    ></textarea>
                    <button class="btn btn-primary" disabled=move || is_loading.get()>
                        "Save changes"
                    </button>
                </div>
            </form>
        </div>
    }
}
