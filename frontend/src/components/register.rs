use crate::auth::use_auth;
use crate::web::router::Link;
use edutech::shared::Role;
use edutech::shared::protocol::RegisterRequest;
use edutech::PageId;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Roles a visitor may sign up as. Admins are created out of band.
const SIGNUP_ROLES: [Role; 2] = [Role::Student, Role::Teacher];

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::Student);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if [first_name, last_name, email, password]
            .iter()
            .any(|field| field.get().trim().is_empty())
        {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let data = RegisterRequest {
            email: email.get(),
            password: password.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            role: role.get(),
        };
        spawn_local(async move {
            if let Err(e) = auth.register(data).await {
                let _ = set_error_msg.try_set(Some(e.message().to_string()));
            }
            let _ = set_is_submitting.try_set(false);
        });
    };

    let on_role = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if let Some(picked) = SIGNUP_ROLES.iter().find(|r| r.as_str() == value) {
            set_role.set(*picked);
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold mb-4">"Create your account"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="flex gap-2">
                            <input
                                type="text"
                                placeholder="First name"
                                on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                prop:value=first_name
                                class="input input-bordered w-1/2"
                            />
                            <input
                                type="text"
                                placeholder="Last name"
                                on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                prop:value=last_name
                                class="input input-bordered w-1/2"
                            />
                        </div>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                            class="input input-bordered"
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            class="input input-bordered"
                        />
                        <select class="select select-bordered" on:change=on_role>
                            {SIGNUP_ROLES
                                .iter()
                                .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                                .collect_view()}
                        </select>

                        <button class="btn btn-primary mt-4" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() { "Creating account..." } else { "Register" }}
                        </button>
                        <p class="text-sm text-center mt-2">
                            "Already registered? "
                            <Link to=auth.href(PageId::Login) class="link link-primary">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
