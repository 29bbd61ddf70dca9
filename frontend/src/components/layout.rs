use crate::auth::use_auth;
use crate::web::router::Link;
use edutech::guard::role_home;
use edutech::PageId;
use leptos::prelude::*;

/// Top bar shown on every page.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();

    view! {
        <div class="navbar bg-base-100 shadow">
            <div class="flex-1 gap-2">
                <Link to=auth.href(PageId::Home) class="btn btn-ghost text-xl">"Edutech"</Link>
                <Link to=auth.href(PageId::Courses) class="btn btn-ghost btn-sm">"Courses"</Link>
                <Link to=auth.href(PageId::Community) class="btn btn-ghost btn-sm">"Community"</Link>
            </div>
            <div class="flex-none gap-2">
                {move || match user.get() {
                    Some(u) => view! {
                        <Link to=role_home(u.role) class="btn btn-ghost btn-sm">"Dashboard"</Link>
                        <Link to=auth.href(PageId::Profile) class="btn btn-ghost btn-sm">{u.display_name()}</Link>
                        <button class="btn btn-outline btn-error btn-sm" on:click=move |_| auth.logout()>
                            "Log out"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <Link to=auth.href(PageId::Login) class="btn btn-ghost btn-sm">"Sign in"</Link>
                        <Link to=auth.href(PageId::Register) class="btn btn-primary btn-sm">"Register"</Link>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
