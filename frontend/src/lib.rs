//! Edutech 前端应用
//!
//! Leptos CSR shell over the `edutech` client core:
//! - `auth`: signal mirror of the core auth store
//! - `web`: browser storage / fetch / toasts / console, plus the router
//! - `components`: pages

mod auth;
mod components {
    pub mod layout;
    pub mod login;
    pub mod pages;
    pub mod profile;
    pub mod register;
}
pub mod web;

use crate::auth::AuthContext;
use crate::components::layout::Navbar;
use crate::components::login::LoginPage;
use crate::components::pages::*;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::web::router::{PageView, Router, RouterOutlet};
use crate::web::{ToastNotifier, ToastStack};

use edutech::{ClientConfig, PageId, PageRegistry};
use leptos::prelude::*;

/// 页面模块表
fn page_view(page: PageId) -> PageView {
    match page {
        PageId::Home => |_, _| view! { <HomePage /> }.into_any(),
        PageId::Login => |_, _| view! { <LoginPage /> }.into_any(),
        PageId::Register => |_, _| view! { <RegisterPage /> }.into_any(),
        PageId::Profile => |_, _| view! { <ProfilePage /> }.into_any(),
        PageId::StudentDashboard | PageId::TeacherDashboard | PageId::AdminDashboard => {
            |page, _| view! { <DashboardPage page=page /> }.into_any()
        }
        PageId::TeacherPending => |_, _| view! { <TeacherPendingPage /> }.into_any(),
        PageId::Unauthorized => |_, _| view! { <UnauthorizedPage /> }.into_any(),
        PageId::NotFound => |_, _| view! { <NotFoundPage /> }.into_any(),
        _ => |page, params| view! { <PlaceholderPage page=page params=params /> }.into_any(),
    }
}

/// Every page gets a loader; modules resolve on first visit.
fn page_registry() -> PageRegistry<PageView> {
    let mut registry = PageRegistry::new();
    for page in PageId::ALL {
        registry.register(page, move || async move { page_view(page) });
    }
    registry
}

/// API base URL is baked in at build time (`EDUTECH_API_URL`).
fn client_config() -> ClientConfig {
    ClientConfig::from_lookup(|key| match key {
        "EDUTECH_API_URL" => option_env!("EDUTECH_API_URL").map(str::to_string),
        _ => None,
    })
}

#[component]
pub fn App() -> impl IntoView {
    let config = client_config();

    // 1. 通知栈
    let toasts = ToastNotifier::new(config.notification_timeout_ms);
    provide_context(toasts);

    // 2. 认证上下文 + 启动 (rehydrate, then restore the profile if needed)
    let auth = AuthContext::new(&config, toasts);
    provide_context(auth);
    auth.boot();
    on_cleanup(move || auth.unmount());

    view! {
        <Router registry=page_registry()>
            <div class="min-h-screen bg-base-200">
                <Navbar />
                <main class="max-w-7xl mx-auto p-4 md:p-8">
                    <RouterOutlet />
                </main>
            </div>
            <ToastStack />
        </Router>
    }
}
