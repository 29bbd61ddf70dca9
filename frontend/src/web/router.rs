//! 路由服务模块 - 核心引擎
//!
//! Wraps the History API around the client core's route table:
//! "listen -> resolve (guards) -> follow redirects -> load page module".
//! All `window.history` access is kept in this module.

use crate::auth::{AuthContext, use_auth};
use edutech::{PageId, PageRegistry, PageState, Resolution};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Route parameters captured from `:name` segments.
pub type Params = HashMap<String, String>;

/// A page module: renders its page from the captured parameters.
pub type PageView = fn(PageId, Params) -> AnyView;

/// Guards should settle within a couple of hops; more means a loop.
const MAX_REDIRECTS: usize = 4;

/// 获取当前浏览器路径 (including the query string)
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| {
            let location = w.location();
            let path = location.pathname().ok()?;
            let search = location.search().unwrap_or_default();
            Some(format!("{}{}", path, search))
        })
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// `current` is `None` until the auth shell has booted, so protected pages
/// are never judged against a half-restored session.
#[derive(Clone, Copy)]
pub struct RouterService {
    current: RwSignal<Option<Resolution>>,
    auth: AuthContext,
    registry: StoredValue<Rc<PageRegistry<PageView>>, LocalStorage>,
}

impl RouterService {
    fn new(auth: AuthContext, registry: PageRegistry<PageView>) -> Self {
        Self {
            current: RwSignal::new(None),
            auth,
            registry: StoredValue::new_local(Rc::new(registry)),
        }
    }

    pub fn current(&self) -> ReadSignal<Option<Resolution>> {
        self.current.read_only()
    }

    /// Navigates to `path`, pushing a history entry.
    pub fn navigate(&self, path: &str) {
        self.go(path, true);
    }

    /// Re-evaluates the address bar against the current session.
    fn refresh(&self) {
        self.go(&current_path(), false);
    }

    /// 导航与守卫
    ///
    /// Follows guard redirects until a page renders, then records the final
    /// location with pushState or replaceState.
    fn go(&self, path: &str, use_push: bool) {
        let shell = self.auth.shell();
        let mut target = path.to_string();
        let mut resolution = shell.navigate(&target);
        let mut hops = 0;

        while let Resolution::Redirect { to } = &resolution {
            if hops == MAX_REDIRECTS {
                tracing::error!(path, last = %to, "redirect loop; giving up");
                break;
            }
            tracing::debug!(from = %target, to = %to, "route redirected");
            target = to.clone();
            resolution = shell.navigate(&target);
            hops += 1;
        }

        if use_push {
            push_history_state(&target);
        } else {
            replace_history_state(&target);
        }
        let _ = self.current.try_set(Some(resolution));
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            if router.auth.is_ready().get_untracked() {
                router.refresh();
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// Re-resolves the current location whenever the session changes, so
    /// logging out leaves protected pages and logging in leaves /login.
    fn setup_auth_redirect(&self) {
        let router = *self;
        let session = self.auth.session();
        let ready = self.auth.is_ready();

        Effect::new(move |_| {
            session.track();
            if ready.get() {
                router.refresh();
            }
        });
    }
}

fn provide_router(auth: AuthContext, registry: PageRegistry<PageView>) -> RouterService {
    let router = RouterService::new(auth, registry);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// Page modules, one per [`PageId`]
    registry: PageRegistry<PageView>,
    children: Children,
) -> impl IntoView {
    let missing = registry.missing(&PageId::ALL);
    if !missing.is_empty() {
        tracing::warn!(?missing, "pages without a module will not render");
    }

    provide_router(use_auth(), registry);
    children()
}

/// 路由出口组件
///
/// Renders the current page, or the fallback while the auth shell is still
/// booting or the page module is being fetched.
#[component]
pub fn RouterOutlet() -> impl IntoView {
    let router = use_router();
    let (loaded, set_loaded) = signal(0u32);

    move || {
        loaded.track();
        let Some(Resolution::Render { page, params, .. }) = router.current.get() else {
            return view! { <PageFallback /> }.into_any();
        };

        let registry = router.registry.get_value();
        match registry.state(page) {
            PageState::Ready(render) => render(page, params),
            PageState::Loading => {
                spawn_local(async move {
                    match registry.load(page).await {
                        Ok(_) => {
                            let _ = set_loaded.try_update(|n| *n += 1);
                        }
                        Err(e) => tracing::error!(error = %e, %page, "page module failed to load"),
                    }
                });
                view! { <PageFallback /> }.into_any()
            }
        }
    }
}

#[component]
pub fn PageFallback() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[50vh]">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// In-app link: navigates through the router instead of reloading.
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
