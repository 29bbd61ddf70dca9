//! 认证模块
//!
//! Leptos-facing wrapper around the client core's [`AuthStore`]. The store
//! stays the single source of truth; every transition it emits is mirrored
//! into a signal so views and the router can react to it.

use crate::web::{BrowserStorage, GlooHttpClient, ToastNotifier};
use edutech::error::ClientResult;
use edutech::shared::protocol::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use edutech::shared::{Session, User};
use edutech::{AppShell, AuthStore, BootOutcome, ClientConfig, HttpAuthApi, PageId, RouteTable};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

pub type WebAuthApi = HttpAuthApi<GlooHttpClient>;
pub type WebShell = AppShell<WebAuthApi, BrowserStorage, ToastNotifier>;

/// 认证上下文
///
/// `Copy`, so it can be captured freely by view closures; the shell itself
/// lives in a local arena slot.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
    ready: RwSignal<bool>,
    shell: StoredValue<Rc<WebShell>, LocalStorage>,
}

impl AuthContext {
    pub fn new(config: &ClientConfig, notifier: ToastNotifier) -> Self {
        let api = HttpAuthApi::new(GlooHttpClient, config.clone());
        let store = Rc::new(AuthStore::from_config(api, BrowserStorage, notifier, config));

        let session = RwSignal::new(store.session());
        store.subscribe(move |s| {
            let _ = session.try_set(s.clone());
        });

        let shell = AppShell::new(store, RouteTable::edutech(config));
        Self {
            session,
            ready: RwSignal::new(false),
            shell: StoredValue::new_local(Rc::new(shell)),
        }
    }

    pub fn shell(&self) -> Rc<WebShell> {
        self.shell.get_value()
    }

    /// Path the route table serves `page` at.
    pub fn href(&self, page: PageId) -> String {
        self.shell().routes().href(page, &[])
    }

    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    pub fn user(&self) -> Signal<Option<User>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.user.clone()))
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_authenticated))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_loading))
    }

    /// False until the boot sequence has settled.
    pub fn is_ready(&self) -> ReadSignal<bool> {
        self.ready.read_only()
    }

    /// Starts the one-shot boot in the background.
    pub fn boot(&self) {
        let shell = self.shell();
        let ready = self.ready;
        spawn_local(async move {
            let outcome = shell.boot().await;
            tracing::info!(?outcome, "boot finished");
            if outcome != BootOutcome::Unmounted {
                let _ = ready.try_set(true);
            }
        });
    }

    pub fn unmount(&self) {
        let _ = self.shell.try_with_value(|shell| shell.unmount());
    }

    pub async fn login(self, credentials: LoginRequest) -> ClientResult<User> {
        let shell = self.shell();
        shell.store().login(credentials).await
    }

    pub async fn register(self, data: RegisterRequest) -> ClientResult<User> {
        let shell = self.shell();
        shell.store().register(data).await
    }

    pub async fn update_profile(self, data: UpdateProfileRequest) -> ClientResult<User> {
        let shell = self.shell();
        shell.store().update_profile(data).await
    }

    pub async fn refresh_profile(self) -> ClientResult<User> {
        let shell = self.shell();
        shell.store().fetch_profile().await
    }

    /// 注销
    ///
    /// The router follows the session signal and moves off protected
    /// pages by itself.
    pub fn logout(&self) {
        let shell = self.shell();
        spawn_local(async move { shell.store().logout().await });
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
