//! Status pages, role dashboards and the placeholder used by the content
//! pages that only need a route for now.

use crate::auth::use_auth;
use crate::web::router::{Link, Params};
use edutech::PageId;
use edutech::guard::role_home;
use edutech::shared::RegistrationStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn page_title(page: PageId) -> &'static str {
    match page {
        PageId::Home => "Home",
        PageId::Login => "Sign in",
        PageId::Register => "Register",
        PageId::Courses => "Courses",
        PageId::CourseDetail => "Course",
        PageId::About => "About",
        PageId::Contact => "Contact",
        PageId::Community => "Community",
        PageId::Unauthorized => "Unauthorized",
        PageId::NotFound => "Not found",
        PageId::Profile => "Profile",
        PageId::Messages => "Messages",
        PageId::Support => "Support",
        PageId::StudentDashboard => "Student dashboard",
        PageId::StudentCourses => "My courses",
        PageId::StudentLearn => "Learn",
        PageId::StudentOrders => "My orders",
        PageId::StudentRefunds => "Refunds",
        PageId::StudentRefundNew => "Request a refund",
        PageId::TeacherPending => "Approval pending",
        PageId::TeacherDashboard => "Teacher dashboard",
        PageId::TeacherCourses => "My courses",
        PageId::TeacherCourseNew => "New course",
        PageId::TeacherCourseEdit => "Edit course",
        PageId::TeacherStudents => "Students",
        PageId::TeacherRevenue => "Revenue",
        PageId::AdminDashboard => "Admin dashboard",
        PageId::AdminUsers => "Users",
        PageId::AdminUserDetail => "User",
        PageId::AdminCourses => "Courses",
        PageId::AdminOrders => "Orders",
        PageId::AdminRefunds => "Refunds",
        PageId::AdminSupport => "Support tickets",
        PageId::AdminReports => "Reports",
    }
}

/// Links shown on each role's dashboard.
fn dashboard_links(page: PageId) -> &'static [PageId] {
    match page {
        PageId::StudentDashboard => &[
            PageId::StudentCourses,
            PageId::StudentOrders,
            PageId::StudentRefunds,
        ],
        PageId::TeacherDashboard => &[
            PageId::TeacherCourses,
            PageId::TeacherCourseNew,
            PageId::TeacherStudents,
            PageId::TeacherRevenue,
        ],
        PageId::AdminDashboard => &[
            PageId::AdminUsers,
            PageId::AdminCourses,
            PageId::AdminOrders,
            PageId::AdminRefunds,
            PageId::AdminSupport,
            PageId::AdminReports,
        ],
        _ => &[],
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center">
                <div class="max-w-lg space-y-4">
                    <h1 class="text-5xl font-bold">"Learn anything, teach anyone"</h1>
                    <p class="text-base-content/70">"Browse courses or sign in to pick up where you left off."</p>
                    <div class="flex justify-center gap-2">
                        <Link to=auth.href(PageId::Courses) class="btn btn-primary">"Browse courses"</Link>
                        <Link to=auth.href(PageId::Register) class="btn btn-outline">"Get started"</Link>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage(page: PageId) -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{page_title(page)}</h1>
            <p class="text-base-content/70">
                "Welcome back, " {move || user.get().map(|u| u.display_name()).unwrap_or_default()}
            </p>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {dashboard_links(page)
                    .iter()
                    .map(|target| view! {
                        <Link to=auth.href(*target) class="card bg-base-100 shadow hover:shadow-lg">
                            <div class="card-body">
                                <h2 class="card-title">{page_title(*target)}</h2>
                            </div>
                        </Link>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Shown to teachers whose registration has not been approved yet.
#[component]
pub fn TeacherPendingPage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();
    let (checking, set_checking) = signal(false);

    let status = move || {
        user.get()
            .and_then(|u| u.registration_status())
            .unwrap_or(RegistrationStatus::Pending)
    };

    // An approval flips the guard; the router picks that up on its own.
    let on_check = move |_| {
        set_checking.set(true);
        spawn_local(async move {
            if let Err(e) = auth.refresh_profile().await {
                tracing::warn!(error = %e, "could not refresh registration status");
            }
            let _ = set_checking.try_set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="card bg-base-100 shadow max-w-md">
                <div class="card-body text-center">
                    <h1 class="card-title justify-center">{page_title(PageId::TeacherPending)}</h1>
                    {move || match status() {
                        RegistrationStatus::Rejected => view! {
                            <p class="text-error">"Your application was not approved. Contact support for details."</p>
                        }.into_any(),
                        _ => view! {
                            <p>"An administrator is reviewing your application. You will get access to the teacher area once it is approved."</p>
                        }.into_any(),
                    }}
                    <button class="btn btn-primary mt-4" disabled=move || checking.get() on:click=on_check>
                        "Check again"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let user = use_auth().user();

    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-warning">"403"</h1>
                <p class="text-xl mt-4">"You don't have access to this page"</p>
                {move || user.get().map(|u| view! {
                    <Link to=role_home(u.role) class="btn btn-primary mt-6">"Back to your dashboard"</Link>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
                <Link to=auth.href(PageId::Home) class="btn btn-ghost mt-6">"Go home"</Link>
            </div>
        </div>
    }
}

/// Content pages that are routed but not built out.
#[component]
pub fn PlaceholderPage(page: PageId, params: Params) -> impl IntoView {
    let mut params: Vec<_> = params.into_iter().collect();
    params.sort();

    view! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold">{page_title(page)}</h1>
            {params
                .into_iter()
                .map(|(name, value)| view! {
                    <span class="badge badge-outline mr-2">{name} ": " {value}</span>
                })
                .collect_view()}
        </div>
    }
}
