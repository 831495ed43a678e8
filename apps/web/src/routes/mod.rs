mod admin;
mod dashboard;
mod forgot_password;
mod login;
mod not_found;
mod register;
mod reset_password;
mod unauthorized;
mod verify_email;

pub(crate) use admin::AdminPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use unauthorized::UnauthorizedPage;
pub(crate) use verify_email::VerifyEmailPage;

use crate::features::auth::ProtectedRoute;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=ProtectedDashboard />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/forgot-password") view=ForgotPasswordPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/verify-email/:token") view=VerifyEmailPage />
            <Route path=path!("/reset-password") view=ResetPasswordPage />
            <Route path=path!("/reset-password/:token") view=ResetPasswordPage />
            <Route path=path!("/admin") view=ProtectedAdmin />
            <Route path=path!("/unauthorized") view=UnauthorizedPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardPage />
        </ProtectedRoute>
    }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! {
        <ProtectedRoute required_role="admin">
            <AdminPage />
        </ProtectedRoute>
    }
}
