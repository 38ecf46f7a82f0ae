//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{app_header::AppHeader, nav_menu::NavMenu};
use crate::pages::{
    appointment_detail::AppointmentDetailPage, appointments::AppointmentListPage,
    assistant::AssistantPage, create_appointment::CreateAppointmentPage,
    create_doctor::CreateDoctorPage, create_patient::CreatePatientPage, dashboard::DashboardPage,
    doctors::DoctorListPage, login::LoginPage, patient_detail::PatientDetailPage,
    patients::PatientListPage, search::SearchPatientsPage, signup::SignupPage,
    update_appointment::UpdateAppointmentPage,
};
use crate::session::SessionHandle;
use crate::session::guard::RequireAuth;
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session handle and shared state contexts, renders the nav
/// shell, and maps every known path to its page. Protected paths are each
/// wrapped individually in [`RequireAuth`]; detail views and the assistant
/// stay open, matching the backend's access policy for those routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionHandle::browser());
    provide_context(RwSignal::new(AuthState::default()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/medisync-console.css"/>
        <Title text="MediSync Console"/>

        <Router>
            <AppHeader/>
            <div class="app-layout">
                <NavMenu/>
                <main class="app-content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("signup") view=SignupPage/>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("patients")
                            view=|| view! { <RequireAuth><PatientListPage/></RequireAuth> }
                        />
                        <Route
                            path=(StaticSegment("patients"), ParamSegment("id"))
                            view=PatientDetailPage
                        />
                        <Route
                            path=StaticSegment("doctors")
                            view=|| view! { <RequireAuth><DoctorListPage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("appointments")
                            view=|| view! { <RequireAuth><AppointmentListPage/></RequireAuth> }
                        />
                        <Route
                            path=(StaticSegment("appointments"), ParamSegment("id"))
                            view=AppointmentDetailPage
                        />
                        <Route
                            path=(
                                StaticSegment("appointments"),
                                ParamSegment("id"),
                                StaticSegment("edit"),
                            )
                            view=|| view! { <RequireAuth><UpdateAppointmentPage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("create-patient")
                            view=|| view! { <RequireAuth><CreatePatientPage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("create-doctor")
                            view=|| view! { <RequireAuth><CreateDoctorPage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("create-appointment")
                            view=|| view! { <RequireAuth><CreateAppointmentPage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("search")
                            view=|| view! { <RequireAuth><SearchPatientsPage/></RequireAuth> }
                        />
                        <Route path=StaticSegment("assistant") view=AssistantPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
