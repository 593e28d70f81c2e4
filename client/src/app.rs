//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::app_layout::{AppLayout, LayoutKind};
use crate::components::guards::{RedirectIfSignedIn, RequireAdmin, RequireAuth};
use crate::components::redirect_trailing_slash::RedirectTrailingSlash;
use crate::components::toast_host::ToastHost;
use crate::pages::admin::{
    assign_volunteers::AssignVolunteersPage, create_event::CreateEventPage, dashboard::AdminDashboardPage,
    edit_event::EditEventPage, emergency::EmergencyPage, events::AdminEventsPage,
};
use crate::pages::volunteer::{
    dashboard::VolunteerDashboardPage, events::VolunteerEventsPage, first_aid_guide::FirstAidGuidePage,
    profile::ProfilePage,
};
use crate::pages::{home::HomePage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::state::{auth::AuthState, toast::ToastState};

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
/// Provides the auth and toast contexts, asks the identity provider for the
/// current session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let session = match crate::net::identity::load_session().await {
            Ok(session) => session,
            Err(e) => {
                log::warn!("session lookup failed: {e}");
                None
            }
        };
        auth.update(|a| a.set_session(session));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/pagbantay.css"/>
        <Title text="Pagbantay"/>

        <Router>
            <RedirectTrailingSlash/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RedirectIfSignedIn><HomePage/></RedirectIfSignedIn> }
                />
                <Route
                    path=StaticSegment("sign-in")
                    view=|| view! { <RedirectIfSignedIn><SignInPage/></RedirectIfSignedIn> }
                />
                <Route
                    path=StaticSegment("sign-up")
                    view=|| view! { <RedirectIfSignedIn><SignUpPage/></RedirectIfSignedIn> }
                />
                <ParentRoute
                    path=StaticSegment("volunteer")
                    view=|| view! { <RequireAuth><AppLayout kind=LayoutKind::Volunteer/></RequireAuth> }
                >
                    <Route path=StaticSegment("") view=VolunteerDashboardPage/>
                    <Route path=StaticSegment("events") view=VolunteerEventsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("guide") view=FirstAidGuidePage/>
                </ParentRoute>
                <ParentRoute
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <RequireAdmin>
                                    <AppLayout kind=LayoutKind::Admin/>
                                </RequireAdmin>
                            </RequireAuth>
                        }
                    }
                >
                    <Route path=StaticSegment("") view=AdminDashboardPage/>
                    <Route path=StaticSegment("events") view=AdminEventsPage/>
                    <Route path=(StaticSegment("events"), StaticSegment("create")) view=CreateEventPage/>
                    <Route
                        path=(StaticSegment("events"), StaticSegment("edit"), ParamSegment("id"))
                        view=EditEventPage
                    />
                    <Route path=StaticSegment("assign-volunteers") view=AssignVolunteersPage/>
                    <Route path=StaticSegment("emergency") view=EmergencyPage/>
                </ParentRoute>
            </Routes>
            <ToastHost/>
        </Router>
    }
}
