//! Collapsible side menu with active-route highlighting.

#[cfg(test)]
#[path = "nav_menu_test.rs"]
mod nav_menu_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

/// Whether a nav link targeting `path` should highlight for the current
/// location: exact match, or a descendant path one `/` deeper.
pub fn is_active(path: &str, current: &str) -> bool {
    if path == current {
        return true;
    }
    if path == "/" {
        return false;
    }
    current.starts_with(&format!("{path}/"))
}

/// Fixed side menu: Dashboard, record lists, and create shortcuts.
#[component]
pub fn NavMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let collapsed = move || ui.get().nav_collapsed;
    let on_toggle = move |_| ui.update(|state| *state = state.toggled());

    view! {
        <nav class="nav-menu" class:nav-menu--collapsed=collapsed>
            <div class="nav-menu__brand">
                <span class="nav-menu__logo">"MSP"</span>
                <button class="nav-menu__toggle" on:click=on_toggle>
                    {move || if collapsed() { ">" } else { "<" }}
                </button>
            </div>

            <NavItem to="/" label="Dashboard"/>

            <h3 class="nav-menu__section">"Main Menu"</h3>
            <NavItem to="/patients" label="Patients"/>
            <NavItem to="/doctors" label="Doctors"/>
            <NavItem to="/appointments" label="Appointments"/>
            <NavItem to="/search" label="Search Patients"/>

            <h3 class="nav-menu__section">"Create New"</h3>
            <NavItem to="/create-patient" label="Add Patient"/>
            <NavItem to="/create-doctor" label="Add Doctor"/>
            <NavItem to="/create-appointment" label="Add Appointment"/>

            <h3 class="nav-menu__section">"Tools"</h3>
            <NavItem to="/assistant" label="Health Assistant"/>
        </nav>
    }
}

/// One menu link; highlights itself when its target matches the location.
#[component]
fn NavItem(to: &'static str, label: &'static str) -> impl IntoView {
    let location = use_location();
    let active = move || is_active(to, &location.pathname.get());

    view! {
        <A href=to attr:class="nav-item">
            <span class="nav-item__label" class:nav-item--active=active>
                {label}
            </span>
        </A>
    }
}
