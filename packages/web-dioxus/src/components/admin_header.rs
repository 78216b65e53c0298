//! Admin header: search, notifications, profile menu and logout

use std::rc::Rc;

use dioxus::prelude::*;
use partner_core::header::{HeaderCommand, HeaderController, HeaderEvent};
use partner_core::{timer, LayoutState};

use crate::auth::use_auth;
use crate::routes::Route;
use super::LogoutProgress;

#[derive(Props, Clone, PartialEq)]
pub struct AdminHeaderProps {
    /// Clears the session and routes to login
    pub on_logout: EventHandler<()>,
}

/// Fixed admin header
#[component]
pub fn AdminHeader(props: AdminHeaderProps) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let mut layout = use_context::<Signal<LayoutState>>();
    let header = use_signal(HeaderController::default);
    let on_logout = props.on_logout;

    // Regions used to tell inside from outside pointer presses
    let mut menu_region = use_signal(|| None::<Rc<MountedData>>);
    let mut notifications_region = use_signal(|| None::<Rc<MountedData>>);

    let dispatch = move |event: HeaderEvent| {
        let mut controller = header;
        let command = controller.write().decide(&event);
        match command {
            Some(HeaderCommand::StartLogoutDelay(delay)) => {
                // Scoped to the header: dropped if the header unmounts first
                spawn(async move {
                    let mut controller = header;
                    let command = timer::after_delay(delay, move || {
                        controller.write().decide(&HeaderEvent::LogoutDelayElapsed)
                    })
                    .await;
                    if command == Some(HeaderCommand::InvokeLogout) {
                        on_logout.call(());
                    }
                });
            }
            Some(HeaderCommand::Navigate(path)) => {
                navigator.push(Route::from(path));
            }
            Some(HeaderCommand::InvokeLogout) | None => {}
        }
    };

    #[cfg(feature = "web")]
    {
        use crate::hooks::use_document_listener;
        use partner_core::header::Panel;
        use wasm_bindgen::JsCast;

        use_document_listener("mousedown", move |event| {
            let inside = panel_under(
                &event,
                [
                    (Panel::Menu, menu_region),
                    (Panel::Notifications, notifications_region),
                ],
            );
            dispatch(HeaderEvent::PointerDown { inside });
        });

        use_document_listener("keydown", move |event| {
            let is_escape = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if is_escape {
                dispatch(HeaderEvent::EscapePressed);
            }
        });
    }

    let state = header.read().clone();
    let header_left = layout.read().header_offset().left_class();
    let query = state.query().to_string();
    let credential = auth.credential();
    let display_name = credential
        .as_ref()
        .map_or("Admin User", |c| c.display_name())
        .to_string();
    let email = credential
        .as_ref()
        .map_or("admin@example.com", |c| c.email())
        .to_string();

    rsx! {
        header {
            class: "fixed top-0 right-0 h-20 md:h-24 w-full z-[900] bg-gradient-to-r from-orange-600 via-orange-500 to-amber-500 shadow-xl flex items-center justify-between text-white px-4 sm:px-6 md:px-8 transition-all duration-300 {header_left}",

            // Mobile sidebar button
            button {
                class: "lg:hidden p-2.5 bg-white/20 border border-white/30 rounded-xl shadow-md hover:bg-white/30",
                aria_label: "Open sidebar",
                onclick: move |_| layout.write().open_mobile(),
                "\u{2630}"
            }

            // Branding
            h1 {
                class: "font-bold text-xl sm:text-2xl md:text-3xl tracking-wide",
                "Autism ABA Partner"
            }

            // Search bar
            form {
                class: "hidden md:flex items-center bg-white/20 rounded-xl px-3 py-2 border border-white/30",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    dispatch(HeaderEvent::SearchSubmitted);
                },
                input {
                    r#type: "text",
                    placeholder: "Search...",
                    value: "{query}",
                    oninput: move |e| dispatch(HeaderEvent::QueryChanged(e.value())),
                    class: "bg-transparent text-white placeholder-orange-100 outline-none w-48 lg:w-64"
                }
                button {
                    r#type: "submit",
                    class: "ml-2 text-white hover:text-orange-200",
                    aria_label: "Search",
                    "\u{1F50D}"
                }
            }

            // Right side actions
            div {
                class: "flex items-center gap-4",

                // Notifications
                div {
                    class: "relative",
                    onmounted: move |e| notifications_region.set(Some(e.data())),
                    button {
                        class: "relative p-2 rounded-full hover:bg-white/20",
                        aria_label: "Notifications",
                        aria_expanded: state.notifications_open(),
                        onclick: move |_| dispatch(HeaderEvent::NotificationsToggled),
                        "\u{1F514}"
                        if state.has_unread() {
                            span { class: "absolute top-0 right-0 h-2 w-2 bg-red-500 rounded-full" }
                        }
                    }

                    if state.notifications_open() {
                        div {
                            class: "absolute right-0 mt-2 w-80 bg-white rounded-xl shadow-lg overflow-hidden z-20",
                            div {
                                class: "px-4 py-3 border-b border-gray-200 text-gray-700 text-sm font-semibold",
                                "Notifications"
                            }
                            div {
                                class: "max-h-96 overflow-y-auto",
                                if state.notifications().is_empty() {
                                    div { class: "px-4 py-3 text-gray-500 text-sm", "No new notifications" }
                                }
                                for notification in state.notifications().iter() {
                                    div {
                                        key: "{notification.id}",
                                        class: if notification.read {
                                            "px-4 py-3 border-b border-gray-100 text-gray-700 text-sm"
                                        } else {
                                            "px-4 py-3 border-b border-gray-100 text-gray-700 text-sm bg-blue-50"
                                        },
                                        "{notification.message}"
                                    }
                                }
                            }
                        }
                    }
                }

                // Desktop logout
                button {
                    class: "hidden md:flex items-center gap-2 bg-white/20 px-4 py-2 rounded-xl border border-white/30 hover:bg-white/30",
                    onclick: move |_| dispatch(HeaderEvent::LogoutRequested),
                    span { class: "font-semibold", "Logout" }
                }

                // Profile menu
                div {
                    class: "relative",
                    onmounted: move |e| menu_region.set(Some(e.data())),
                    button {
                        class: "flex items-center text-white hover:bg-white/20 rounded-full p-1",
                        aria_haspopup: "true",
                        aria_expanded: state.menu_open(),
                        onclick: move |_| dispatch(HeaderEvent::MenuToggled),
                        span { class: "text-3xl", "\u{1F464}" }
                    }

                    if state.menu_open() {
                        div {
                            class: "absolute right-0 mt-2 w-48 bg-white rounded-xl shadow-lg overflow-hidden z-20",
                            div {
                                class: "px-4 py-3 border-b border-gray-200 text-gray-700 text-sm",
                                div { class: "font-semibold", "{display_name}" }
                                div { class: "text-gray-500", "{email}" }
                            }
                            button {
                                class: "w-full text-left px-4 py-2 text-gray-700 hover:bg-gray-100 text-sm",
                                "Profile Settings"
                            }
                            // Mobile logout
                            button {
                                class: "w-full flex md:hidden items-center text-red-600 font-medium hover:bg-red-50 px-4 py-2 text-sm",
                                onclick: move |_| dispatch(HeaderEvent::LogoutRequested),
                                "Logout"
                            }
                        }
                    }
                }
            }

            if state.logging_out() {
                LogoutProgress {}
            }

            // Logout confirmation
            if state.modal_open() {
                div {
                    class: "fixed inset-0 bg-black/30 backdrop-blur-sm flex items-center justify-center z-[999]",
                    onclick: move |_| dispatch(HeaderEvent::BackdropClicked),
                    div {
                        class: "bg-white rounded-2xl shadow-xl p-6 w-80 text-center animate-fadeIn",
                        tabindex: "-1",
                        onmounted: move |e| async move {
                            let _ = e.set_focus(true).await;
                        },
                        onclick: move |e| e.stop_propagation(),

                        h2 { class: "text-lg font-semibold mb-3 text-gray-800", "Confirm Logout" }
                        p { class: "text-gray-600 mb-4", "Are you sure you want to log out?" }

                        div {
                            class: "flex items-center justify-center mb-4",
                            input {
                                r#type: "checkbox",
                                id: "dontAsk",
                                checked: state.dont_ask(),
                                onchange: move |_| dispatch(HeaderEvent::DontAskToggled),
                                class: "mr-2 h-4 w-4"
                            }
                            label {
                                r#for: "dontAsk",
                                class: "text-sm text-gray-600",
                                "Don't ask me again"
                            }
                        }

                        div {
                            class: "flex justify-between gap-3",
                            button {
                                class: "flex-1 px-4 py-2 rounded-lg bg-gray-200 text-gray-700 hover:bg-gray-300",
                                onclick: move |_| dispatch(HeaderEvent::LogoutCancelled),
                                "Cancel"
                            }
                            button {
                                class: "flex-1 px-4 py-2 rounded-lg bg-red-600 text-white hover:bg-red-700",
                                onclick: move |_| dispatch(HeaderEvent::LogoutConfirmed),
                                "Logout"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Which panel region, if any, contains the event target
#[cfg(feature = "web")]
fn panel_under(
    event: &web_sys::Event,
    regions: [(partner_core::header::Panel, Signal<Option<Rc<MountedData>>>); 2],
) -> Option<partner_core::header::Panel> {
    use wasm_bindgen::JsCast;

    let target = event.target()?.dyn_into::<web_sys::Node>().ok()?;
    regions.into_iter().find_map(|(panel, region)| {
        let region = region.peek();
        let element = region.as_deref()?.downcast::<web_sys::Element>()?;
        element.contains(Some(&target)).then_some(panel)
    })
}
