//! Admin login page

use dioxus::prelude::*;
use partner_core::Credential;
use serde_json::json;

use crate::auth::use_auth;
use crate::routes::Route;

/// Credential stored for a submitted username and password.
///
/// Both fields are trimmed; `None` if either is empty.
fn credential_for(username: &str, password: &str) -> Option<Credential> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return None;
    }
    Credential::new(json!({ "username": username, "password": password }))
}

/// Admin login page
#[component]
pub fn AdminLogin() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let Some(credential) = credential_for(&username(), &password()) else {
            error.set(Some("Please enter your username and password".to_string()));
            return;
        };

        match auth.login(credential) {
            Ok(()) => {
                error.set(None);
                navigator.push(Route::AdminDashboard {});
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login could not be persisted");
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Admin Login" }
                    p { class: "text-gray-600 text-sm", "Autism ABA Partner" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Username"
                        }
                        input {
                            r#type: "text",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                            autocomplete: "username",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-orange-500",
                        }
                    }
                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            autocomplete: "current-password",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-orange-500",
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-orange-600 text-white py-2 px-4 rounded-md hover:bg-orange-700 focus:outline-none focus:ring-2 focus:ring-orange-500 focus:ring-offset-2",
                        "Sign In"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_requires_both_fields() {
        assert!(credential_for("", "secret").is_none());
        assert!(credential_for("   ", "secret").is_none());
        assert!(credential_for("admin", "").is_none());
    }

    #[test]
    fn test_credential_carries_trimmed_username() {
        let credential = credential_for("  admin ", "secret").unwrap();
        assert_eq!(credential.value()["username"], "admin");
        assert_eq!(credential.value()["password"], "secret");
        assert_eq!(credential.display_name(), "admin");
    }
}
