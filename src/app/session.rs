//! Sign-in, sign-up and sign-out
//!
//! Login is a client-side lookup of the entered email against the public user
//! list, faithful to the backend's current (password-less) contract.

use super::sync::push_event;
use super::App;
use crate::api::RegisterRequest;
use crate::types::*;
use eframe::egui;
use tracing::info;

impl App {
    pub fn submit_login(&mut self, ctx: &egui::Context) {
        if self.auth_in_flight {
            return;
        }
        let email = self.login_email.trim().to_string();
        if email.is_empty() {
            self.show_message("Login Failed", "Please enter your email address.");
            return;
        }
        self.auth_in_flight = true;

        let api = self.api.clone();
        let events = self.api_events.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            match api.users().await {
                Ok(users) => match users.into_iter().find(|u| u.email == email) {
                    Some(user) => push_event(&events, ApiEvent::SignedIn(user)),
                    None => push_event(
                        &events,
                        ApiEvent::Failed {
                            kind: RequestKind::Login,
                            message: "Invalid email or password.".to_string(),
                        },
                    ),
                },
                Err(_) => push_event(
                    &events,
                    ApiEvent::Failed {
                        kind: RequestKind::Login,
                        message: "Could not verify credentials.".to_string(),
                    },
                ),
            }
            ctx.request_repaint();
        });
    }

    pub fn submit_signup(&mut self, ctx: &egui::Context) {
        if self.auth_in_flight {
            return;
        }
        let request = RegisterRequest {
            username: self.signup_username.trim().to_string(),
            email: self.signup_email.trim().to_string(),
            password: self.signup_password.clone(),
            location: self.signup_location.trim().to_string(),
        };
        if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
            self.show_message("Signup Failed", "Username, email and password are required.");
            return;
        }
        self.auth_in_flight = true;

        let api = self.api.clone();
        let events = self.api_events.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            match api.register(&request).await {
                Ok(user) => push_event(&events, ApiEvent::SignedIn(user)),
                Err(e) => push_event(
                    &events,
                    ApiEvent::Failed {
                        kind: RequestKind::Signup,
                        message: e.to_string(),
                    },
                ),
            }
            ctx.request_repaint();
        });
    }

    pub fn logout(&mut self) {
        info!("Signing out");
        self.current_user = None;
        self.pending_session_user = None;
        self.swaps.clear();
        self.swap_draft = None;
        self.profile_editing = false;
        self.search_query.clear();
        self.page = Page::Login;
        self.save_settings();
    }
}
