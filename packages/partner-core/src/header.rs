//! Admin header state machine.
//!
//! [`HeaderController`] owns every transient piece of header UI: the profile
//! menu, the notifications panel, the logout confirmation and the search box.
//! The view feeds it [`HeaderEvent`]s and executes the [`HeaderCommand`] it
//! decides on, if any.
//!
//! ```text
//!            LogoutRequested               LogoutConfirmed
//!   Idle ─────────────────────► Confirming ───────────────► LoggingOut
//!    ▲  │                           │                           │
//!    │  │ LogoutRequested           │ Cancel / Escape /         │ LogoutDelayElapsed
//!    │  │ (don't ask again)         │ Backdrop                  │ => InvokeLogout
//!    │  └───────────────────────────┼──────────────────────────►│
//!    └──────────────────────────────┴───────────────────────────┘
//! ```
//!
//! Nothing cancels `LoggingOut`.

use std::time::Duration;

use tracing::debug;

use crate::config::LOGOUT_DELAY;
use crate::routing::AdminPath;

/// Header panels dismissed by outside pointer presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Menu,
    Notifications,
}

/// Progress of the logout sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoutPhase {
    #[default]
    Idle,
    Confirming,
    LoggingOut,
}

/// Something that happened in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEvent {
    MenuToggled,
    NotificationsToggled,
    /// Pointer pressed anywhere in the document; `inside` is the panel
    /// region containing the target, if any.
    PointerDown { inside: Option<Panel> },
    EscapePressed,
    LogoutRequested,
    LogoutCancelled,
    BackdropClicked,
    LogoutConfirmed,
    DontAskToggled,
    LogoutDelayElapsed,
    QueryChanged(String),
    SearchSubmitted,
}

/// Side effect requested by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderCommand {
    /// Wait out the cosmetic delay, then send `LogoutDelayElapsed`
    StartLogoutDelay(Duration),
    /// Clear the session and route to login
    InvokeLogout,
    Navigate(AdminPath),
}

/// A header notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub read: bool,
}

impl Notification {
    fn new(id: u32, message: &str, read: bool) -> Self {
        Self {
            id,
            message: message.to_string(),
            read,
        }
    }
}

/// Static notification list shown until a notifications feed exists
pub fn demo_notifications() -> Vec<Notification> {
    vec![
        Notification::new(1, "New contact form submission", false),
        Notification::new(2, "System update available", false),
        Notification::new(3, "Weekly report is ready", true),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderController {
    menu_open: bool,
    notifications_open: bool,
    logout: LogoutPhase,
    dont_ask: bool,
    query: String,
    notifications: Vec<Notification>,
}

impl Default for HeaderController {
    fn default() -> Self {
        Self::new(demo_notifications())
    }
}

impl HeaderController {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            menu_open: false,
            notifications_open: false,
            logout: LogoutPhase::Idle,
            dont_ask: false,
            query: String::new(),
            notifications,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn notifications_open(&self) -> bool {
        self.notifications_open
    }

    pub fn modal_open(&self) -> bool {
        self.logout == LogoutPhase::Confirming
    }

    /// Whether the logout progress indicator is showing
    pub fn logging_out(&self) -> bool {
        self.logout == LogoutPhase::LoggingOut
    }

    pub fn logout_phase(&self) -> LogoutPhase {
        self.logout
    }

    pub fn dont_ask(&self) -> bool {
        self.dont_ask
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn has_unread(&self) -> bool {
        self.unread_count() > 0
    }

    /// Apply an event and decide on at most one command
    pub fn decide(&mut self, event: &HeaderEvent) -> Option<HeaderCommand> {
        match event {
            HeaderEvent::MenuToggled => {
                self.menu_open = !self.menu_open;
                None
            }
            HeaderEvent::NotificationsToggled => {
                self.notifications_open = !self.notifications_open;
                None
            }
            HeaderEvent::PointerDown { inside } => {
                if *inside != Some(Panel::Menu) {
                    self.menu_open = false;
                }
                if *inside != Some(Panel::Notifications) {
                    self.notifications_open = false;
                }
                None
            }
            HeaderEvent::EscapePressed => {
                self.menu_open = false;
                self.notifications_open = false;
                self.dismiss_modal();
                None
            }
            HeaderEvent::LogoutCancelled | HeaderEvent::BackdropClicked => {
                self.dismiss_modal();
                None
            }
            HeaderEvent::LogoutRequested => match self.logout {
                LogoutPhase::Idle if self.dont_ask => Some(self.begin_logout()),
                LogoutPhase::Idle => {
                    self.logout = LogoutPhase::Confirming;
                    None
                }
                LogoutPhase::Confirming | LogoutPhase::LoggingOut => None,
            },
            HeaderEvent::LogoutConfirmed => match self.logout {
                LogoutPhase::Confirming => Some(self.begin_logout()),
                _ => None,
            },
            HeaderEvent::DontAskToggled => {
                self.dont_ask = !self.dont_ask;
                None
            }
            HeaderEvent::LogoutDelayElapsed => match self.logout {
                LogoutPhase::LoggingOut => {
                    self.logout = LogoutPhase::Idle;
                    Some(HeaderCommand::InvokeLogout)
                }
                _ => None,
            },
            HeaderEvent::QueryChanged(query) => {
                self.query = query.clone();
                None
            }
            HeaderEvent::SearchSubmitted => {
                let trimmed = self.query.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let target = AdminPath::search(trimmed);
                self.query.clear();
                debug!(target = %target, "Header search submitted");
                Some(HeaderCommand::Navigate(target))
            }
        }
    }

    fn dismiss_modal(&mut self) {
        if self.logout == LogoutPhase::Confirming {
            self.logout = LogoutPhase::Idle;
        }
    }

    fn begin_logout(&mut self) -> HeaderCommand {
        self.logout = LogoutPhase::LoggingOut;
        HeaderCommand::StartLogoutDelay(LOGOUT_DELAY)
    }
}
