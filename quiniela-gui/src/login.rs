use std::sync::Arc;

use iced::{Alignment, Length, Task};

use quiniela_ui::{
    component::{button, card, form, modal, text::*},
    theme,
    widget::*,
};

use crate::{
    gui::Route,
    services::auth::{AuthError, AuthService, UserRecord},
    validate::{Constraint, FieldRules},
};

const USERNAME_RULES: FieldRules = FieldRules::new(&[Constraint::Required]);
const PASSWORD_RULES: FieldRules = FieldRules::new(&[Constraint::Required]);

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    LoggedIn(Result<UserRecord, AuthError>),
    Redirect(Route),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    UsernameEdited(String),
    PasswordEdited(String),
    Submit,
    CloseNotification,
    GoToRegister,
}

pub struct LoginPanel {
    auth: Arc<dyn AuthService>,

    username: form::Value<String>,
    password: form::Value<String>,

    processing: bool,
    // Shown in a blocking modal until dismissed.
    error: Option<AuthError>,
}

impl LoginPanel {
    pub fn new(auth: Arc<dyn AuthService>) -> (Self, Task<Message>) {
        // An already authenticated user has nothing to do here.
        let task = if auth.is_authenticated() {
            redirect(Route::Dashboard)
        } else {
            Task::none()
        };
        (
            Self {
                auth,
                username: form::Value::default(),
                password: form::Value::default(),
                processing: false,
                error: None,
            },
            task,
        )
    }

    fn can_submit(&self) -> bool {
        USERNAME_RULES.check(&self.username.value) && PASSWORD_RULES.check(&self.password.value)
    }

    /// Applies a settled submission and returns where to navigate, if
    /// anywhere. A result arriving while no submission is in flight is
    /// dropped.
    fn on_settled(&mut self, res: Result<UserRecord, AuthError>) -> Option<Route> {
        if !self.processing {
            return None;
        }
        self.processing = false;
        match res {
            Ok(user) => {
                self.auth.store_user_data(user);
                Some(Route::Dashboard)
            }
            Err(e) => {
                tracing::warn!("login failed: {}", e);
                self.error = Some(e);
                None
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::UsernameEdited(value)) => {
                self.username.valid = USERNAME_RULES.check(&value);
                self.username.value = value;
                self.username.touched = true;
                Task::none()
            }
            Message::View(ViewMessage::PasswordEdited(value)) => {
                self.password.valid = PASSWORD_RULES.check(&value);
                self.password.value = value;
                self.password.touched = true;
                Task::none()
            }
            Message::View(ViewMessage::Submit) => {
                if self.processing {
                    return Task::none();
                }
                if !self.can_submit() {
                    // Surface what is missing on every field at once.
                    self.username.touched = true;
                    self.username.valid = USERNAME_RULES.check(&self.username.value);
                    self.password.touched = true;
                    self.password.valid = PASSWORD_RULES.check(&self.password.value);
                    return Task::none();
                }
                self.processing = true;
                self.error = None;
                let auth = self.auth.clone();
                let username = self.username.value.clone();
                let password = self.password.value.clone();
                Task::perform(
                    async move { auth.authenticate(&username, &password).await },
                    Message::LoggedIn,
                )
            }
            Message::LoggedIn(res) => match self.on_settled(res) {
                Some(route) => redirect(route),
                None => Task::none(),
            },
            Message::View(ViewMessage::CloseNotification) => {
                self.error = None;
                Task::none()
            }
            // GoToRegister and Redirect are handled by the upper level
            // wrapping the LoginPanel state.
            _ => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        let content = Into::<Element<ViewMessage>>::into(
            Container::new(
                Column::new()
                    .align_x(Alignment::Center)
                    .spacing(20)
                    .width(Length::Fill)
                    .push(h2("Sign in"))
                    .push(
                        card::simple(
                            Column::new()
                                .spacing(20)
                                .push(
                                    form::Form::new_trimmed(
                                        "Username",
                                        &self.username,
                                        ViewMessage::UsernameEdited,
                                    )
                                    .warning("A username is required")
                                    .size(P1_SIZE)
                                    .padding(10),
                                )
                                .push(
                                    form::Form::new("Password", &self.password, |msg| {
                                        ViewMessage::PasswordEdited(msg)
                                    })
                                    .secure()
                                    .on_submit(ViewMessage::Submit)
                                    .warning("A password is required")
                                    .size(P1_SIZE)
                                    .padding(10),
                                )
                                .push(
                                    button::primary(if self.processing {
                                        "Signing in..."
                                    } else {
                                        "Sign in"
                                    })
                                    .width(Length::Fill)
                                    .on_press_maybe(
                                        if self.processing || !self.can_submit() {
                                            None
                                        } else {
                                            Some(ViewMessage::Submit)
                                        },
                                    ),
                                ),
                        )
                        .max_width(500),
                    )
                    .push(
                        button::link("No account yet? Register")
                            .width(Length::Fixed(300.0))
                            .on_press_maybe(if self.processing {
                                None
                            } else {
                                Some(ViewMessage::GoToRegister)
                            }),
                    ),
            )
            .padding(50)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        )
        .map(Message::View);

        if let Some(error) = &self.error {
            let notification = card::modal(
                Column::new()
                    .spacing(20)
                    .max_width(400)
                    .push(h4_bold("Login failed"))
                    .push(text(error.user_message()).style(theme::text::error))
                    .push(
                        button::primary("OK")
                            .width(Length::Fixed(100.0))
                            .on_press(Message::View(ViewMessage::CloseNotification)),
                    ),
            );
            modal::modal(
                content,
                notification,
                Some(Message::View(ViewMessage::CloseNotification)),
            )
        } else {
            content
        }
    }
}

pub fn redirect(route: Route) -> Task<Message> {
    Task::perform(async move { route }, Message::Redirect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::StubAuthClient;
    use std::time::Duration;

    fn panel() -> LoginPanel {
        let auth = Arc::new(StubAuthClient::with_latency(Duration::from_millis(0)));
        LoginPanel::new(auth).0
    }

    fn edit(panel: &mut LoginPanel, username: &str, password: &str) {
        let _ = panel.update(Message::View(ViewMessage::UsernameEdited(
            username.to_string(),
        )));
        let _ = panel.update(Message::View(ViewMessage::PasswordEdited(
            password.to_string(),
        )));
    }

    fn admin_user() -> UserRecord {
        UserRecord {
            id: 1,
            name: "Administrador".to_string(),
            username: "admin".to_string(),
            email: "admin@system.com".to_string(),
            is_admin: true,
        }
    }

    #[tokio::test]
    async fn submit_is_gated_on_both_fields() {
        let mut panel = panel();
        assert!(!panel.can_submit());

        edit(&mut panel, "admin", "");
        assert!(!panel.can_submit());

        edit(&mut panel, "admin", "admin123");
        assert!(panel.can_submit());
    }

    #[tokio::test]
    async fn submit_with_empty_fields_marks_them_touched() {
        let mut panel = panel();
        let _ = panel.update(Message::View(ViewMessage::Submit));
        assert!(!panel.processing);
        assert!(panel.username.touched);
        assert!(!panel.username.valid);
        assert!(panel.password.touched);
        assert!(!panel.password.valid);
    }

    #[tokio::test]
    async fn submission_toggles_processing() {
        let mut panel = panel();
        edit(&mut panel, "admin", "admin123");

        let _ = panel.update(Message::View(ViewMessage::Submit));
        assert!(panel.processing);

        // A second submit while one is in flight is a no-op.
        let _ = panel.update(Message::View(ViewMessage::Submit));
        assert!(panel.processing);

        let _ = panel.update(Message::LoggedIn(Ok(admin_user())));
        assert!(!panel.processing);
    }

    #[tokio::test]
    async fn failed_login_keeps_the_panel_and_sets_the_error() {
        let mut panel = panel();
        edit(&mut panel, "admin", "wrong");
        let _ = panel.update(Message::View(ViewMessage::Submit));
        let _ = panel.update(Message::LoggedIn(Err(AuthError::InvalidCredentials)));
        assert!(!panel.processing);
        assert_eq!(panel.error, Some(AuthError::InvalidCredentials));
        assert!(!panel.auth.is_authenticated());

        let _ = panel.update(Message::View(ViewMessage::CloseNotification));
        assert_eq!(panel.error, None);
    }

    #[tokio::test]
    async fn successful_login_redirects_to_the_dashboard() {
        let mut panel = panel();
        edit(&mut panel, "admin", "admin123");
        let _ = panel.update(Message::View(ViewMessage::Submit));
        assert_eq!(panel.on_settled(Ok(admin_user())), Some(Route::Dashboard));
        assert!(!panel.processing);
    }

    #[tokio::test]
    async fn failed_login_yields_no_redirect() {
        let mut panel = panel();
        edit(&mut panel, "admin", "wrong");
        let _ = panel.update(Message::View(ViewMessage::Submit));
        assert_eq!(
            panel.on_settled(Err(AuthError::InvalidCredentials)),
            None
        );
        assert_eq!(panel.error, Some(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn stale_settle_yields_no_redirect() {
        let mut panel = panel();
        assert_eq!(panel.on_settled(Ok(admin_user())), None);
        assert!(!panel.auth.is_authenticated());
    }

    #[tokio::test]
    async fn successful_login_stores_the_session() {
        let mut panel = panel();
        edit(&mut panel, "admin", "admin123");
        let _ = panel.update(Message::View(ViewMessage::Submit));
        let _ = panel.update(Message::LoggedIn(Ok(admin_user())));
        assert!(panel.auth.is_authenticated());
        assert_eq!(panel.auth.user_data().map(|u| u.id), Some(1));
    }

    #[tokio::test]
    async fn stale_settle_is_ignored() {
        let mut panel = panel();
        // No submission in flight, a late result must not alter anything.
        let _ = panel.update(Message::LoggedIn(Ok(admin_user())));
        assert!(!panel.processing);
        assert!(!panel.auth.is_authenticated());
        assert_eq!(panel.error, None);
    }

    #[tokio::test]
    async fn already_authenticated_mount_redirects() {
        let auth = Arc::new(StubAuthClient::with_latency(Duration::from_millis(0)));
        auth.store_user_data(admin_user());
        // The task produced here carries the redirect, the panel itself
        // stays inert.
        let (panel, _task) = LoginPanel::new(auth);
        assert!(!panel.processing);
    }
}
