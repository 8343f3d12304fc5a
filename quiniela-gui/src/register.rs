use std::sync::Arc;

use iced::{Alignment, Length, Task};

use quiniela_ui::{
    component::{button, card, form, modal, text::*},
    theme,
    widget::*,
};

use crate::{
    gui::Route,
    services::registration::{
        RegistrationError, RegistrationService, SignUpReceipt, SignUpRequest,
    },
    validate::{Constraint, FieldRules},
};

const GIVEN_NAME_RULES: FieldRules =
    FieldRules::new(&[Constraint::Required, Constraint::MinLength(2)]);
const FAMILY_NAME_RULES: FieldRules =
    FieldRules::new(&[Constraint::Required, Constraint::MinLength(2)]);
const EMAIL_RULES: FieldRules = FieldRules::new(&[Constraint::Required, Constraint::Email]);
const PASSWORD_RULES: FieldRules =
    FieldRules::new(&[Constraint::Required, Constraint::MinLength(6)]);

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    Registered(Result<SignUpReceipt, RegistrationError>),
    Redirect(Route),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    GivenNameEdited(String),
    FamilyNameEdited(String),
    EmailEdited(String),
    PasswordEdited(String),
    Submit,
    CloseNotification,
    GoToLogin,
}

pub struct RegisterPanel {
    registration: Arc<dyn RegistrationService>,

    given_name: form::Value<String>,
    family_name: form::Value<String>,
    email: form::Value<String>,
    password: form::Value<String>,

    processing: bool,
    error: Option<RegistrationError>,
}

impl RegisterPanel {
    pub fn new(registration: Arc<dyn RegistrationService>) -> (Self, Task<Message>) {
        (
            Self {
                registration,
                given_name: form::Value::default(),
                family_name: form::Value::default(),
                email: form::Value::default(),
                password: form::Value::default(),
                processing: false,
                error: None,
            },
            Task::none(),
        )
    }

    fn can_submit(&self) -> bool {
        GIVEN_NAME_RULES.check(&self.given_name.value)
            && FAMILY_NAME_RULES.check(&self.family_name.value)
            && EMAIL_RULES.check(&self.email.value)
            && PASSWORD_RULES.check(&self.password.value)
    }

    fn touch_all(&mut self) {
        self.given_name.touched = true;
        self.given_name.valid = GIVEN_NAME_RULES.check(&self.given_name.value);
        self.family_name.touched = true;
        self.family_name.valid = FAMILY_NAME_RULES.check(&self.family_name.value);
        self.email.touched = true;
        self.email.valid = EMAIL_RULES.check(&self.email.value);
        self.password.touched = true;
        self.password.valid = PASSWORD_RULES.check(&self.password.value);
    }

    /// Applies a settled submission and returns where to navigate, if
    /// anywhere. A result arriving while no submission is in flight is
    /// dropped.
    fn on_settled(
        &mut self,
        res: Result<SignUpReceipt, RegistrationError>,
    ) -> Option<Route> {
        if !self.processing {
            return None;
        }
        self.processing = false;
        match res {
            Ok(receipt) => {
                tracing::info!("account requested for '{}'", receipt.email);
                Some(Route::Login)
            }
            Err(e) => {
                tracing::warn!("registration failed: {}", e);
                self.error = Some(e);
                None
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::GivenNameEdited(value)) => {
                self.given_name.valid = GIVEN_NAME_RULES.check(&value);
                self.given_name.value = value;
                self.given_name.touched = true;
                Task::none()
            }
            Message::View(ViewMessage::FamilyNameEdited(value)) => {
                self.family_name.valid = FAMILY_NAME_RULES.check(&value);
                self.family_name.value = value;
                self.family_name.touched = true;
                Task::none()
            }
            Message::View(ViewMessage::EmailEdited(value)) => {
                self.email.valid = EMAIL_RULES.check(&value);
                self.email.value = value;
                self.email.touched = true;
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
                    self.touch_all();
                    return Task::none();
                }
                self.processing = true;
                self.error = None;
                let registration = self.registration.clone();
                let request = SignUpRequest {
                    given_name: self.given_name.value.clone(),
                    family_name: self.family_name.value.clone(),
                    email: self.email.value.clone(),
                    password: self.password.value.clone(),
                };
                Task::perform(
                    async move { registration.register(request).await },
                    Message::Registered,
                )
            }
            Message::Registered(res) => match self.on_settled(res) {
                Some(route) => redirect(route),
                None => Task::none(),
            },
            Message::View(ViewMessage::CloseNotification) => {
                self.error = None;
                Task::none()
            }
            // GoToLogin and Redirect are handled by the upper level wrapping
            // the RegisterPanel state.
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
                    .push(h2("Create an account"))
                    .push(
                        card::simple(
                            Column::new()
                                .spacing(20)
                                .push(
                                    form::Form::new_trimmed(
                                        "First name",
                                        &self.given_name,
                                        ViewMessage::GivenNameEdited,
                                    )
                                    .warning("At least 2 characters are required")
                                    .size(P1_SIZE)
                                    .padding(10),
                                )
                                .push(
                                    form::Form::new_trimmed(
                                        "Last name",
                                        &self.family_name,
                                        ViewMessage::FamilyNameEdited,
                                    )
                                    .warning("At least 2 characters are required")
                                    .size(P1_SIZE)
                                    .padding(10),
                                )
                                .push(
                                    form::Form::new_trimmed(
                                        "Email",
                                        &self.email,
                                        ViewMessage::EmailEdited,
                                    )
                                    .warning("Email is not valid")
                                    .size(P1_SIZE)
                                    .padding(10),
                                )
                                .push(
                                    form::Form::new("Password", &self.password, |msg| {
                                        ViewMessage::PasswordEdited(msg)
                                    })
                                    .secure()
                                    .on_submit(ViewMessage::Submit)
                                    .warning("At least 6 characters are required")
                                    .size(P1_SIZE)
                                    .padding(10),
                                )
                                .push(
                                    button::primary(if self.processing {
                                        "Creating account..."
                                    } else {
                                        "Create account"
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
                        button::link("Already registered? Sign in")
                            .width(Length::Fixed(300.0))
                            .on_press_maybe(if self.processing {
                                None
                            } else {
                                Some(ViewMessage::GoToLogin)
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
                    .push(h4_bold("Registration failed"))
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
    use crate::services::registration::SimulatedRegistration;
    use std::time::Duration;

    fn panel() -> RegisterPanel {
        let registration = Arc::new(SimulatedRegistration::with_delay(Duration::from_millis(0)));
        RegisterPanel::new(registration).0
    }

    fn edit(panel: &mut RegisterPanel, given: &str, family: &str, email: &str, password: &str) {
        let _ = panel.update(Message::View(ViewMessage::GivenNameEdited(
            given.to_string(),
        )));
        let _ = panel.update(Message::View(ViewMessage::FamilyNameEdited(
            family.to_string(),
        )));
        let _ = panel.update(Message::View(ViewMessage::EmailEdited(email.to_string())));
        let _ = panel.update(Message::View(ViewMessage::PasswordEdited(
            password.to_string(),
        )));
    }

    #[tokio::test]
    async fn submit_requires_every_field_to_pass() {
        let mut panel = panel();
        assert!(!panel.can_submit());

        edit(&mut panel, "Ada", "Lovelace", "ada@example.com", "abc12");
        assert!(!panel.can_submit());
        assert!(!panel.password.valid);

        edit(&mut panel, "Ada", "Lovelace", "ada@example.com", "abc123");
        assert!(panel.can_submit());
    }

    #[tokio::test]
    async fn short_names_and_bad_emails_are_rejected() {
        let mut panel = panel();
        edit(&mut panel, "A", "Lovelace", "ada@example", "abc123");
        assert!(!panel.given_name.valid);
        assert!(!panel.email.valid);
        assert!(!panel.can_submit());
    }

    #[tokio::test]
    async fn successful_registration_settles_back_to_idle() {
        let mut panel = panel();
        edit(&mut panel, "Ada", "Lovelace", "ada@example.com", "abc123");

        let _ = panel.update(Message::View(ViewMessage::Submit));
        assert!(panel.processing);

        let _ = panel.update(Message::Registered(Ok(SignUpReceipt {
            email: "ada@example.com".to_string(),
        })));
        assert!(!panel.processing);
        assert_eq!(panel.error, None);
    }

    #[tokio::test]
    async fn successful_registration_redirects_to_login() {
        let mut panel = panel();
        edit(&mut panel, "Ada", "Lovelace", "ada@example.com", "abc123");
        let _ = panel.update(Message::View(ViewMessage::Submit));
        assert_eq!(
            panel.on_settled(Ok(SignUpReceipt {
                email: "ada@example.com".to_string(),
            })),
            Some(Route::Login)
        );
        assert!(!panel.processing);
    }

    #[tokio::test]
    async fn failed_registration_yields_no_redirect() {
        let mut panel = panel();
        edit(&mut panel, "Ada", "Lovelace", "ada@example.com", "abc123");
        let _ = panel.update(Message::View(ViewMessage::Submit));
        assert_eq!(
            panel.on_settled(Err(RegistrationError::Unreachable("timeout".to_string()))),
            None
        );
        assert!(panel.error.is_some());
    }

    #[tokio::test]
    async fn failed_registration_raises_the_notification() {
        let mut panel = panel();
        edit(&mut panel, "Ada", "Lovelace", "ada@example.com", "abc123");
        let _ = panel.update(Message::View(ViewMessage::Submit));
        let _ = panel.update(Message::Registered(Err(RegistrationError::Unreachable(
            "timeout".to_string(),
        ))));
        assert!(!panel.processing);
        assert!(panel.error.is_some());
    }

    #[tokio::test]
    async fn stale_settle_is_ignored() {
        let mut panel = panel();
        let _ = panel.update(Message::Registered(Err(RegistrationError::Unreachable(
            "timeout".to_string(),
        ))));
        assert!(!panel.processing);
        assert_eq!(panel.error, None);
    }
}
