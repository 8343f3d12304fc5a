use std::sync::Arc;

use iced::{Alignment, Length, Task};

use quiniela_ui::{
    component::{button, card, text::*},
    theme,
    widget::*,
};

use crate::{
    gui::Route,
    services::auth::{AuthService, UserRecord},
};

/// A betting pool game offered to players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost_cents: u64,
}

/// The games on offer. A real deployment would fetch these from the backend.
pub fn catalogue() -> &'static [Game] {
    &[
        Game {
            name: "Quiniela",
            description: "Pick the outcome of fourteen football matches",
            base_cost_cents: 75,
        },
        Game {
            name: "Quinigol",
            description: "Guess the exact score of six matches",
            base_cost_cents: 100,
        },
        Game {
            name: "El Gordo",
            description: "Five numbers and a key number, drawn every Sunday",
            base_cost_cents: 150,
        },
    ]
}

pub fn format_cost(cents: u64) -> String {
    format!("{}.{:02} €", cents / 100, cents % 100)
}

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    Redirect(Route),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    SignOut,
}

pub struct DashboardPanel {
    auth: Arc<dyn AuthService>,
    user: Option<UserRecord>,
}

impl DashboardPanel {
    pub fn new(auth: Arc<dyn AuthService>) -> (Self, Task<Message>) {
        let user = auth.user_data();
        // Without a session there is nothing to show here.
        let task = if user.is_none() {
            redirect(Route::Login)
        } else {
            Task::none()
        };
        (Self { auth, user }, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::SignOut) => {
                if let Some(user) = &self.user {
                    tracing::info!("user '{}' signed out", user.username);
                }
                self.auth.sign_out();
                self.user = None;
                redirect(Route::Login)
            }
            // Redirect is handled by the upper level wrapping the
            // DashboardPanel state.
            Message::Redirect(_) => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        let header = Row::new()
            .align_y(Alignment::Center)
            .spacing(20)
            .push(Container::new(h3("Games")).width(Length::Fill))
            .push_maybe(
                self.user
                    .as_ref()
                    .map(|user| text(format!("Signed in as {}", user.name))),
            )
            .push(
                button::secondary("Sign out")
                    .width(Length::Fixed(150.0))
                    .on_press(Message::View(ViewMessage::SignOut)),
            );

        let mut games = Column::new().spacing(20);
        for game in catalogue() {
            games = games.push(
                card::simple(
                    Row::new()
                        .align_y(Alignment::Center)
                        .spacing(20)
                        .push(
                            Column::new()
                                .spacing(5)
                                .width(Length::Fill)
                                .push(p1_bold(game.name))
                                .push(
                                    p2_regular(game.description).style(theme::text::secondary),
                                ),
                        )
                        .push(p1_medium(format_cost(game.base_cost_cents))),
                )
                .width(Length::Fill),
            );
        }

        Container::new(
            Column::new()
                .spacing(30)
                .max_width(800)
                .push(header)
                .push(games),
        )
        .padding(50)
        .center_x(Length::Fill)
        .into()
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

    fn authenticated_client() -> Arc<StubAuthClient> {
        let auth = Arc::new(StubAuthClient::with_latency(Duration::from_millis(0)));
        auth.store_user_data(UserRecord {
            id: 1,
            name: "Administrador".to_string(),
            username: "admin".to_string(),
            email: "admin@system.com".to_string(),
            is_admin: true,
        });
        auth
    }

    #[test]
    fn cost_formatting() {
        assert_eq!(format_cost(75), "0.75 €");
        assert_eq!(format_cost(100), "1.00 €");
        assert_eq!(format_cost(150), "1.50 €");
    }

    #[test]
    fn mount_reads_the_session() {
        let (panel, _task) = DashboardPanel::new(authenticated_client());
        assert_eq!(panel.user.as_ref().map(|u| u.id), Some(1));
    }

    #[test]
    fn unauthenticated_mount_has_no_user() {
        let auth = Arc::new(StubAuthClient::with_latency(Duration::from_millis(0)));
        let (panel, _task) = DashboardPanel::new(auth);
        assert!(panel.user.is_none());
    }

    #[test]
    fn sign_out_clears_the_session() {
        let auth = authenticated_client();
        let (mut panel, _task) = DashboardPanel::new(auth.clone());
        let _ = panel.update(Message::View(ViewMessage::SignOut));
        assert!(panel.user.is_none());
        assert!(!auth.is_authenticated());
    }
}
