use std::sync::Arc;

use iced::{
    Color, Element,
    Length::{self, Fill},
    Task, Theme,
    alignment::Horizontal,
    application,
    widget::{column, container, mouse_area, opaque, stack, text},
};
use parking_lot::RwLock;
use roster_lib::Session;
use tracing::{Level, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        edit_form::{self, EditForm},
        profile_gallery::{self, ProfileGallery},
    },
    config::{Cfg, GuiConfig},
};

pub mod components;
pub mod config;
pub mod icons;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    ProfileGallery(profile_gallery::Message),
    EditForm(edit_form::Message),
}

struct App {
    title: String,
    theme: Theme,
    session: Session,
    // Components
    profile_gallery: ProfileGallery,
    edit_form: EditForm,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let cfg = Arc::new(RwLock::new(GuiConfig::load()));

        (Self::with_config(cfg, Session::seeded()), Task::none())
    }

    fn with_config(cfg: Cfg, session: Session) -> Self {
        let theme = cfg.read().theme();

        Self {
            title: "Team Profiles".into(),
            theme,
            session,
            profile_gallery: ProfileGallery::new(cfg),
            edit_form: EditForm::new(),
        }
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProfileGallery(profile_gallery::Message::ViewProfilePressed(id)) => {
                if let Err(e) = self.session.select(id) {
                    warn!("Can't open profile: {e}");
                } else if let Some(profile) = self.session.selected() {
                    self.edit_form.load(profile);
                }
            }
            Message::EditForm(message) => match self.edit_form.update(message) {
                edit_form::Action::None => {}
                edit_form::Action::Edit { field, value } => {
                    self.session.edit(field, value);
                }
                edit_form::Action::Submit => self.session.submit(),
                edit_form::Action::Close => self.session.close(),
            },
        }

        Task::none()
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            container(text(&self.title).size(30))
                .center_x(Fill)
                .padding([24, 0]),
            self.profile_gallery
                .view(&self.session)
                .map(Message::ProfileGallery),
        ]
        .height(Fill);

        // Resolve the selected profile once for the whole form
        match self.session.selected() {
            Some(profile) => slide_in(
                content,
                self.edit_form.view(profile).map(Message::EditForm),
                None,
            ),
            None => content.into(),
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

/// Lay `panel` over `base`, docked to the right edge above a dimmed backdrop.
pub fn slide_in<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    panel: impl Into<Element<'a, Message>>,
    on_click_outside: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mouse_area = mouse_area(
        container(opaque(panel))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.5,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }),
    );

    stack![
        base.into(),
        opaque(if let Some(msg) = on_click_outside {
            mouse_area.on_press(msg)
        } else {
            mouse_area
        })
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use iced::widget::text_editor::{self, Edit, Motion};
    use parking_lot::RwLock;
    use roster_lib::{Field, ProfileId, Session};

    use super::{App, Message};
    use crate::{
        components::{edit_form, profile_gallery},
        config::GuiConfig,
    };

    fn app() -> App {
        App::with_config(Arc::new(RwLock::new(GuiConfig::default())), Session::seeded())
    }

    fn open(app: &mut App, id: u64) {
        let _ = app.update(Message::ProfileGallery(
            profile_gallery::Message::ViewProfilePressed(ProfileId::new(id)),
        ));
    }

    fn type_into(app: &mut App, field: Field, value: &str) {
        let _ = app.update(Message::EditForm(edit_form::Message::FieldChanged(
            field,
            value.into(),
        )));
    }

    #[test]
    fn test_open_edit_save() {
        let mut app = app();

        open(&mut app, 2);
        assert_eq!(app.session.current(), Some(ProfileId::new(2)));

        type_into(&mut app, Field::Career, "Principal Engineer");
        let _ = app.update(Message::EditForm(edit_form::Message::SavePressed));

        assert_eq!(app.session.current(), None);
        let careers: Vec<&str> = app
            .session
            .profiles()
            .iter()
            .map(|p| p.career().as_str())
            .collect();
        assert_eq!(
            careers,
            ["UI/UX Designer", "Principal Engineer", "Marketing Manager"]
        );
    }

    #[test]
    fn test_close_keeps_edits() {
        let mut app = app();

        open(&mut app, 1);
        type_into(&mut app, Field::Gender, "Other");
        let _ = app.update(Message::EditForm(edit_form::Message::ClosePressed));

        assert_eq!(app.session.current(), None);
        assert_eq!(
            app.session.store().get(ProfileId::new(1)).unwrap().gender(),
            "Other"
        );
    }

    #[test]
    fn test_multiline_description_written_through() {
        let mut app = app();

        open(&mut app, 3);
        for action in [
            text_editor::Action::Move(Motion::DocumentEnd),
            text_editor::Action::Edit(Edit::Enter),
            text_editor::Action::Edit(Edit::Insert('P')),
            text_editor::Action::Edit(Edit::Insert('S')),
        ] {
            let _ = app.update(Message::EditForm(edit_form::Message::DescriptionEdited(
                action,
            )));
        }

        let description = app
            .session
            .store()
            .get(ProfileId::new(3))
            .unwrap()
            .description()
            .clone();
        assert!(description.starts_with("Digital marketing specialist"));
        assert!(description.ends_with("results-oriented.\nPS"));
    }

    #[test]
    fn test_open_unknown_profile_ignored() {
        let mut app = app();

        open(&mut app, 999);

        assert_eq!(app.session.current(), None);
    }
}
