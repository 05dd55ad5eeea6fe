//! Slide-in form bound to the selected profile.
//!
//! There is no draft state: every keystroke is reported to the parent as an
//! [`Action::Edit`] and written straight into the store. The only widget state
//! kept here is the description editor's cursor and buffer, which always
//! mirrors the stored description.

use iced::{
    Alignment::Center,
    Element,
    Length::Fill,
    widget::{
        Column, button, column, container, pick_list, row, rule, scrollable, space, text,
        text_editor, text_input,
    },
};
use roster_lib::{Field, Gender, MaritalStatus, ProfileRecord};
use strum::IntoEnumIterator;

use crate::icons::icon;

const PANEL_WIDTH: f32 = 512.0;
const DESCRIPTION_HEIGHT: f32 = 96.0;

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    DescriptionEdited(text_editor::Action),
    SavePressed,
    ClosePressed,
}

/// Action used for communicating with the parent component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Edit { field: Field, value: String },
    Submit,
    Close,
}

#[derive(Default)]
pub struct EditForm {
    description: text_editor::Content,
}

impl EditForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a newly selected [`ProfileRecord`] into the form.
    pub fn load(&mut self, profile: &ProfileRecord) {
        self.description = text_editor::Content::with_text(profile.description());
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::FieldChanged(field, value) => Action::Edit { field, value },
            Message::DescriptionEdited(action) => {
                let is_edit = action.is_edit();
                self.description.perform(action);

                if is_edit {
                    Action::Edit {
                        field: Field::Description,
                        value: self.description_text(),
                    }
                } else {
                    // Cursor movement and selection
                    Action::None
                }
            }
            Message::SavePressed => Action::Submit,
            Message::ClosePressed => Action::Close,
        }
    }

    fn description_text(&self) -> String {
        let mut text = self.description.text();
        // The editor terminates its buffer with a newline
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }

    /// Render the form for `profile`, which the caller resolves once per render.
    pub fn view<'a>(&'a self, profile: &'a ProfileRecord) -> Element<'a, Message> {
        let header = row![
            text("Edit Profile").size(20),
            space::horizontal(),
            button(icon("close"))
                .style(button::text)
                .on_press(Message::ClosePressed),
        ]
        .align_y(Center)
        .padding(16);

        let form = column![
            Column::with_children(Field::iter().map(|field| self.field_input(profile, field)))
                .spacing(16),
            button(text("Save Changes").width(Fill).center())
                .width(Fill)
                .padding(12)
                .on_press(Message::SavePressed),
        ]
        .spacing(24)
        .padding(24);

        container(column![header, rule::horizontal(1), scrollable(form)])
            .width(PANEL_WIDTH)
            .height(Fill)
            .style(container::rounded_box)
            .into()
    }

    fn field_input<'a>(&'a self, profile: &'a ProfileRecord, field: Field) -> Element<'a, Message> {
        let input: Element<'a, Message> = match field {
            Field::Description => text_editor(&self.description)
                .placeholder(placeholder(field))
                .on_action(Message::DescriptionEdited)
                .height(DESCRIPTION_HEIGHT)
                .padding(8)
                .into(),
            // Stored text outside the option set shows as no selection
            Field::Gender => pick_list(
                Gender::iter().collect::<Vec<_>>(),
                profile.gender_option(),
                |gender| Message::FieldChanged(Field::Gender, gender.to_string()),
            )
            .width(Fill)
            .into(),
            Field::MaritalStatus => pick_list(
                MaritalStatus::iter().collect::<Vec<_>>(),
                profile.marital_status_option(),
                |status| Message::FieldChanged(Field::MaritalStatus, status.to_string()),
            )
            .width(Fill)
            .into(),
            _ => text_input(placeholder(field), profile.value(field))
                .on_input(move |value| Message::FieldChanged(field, value))
                .padding(8)
                .into(),
        };

        column![text(field.label()).size(14), input]
            .spacing(4)
            .into()
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Image => "https://...",
        Field::Dob => "YYYY-MM-DD",
        _ => "...",
    }
}

#[cfg(test)]
mod test {
    use iced::widget::text_editor::{self, Edit, Motion};
    use roster_lib::{Field, ProfileId, ProfileRecord};

    use super::{Action, EditForm, Message};

    fn form(description: &str) -> EditForm {
        let mut form = EditForm::new();
        form.load(&ProfileRecord::new(ProfileId::new(1)).with(Field::Description, description));
        form
    }

    #[test]
    fn test_field_change_becomes_edit() {
        let mut form = EditForm::new();

        assert_eq!(
            form.update(Message::FieldChanged(Field::Career, "Chef".into())),
            Action::Edit {
                field: Field::Career,
                value: "Chef".into()
            }
        );
    }

    #[test]
    fn test_save_and_close() {
        let mut form = EditForm::new();

        assert_eq!(form.update(Message::SavePressed), Action::Submit);
        assert_eq!(form.update(Message::ClosePressed), Action::Close);
    }

    #[test]
    fn test_description_accepts_line_breaks() {
        let mut form = form("Loves Rust.");

        assert_eq!(
            form.update(Message::DescriptionEdited(text_editor::Action::Move(
                Motion::DocumentEnd
            ))),
            Action::None
        );
        form.update(Message::DescriptionEdited(text_editor::Action::Edit(
            Edit::Enter,
        )));

        assert_eq!(
            form.update(Message::DescriptionEdited(text_editor::Action::Edit(
                Edit::Insert('!')
            ))),
            Action::Edit {
                field: Field::Description,
                value: "Loves Rust.\n!".into()
            }
        );
    }

    #[test]
    fn test_load_replaces_description() {
        let mut form = form("First");
        form.load(&ProfileRecord::new(ProfileId::new(2)).with(Field::Description, "Second"));

        form.update(Message::DescriptionEdited(text_editor::Action::Move(
            Motion::DocumentEnd,
        )));

        assert_eq!(
            form.update(Message::DescriptionEdited(text_editor::Action::Edit(
                Edit::Insert('.')
            ))),
            Action::Edit {
                field: Field::Description,
                value: "Second.".into()
            }
        );
    }
}
