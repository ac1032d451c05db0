use iced::{
    Element, Length, Task,
    widget::{button, column, pick_list, row, text, text_input},
};

use crate::form::{RecommendationForm, ValidationError};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};
use crate::models::{Goal, UserInput};

/// Intake form. Validation errors are rendered inline under the submit
/// button instead of blocking the user.
#[derive(Debug, Clone, Default)]
pub struct FormPageScreen {
    form: RecommendationForm,
    selected_goal: Option<Goal>,
    error: Option<ValidationError>,
}

#[derive(Debug, Clone)]
pub enum FormPageMessage {
    EdadChanged(String),
    PesoChanged(String),
    AlturaChanged(String),
    DiasChanged(String),
    ObjetivoSelected(Goal),
    Submit,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Submitted(UserInput),
}

impl Screen for FormPageScreen {
    type Message = FormPageMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = column![
            text("Solicita tu rutina").size(32),
            row![
                text("Edad").width(Length::Fixed(180.0)),
                text_input("Ej: 30", &self.form.edad).on_input(|value| {
                    ScreenMessage::ScreenMessage(FormPageMessage::EdadChanged(value))
                }),
            ]
            .spacing(10),
            row![
                text("Peso (kg)").width(Length::Fixed(180.0)),
                text_input("Ej: 70", &self.form.peso).on_input(|value| {
                    ScreenMessage::ScreenMessage(FormPageMessage::PesoChanged(value))
                }),
            ]
            .spacing(10),
            row![
                text("Altura (m)").width(Length::Fixed(180.0)),
                text_input("Ej: 1.75", &self.form.altura).on_input(|value| {
                    ScreenMessage::ScreenMessage(FormPageMessage::AlturaChanged(value))
                }),
            ]
            .spacing(10),
            row![
                text("Días disponibles").width(Length::Fixed(180.0)),
                text_input("Ej: 4", &self.form.dias_disponibles).on_input(|value| {
                    ScreenMessage::ScreenMessage(FormPageMessage::DiasChanged(value))
                }),
            ]
            .spacing(10),
            row![
                text("Objetivo").width(Length::Fixed(180.0)),
                pick_list(Goal::ALL, self.selected_goal, |goal| {
                    ScreenMessage::ScreenMessage(FormPageMessage::ObjetivoSelected(goal))
                }),
            ]
            .spacing(10),
            button("Obtener recomendación")
                .on_press(ScreenMessage::ScreenMessage(FormPageMessage::Submit)),
        ]
        .spacing(20)
        .padding(20);

        if let Some(error) = &self.error {
            content = content.push(text(error.message()));
        }

        content.into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            FormPageMessage::EdadChanged(value) => {
                self.form.edad = value;
                Task::none()
            }
            FormPageMessage::PesoChanged(value) => {
                self.form.peso = value;
                Task::none()
            }
            FormPageMessage::AlturaChanged(value) => {
                self.form.altura = value;
                Task::none()
            }
            FormPageMessage::DiasChanged(value) => {
                self.form.dias_disponibles = value;
                Task::none()
            }
            FormPageMessage::ObjetivoSelected(goal) => {
                self.selected_goal = Some(goal);
                self.form.objetivo = goal.as_str().to_string();
                Task::none()
            }
            FormPageMessage::Submit => match self.form.validate() {
                Ok(input) => {
                    self.error = None;
                    Task::done(ScreenMessage::ParentMessage(ParentMessage::Submitted(input)))
                }
                Err(error) => {
                    self.error = Some(error);
                    Task::none()
                }
            },
        }
    }
}
