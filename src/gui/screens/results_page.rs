use iced::{
    Element, Length, Task,
    widget::{button, column, container, scrollable, text},
};
use iced_widget::container::bordered_box;

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};
use crate::models::Recommendation;

/// Result of the last submission: either a recommendation or the engine's
/// user-facing failure message.
#[derive(Debug, Clone)]
pub struct ResultsPageScreen {
    outcome: Result<Recommendation, String>,
}

impl ResultsPageScreen {
    pub fn new(outcome: Result<Recommendation, String>) -> Self {
        Self { outcome }
    }
}

#[derive(Debug, Clone)]
pub enum ResultsPageMessage {
    NewQuery,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    NewQuery,
}

impl Screen for ResultsPageScreen {
    type Message = ResultsPageMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = match &self.outcome {
            Ok(recommendation) => {
                let routine = &recommendation.routine;
                let profile = &recommendation.profile;

                let mut details = column![
                    text("Tu rutina recomendada").size(32),
                    text(format!(
                        "{} (compatibilidad: {:.1})",
                        routine.name, recommendation.score
                    ))
                    .size(24),
                    text(routine.description.as_str()),
                    text(format!(
                        "Nivel: {} | Objetivo: {} | Intensidad: {}",
                        routine.level, routine.goal, routine.intensity
                    )),
                    text(format!(
                        "Duración: {} min, {} días por semana",
                        routine.duration_minutes, routine.days_per_week
                    )),
                    text(format!(
                        "Calorías estimadas por sesión: {}",
                        recommendation.estimated_calories
                    )),
                    text(format!(
                        "IMC: {:.1} ({})",
                        profile.bmi,
                        profile.bmi_class.label()
                    )),
                    text(format!("Seguridad: {}", recommendation.safety.reason)),
                    container(text(recommendation.explanation.as_str()))
                        .style(bordered_box)
                        .padding(10)
                        .width(Length::Fill),
                ]
                .spacing(10);

                if !profile.precautions.is_empty() {
                    details = details.push(text("Precauciones:"));
                    for precaution in &profile.precautions {
                        details = details.push(text(format!("⚠ {}", precaution)));
                    }
                }

                if !recommendation.alternatives.is_empty() {
                    details = details.push(text("Rutinas alternativas:"));
                    for (routine, score) in &recommendation.alternatives {
                        details = details.push(text(format!(
                            "• {} (compatibilidad: {:.1})",
                            routine.name, score
                        )));
                    }
                }

                details
            }
            Err(message) => column![
                text("Sin recomendación").size(32),
                text(message.as_str()),
            ]
            .spacing(10),
        };

        content = content
            .push(
                button("Nueva consulta")
                    .on_press(ScreenMessage::ScreenMessage(ResultsPageMessage::NewQuery)),
            )
            .padding(20);

        scrollable(content).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ResultsPageMessage::NewQuery => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::NewQuery))
            }
        }
    }
}
