//! Intake form validation.
//!
//! `RecommendationForm` is a raw snapshot of the form fields, read fresh at
//! submit time. Validation checks empties first and then each range in fixed
//! field order, stopping at the first violation. The result is returned to
//! the caller; rendering it is the presentation layer's job.

use crate::models::{Goal, UserInput};

/// Field identifiers of the recommendation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Edad,
    Peso,
    Altura,
    DiasDisponibles,
    Objetivo,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::Edad => "edad",
            Field::Peso => "peso",
            Field::Altura => "altura",
            Field::DiasDisponibles => "dias_disponibles",
            Field::Objetivo => "objetivo",
        }
    }
}

/// First failing validation rule, with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyFields,
    AgeOutOfRange,
    WeightOutOfRange,
    HeightOutOfRange,
    DaysOutOfRange,
    Malformed { field: Field, detail: String },
    InvalidGoal,
}

impl ValidationError {
    /// Field the error is attached to. `EmptyFields` covers the whole form.
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::EmptyFields => None,
            ValidationError::AgeOutOfRange => Some(Field::Edad),
            ValidationError::WeightOutOfRange => Some(Field::Peso),
            ValidationError::HeightOutOfRange => Some(Field::Altura),
            ValidationError::DaysOutOfRange => Some(Field::DiasDisponibles),
            ValidationError::Malformed { field, .. } => Some(*field),
            ValidationError::InvalidGoal => Some(Field::Objetivo),
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationError::EmptyFields => {
                "Por favor, completa todos los campos".to_string()
            }
            ValidationError::AgeOutOfRange => {
                "La edad debe estar entre 15 y 100 años".to_string()
            }
            ValidationError::WeightOutOfRange => {
                "El peso debe estar entre 30 y 300 kg".to_string()
            }
            ValidationError::HeightOutOfRange => {
                "La altura debe estar entre 1.0 y 2.5 metros".to_string()
            }
            ValidationError::DaysOutOfRange => {
                "Los días disponibles deben estar entre 1 y 7".to_string()
            }
            ValidationError::Malformed { detail, .. } => {
                format!("Datos inválidos: {}", detail)
            }
            ValidationError::InvalidGoal => "Objetivo inválido".to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Raw field values as entered by the user. Nothing is cached between
/// validation attempts; callers re-validate the current snapshot each time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationForm {
    pub edad: String,
    pub peso: String,
    pub altura: String,
    pub dias_disponibles: String,
    pub objetivo: String,
}

impl RecommendationForm {
    /// Validate the snapshot: empties first, then each range in field order.
    /// Boundary values are valid. The first violated rule wins.
    pub fn validate(&self) -> Result<UserInput, ValidationError> {
        if self.edad.is_empty()
            || self.peso.is_empty()
            || self.altura.is_empty()
            || self.dias_disponibles.is_empty()
        {
            return Err(ValidationError::EmptyFields);
        }

        let age: u32 = parse_field(Field::Edad, &self.edad)?;
        if !(15..=100).contains(&age) {
            return Err(ValidationError::AgeOutOfRange);
        }

        let weight_kg: f64 = parse_field(Field::Peso, &self.peso)?;
        if !(30.0..=300.0).contains(&weight_kg) {
            return Err(ValidationError::WeightOutOfRange);
        }

        let height_m: f64 = parse_field(Field::Altura, &self.altura)?;
        if !(1.0..=2.5).contains(&height_m) {
            return Err(ValidationError::HeightOutOfRange);
        }

        let available_days: u8 = parse_field(Field::DiasDisponibles, &self.dias_disponibles)?;
        if !(1..=7).contains(&available_days) {
            return Err(ValidationError::DaysOutOfRange);
        }

        let goal =
            Goal::try_from(self.objetivo.as_str()).map_err(|_| ValidationError::InvalidGoal)?;

        Ok(UserInput {
            age,
            weight_kg,
            height_m,
            available_days,
            goal,
        })
    }
}

fn parse_field<T: std::str::FromStr>(field: Field, raw: &str) -> Result<T, ValidationError>
where
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ValidationError::Malformed {
        field,
        detail: e.to_string(),
    })
}
