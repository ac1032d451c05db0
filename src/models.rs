use serde::{Deserialize, Serialize};

/// Difficulty level of a routine, and of the user after evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Principiante,
    Intermedio,
    Avanzado,
}

/// Training goal. The catalog and the intake form share this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Peso,
    Musculacion,
    Mantenimiento,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Baja,
    Media,
    Alta,
}

/// BMI classification bands used by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClass {
    BajoPeso,
    Normal,
    Sobrepeso,
    Obesidad,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Principiante, Level::Intermedio, Level::Avanzado];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Principiante => "principiante",
            Level::Intermedio => "intermedio",
            Level::Avanzado => "avanzado",
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "principiante" => Ok(Level::Principiante),
            "intermedio" => Ok(Level::Intermedio),
            "avanzado" => Ok(Level::Avanzado),
            _ => Err(anyhow::anyhow!("Invalid level value: {}", value)),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Peso, Goal::Musculacion, Goal::Mantenimiento];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Peso => "peso",
            Goal::Musculacion => "musculacion",
            Goal::Mantenimiento => "mantenimiento",
        }
    }
}

impl TryFrom<&str> for Goal {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "peso" => Ok(Goal::Peso),
            "musculacion" => Ok(Goal::Musculacion),
            "mantenimiento" => Ok(Goal::Mantenimiento),
            _ => Err(anyhow::anyhow!("Invalid goal value: {}", value)),
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Baja => "baja",
            Intensity::Media => "media",
            Intensity::Alta => "alta",
        }
    }

    /// MET-style factor used for calorie estimation.
    pub fn calorie_factor(&self) -> f64 {
        match self {
            Intensity::Baja => 3.5,
            Intensity::Media => 6.0,
            Intensity::Alta => 8.5,
        }
    }
}

impl TryFrom<&str> for Intensity {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "baja" => Ok(Intensity::Baja),
            "media" => Ok(Intensity::Media),
            "alta" => Ok(Intensity::Alta),
            _ => Err(anyhow::anyhow!("Invalid intensity value: {}", value)),
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BmiClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiClass::BajoPeso => "bajo_peso",
            BmiClass::Normal => "normal",
            BmiClass::Sobrepeso => "sobrepeso",
            BmiClass::Obesidad => "obesidad",
        }
    }

    /// Human-readable Spanish label for result rendering.
    pub fn label(&self) -> &'static str {
        match self {
            BmiClass::BajoPeso => "Bajo Peso",
            BmiClass::Normal => "Normal",
            BmiClass::Sobrepeso => "Sobrepeso",
            BmiClass::Obesidad => "Obesidad",
        }
    }
}

impl TryFrom<&str> for BmiClass {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "bajo_peso" => Ok(BmiClass::BajoPeso),
            "normal" => Ok(BmiClass::Normal),
            "sobrepeso" => Ok(BmiClass::Sobrepeso),
            "obesidad" => Ok(BmiClass::Obesidad),
            _ => Err(anyhow::anyhow!("Invalid BMI class value: {}", value)),
        }
    }
}

impl std::fmt::Display for BmiClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of a routine's weekly plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub day: String,
    pub activity: String,
}

impl PlanEntry {
    pub fn new(day: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            activity: activity.into(),
        }
    }
}

/// A training routine from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routine {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub level: Level,
    pub goal: Goal,
    pub days_per_week: u8,
    pub duration_minutes: u32,
    pub intensity: Intensity,
    pub exercises: Vec<String>,
    pub weekly_plan: Vec<PlanEntry>,
    pub estimated_calories: u32,
    pub active: bool,
}

/// Validated profile values as read from the intake form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserInput {
    pub age: u32,
    pub weight_kg: f64,
    pub height_m: f64,
    pub available_days: u8,
    pub goal: Goal,
}

impl UserInput {
    /// Body mass index: weight over height squared.
    pub fn bmi(&self) -> f64 {
        self.weight_kg / (self.height_m * self.height_m)
    }
}

/// Profile after the rule engine has run: BMI, classification and the
/// recommended level/goal/intensity the scorer matches routines against.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedProfile {
    pub input: UserInput,
    pub bmi: f64,
    pub bmi_class: BmiClass,
    pub level: Level,
    pub goal: Goal,
    pub intensity: Intensity,
    pub precautions: Vec<String>,
}

/// Safety verdict for a routine/profile pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyVerdict {
    pub safe: bool,
    pub reason: String,
}

/// Full output of the recommendation pipeline.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub routine: Routine,
    pub score: f64,
    pub safety: SafetyVerdict,
    pub explanation: String,
    pub alternatives: Vec<(Routine, f64)>,
    pub estimated_calories: u32,
    pub profile: EvaluatedProfile,
}

/// Aggregate figures for a catalog listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    pub avg_duration_minutes: f64,
    pub avg_days_per_week: f64,
}
