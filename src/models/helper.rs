use super::choices::{FoodHandling, Nutrition, Shirt};
use serde::{Deserialize, Serialize};

pub type HelperId = u32;

/// A registered helper. Shifts and jobs refer to helpers by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Helper {
    pub id: HelperId,
    pub firstname: String,
    pub surname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub shirt: Option<Shirt>,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub infection_instruction: Option<FoodHandling>,
    #[serde(default)]
    pub comment: String,
}

impl Helper {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.surname)
    }

    pub fn shirt_display(&self) -> &'static str {
        self.shirt.map(|s| s.label()).unwrap_or("")
    }

    pub fn nutrition_short(&self) -> &'static str {
        self.nutrition.short()
    }

    pub fn infection_instruction_short(&self) -> &'static str {
        self.infection_instruction.map(|f| f.short()).unwrap_or("")
    }
}
