use serde::{Deserialize, Serialize};

/// T-shirt size as stored on a helper registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shirt {
    #[serde(rename = "XS")]
    Xs,
    #[serde(rename = "S")]
    S,
    #[serde(rename = "M")]
    M,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "XXL")]
    Xxl,
    #[serde(rename = "3XL")]
    Xxxl,
    #[serde(rename = "4XL")]
    Xxxxl,
    #[serde(rename = "XS_GIRLY")]
    XsGirly,
    #[serde(rename = "S_GIRLY")]
    SGirly,
    #[serde(rename = "M_GIRLY")]
    MGirly,
    #[serde(rename = "L_GIRLY")]
    LGirly,
    #[serde(rename = "XL_GIRLY")]
    XlGirly,
}

impl Shirt {
    pub fn label(&self) -> &'static str {
        match self {
            Shirt::Xs => "XS",
            Shirt::S => "S",
            Shirt::M => "M",
            Shirt::L => "L",
            Shirt::Xl => "XL",
            Shirt::Xxl => "XXL",
            Shirt::Xxxl => "3XL",
            Shirt::Xxxxl => "4XL",
            Shirt::XsGirly => "XS (girly)",
            Shirt::SGirly => "S (girly)",
            Shirt::MGirly => "M (girly)",
            Shirt::LGirly => "L (girly)",
            Shirt::XlGirly => "XL (girly)",
        }
    }
}

/// Nutrition preference of a helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrition {
    #[default]
    NoPreference,
    Vegetarian,
    Vegan,
    Other,
}

impl Nutrition {
    pub const ALL: [Nutrition; 4] = [
        Nutrition::NoPreference,
        Nutrition::Vegetarian,
        Nutrition::Vegan,
        Nutrition::Other,
    ];

    /// Short label used in table cells.
    pub fn short(&self) -> &'static str {
        match self {
            Nutrition::NoPreference => "no pref.",
            Nutrition::Vegetarian => "vegetarian",
            Nutrition::Vegan => "vegan",
            Nutrition::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Nutrition::NoPreference => "No preference",
            Nutrition::Vegetarian => "Vegetarian",
            Nutrition::Vegan => "Vegan",
            Nutrition::Other => "Other (see comment)",
        }
    }
}

/// State of the food handling instruction (infection protection) of a helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodHandling {
    /// Holds a valid certificate.
    Valid,
    /// Needs an instruction before the shift.
    Needed,
    /// Will hand in the certificate later.
    Upload,
}

impl FoodHandling {
    pub fn short(&self) -> &'static str {
        match self {
            FoodHandling::Valid => "valid",
            FoodHandling::Needed => "needed",
            FoodHandling::Upload => "upload",
        }
    }
}
