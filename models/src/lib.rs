use serde::{Deserialize, Serialize};

/// Inclusive lower bound of the supported batch volume in liters.
pub const MIN_BATCH_LITERS: f64 = 5.0;

/// Inclusive upper bound of the supported batch volume in liters.
pub const MAX_BATCH_LITERS: f64 = 70.0;

/// Catalog of beer styles as stored in the static recipes file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Catalog {
    pub beers: Vec<BeerStyle>,
}

/// One beer style template with per-liter amounts and brewing steps.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct BeerStyle {
    pub name: String,
    pub ingredients: Ingredients,
    pub brewing_instructions: Vec<Instruction>,
}

/// Per-liter ingredient lists of a style.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Ingredients {
    pub malts: Vec<Malt>,
    pub hops: Vec<Hop>,
    #[serde(default)]
    pub yeast: Option<String>,
    #[serde(default)]
    pub spices: Option<Vec<Spice>>,
    /// Liters of water per liter of finished batch.
    pub water_ratio: f64,
}

/// Malt bill entry, amount in kg per liter of batch.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Malt {
    pub name: String,
    pub amount_per_liter: f64,
}

/// Hop addition with its boil timing, amount in kg per liter of batch.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Hop {
    pub name: String,
    pub amount_per_liter: f64,
    pub timing: String,
}

/// Spice addition with its timing, amount in kg per liter of batch.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Spice {
    pub name: String,
    pub amount_per_liter: f64,
    pub timing: String,
}

/// Single numbered brewing step.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Instruction {
    pub step: u32,
    pub description: String,
}

/// Absolute ingredient amounts derived for one generated batch.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledRecipe {
    pub name: String,
    pub batch_liters: f64,
    pub ingredients: ScaledIngredients,
    pub instructions: Vec<Instruction>,
}

/// Ingredient lists of a scaled recipe. `spices` is empty rather than
/// optional so the views can always iterate it.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledIngredients {
    pub malts: Vec<ScaledMalt>,
    pub hops: Vec<ScaledAddition>,
    pub yeast: String,
    pub spices: Vec<ScaledAddition>,
    pub water_liters: f64,
}

/// Malt bill entry scaled to the batch, amount in kg.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledMalt {
    pub name: String,
    pub amount: f64,
}

/// Hop or spice addition scaled to the batch, amount in kg.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledAddition {
    pub name: String,
    pub amount: f64,
    pub timing: String,
}

/// True if `liters` lies within the supported batch range.
pub fn valid_batch_volume(liters: f64) -> bool {
    (MIN_BATCH_LITERS..=MAX_BATCH_LITERS).contains(&liters)
}

/// Round to two decimal places, half away from zero (`f64::round` semantics).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Catalog {
    /// Names of all styles, sorted for the selector.
    pub fn style_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.beers.iter().map(|beer| beer.name.clone()).collect();
        names.sort();
        names
    }

    /// Look up a style by its exact display name.
    pub fn find(&self, name: &str) -> Option<&BeerStyle> {
        self.beers.iter().find(|beer| beer.name == name)
    }
}

impl BeerStyle {
    /// Scale the per-liter template to absolute amounts for a `liters` batch.
    ///
    /// Pure and deterministic. Every amount is rounded to two decimal places,
    /// half away from zero. A missing yeast becomes `"Not specified"`, missing
    /// spices an empty list.
    pub fn scale(&self, liters: f64) -> ScaledRecipe {
        let malts = self
            .ingredients
            .malts
            .iter()
            .map(|malt| ScaledMalt {
                name: malt.name.clone(),
                amount: round2(malt.amount_per_liter * liters),
            })
            .collect();

        let hops = self
            .ingredients
            .hops
            .iter()
            .map(|hop| ScaledAddition {
                name: hop.name.clone(),
                amount: round2(hop.amount_per_liter * liters),
                timing: hop.timing.clone(),
            })
            .collect();

        let spices = self
            .ingredients
            .spices
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|spice| ScaledAddition {
                name: spice.name.clone(),
                amount: round2(spice.amount_per_liter * liters),
                timing: spice.timing.clone(),
            })
            .collect();

        ScaledRecipe {
            name: self.name.clone(),
            batch_liters: liters,
            ingredients: ScaledIngredients {
                malts,
                hops,
                yeast: self
                    .ingredients
                    .yeast
                    .clone()
                    .unwrap_or_else(|| "Not specified".to_string()),
                spices,
                water_liters: round2(self.ingredients.water_ratio * liters),
            },
            instructions: self.brewing_instructions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pale_ale() -> BeerStyle {
        BeerStyle {
            name: "Test Pale Ale".to_string(),
            ingredients: Ingredients {
                malts: vec![Malt {
                    name: "Pale Malt".to_string(),
                    amount_per_liter: 0.05,
                }],
                hops: vec![Hop {
                    name: "Cascade".to_string(),
                    amount_per_liter: 0.002,
                    timing: "60 min".to_string(),
                }],
                yeast: Some("Safale US-05".to_string()),
                spices: None,
                water_ratio: 0.9,
            },
            brewing_instructions: vec![Instruction {
                step: 1,
                description: "Mash at 67C".to_string(),
            }],
        }
    }

    #[test]
    fn scales_amounts_per_liter() {
        let recipe = pale_ale().scale(20.0);

        assert_eq!(recipe.name, "Test Pale Ale");
        assert_eq!(recipe.batch_liters, 20.0);
        assert_eq!(recipe.ingredients.malts.len(), 1);
        assert_eq!(recipe.ingredients.malts[0].name, "Pale Malt");
        assert_eq!(recipe.ingredients.malts[0].amount, 1.0);
        assert_eq!(recipe.ingredients.hops[0].name, "Cascade");
        assert_eq!(recipe.ingredients.hops[0].amount, 0.04);
        assert_eq!(recipe.ingredients.hops[0].timing, "60 min");
        assert_eq!(recipe.ingredients.water_liters, 18.0);
    }

    #[test]
    fn scaling_is_deterministic() {
        let style = pale_ale();

        assert_eq!(style.scale(33.5), style.scale(33.5));
    }

    #[test]
    fn water_scales_linearly_within_rounding() {
        let mut style = pale_ale();
        style.ingredients.water_ratio = 1.333;

        let once = style.scale(10.0).ingredients.water_liters;
        let twice = style.scale(20.0).ingredients.water_liters;

        assert!((twice - 2.0 * once).abs() <= 0.02);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let mut style = pale_ale();
        style.ingredients.malts[0].amount_per_liter = 0.125;

        // 0.125 * 5 = 0.625, which banker's rounding would turn into 0.62.
        assert_eq!(style.scale(5.0).ingredients.malts[0].amount, 0.63);
    }

    #[test]
    fn missing_spices_scale_to_empty_list() {
        let recipe = pale_ale().scale(20.0);

        assert!(recipe.ingredients.spices.is_empty());
    }

    #[test]
    fn spices_are_scaled_when_present() {
        let mut style = pale_ale();
        style.ingredients.spices = Some(vec![Spice {
            name: "Coriander".to_string(),
            amount_per_liter: 0.0008,
            timing: "5 min".to_string(),
        }]);

        let recipe = style.scale(25.0);

        assert_eq!(recipe.ingredients.spices.len(), 1);
        assert_eq!(recipe.ingredients.spices[0].name, "Coriander");
        assert_eq!(recipe.ingredients.spices[0].amount, 0.02);
        assert_eq!(recipe.ingredients.spices[0].timing, "5 min");
    }

    #[test]
    fn missing_yeast_falls_back_to_not_specified() {
        let mut style = pale_ale();
        style.ingredients.yeast = None;

        assert_eq!(style.scale(20.0).ingredients.yeast, "Not specified");
    }

    #[test]
    fn instructions_carry_over_in_order() {
        let mut style = pale_ale();
        style.brewing_instructions = vec![
            Instruction {
                step: 1,
                description: "Heat water to 67C".to_string(),
            },
            Instruction {
                step: 2,
                description: "Add malts".to_string(),
            },
            Instruction {
                step: 3,
                description: "Sparge".to_string(),
            },
        ];

        let recipe = style.scale(20.0);

        let steps: Vec<u32> = recipe.instructions.iter().map(|i| i.step).collect();
        assert_eq!(steps, vec![1, 2, 3]);
        assert_eq!(recipe.instructions[1].description, "Add malts");
    }

    #[test]
    fn style_names_are_sorted() {
        let catalog = Catalog {
            beers: vec![
                BeerStyle {
                    name: "Porter".to_string(),
                    ..BeerStyle::default()
                },
                BeerStyle {
                    name: "Altbier".to_string(),
                    ..BeerStyle::default()
                },
                BeerStyle {
                    name: "Munich Helles".to_string(),
                    ..BeerStyle::default()
                },
            ],
        };

        assert_eq!(catalog.style_names(), vec!["Altbier", "Munich Helles", "Porter"]);
    }

    #[test]
    fn find_matches_exact_names_only() {
        let catalog = Catalog {
            beers: vec![pale_ale()],
        };

        assert!(catalog.find("Test Pale Ale").is_some());
        assert!(catalog.find("test pale ale").is_none());
        assert!(catalog.find("Porter").is_none());
    }

    #[test]
    fn batch_volume_bounds_are_inclusive() {
        assert!(valid_batch_volume(MIN_BATCH_LITERS));
        assert!(valid_batch_volume(MAX_BATCH_LITERS));
        assert!(valid_batch_volume(20.0));
        assert!(!valid_batch_volume(4.99));
        assert!(!valid_batch_volume(70.01));
        assert!(!valid_batch_volume(f64::NAN));
    }

    #[test]
    fn catalog_deserializes_with_optional_fields_absent() {
        let catalog: Catalog = serde_json::from_str(
            r#"{
                "beers": [{
                    "name": "Plain Ale",
                    "ingredients": {
                        "malts": [{ "name": "Pale Malt", "amount_per_liter": 0.2 }],
                        "hops": [{ "name": "Fuggle", "amount_per_liter": 0.001, "timing": "60 min" }],
                        "water_ratio": 1.2
                    },
                    "brewing_instructions": [{ "step": 1, "description": "Mash" }]
                }]
            }"#,
        )
        .expect("catalog parses");

        let style = catalog.find("Plain Ale").expect("style present");
        assert!(style.ingredients.yeast.is_none());
        assert!(style.ingredients.spices.is_none());

        let recipe = style.scale(10.0);
        assert_eq!(recipe.ingredients.yeast, "Not specified");
        assert!(recipe.ingredients.spices.is_empty());
        assert_eq!(recipe.ingredients.water_liters, 12.0);
    }
}
