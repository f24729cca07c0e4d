//! Ingredient list handling.

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Measuring units offered by the recipe form, identified by their wire codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// No unit, e.g. "3 eggs".
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "tsp")]
    Teaspoon,
    #[serde(rename = "tbsp")]
    Tablespoon,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "c")]
    Cup,
    #[serde(rename = "pt")]
    Pint,
    #[serde(rename = "qt")]
    Quart,
    /// The form's historical gallon code is "g", not grams.
    #[serde(rename = "g")]
    Gallon,
}

impl Unit {
    /// All units in dropdown order.
    pub const ALL: &'static [Unit] = &[
        Unit::None,
        Unit::Teaspoon,
        Unit::Tablespoon,
        Unit::Ounce,
        Unit::Cup,
        Unit::Pint,
        Unit::Quart,
        Unit::Gallon,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Teaspoon => "tsp",
            Unit::Tablespoon => "tbsp",
            Unit::Ounce => "oz",
            Unit::Cup => "c",
            Unit::Pint => "pt",
            Unit::Quart => "qt",
            Unit::Gallon => "g",
        }
    }

    /// Human-readable dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::None => "N/A",
            Unit::Teaspoon => "Teaspoon",
            Unit::Tablespoon => "Tablespoon",
            Unit::Ounce => "Ounce",
            Unit::Cup => "Cup",
            Unit::Pint => "Pint",
            Unit::Quart => "Quart",
            Unit::Gallon => "Gallon",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "" => Some(Unit::None),
            "tsp" => Some(Unit::Teaspoon),
            "tbsp" => Some(Unit::Tablespoon),
            "oz" => Some(Unit::Ounce),
            "c" => Some(Unit::Cup),
            "pt" => Some(Unit::Pint),
            "qt" => Some(Unit::Quart),
            "g" => Some(Unit::Gallon),
            _ => None,
        }
    }
}

/// A single recipe ingredient as entered in the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: Unit,
}

/// Ordered ingredient list with case-insensitive name uniqueness.
///
/// Insertion order is display order; the list is never sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Ingredient>", into = "Vec<Ingredient>")]
pub struct IngredientList(Vec<Ingredient>);

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ingredient. Fails if its name is already present in any
    /// casing, leaving the list unchanged.
    pub fn add(&mut self, ingredient: Ingredient) -> Result<(), DraftError> {
        if self.contains_name(&ingredient.name) {
            return Err(DraftError::DuplicateIngredient(ingredient.name));
        }
        self.0.push(ingredient);
        Ok(())
    }

    /// Remove the ingredient with exactly this name. Absent names are ignored.
    pub fn remove(&mut self, name: &str) {
        self.0.retain(|ingredient| ingredient.name != name);
    }

    fn contains_name(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.0
            .iter()
            .any(|ingredient| ingredient.name.to_lowercase() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Ingredient>> for IngredientList {
    type Error = DraftError;

    fn try_from(ingredients: Vec<Ingredient>) -> Result<Self, Self::Error> {
        let mut list = IngredientList::new();
        for ingredient in ingredients {
            list.add(ingredient)?;
        }
        Ok(list)
    }
}

impl From<IngredientList> for Vec<Ingredient> {
    fn from(list: IngredientList) -> Self {
        list.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, amount: f64) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            amount,
            unit: Unit::None,
        }
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut list = IngredientList::new();
        list.add(ingredient("flour", 2.0)).unwrap();
        list.add(ingredient("butter", 1.0)).unwrap();
        list.add(ingredient("sugar", 0.5)).unwrap();
        let names: Vec<&str> = list.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["flour", "butter", "sugar"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut list = IngredientList::new();
        list.add(ingredient("egg", 2.0)).unwrap();
        let err = list.add(ingredient("egg", 1.0)).unwrap_err();
        assert!(matches!(err, DraftError::DuplicateIngredient(name) if name == "egg"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicate_check_ignores_case() {
        let mut list = IngredientList::new();
        list.add(ingredient("egg", 2.0)).unwrap();
        let err = list.add(ingredient("EGG", 1.0)).unwrap_err();
        assert!(matches!(err, DraftError::DuplicateIngredient(_)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_is_exact_match() {
        let mut list = IngredientList::new();
        list.add(ingredient("egg", 2.0)).unwrap();
        list.remove("EGG");
        assert_eq!(list.len(), 1);
        list.remove("egg");
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut list = IngredientList::new();
        list.add(ingredient("egg", 2.0)).unwrap();
        list.remove("milk");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_unit_codes_round_trip() {
        for &unit in Unit::ALL {
            assert_eq!(Unit::from_code(unit.code()), Some(unit));
        }
        assert_eq!(Unit::from_code("gal"), None);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(Unit::None.label(), "N/A");
        assert_eq!(Unit::Cup.label(), "Cup");
        // Gallon keeps its odd "g" wire code but a readable label.
        assert_eq!(Unit::Gallon.code(), "g");
        assert_eq!(Unit::Gallon.label(), "Gallon");
    }

    #[test]
    fn test_unit_serde_uses_codes() {
        let json = serde_json::to_string(&Unit::Tablespoon).unwrap();
        assert_eq!(json, "\"tbsp\"");
        let unit: Unit = serde_json::from_str("\"g\"").unwrap();
        assert_eq!(unit, Unit::Gallon);
        let unit: Unit = serde_json::from_str("\"\"").unwrap();
        assert_eq!(unit, Unit::None);
    }

    #[test]
    fn test_list_serde_rejects_duplicates() {
        let json = r#"[
            {"name": "egg", "amount": 2.0, "unit": ""},
            {"name": "Egg", "amount": 1.0, "unit": ""}
        ]"#;
        let result: Result<IngredientList, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_serde_round_trip() {
        let mut list = IngredientList::new();
        list.add(Ingredient {
            name: "flour".to_string(),
            amount: 2.5,
            unit: Unit::Cup,
        })
        .unwrap();
        list.add(ingredient("egg", 3.0)).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        let back: IngredientList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
