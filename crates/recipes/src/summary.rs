//! Recipe resolution.
//!
//! A summary flattens a recipe into base-ingredient quantities and an
//! aggregate cook time. Nested recipes are expanded depth-first and each
//! level multiplies its line-item quantities into the levels below.

use std::collections::HashMap;

use serde::Serialize;

use cookbook_core::{DomainError, DomainResult};

use crate::cookbook::Cookbook;
use crate::entry::{Entry, RequiredItem};

/// Flattened view of a recipe.
///
/// `ingredients` holds one line per distinct base ingredient, in the order the
/// depth-first expansion first reached it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub name: String,
    pub cook_time: i64,
    pub ingredients: Vec<RequiredItem>,
}

/// Summarize the recipe called `name`.
///
/// Fails with `NotARecipe` if `name` is missing or names an ingredient, and
/// with `UnresolvableReference` if anything it requires (transitively) is
/// missing or the recipe graph loops back on itself.
pub fn summarize<C>(cookbook: &C, name: &str) -> DomainResult<RecipeSummary>
where
    C: Cookbook + ?Sized,
{
    let recipe = match cookbook.lookup(name) {
        Some(Entry::Recipe(recipe)) => recipe,
        Some(Entry::Ingredient(_)) | None => return Err(DomainError::not_a_recipe(name)),
    };

    let mut resolver = Resolver {
        cookbook,
        totals: Totals::default(),
        path: vec![recipe.name().as_str()],
    };
    let cook_time = resolver.expand_all(recipe.required_items(), 1)?;

    Ok(RecipeSummary {
        name: recipe.name().to_string(),
        cook_time,
        ingredients: resolver.totals.into_items(),
    })
}

/// Aggregated base-ingredient quantities, kept in first-seen order.
#[derive(Debug, Default)]
struct Totals {
    items: Vec<RequiredItem>,
    index: HashMap<String, usize>,
}

impl Totals {
    fn add(&mut self, name: &str, quantity: i64) -> DomainResult<()> {
        match self.index.get(name) {
            Some(&idx) => {
                let line = &mut self.items[idx];
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| overflow(name))?;
            }
            None => {
                self.index.insert(name.to_string(), self.items.len());
                self.items.push(RequiredItem::new(name, quantity));
            }
        }
        Ok(())
    }

    fn into_items(self) -> Vec<RequiredItem> {
        self.items
    }
}

struct Resolver<'a, C: ?Sized> {
    cookbook: &'a C,
    totals: Totals,
    /// Recipes on the current recursion path, outermost first.
    path: Vec<&'a str>,
}

impl<'a, C> Resolver<'a, C>
where
    C: Cookbook + ?Sized,
{
    fn expand_all(&mut self, items: &'a [RequiredItem], multiplier: i64) -> DomainResult<i64> {
        let mut cook_time: i64 = 0;
        for item in items {
            let contributed = self.expand(item, multiplier)?;
            cook_time = cook_time
                .checked_add(contributed)
                .ok_or_else(|| overflow(&item.name))?;
        }
        Ok(cook_time)
    }

    fn expand(&mut self, item: &'a RequiredItem, multiplier: i64) -> DomainResult<i64> {
        let quantity = item
            .quantity
            .checked_mul(multiplier)
            .ok_or_else(|| overflow(&item.name))?;

        let cookbook = self.cookbook;
        match cookbook.lookup(&item.name) {
            None => Err(DomainError::unresolvable(format!(
                "'{}' is not in the cookbook",
                item.name
            ))),
            Some(Entry::Ingredient(ingredient)) => {
                self.totals.add(&item.name, quantity)?;
                let cook_time =
                    i64::try_from(ingredient.cook_time()).map_err(|_| overflow(&item.name))?;
                quantity
                    .checked_mul(cook_time)
                    .ok_or_else(|| overflow(&item.name))
            }
            Some(Entry::Recipe(recipe)) => {
                let name = recipe.name().as_str();
                if self.path.contains(&name) {
                    return Err(DomainError::unresolvable(format!(
                        "cycle detected: {} -> {}",
                        self.path.join(" -> "),
                        name
                    )));
                }

                self.path.push(name);
                let result = self.expand_all(recipe.required_items(), quantity);
                self.path.pop();
                result
            }
        }
    }
}

fn overflow(name: &str) -> DomainError {
    DomainError::invariant(format!("quantity overflow while expanding '{name}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use cookbook_core::EntryName;

    use crate::entry::{Ingredient, Recipe};

    type Book = HashMap<EntryName, Entry>;

    fn ingredient(book: &mut Book, name: &str, cook_time: u64) {
        let name = EntryName::new(name).unwrap();
        book.insert(name.clone(), Ingredient::new(name, cook_time).into());
    }

    fn recipe(book: &mut Book, name: &str, items: &[(&str, i64)]) {
        let name = EntryName::new(name).unwrap();
        let items = items
            .iter()
            .map(|(n, q)| RequiredItem::new(*n, *q))
            .collect();
        book.insert(name.clone(), Recipe::new(name, items).unwrap().into());
    }

    #[test]
    fn sandwich_sums_direct_ingredients() {
        let mut book = Book::new();
        ingredient(&mut book, "Egg", 5);
        ingredient(&mut book, "Bread", 1);
        recipe(&mut book, "Sandwich", &[("Egg", 2), ("Bread", 1)]);

        let summary = summarize(&book, "Sandwich").unwrap();
        assert_eq!(summary.name, "Sandwich");
        assert_eq!(summary.cook_time, 11);
        assert_eq!(
            summary.ingredients,
            vec![RequiredItem::new("Egg", 2), RequiredItem::new("Bread", 1)]
        );
    }

    #[test]
    fn nested_recipes_multiply_quantities() {
        let mut book = Book::new();
        ingredient(&mut book, "C", 5);
        recipe(&mut book, "B", &[("C", 3)]);
        recipe(&mut book, "A", &[("B", 2)]);

        let summary = summarize(&book, "A").unwrap();
        assert_eq!(summary.ingredients, vec![RequiredItem::new("C", 6)]);
        assert_eq!(summary.cook_time, 30);
    }

    #[test]
    fn shared_ingredients_are_aggregated_in_first_seen_order() {
        let mut book = Book::new();
        ingredient(&mut book, "Beef", 5);
        ingredient(&mut book, "Egg", 3);
        ingredient(&mut book, "Pasta", 8);
        ingredient(&mut book, "Tomato", 2);
        recipe(&mut book, "Meatball", &[("Beef", 2), ("Egg", 1)]);
        recipe(&mut book, "Spaghetti", &[("Meatball", 3), ("Pasta", 1), ("Egg", 2), ("Tomato", 2)]);

        let summary = summarize(&book, "Spaghetti").unwrap();
        assert_eq!(
            summary.ingredients,
            vec![
                RequiredItem::new("Beef", 6),
                RequiredItem::new("Egg", 5),
                RequiredItem::new("Pasta", 1),
                RequiredItem::new("Tomato", 2),
            ]
        );
        // 6*5 + 5*3 + 1*8 + 2*2
        assert_eq!(summary.cook_time, 57);
    }

    #[test]
    fn diamond_references_are_not_cycles() {
        let mut book = Book::new();
        ingredient(&mut book, "Flour", 1);
        recipe(&mut book, "Dough", &[("Flour", 2)]);
        recipe(&mut book, "Base", &[("Dough", 1)]);
        recipe(&mut book, "Crust", &[("Dough", 1)]);
        recipe(&mut book, "Pie", &[("Base", 1), ("Crust", 1)]);

        let summary = summarize(&book, "Pie").unwrap();
        assert_eq!(summary.ingredients, vec![RequiredItem::new("Flour", 4)]);
        assert_eq!(summary.cook_time, 4);
    }

    #[test]
    fn empty_recipe_summarizes_to_nothing() {
        let mut book = Book::new();
        recipe(&mut book, "Air", &[]);

        let summary = summarize(&book, "Air").unwrap();
        assert_eq!(summary.cook_time, 0);
        assert!(summary.ingredients.is_empty());
    }

    #[test]
    fn missing_query_name_is_not_a_recipe() {
        let book = Book::new();
        assert!(matches!(summarize(&book, "Ghost"), Err(DomainError::NotARecipe(_))));
    }

    #[test]
    fn ingredient_query_is_not_a_recipe() {
        let mut book = Book::new();
        ingredient(&mut book, "Egg", 5);
        assert!(matches!(summarize(&book, "Egg"), Err(DomainError::NotARecipe(_))));
    }

    #[test]
    fn missing_direct_reference_fails() {
        let mut book = Book::new();
        ingredient(&mut book, "Egg", 5);
        recipe(&mut book, "Sandwich", &[("Egg", 2), ("Bread", 1)]);

        assert!(matches!(
            summarize(&book, "Sandwich"),
            Err(DomainError::UnresolvableReference(_))
        ));
    }

    #[test]
    fn missing_deep_reference_fails() {
        let mut book = Book::new();
        ingredient(&mut book, "Egg", 5);
        recipe(&mut book, "Inner", &[("Egg", 1), ("Unobtainium", 1)]);
        recipe(&mut book, "Middle", &[("Inner", 2)]);
        recipe(&mut book, "Outer", &[("Middle", 1)]);

        assert!(matches!(
            summarize(&book, "Outer"),
            Err(DomainError::UnresolvableReference(_))
        ));
    }

    #[test]
    fn self_reference_is_reported_as_cycle() {
        let mut book = Book::new();
        recipe(&mut book, "Ouroboros", &[("Ouroboros", 1)]);

        let err = summarize(&book, "Ouroboros").unwrap_err();
        match err {
            DomainError::UnresolvableReference(msg) => assert!(msg.contains("cycle")),
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn mutual_reference_is_reported_as_cycle() {
        let mut book = Book::new();
        ingredient(&mut book, "Egg", 1);
        recipe(&mut book, "Chicken", &[("Egg", 1), ("Hen", 1)]);
        recipe(&mut book, "Hen", &[("Chicken", 1)]);

        assert!(matches!(
            summarize(&book, "Chicken"),
            Err(DomainError::UnresolvableReference(_))
        ));
        assert!(matches!(
            summarize(&book, "Hen"),
            Err(DomainError::UnresolvableReference(_))
        ));
    }

    #[test]
    fn overflow_is_an_error_not_a_wrap() {
        let mut book = Book::new();
        ingredient(&mut book, "Atom", 1);
        recipe(&mut book, "Big", &[("Atom", i64::MAX)]);
        recipe(&mut book, "Bigger", &[("Big", 2)]);

        assert!(matches!(
            summarize(&book, "Bigger"),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn summarizing_is_idempotent() {
        let mut book = Book::new();
        ingredient(&mut book, "Egg", 5);
        ingredient(&mut book, "Bread", 1);
        recipe(&mut book, "Sandwich", &[("Egg", 2), ("Bread", 1)]);
        recipe(&mut book, "Picnic", &[("Sandwich", 4), ("Egg", 1)]);

        let first = summarize(&book, "Picnic").unwrap();
        let second = summarize(&book, "Picnic").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn summary_serializes_in_camel_case() {
        let summary = RecipeSummary {
            name: "Sandwich".to_string(),
            cook_time: 11,
            ingredients: vec![RequiredItem::new("Egg", 2)],
        };
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            serde_json::json!({
                "name": "Sandwich",
                "cookTime": 11,
                "ingredients": [{ "name": "Egg", "quantity": 2 }],
            })
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// A chain of single-item recipes multiplies every level's quantity.
            #[test]
            fn chain_multiplies_quantities(
                quantities in prop::collection::vec(1i64..=9, 1..8),
                cook_time in 0u64..=100,
            ) {
                let mut book = Book::new();
                ingredient(&mut book, "Leaf", cook_time);

                let mut child = "Leaf".to_string();
                for (level, q) in quantities.iter().enumerate() {
                    let name = format!("Level{level}");
                    recipe(&mut book, &name, &[(child.as_str(), *q)]);
                    child = name;
                }

                let expected_qty: i64 = quantities.iter().product();
                let summary = summarize(&book, &child).unwrap();
                prop_assert_eq!(summary.ingredients, vec![RequiredItem::new("Leaf", expected_qty)]);
                prop_assert_eq!(summary.cook_time, expected_qty * cook_time as i64);
            }

            /// Cook time is the quantity-weighted sum of the flattened ingredients.
            #[test]
            fn cook_time_matches_flattened_ingredients(
                cook_times in prop::collection::vec(0u64..=50, 1..6),
                outer in 1i64..=5,
                inner in prop::collection::vec(1i64..=5, 1..6),
            ) {
                let mut book = Book::new();
                let names: Vec<String> = (0..cook_times.len()).map(|i| format!("Ing{i}")).collect();
                for (name, ct) in names.iter().zip(&cook_times) {
                    ingredient(&mut book, name, *ct);
                }
                let items: Vec<(&str, i64)> = names
                    .iter()
                    .zip(inner.iter().cycle())
                    .map(|(n, q)| (n.as_str(), *q))
                    .collect();
                recipe(&mut book, "Inner", &items);
                recipe(&mut book, "Outer", &[("Inner", outer), (names[0].as_str(), 1)]);

                let summary = summarize(&book, "Outer").unwrap();
                let weighted: i64 = summary
                    .ingredients
                    .iter()
                    .map(|line| {
                        let ct = book[line.name.as_str()].as_ingredient().unwrap().cook_time();
                        line.quantity * ct as i64
                    })
                    .sum();
                prop_assert_eq!(summary.cook_time, weighted);
                prop_assert_eq!(summary.ingredients.len(), names.len());
            }
        }
    }
}
