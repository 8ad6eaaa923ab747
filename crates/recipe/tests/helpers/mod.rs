use mealweek_recipe::Catalog;
use mealweek_shared::Recipe;

pub fn recipe(id: &str, title: &str, minutes: u32, vegetarian: bool, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        title: title.to_owned(),
        minutes,
        vegetarian,
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        image: format!("https://picsum.photos/seed/{id}/800/600"),
    }
}

#[allow(dead_code)]
pub fn embedded() -> anyhow::Result<Catalog> {
    Ok(Catalog::embedded()?)
}
