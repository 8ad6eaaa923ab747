use serde::{Deserialize, Serialize};

/// Favorited recipe ids, kept in the order they were added.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Favorites {
    ids: Vec<String>,
}

impl From<Vec<String>> for Favorites {
    fn from(value: Vec<String>) -> Self {
        let mut favorites = Favorites::default();
        for id in value {
            favorites.insert(id);
        }

        favorites
    }
}

impl From<Favorites> for Vec<String> {
    fn from(value: Favorites) -> Self {
        value.ids
    }
}

impl Favorites {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|v| v == id)
    }

    /// Returns `false` when the id was already a favorite.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }

        self.ids.push(id);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let len = self.ids.len();
        self.ids.retain(|v| v != id);

        self.ids.len() != len
    }

    /// Flips membership and returns whether the id is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            return false;
        }

        self.insert(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
