use std::collections::BTreeMap;

use mealweek_shared::Day;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    ser::SerializeMap,
};
use strum::VariantArray;

/// Recipe id assigned to each day of the week.
///
/// Ids are not checked against the catalog; renderers treat an id that no
/// longer resolves as an empty slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeeklyPlan {
    slots: [Option<String>; 7],
}

impl WeeklyPlan {
    pub fn get(&self, day: Day) -> Option<&str> {
        self.slots[day.index()].as_deref()
    }

    pub fn assign(&mut self, day: Day, recipe_id: impl Into<String>) {
        self.slots[day.index()] = Some(recipe_id.into());
    }

    pub fn clear(&mut self, day: Day) {
        self.slots[day.index()] = None;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, Option<&str>)> {
        Day::VARIANTS
            .iter()
            .map(|day| (*day, self.slots[day.index()].as_deref()))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Serialize for WeeklyPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Day::VARIANTS.len()))?;
        for (day, recipe_id) in self.iter() {
            map.serialize_entry(day.as_ref(), &recipe_id)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeeklyPlan {
    /// Missing days load as empty, unknown keys are ignored.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, Option<String>>::deserialize(deserializer)?;
        let mut plan = WeeklyPlan::default();

        for day in Day::VARIANTS {
            if let Some(Some(recipe_id)) = entries.get(day.as_ref()) {
                plan.assign(*day, recipe_id.to_owned());
            }
        }

        Ok(plan)
    }
}
