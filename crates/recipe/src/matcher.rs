/// Pantry ingredients normalized once per query.
///
/// A recipe ingredient matches when some pantry ingredient contains it or is
/// contained by it, ignoring case ("tomato" matches "diced tomatoes" and the
/// other way round). No stemming or fuzzy matching.
#[derive(Clone, Debug, Default)]
pub struct Pantry {
    items: Vec<String>,
}

impl Pantry {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = ingredients
            .into_iter()
            .map(|i| i.as_ref().trim().to_lowercase())
            .filter(|i| !i.is_empty())
            .collect();

        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn matches(&self, recipe_ingredient: &str) -> bool {
        let candidate = recipe_ingredient.to_lowercase();
        self.items.iter().any(|item| contains_either_way(item, &candidate))
    }

    /// Recipe ingredients satisfied by this pantry, in recipe order.
    pub fn matched<'a>(&self, recipe_ingredients: &'a [String]) -> Vec<&'a String> {
        if self.is_empty() {
            return Vec::new();
        }

        recipe_ingredients
            .iter()
            .filter(|ingredient| self.matches(ingredient))
            .collect()
    }
}

/// Case-sensitive bidirectional containment; callers lowercase first.
pub(crate) fn contains_either_way(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
