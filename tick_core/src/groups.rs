use crate::todo::{Category, Todo};

/// The synthetic group that collects todos without a category. Always
/// present, even when the server has no categories at all.
pub const DEFAULT_CATEGORY: &str = "My todos";

/// The categories known for this page load, in the order the server sent
/// them. Rebuilt in full on every load and immutable afterwards, so it can be
/// threaded through the app state instead of living in a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Server categories, deduplicated by name (the last one wins, keeping
    /// the position where the name first appeared).
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from the server's category list.
    pub fn new(categories: Vec<Category>) -> Self {
        let mut deduped: Vec<Category> = Vec::with_capacity(categories.len());

        for category in categories {
            match deduped.iter_mut().find(|c| c.name == category.name) {
                Some(existing) => *existing = category,
                None => deduped.push(category),
            }
        }

        Self {
            categories: deduped,
        }
    }

    /// Names to offer in the category dropdown: the default group first,
    /// then every server category (unless the server itself defines a
    /// category named like the default group, in which case it appears only
    /// once, in its server position.)
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.categories.len() + 1);

        if !self.categories.iter().any(|c| c.name == DEFAULT_CATEGORY) {
            names.push(DEFAULT_CATEGORY.to_owned());
        }

        names.extend(self.categories.iter().map(|c| c.name.clone()));

        names
    }

    /// Resolve a dropdown selection to a server category. The default group
    /// (and anything we don't know about) resolves to `None`, which the
    /// server stores as "no category".
    pub fn select(&self, name: &str) -> Option<Category> {
        self.categories.iter().find(|c| c.name == name).cloned()
    }
}

/// One rendered group: a labeled container with a sub-list of todos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// The category name (or [`DEFAULT_CATEGORY`]).
    pub name: String,

    /// The todos in this group, in the order they were fetched or created.
    pub todos: Vec<Todo>,
}

/// The group a todo renders under: its category name, falling back to the
/// default group when the category is absent or unnamed.
pub fn group_name(todo: &Todo) -> &str {
    todo.category
        .as_ref()
        .map(|c| c.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Group todos by category name, creating groups in the order their names
/// are first encountered.
pub fn group_by_category(todos: Vec<Todo>) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();

    for todo in todos {
        let name = group_name(&todo);

        match groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.todos.push(todo),
            None => {
                let name = name.to_owned();
                groups.push(Group {
                    name,
                    todos: vec![todo],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn todo(id: i64, text: &str, category: Option<&str>) -> Todo {
        Todo {
            id,
            text: text.to_owned(),
            done: false,
            category: category.map(|name| Category {
                id: 0,
                name: name.to_owned(),
            }),
            created: None,
        }
    }

    #[test]
    fn groups_by_category_name_with_default_fallback() {
        let groups = group_by_category(vec![
            todo(1, "A", Some("Work")),
            todo(2, "B", None),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Work");
        assert_eq!(groups[0].todos[0].text, "A");
        assert_eq!(groups[1].name, DEFAULT_CATEGORY);
        assert_eq!(groups[1].todos[0].text, "B");
    }

    #[test]
    fn empty_category_name_counts_as_uncategorized() {
        let groups = group_by_category(vec![todo(1, "A", Some(""))]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, DEFAULT_CATEGORY);
    }

    #[test]
    fn groups_appear_in_first_encounter_order() {
        let groups = group_by_category(vec![
            todo(1, "A", Some("Home")),
            todo(2, "B", Some("Work")),
            todo(3, "C", Some("Home")),
        ]);

        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Work"]);
        assert_eq!(groups[0].todos.len(), 2);
    }

    #[test]
    fn catalog_always_offers_the_default_group_first() {
        let catalog = Catalog::new(vec![Category {
            id: 1,
            name: "Work".to_owned(),
        }]);

        assert_eq!(catalog.names(), vec!["My todos", "Work"]);
    }

    #[test]
    fn catalog_resolves_default_and_unknown_names_to_none() {
        let catalog = Catalog::new(vec![Category {
            id: 1,
            name: "Work".to_owned(),
        }]);

        assert_eq!(catalog.select(DEFAULT_CATEGORY), None);
        assert_eq!(catalog.select("Groceries"), None);
        assert_eq!(
            catalog.select("Work"),
            Some(Category {
                id: 1,
                name: "Work".to_owned()
            })
        );
    }

    #[test]
    fn catalog_deduplicates_by_name_keeping_the_last() {
        let catalog = Catalog::new(vec![
            Category {
                id: 1,
                name: "Work".to_owned(),
            },
            Category {
                id: 2,
                name: "Work".to_owned(),
            },
        ]);

        assert_eq!(catalog.names(), vec!["My todos", "Work"]);
        assert_eq!(catalog.select("Work").map(|c| c.id), Some(2));
    }

    prop_compose! {
        fn arb_todo()(
            id in 0i64..1_000,
            text in "[a-z]{0,8}",
            done in any::<bool>(),
            category in proptest::option::of(
                proptest::sample::select(vec!["", "Work", "Home", "Errands"])
            ),
        ) -> Todo {
            Todo {
                id,
                text,
                done,
                category: category.map(|name| Category { id: 0, name: name.to_owned() }),
                created: None,
            }
        }
    }

    proptest! {
        #[test]
        fn grouping_preserves_every_todo_exactly_once(
            todos in proptest::collection::vec(arb_todo(), 0..20)
        ) {
            let groups = group_by_category(todos.clone());

            let grouped: usize = groups.iter().map(|g| g.todos.len()).sum();
            prop_assert_eq!(grouped, todos.len());

            for (index, group) in groups.iter().enumerate() {
                prop_assert!(!group.todos.is_empty());
                prop_assert!(
                    groups[..index].iter().all(|other| other.name != group.name)
                );
            }
        }
    }
}
