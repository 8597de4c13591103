//! Predicate-based bulk element updates.

/// Pure, order-preserving bulk updates over a slice.
///
/// Both operations return a new `Vec` of the same length: elements
/// matching the predicate are replaced by a mutated clone, the rest pass
/// through unchanged.
pub trait UpdateExt<T> {
    /// Update every element matching `predicate` by applying `transform`
    /// to a mutable clone of it.
    ///
    /// ```
    /// use ephemera::collections::UpdateExt;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct User {
    ///     name: &'static str,
    ///     city: &'static str,
    /// }
    ///
    /// let users = vec![
    ///     User { name: "blob", city: "Potsdam" },
    ///     User { name: "ada", city: "Potsdam" },
    /// ];
    ///
    /// let moved = users.update_where(|u| u.name == "blob", |u| u.city = "Berlin");
    /// assert_eq!(moved[0].city, "Berlin");
    /// assert_eq!(moved[1].city, "Potsdam");
    /// ```
    #[must_use = "update_where returns a new Vec and leaves the input unchanged"]
    fn update_where<P, F>(&self, predicate: P, transform: F) -> Vec<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
        F: Fn(&mut T);

    /// Update every element matching `predicate` by setting the field
    /// selected by `field` to a constant `value`.
    ///
    /// The `field` projection plays the role of a key path: it borrows
    /// the one field to overwrite.
    ///
    /// ```
    /// use ephemera::collections::UpdateExt;
    ///
    /// let scores = vec![(1, 10), (2, 20), (3, 30)];
    /// let reset = scores.set_where(|&(id, _)| id > 1, |entry| &mut entry.1, 0);
    /// assert_eq!(reset, vec![(1, 10), (2, 0), (3, 0)]);
    /// ```
    #[must_use = "set_where returns a new Vec and leaves the input unchanged"]
    fn set_where<P, A, F>(&self, predicate: P, field: F, value: A) -> Vec<T>
    where
        T: Clone,
        A: Clone,
        P: Fn(&T) -> bool,
        F: Fn(&mut T) -> &mut A;
}

impl<T> UpdateExt<T> for [T] {
    fn update_where<P, F>(&self, predicate: P, transform: F) -> Vec<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
        F: Fn(&mut T),
    {
        self.iter()
            .map(|item| {
                if predicate(item) {
                    let mut updated = item.clone();
                    transform(&mut updated);
                    updated
                } else {
                    item.clone()
                }
            })
            .collect()
    }

    fn set_where<P, A, F>(&self, predicate: P, field: F, value: A) -> Vec<T>
    where
        T: Clone,
        A: Clone,
        P: Fn(&T) -> bool,
        F: Fn(&mut T) -> &mut A,
    {
        self.update_where(predicate, |item| *field(item) = value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        name: &'static str,
        city: &'static str,
    }

    fn users() -> Vec<User> {
        vec![
            User { name: "blob", city: "Potsdam" },
            User { name: "ada", city: "Potsdam" },
            User { name: "blob", city: "Leipzig" },
        ]
    }

    #[test]
    fn updates_only_matching_elements() {
        let moved = users().update_where(|u| u.name == "blob", |u| u.city = "Berlin");

        assert_eq!(moved.len(), 3);
        assert_eq!(moved[0].city, "Berlin");
        assert_eq!(moved[1].city, "Potsdam");
        assert_eq!(moved[2].city, "Berlin");
    }

    #[test]
    fn preserves_order_and_leaves_input_untouched() {
        let original = users();
        let updated = original.update_where(|u| u.name == "ada", |u| u.city = "Berlin");

        let names: Vec<_> = updated.iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["blob", "ada", "blob"]);
        // The input is a pure borrow: nothing moved or mutated.
        assert_eq!(original[1].city, "Potsdam");
    }

    #[test]
    fn no_matches_clones_everything_unchanged() {
        let original = users();
        let updated = original.update_where(|u| u.name == "nobody", |u| u.city = "Berlin");
        assert_eq!(updated, original);
    }

    #[test]
    fn set_where_writes_constant_to_selected_field() {
        let reset = users().set_where(|u| u.city == "Potsdam", |u| &mut u.city, "Berlin");

        assert_eq!(reset[0].city, "Berlin");
        assert_eq!(reset[1].city, "Berlin");
        assert_eq!(reset[2].city, "Leipzig");
    }

    #[test]
    fn works_on_slices_and_empty_input() {
        let empty: Vec<i32> = vec![];
        assert!(empty.update_where(|_| true, |n| *n += 1).is_empty());

        let slice: &[i32] = &[1, 2, 3];
        assert_eq!(slice.update_where(|n| n % 2 == 1, |n| *n *= 10), vec![10, 2, 30]);
    }
}
