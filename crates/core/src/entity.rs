//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same record, whatever their other
/// attributes say. Catalog code relies on this to correlate derived views with
/// the source list.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Returns the first identifier that occurs more than once, if any.
pub fn first_duplicate_id<'a, E, I>(entities: I) -> Option<E::Id>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut seen = std::collections::HashSet::new();
    entities
        .into_iter()
        .map(|entity| entity.id())
        .find(|id| !seen.insert(*id))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row(u32);

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.0
        }
    }

    #[test]
    fn unique_ids_have_no_duplicate() {
        let rows = [Row(1), Row(2), Row(3)];
        assert_eq!(first_duplicate_id(&rows), None);
    }

    #[test]
    fn reports_first_repeated_id() {
        let rows = [Row(4), Row(7), Row(4), Row(7)];
        assert_eq!(first_duplicate_id(&rows), Some(4));
    }
}
