//! Entities: things with an identity that survives state changes.

/// Entity marker + minimal interface.
///
/// A cart line is an entity: its quantity changes over time while its
/// identifier stays put, even as lines around it are removed.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// First entity in `items` whose identifier equals `id`.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Slot {
        id: u8,
        label: &'static str,
    }

    impl Entity for Slot {
        type Id = u8;

        fn id(&self) -> &u8 {
            &self.id
        }
    }

    #[test]
    fn finds_by_identity_not_position() {
        let slots = [
            Slot { id: 4, label: "a" },
            Slot { id: 2, label: "b" },
        ];
        assert_eq!(find_by_id(&slots, &2).map(|s| s.label), Some("b"));
        assert!(find_by_id(&slots, &0).is_none());
    }
}
