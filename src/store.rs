use crate::models::{NewPaste, Paste, PasteUpdate};
use anyhow::{bail, Context, Result};
use std::collections::HashSet;

/// In-memory, insertion-ordered collection of pastes
///
/// Ids come from a running counter that starts at the highest seeded id, so
/// an id is never handed out twice even after the paste holding it is gone.
#[derive(Debug, Default)]
pub struct PasteStore {
    pastes: Vec<Paste>,
    last_id: u64,
}

impl PasteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from pre-existing records, keeping their order.
    pub fn with_pastes(pastes: Vec<Paste>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(pastes.len());
        for paste in &pastes {
            if paste.id == 0 {
                bail!("paste ids must be positive");
            }
            if !seen.insert(paste.id) {
                bail!("duplicate paste id: {}", paste.id);
            }
        }

        let last_id = pastes.iter().map(|p| p.id).max().unwrap_or(0);
        Ok(Self { pastes, last_id })
    }

    pub fn list(&self) -> &[Paste] {
        &self.pastes
    }

    pub fn len(&self) -> usize {
        self.pastes.len()
    }

    pub fn find(&self, id: u64) -> Option<&Paste> {
        self.pastes.iter().find(|p| p.id == id)
    }

    pub fn create(&mut self, new: NewPaste) -> Result<Paste> {
        let id = self
            .last_id
            .checked_add(1)
            .context("paste id space exhausted")?;
        self.last_id = id;

        let paste = Paste::from_new(id, new);
        self.pastes.push(paste.clone());
        Ok(paste)
    }

    pub fn update(&mut self, id: u64, update: PasteUpdate) -> Option<Paste> {
        let paste = self.pastes.iter_mut().find(|p| p.id == id)?;
        paste.apply(update);
        Some(paste.clone())
    }

    /// Removes the first paste with `id`, returning it.
    pub fn remove(&mut self, id: u64) -> Option<Paste> {
        let index = self.pastes.iter().position(|p| p.id == id)?;
        Some(self.pastes.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exposure, Syntax, UserId};
    use serde_json::json;

    fn paste(id: u64) -> Paste {
        Paste {
            id,
            name: format!("paste {}", id),
            syntax: Syntax::Python,
            exposure: Exposure::Public,
            expiration: 10,
            text: "print('hi')".to_string(),
            user_id: UserId(json!(1)),
        }
    }

    fn new_paste(name: &str) -> NewPaste {
        NewPaste {
            name: name.to_string(),
            syntax: Syntax::Scheme,
            exposure: Exposure::Private,
            expiration: 5,
            text: "(display 1)".to_string(),
            user_id: UserId(json!("u-1")),
        }
    }

    #[test]
    fn test_create_on_empty_store_starts_at_one() {
        let mut store = PasteStore::new();
        let first = store.create(new_paste("a")).unwrap();
        let second = store.create(new_paste("b")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].name, "a");
        assert_eq!(store.list()[1].name, "b");
    }

    #[test]
    fn test_create_continues_from_highest_seeded_id() {
        let mut store = PasteStore::with_pastes(vec![paste(4), paste(2)]).unwrap();
        let created = store.create(new_paste("next")).unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(store.list().last().unwrap().id, 5);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = PasteStore::with_pastes(vec![paste(1), paste(2)]).unwrap();
        assert!(store.remove(2).is_some());

        let created = store.create(new_paste("after delete")).unwrap();
        assert_eq!(created.id, 3);
    }

    #[test]
    fn test_create_fails_when_ids_exhausted() {
        let mut store = PasteStore::with_pastes(vec![paste(u64::MAX)]).unwrap();
        assert!(store.create(new_paste("overflow")).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_pastes_rejects_duplicates() {
        let err = PasteStore::with_pastes(vec![paste(1), paste(1)]).unwrap_err();
        assert!(err.to_string().contains("duplicate paste id: 1"));
    }

    #[test]
    fn test_with_pastes_rejects_zero_id() {
        assert!(PasteStore::with_pastes(vec![paste(0)]).is_err());
    }

    #[test]
    fn test_update_overwrites_mutable_fields_only() {
        let mut store = PasteStore::with_pastes(vec![paste(1)]).unwrap();
        let updated = store
            .update(
                1,
                PasteUpdate {
                    name: "renamed".to_string(),
                    syntax: Syntax::Perl,
                    exposure: Exposure::Private,
                    expiration: 60,
                    text: "print 1".to_string(),
                },
            )
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.user_id, UserId(json!(1)));
        assert_eq!(updated.name, "renamed");
        assert_eq!(store.find(1), Some(&updated));
    }

    #[test]
    fn test_update_missing_returns_none() {
        let mut store = PasteStore::with_pastes(vec![paste(1)]).unwrap();
        let update = PasteUpdate {
            name: "x".to_string(),
            syntax: Syntax::C,
            exposure: Exposure::Public,
            expiration: 1,
            text: "x".to_string(),
        };
        assert!(store.update(9, update).is_none());
        assert_eq!(store.find(1), Some(&paste(1)));
    }

    #[test]
    fn test_remove_takes_exactly_one() {
        let mut store = PasteStore::with_pastes(vec![paste(1), paste(2), paste(3)]).unwrap();
        let removed = store.remove(2).unwrap();

        assert_eq!(removed.id, 2);
        assert_eq!(store.len(), 2);
        assert!(store.find(2).is_none());
        assert!(store.remove(2).is_none());
        assert_eq!(store.len(), 2);
    }
}
