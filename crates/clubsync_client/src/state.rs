//! Local working copy of the club data.

use clubsync_model::{
    Activity, Donation, Expense, Experience, GalleryItem, HeroSlide, Member, RecordId,
    ResourceRecord, Stored, WeeklyFee,
};

/// The client's in-memory copy of every resource kind.
///
/// A pull replaces slots wholesale with the server's lists; local edits
/// between syncs go through [`LocalState::upsert`] and
/// [`LocalState::remove`].
#[derive(Debug, Clone, Default)]
pub struct LocalState {
    /// Club members.
    pub members: Vec<Stored<Member>>,
    /// Activities and events.
    pub activities: Vec<Stored<Activity>>,
    /// Donations received.
    pub donations: Vec<Stored<Donation>>,
    /// Expenses paid.
    pub expenses: Vec<Stored<Expense>>,
    /// Experience write-ups.
    pub experiences: Vec<Stored<Experience>>,
    /// Gallery items.
    pub gallery: Vec<Stored<GalleryItem>>,
    /// Hero slides.
    pub hero_slides: Vec<Stored<HeroSlide>>,
    /// Weekly fee ledgers.
    pub weekly_fees: Vec<Stored<WeeklyFee>>,
}

impl LocalState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any existing record with the same id.
    pub fn upsert<T: StateSlot>(&mut self, record: Stored<T>) {
        let slot = T::slot_mut(self);
        match slot.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => slot.push(record),
        }
    }

    /// Removes a record by id; absent ids are ignored.
    pub fn remove<T: StateSlot>(&mut self, id: RecordId) {
        T::slot_mut(self).retain(|r| r.id != id);
    }

    /// The records of one kind.
    #[must_use]
    pub fn records<T: StateSlot>(&self) -> &[Stored<T>] {
        T::slot(self)
    }

    /// Total number of records across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
            + self.activities.len()
            + self.donations.len()
            + self.expenses.len()
            + self.experiences.len()
            + self.gallery.len()
            + self.hero_slides.len()
            + self.weekly_fees.len()
    }

    /// Whether no records are held at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Maps a record type to its slot in [`LocalState`].
pub trait StateSlot: ResourceRecord {
    /// Borrows this kind's slot.
    fn slot(state: &LocalState) -> &Vec<Stored<Self>>;

    /// Mutably borrows this kind's slot.
    fn slot_mut(state: &mut LocalState) -> &mut Vec<Stored<Self>>;
}

macro_rules! impl_state_slot {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl StateSlot for $ty {
                fn slot(state: &LocalState) -> &Vec<Stored<Self>> {
                    &state.$field
                }

                fn slot_mut(state: &mut LocalState) -> &mut Vec<Stored<Self>> {
                    &mut state.$field
                }
            }
        )+
    };
}

impl_state_slot!(
    Member => members,
    Activity => activities,
    Donation => donations,
    Expense => expenses,
    Experience => experiences,
    GalleryItem => gallery,
    HeroSlide => hero_slides,
    WeeklyFee => weekly_fees,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> Member {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "contact": "a@b.c",
            "phone": "1",
            "joinDate": "2024-01-01",
            "role": "Player",
        }))
        .unwrap()
    }

    #[test]
    fn upsert_inserts_then_replaces() {
        let mut state = LocalState::new();
        let record = Stored::new(member("Alice"));
        let id = record.id;

        state.upsert(record);
        assert_eq!(state.members.len(), 1);

        let mut replacement = Stored::new(member("Alicia"));
        replacement.id = id;
        state.upsert(replacement);

        assert_eq!(state.members.len(), 1);
        assert_eq!(state.members[0].fields.name, "Alicia");
    }

    #[test]
    fn remove_is_idempotent() {
        let mut state = LocalState::new();
        let record = Stored::new(member("Alice"));
        let id = record.id;
        state.upsert(record);

        state.remove::<Member>(id);
        state.remove::<Member>(id);
        assert!(state.is_empty());
    }

    #[test]
    fn slots_are_independent() {
        let mut state = LocalState::new();
        state.upsert(Stored::new(member("Alice")));
        assert_eq!(state.records::<Member>().len(), 1);
        assert_eq!(state.records::<Donation>().len(), 0);
        assert_eq!(state.len(), 1);
    }
}
