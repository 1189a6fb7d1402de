//! The store owning one collection per resource kind.

use crate::collection::Collection;
use crate::error::StoreResult;
use clubsync_model::{
    Activity, Donation, Expense, Experience, GalleryItem, HeroSlide, Member, ResourceRecord,
    Stored, WeeklyFee,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Full contents of the store, one slot per resource kind.
///
/// This is the on-disk snapshot format and the unit of wholesale
/// backup/restore. Missing slots deserialize as empty, so snapshots
/// written by older builds stay readable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSnapshot {
    /// Member records.
    pub members: Vec<Stored<Member>>,
    /// Activity records.
    pub activities: Vec<Stored<Activity>>,
    /// Donation records.
    pub donations: Vec<Stored<Donation>>,
    /// Expense records.
    pub expenses: Vec<Stored<Expense>>,
    /// Experience records.
    pub experiences: Vec<Stored<Experience>>,
    /// Gallery records.
    pub gallery: Vec<Stored<GalleryItem>>,
    /// Hero slide records.
    pub hero_slides: Vec<Stored<HeroSlide>>,
    /// Weekly fee records.
    pub weekly_fees: Vec<Stored<WeeklyFee>>,
}

/// The record store: eight independent typed collections.
///
/// # Example
///
/// ```rust,ignore
/// let store = ClubStore::open("club-data.json")?;
/// let stored = store.members().create(member)?;
/// store.persist()?;
/// ```
#[derive(Debug)]
pub struct ClubStore {
    connected: Arc<AtomicBool>,
    path: Option<PathBuf>,
    persist_lock: Mutex<()>,
    members: Collection<Member>,
    activities: Collection<Activity>,
    donations: Collection<Donation>,
    expenses: Collection<Expense>,
    experiences: Collection<Experience>,
    gallery: Collection<GalleryItem>,
    hero_slides: Collection<HeroSlide>,
    weekly_fees: Collection<WeeklyFee>,
}

impl ClubStore {
    fn empty(path: Option<PathBuf>) -> Self {
        let connected = Arc::new(AtomicBool::new(true));
        Self {
            members: Collection::new(Arc::clone(&connected)),
            activities: Collection::new(Arc::clone(&connected)),
            donations: Collection::new(Arc::clone(&connected)),
            expenses: Collection::new(Arc::clone(&connected)),
            experiences: Collection::new(Arc::clone(&connected)),
            gallery: Collection::new(Arc::clone(&connected)),
            hero_slides: Collection::new(Arc::clone(&connected)),
            weekly_fees: Collection::new(Arc::clone(&connected)),
            connected,
            path,
            persist_lock: Mutex::new(()),
        }
    }

    /// Opens an ephemeral store with no snapshot file.
    #[must_use]
    pub fn open_in_memory() -> Self {
        Self::empty(None)
    }

    /// Opens a store bound to a snapshot file, loading its contents if
    /// the file exists.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let store = Self::empty(Some(path.clone()));

        if path.exists() {
            let bytes = std::fs::read(&path)?;
            let snapshot: DataSnapshot = serde_json::from_slice(&bytes)?;
            store.restore(snapshot);
            info!(path = %path.display(), "loaded store snapshot");
        } else {
            info!(path = %path.display(), "no snapshot found, starting empty");
        }

        Ok(store)
    }

    /// Writes the current contents to the snapshot file.
    ///
    /// A no-op for in-memory stores. Fails with a storage fault when the
    /// store is closed or the file cannot be written. Safe to call from
    /// concurrent request handlers: writes are serialized, and the
    /// snapshot lands via write-to-temp-then-rename so the file on disk
    /// is always a complete document.
    pub fn persist(&self) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let _write = self.persist_lock.lock();

        // snapshot() re-checks connectivity through the collections
        let snapshot = self.snapshot()?;
        let bytes = serde_json::to_vec_pretty(&snapshot)?;
        let staging = path.with_extension("tmp");
        std::fs::write(&staging, bytes)?;
        std::fs::rename(&staging, path)?;
        debug!(path = %path.display(), "persisted store snapshot");
        Ok(())
    }

    /// Copies the full contents out of the store.
    pub fn snapshot(&self) -> StoreResult<DataSnapshot> {
        // list() guards on connectivity; the remaining dumps can then
        // read directly.
        let members = self.members.list()?;
        Ok(DataSnapshot {
            members,
            activities: self.activities.dump(),
            donations: self.donations.dump(),
            expenses: self.expenses.dump(),
            experiences: self.experiences.dump(),
            gallery: self.gallery.dump(),
            hero_slides: self.hero_slides.dump(),
            weekly_fees: self.weekly_fees.dump(),
        })
    }

    /// Replaces the full contents of every collection from a snapshot.
    pub fn restore(&self, snapshot: DataSnapshot) {
        self.members.replace_all(snapshot.members);
        self.activities.replace_all(snapshot.activities);
        self.donations.replace_all(snapshot.donations);
        self.expenses.replace_all(snapshot.expenses);
        self.experiences.replace_all(snapshot.experiences);
        self.gallery.replace_all(snapshot.gallery);
        self.hero_slides.replace_all(snapshot.hero_slides);
        self.weekly_fees.replace_all(snapshot.weekly_fees);
    }

    /// Closes the store. Every subsequent collection operation fails
    /// with a storage fault; the process itself stays healthy.
    pub fn close(&self) {
        self.connected.store(false, Ordering::SeqCst);
        info!("store closed");
    }

    /// Reports whether the store accepts operations.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// The members collection.
    #[must_use]
    pub fn members(&self) -> &Collection<Member> {
        &self.members
    }

    /// The activities collection.
    #[must_use]
    pub fn activities(&self) -> &Collection<Activity> {
        &self.activities
    }

    /// The donations collection.
    #[must_use]
    pub fn donations(&self) -> &Collection<Donation> {
        &self.donations
    }

    /// The expenses collection.
    #[must_use]
    pub fn expenses(&self) -> &Collection<Expense> {
        &self.expenses
    }

    /// The experiences collection.
    #[must_use]
    pub fn experiences(&self) -> &Collection<Experience> {
        &self.experiences
    }

    /// The gallery collection.
    #[must_use]
    pub fn gallery(&self) -> &Collection<GalleryItem> {
        &self.gallery
    }

    /// The hero slides collection.
    #[must_use]
    pub fn hero_slides(&self) -> &Collection<HeroSlide> {
        &self.hero_slides
    }

    /// The weekly fees collection.
    #[must_use]
    pub fn weekly_fees(&self) -> &Collection<WeeklyFee> {
        &self.weekly_fees
    }
}

/// Maps a record type to its collection within a [`ClubStore`].
///
/// This is what lets the router define list/create/update/delete once
/// and instantiate the four handlers per kind.
pub trait StoreSlot: ResourceRecord {
    /// Returns this kind's collection.
    fn collection(store: &ClubStore) -> &Collection<Self>;
}

impl StoreSlot for Member {
    fn collection(store: &ClubStore) -> &Collection<Self> {
        store.members()
    }
}

impl StoreSlot for Activity {
    fn collection(store: &ClubStore) -> &Collection<Self> {
        store.activities()
    }
}

impl StoreSlot for Donation {
    fn collection(store: &ClubStore) -> &Collection<Self> {
        store.donations()
    }
}

impl StoreSlot for Expense {
    fn collection(store: &ClubStore) -> &Collection<Self> {
        store.expenses()
    }
}

impl StoreSlot for Experience {
    fn collection(store: &ClubStore) -> &Collection<Self> {
        store.experiences()
    }
}

impl StoreSlot for GalleryItem {
    fn collection(store: &ClubStore) -> &Collection<Self> {
        store.gallery()
    }
}

impl StoreSlot for HeroSlide {
    fn collection(store: &ClubStore) -> &Collection<Self> {
        store.hero_slides()
    }
}

impl StoreSlot for WeeklyFee {
    fn collection(store: &ClubStore) -> &Collection<Self> {
        store.weekly_fees()
    }
}
