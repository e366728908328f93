use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::{Collection, KeyValueStore, Record};
use crate::error::FarmError;
use crate::io::PortalSnapshot;
use crate::models::sample::{sample_farms, sample_partners};
use crate::models::{Farm, Partner, WhitepaperRecord};

pub const FARMS_KEY: &str = "farms";
pub const PARTNERS_KEY: &str = "partners";
pub const WHITEPAPER_KEY: &str = "whitepaper";

/// Admin state: farm and partner collections plus the current whitepaper,
/// mirrored into an injected key-value store after every change.
pub struct Portal<S: KeyValueStore> {
    store: S,
    farms: Collection<Farm>,
    partners: Collection<Partner>,
    whitepaper: Option<WhitepaperRecord>,
}

impl<S: KeyValueStore> Portal<S> {
    /// Load state from `store`, seeding sample records for any collection
    /// the store has never held.
    pub fn open(mut store: S) -> Result<Self, FarmError> {
        let farms = load_or_seed(&mut store, FARMS_KEY, sample_farms)?;
        let partners = load_or_seed(&mut store, PARTNERS_KEY, sample_partners)?;
        let whitepaper = match store.get(WHITEPAPER_KEY)? {
            Some(json) => Some(serde_json::from_str(&json)?),
            None => None,
        };
        debug!(
            farms = farms.len(),
            partners = partners.len(),
            "portal state loaded"
        );
        Ok(Self {
            store,
            farms,
            partners,
            whitepaper,
        })
    }

    pub fn farms(&self) -> &Collection<Farm> {
        &self.farms
    }

    pub fn partners(&self) -> &Collection<Partner> {
        &self.partners
    }

    pub fn whitepaper(&self) -> Option<&WhitepaperRecord> {
        self.whitepaper.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // --- farms ---

    pub fn add_farm(&mut self, farm: Farm) -> Result<Farm, FarmError> {
        let mut staged = self.farms.clone();
        let added = staged.insert(farm)?.clone();
        self.commit_farms(staged)?;
        info!(id = %added.id, name = %added.name, "farm added");
        Ok(added)
    }

    pub fn update_farm(&mut self, id: Uuid, farm: Farm) -> Result<Farm, FarmError> {
        let mut staged = self.farms.clone();
        let updated = staged.update(id, farm)?.clone();
        self.commit_farms(staged)?;
        info!(id = %id, "farm updated");
        Ok(updated)
    }

    pub fn remove_farm(&mut self, id: Uuid) -> Result<Farm, FarmError> {
        let mut staged = self.farms.clone();
        let removed = staged.remove(id)?;
        self.commit_farms(staged)?;
        info!(id = %id, name = %removed.name, "farm removed");
        Ok(removed)
    }

    /// Add every farm or none: the first rejected record aborts the import.
    pub fn import_farms(&mut self, farms: Vec<Farm>) -> Result<usize, FarmError> {
        let mut staged = self.farms.clone();
        let count = farms.len();
        for farm in farms {
            staged.insert(farm)?;
        }
        self.commit_farms(staged)?;
        info!(count, "farms imported");
        Ok(count)
    }

    // --- partners ---

    pub fn add_partner(&mut self, partner: Partner) -> Result<Partner, FarmError> {
        let mut staged = self.partners.clone();
        let added = staged.insert(partner)?.clone();
        self.commit_partners(staged)?;
        info!(id = %added.id, name = %added.name, "partner added");
        Ok(added)
    }

    pub fn update_partner(&mut self, id: Uuid, partner: Partner) -> Result<Partner, FarmError> {
        let mut staged = self.partners.clone();
        let updated = staged.update(id, partner)?.clone();
        self.commit_partners(staged)?;
        info!(id = %id, "partner updated");
        Ok(updated)
    }

    pub fn remove_partner(&mut self, id: Uuid) -> Result<Partner, FarmError> {
        let mut staged = self.partners.clone();
        let removed = staged.remove(id)?;
        self.commit_partners(staged)?;
        info!(id = %id, name = %removed.name, "partner removed");
        Ok(removed)
    }

    // --- whitepaper ---

    pub fn set_whitepaper(&mut self, record: WhitepaperRecord) -> Result<(), FarmError> {
        self.store
            .set(WHITEPAPER_KEY, &serde_json::to_string(&record)?)?;
        self.whitepaper = Some(record);
        Ok(())
    }

    // --- whole state ---

    pub fn snapshot(&self) -> PortalSnapshot {
        PortalSnapshot {
            farms: self.farms.list().to_vec(),
            partners: self.partners.list().to_vec(),
        }
    }

    /// Replace both collections with a snapshot. Every record is checked
    /// and both keys are written in one batch before anything changes.
    pub fn restore(&mut self, snapshot: PortalSnapshot) -> Result<(), FarmError> {
        let farms = Collection::from_records(snapshot.farms)?;
        let partners = Collection::from_records(snapshot.partners)?;
        let farms_json = serde_json::to_string(farms.list())?;
        let partners_json = serde_json::to_string(partners.list())?;
        self.store.write_batch(&[
            (FARMS_KEY, Some(farms_json.as_str())),
            (PARTNERS_KEY, Some(partners_json.as_str())),
        ])?;
        self.farms = farms;
        self.partners = partners;
        info!("portal state restored from snapshot");
        Ok(())
    }

    /// Back to the sample records, without a whitepaper.
    pub fn reset(&mut self) -> Result<(), FarmError> {
        let farms = Collection::new(sample_farms());
        let partners = Collection::new(sample_partners());
        let farms_json = serde_json::to_string(farms.list())?;
        let partners_json = serde_json::to_string(partners.list())?;
        self.store.write_batch(&[
            (FARMS_KEY, Some(farms_json.as_str())),
            (PARTNERS_KEY, Some(partners_json.as_str())),
            (WHITEPAPER_KEY, None),
        ])?;
        self.farms = farms;
        self.partners = partners;
        self.whitepaper = None;
        info!("portal state reset to sample data");
        Ok(())
    }

    fn commit_farms(&mut self, staged: Collection<Farm>) -> Result<(), FarmError> {
        persist(&mut self.store, FARMS_KEY, staged.list())?;
        self.farms = staged;
        Ok(())
    }

    fn commit_partners(&mut self, staged: Collection<Partner>) -> Result<(), FarmError> {
        persist(&mut self.store, PARTNERS_KEY, staged.list())?;
        self.partners = staged;
        Ok(())
    }
}

/// Stored records must satisfy the same rules as inserted ones.
fn load_or_seed<S, T, F>(store: &mut S, key: &str, seed: F) -> Result<Collection<T>, FarmError>
where
    S: KeyValueStore,
    T: Record + DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    match store.get(key)? {
        Some(json) => Collection::from_records(serde_json::from_str(&json)?),
        None => {
            let records = seed();
            persist(store, key, &records)?;
            info!(key, count = records.len(), "seeded sample records");
            Ok(Collection::new(records))
        }
    }
}

fn persist<S: KeyValueStore, T: Serialize>(
    store: &mut S,
    key: &str,
    records: &[T],
) -> Result<(), FarmError> {
    store.set(key, &serde_json::to_string(records)?)
}
