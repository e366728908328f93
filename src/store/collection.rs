use uuid::Uuid;

use super::Record;
use crate::error::FarmError;

/// Ordered in-memory records with validated CRUD operations.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Build a collection under the same rules as [`Collection::insert`]:
    /// the first invalid or duplicate record is an error.
    pub fn from_records(records: Vec<T>) -> Result<Self, FarmError> {
        let mut collection = Self::default();
        for record in records {
            collection.insert(record)?;
        }
        Ok(collection)
    }

    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Resolve a full id or a unique id prefix, as typed on the command line.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<Uuid, FarmError> {
        if let Ok(id) = Uuid::parse_str(id_or_prefix) {
            return Ok(id);
        }
        let prefix = id_or_prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Err(FarmError::NotFound(format!("empty {} id", T::KIND)));
        }
        let mut matches = self
            .records
            .iter()
            .filter(|r| r.id().to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(r), None) => Ok(r.id()),
            (Some(_), Some(_)) => Err(FarmError::NotFound(format!(
                "{} id prefix '{prefix}' is ambiguous",
                T::KIND
            ))),
            (None, _) => Err(FarmError::NotFound(format!(
                "no {} with id '{prefix}'",
                T::KIND
            ))),
        }
    }

    /// Add a record. It must validate and neither its id nor its name
    /// (case-insensitive) may already be present.
    pub fn insert(&mut self, record: T) -> Result<&T, FarmError> {
        check_valid(&record)?;
        if self.get(record.id()).is_some() {
            return Err(FarmError::Duplicate(format!(
                "{} id {} already exists",
                T::KIND,
                record.id()
            )));
        }
        self.check_name_free(&record, None)?;
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Replace the record with `id`. The stored id is kept whatever the
    /// replacement carries.
    pub fn update(&mut self, id: Uuid, mut record: T) -> Result<&T, FarmError> {
        let idx = self.position(id)?;
        record.set_id(id);
        check_valid(&record)?;
        self.check_name_free(&record, Some(id))?;
        self.records[idx] = record;
        Ok(&self.records[idx])
    }

    pub fn remove(&mut self, id: Uuid) -> Result<T, FarmError> {
        let idx = self.position(id)?;
        Ok(self.records.remove(idx))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.records
    }

    fn position(&self, id: Uuid) -> Result<usize, FarmError> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| FarmError::NotFound(format!("{} {id}", T::KIND)))
    }

    fn check_name_free(&self, record: &T, except: Option<Uuid>) -> Result<(), FarmError> {
        let name = record.name().trim().to_lowercase();
        let taken = self
            .records
            .iter()
            .filter(|r| Some(r.id()) != except)
            .any(|r| r.name().trim().to_lowercase() == name);
        if taken {
            return Err(FarmError::Duplicate(format!(
                "a {} named '{}' already exists",
                T::KIND,
                record.name()
            )));
        }
        Ok(())
    }
}

fn check_valid<T: Record>(record: &T) -> Result<(), FarmError> {
    let issues = record.validate_all();
    if issues.is_empty() {
        return Ok(());
    }
    let details = issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(FarmError::ValidationError(format!(
        "{} '{}': {details}",
        T::KIND,
        record.name()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::{sample_farms, sample_partners};
    use crate::models::{Farm, Partner, PartnerKind};

    fn farms() -> Collection<Farm> {
        Collection::new(sample_farms())
    }

    #[test]
    fn test_list_and_get() {
        let c = farms();
        assert_eq!(c.len(), 3);
        let first = &c.list()[0];
        assert_eq!(c.get(first.id).unwrap().name, first.name);
        assert!(c.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_from_records_checks_each_record() {
        let c = Collection::from_records(sample_farms()).unwrap();
        assert_eq!(c.len(), 3);

        let mut twice = sample_farms();
        twice.push(twice[0].clone());
        assert!(matches!(
            Collection::from_records(twice),
            Err(FarmError::Duplicate(_))
        ));

        let mut invalid = sample_farms();
        invalid[1].area_hectares = -5.0;
        assert!(matches!(
            Collection::from_records(invalid),
            Err(FarmError::ValidationError(_))
        ));
    }

    #[test]
    fn test_insert_valid() {
        let mut c = farms();
        let farm = Farm::new("Vohemar Plot", "Vohemar, Madagascar", 3.0, 6000, 5000, 22.0);
        let id = farm.id;
        c.insert(farm).unwrap();
        assert_eq!(c.len(), 4);
        assert!(c.get(id).is_some());
    }

    #[test]
    fn test_insert_invalid_lists_every_issue() {
        let mut c = farms();
        let farm = Farm::new("", "", 0.0, 0, 0, 0.0);
        let err = c.insert(farm).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, FarmError::ValidationError(_)));
        assert!(msg.contains("name"));
        assert!(msg.contains("area_hectares"));
        assert!(msg.contains("token_price"));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_insert_duplicate_name_case_insensitive() {
        let mut c = farms();
        let farm = Farm::new("sambava estate", "Elsewhere", 1.0, 10, 10, 20.0);
        assert!(matches!(c.insert(farm), Err(FarmError::Duplicate(_))));
    }

    #[test]
    fn test_insert_duplicate_id() {
        let mut c = farms();
        let mut farm = Farm::new("Unique", "Somewhere", 1.0, 10, 10, 20.0);
        farm.id = c.list()[0].id;
        assert!(matches!(c.insert(farm), Err(FarmError::Duplicate(_))));
    }

    #[test]
    fn test_update_keeps_id() {
        let mut c = farms();
        let id = c.list()[1].id;
        let mut changed = c.list()[1].clone();
        changed.id = Uuid::new_v4();
        changed.tokens_issued = 100;
        let updated = c.update(id, changed).unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.tokens_issued, 100);
    }

    #[test]
    fn test_update_may_keep_own_name() {
        let mut c = farms();
        let original = c.list()[0].clone();
        assert!(c.update(original.id, original.clone()).is_ok());
    }

    #[test]
    fn test_update_rejects_other_name() {
        let mut c = farms();
        let mut changed = c.list()[0].clone();
        changed.name = c.list()[1].name.clone();
        assert!(matches!(
            c.update(changed.id, changed),
            Err(FarmError::Duplicate(_))
        ));
    }

    #[test]
    fn test_update_invalid_leaves_record() {
        let mut c = farms();
        let mut changed = c.list()[0].clone();
        let before = changed.clone();
        changed.area_hectares = -3.0;
        assert!(c.update(changed.id, changed).is_err());
        assert_eq!(c.list()[0], before);
    }

    #[test]
    fn test_update_missing() {
        let mut c = farms();
        let farm = c.list()[0].clone();
        assert!(matches!(
            c.update(Uuid::new_v4(), farm),
            Err(FarmError::NotFound(_))
        ));
    }

    #[test]
    fn test_remove() {
        let mut c = farms();
        let id = c.list()[0].id;
        let removed = c.remove(id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(c.len(), 2);
        assert!(matches!(c.remove(id), Err(FarmError::NotFound(_))));
    }

    #[test]
    fn test_resolve_prefix() {
        let mut c = Collection::new(sample_partners());
        let id = Uuid::from_u128(0xbeef_0000_0000_4000_8000_0000_0000_0001);
        let mut partner = Partner::new("Vanilla Labs", PartnerKind::Technology, "Kenya");
        partner.id = id;
        c.insert(partner).unwrap();

        assert_eq!(c.resolve(&id.to_string()).unwrap(), id);
        assert_eq!(c.resolve("beef").unwrap(), id);
        assert_eq!(c.resolve("BEEF0000").unwrap(), id);
        // Sample ids share a long prefix.
        assert!(c.resolve("5a3ba0a1").is_err());
        assert!(c.resolve("ffff").is_err());
        assert!(c.resolve("").is_err());
    }

    #[test]
    fn test_partner_collection() {
        let mut c: Collection<Partner> = Collection::default();
        assert!(c.is_empty());
        c.insert(Partner::new("Vanilla Labs", PartnerKind::Technology, "Kenya"))
            .unwrap();
        assert_eq!(c.into_vec().len(), 1);
    }
}
