use log::debug;

use crate::backend::LedgerContext;
use crate::core::error::{RegistryError, RegistryResult};
use crate::core::investor::{Balance, Investor};

/// Contract logic for the investor registry.
///
/// The registry holds no state of its own; every operation runs against the
/// ledger context passed to it. An existence check and the write that
/// follows it are two separate ledger calls — conflicting proposals for the
/// same id are settled by the platform's commit-time validation, not here.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvestorRegistry;

impl InvestorRegistry {
    pub fn new() -> InvestorRegistry {
        InvestorRegistry
    }

    /// Creates a new record under `id`. Fails with
    /// [`RegistryError::AlreadyExists`] if the key is taken.
    pub fn register_investor<L: LedgerContext>(
        &self,
        ledger: &mut L,
        id: &str,
        name: &str,
        email: &str,
        balance: Balance,
    ) -> RegistryResult<()> {
        if self.investor_exists(ledger, id)? {
            return Err(RegistryError::AlreadyExists(id.to_owned()));
        }

        debug!("registering investor {}", id);
        self.put_investor(ledger, &Investor::new(id, name, email, balance))
    }

    /// Replaces the record under `id` with the given fields. All four
    /// fields are overwritten; there is no partial update. Fails with
    /// [`RegistryError::NotFound`] if the key is unset, in which case
    /// nothing is written.
    pub fn update_investor<L: LedgerContext>(
        &self,
        ledger: &mut L,
        id: &str,
        name: &str,
        email: &str,
        balance: Balance,
    ) -> RegistryResult<()> {
        if !self.investor_exists(ledger, id)? {
            return Err(RegistryError::NotFound(id.to_owned()));
        }

        debug!("updating investor {}", id);
        self.put_investor(ledger, &Investor::new(id, name, email, balance))
    }

    /// Reads the record stored under `id`.
    pub fn view_investor<L: LedgerContext>(&self, ledger: &L, id: &str) -> RegistryResult<Investor> {
        let bytes = ledger.get_state(id).map_err(RegistryError::StorageRead)?;
        match bytes {
            Some(bytes) if !bytes.is_empty() => {
                serde_json::from_slice(&bytes).map_err(RegistryError::Decoding)
            }
            _ => Err(RegistryError::NotFound(id.to_owned())),
        }
    }

    /// Tells whether a record exists under `id`. A key set to an empty
    /// value counts as absent.
    pub fn investor_exists<L: LedgerContext>(&self, ledger: &L, id: &str) -> RegistryResult<bool> {
        let bytes = ledger.get_state(id).map_err(RegistryError::StorageRead)?;
        Ok(bytes.map_or(false, |b| !b.is_empty()))
    }

    fn put_investor<L: LedgerContext>(&self, ledger: &mut L, investor: &Investor) -> RegistryResult<()> {
        let bytes = serde_json::to_vec(investor).map_err(RegistryError::Encoding)?;
        ledger
            .put_state(&investor.id, &bytes)
            .map_err(RegistryError::StorageWrite)
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::{BackendError, LedgerContext, MemoryLedger};
    use crate::core::{Investor, InvestorRegistry, RegistryError};
    use crate::core::investor::Balance;

    use rstest::{fixture, rstest};
    use serde_json::json;

    /// Context whose reads and writes always fail.
    struct BrokenLedger;

    impl LedgerContext for BrokenLedger {
        fn get_state(&self, _key: &str) -> crate::backend::Result<Option<Vec<u8>>> {
            Err(BackendError::Unavailable("peer unreachable".to_owned()))
        }

        fn put_state(&mut self, _key: &str, _value: &[u8]) -> crate::backend::Result<()> {
            Err(BackendError::Unavailable("peer unreachable".to_owned()))
        }
    }

    /// Context that answers reads from a map but refuses every write.
    struct ReadOnlyLedger(MemoryLedger);

    impl LedgerContext for ReadOnlyLedger {
        fn get_state(&self, key: &str) -> crate::backend::Result<Option<Vec<u8>>> {
            self.0.get_state(key)
        }

        fn put_state(&mut self, _key: &str, _value: &[u8]) -> crate::backend::Result<()> {
            Err(BackendError::Unavailable("write refused".to_owned()))
        }
    }

    #[fixture]
    fn registry() -> InvestorRegistry {
        InvestorRegistry::new()
    }

    #[fixture]
    fn ledger() -> MemoryLedger {
        MemoryLedger::new()
    }

    #[rstest]
    fn register_then_view(registry: InvestorRegistry, mut ledger: MemoryLedger) {
        registry
            .register_investor(&mut ledger, "inv1", "Alice", "a@x.com", 100.0)
            .unwrap();

        let investor = registry.view_investor(&ledger, "inv1").unwrap();
        assert_eq!(investor, Investor::new("inv1", "Alice", "a@x.com", 100.0));
    }

    #[rstest]
    fn register_twice_keeps_first_record(registry: InvestorRegistry, mut ledger: MemoryLedger) {
        registry
            .register_investor(&mut ledger, "inv1", "Alice", "a@x.com", 100.0)
            .unwrap();

        let res = registry.register_investor(&mut ledger, "inv1", "Mallory", "m@x.com", 0.0);
        assert!(matches!(res, Err(RegistryError::AlreadyExists(..))));

        let investor = registry.view_investor(&ledger, "inv1").unwrap();
        assert_eq!(investor, Investor::new("inv1", "Alice", "a@x.com", 100.0));
    }

    #[rstest]
    fn update_missing_id_writes_nothing(registry: InvestorRegistry) {
        let mut ledger = ReadOnlyLedger(MemoryLedger::new());

        // a NotFound, not a refused write: the precondition short-circuits
        let res = registry.update_investor(&mut ledger, "ghost", "Alice", "a@x.com", 1.0);
        assert!(matches!(res, Err(RegistryError::NotFound(..))));
    }

    #[rstest]
    fn update_replaces_all_fields(registry: InvestorRegistry, mut ledger: MemoryLedger) {
        registry
            .register_investor(&mut ledger, "inv1", "Alice", "a@x.com", 100.0)
            .unwrap();
        registry
            .update_investor(&mut ledger, "inv1", "Alice", "a@x.com", 250.5)
            .unwrap();

        let investor = registry.view_investor(&ledger, "inv1").unwrap();
        assert_eq!(investor.balance, 250.5);
        assert_eq!(investor.name, "Alice");
        assert_eq!(investor.email, "a@x.com");
    }

    #[rstest]
    fn exists_flips_on_register(registry: InvestorRegistry, mut ledger: MemoryLedger) {
        assert!(!registry.investor_exists(&ledger, "inv1").unwrap());

        registry
            .register_investor(&mut ledger, "inv1", "Alice", "a@x.com", 100.0)
            .unwrap();

        assert!(registry.investor_exists(&ledger, "inv1").unwrap());
    }

    #[rstest]
    #[case("inv1", "Alice", "a@x.com", 100.0)]
    #[case("inv2", "", "", -42.5)]
    #[case("acct-7", "Bob Oldbuck", "bob@example.org", 0.0)]
    fn register_view_round_trip(
        registry: InvestorRegistry,
        mut ledger: MemoryLedger,
        #[case] id: &str,
        #[case] name: &str,
        #[case] email: &str,
        #[case] balance: Balance,
    ) {
        registry
            .register_investor(&mut ledger, id, name, email, balance)
            .unwrap();

        let investor = registry.view_investor(&ledger, id).unwrap();
        assert_eq!(investor, Investor::new(id, name, email, balance));
    }

    #[rstest]
    fn view_missing_id(registry: InvestorRegistry, ledger: MemoryLedger) {
        let res = registry.view_investor(&ledger, "ghost");
        assert!(matches!(res, Err(RegistryError::NotFound(..))));
    }

    #[rstest]
    fn stored_record_shape(registry: InvestorRegistry, mut ledger: MemoryLedger) {
        registry
            .register_investor(&mut ledger, "inv1", "Alice", "a@x.com", 100.0)
            .unwrap();

        let bytes = ledger.get_state("inv1").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "inv1",
                "name": "Alice",
                "email": "a@x.com",
                "balance": 100.0
            })
        );
    }

    #[rstest]
    fn read_failure_propagates(registry: InvestorRegistry) {
        let res = registry.investor_exists(&BrokenLedger, "inv1");
        assert!(matches!(res, Err(RegistryError::StorageRead(..))));

        let res = registry.register_investor(&mut BrokenLedger, "inv1", "Alice", "a@x.com", 100.0);
        assert!(matches!(res, Err(RegistryError::StorageRead(..))));
    }

    #[rstest]
    fn write_failure_propagates(registry: InvestorRegistry) {
        let mut ledger = ReadOnlyLedger(MemoryLedger::new());

        let res = registry.register_investor(&mut ledger, "inv1", "Alice", "a@x.com", 100.0);
        assert!(matches!(res, Err(RegistryError::StorageWrite(..))));
    }

    #[rstest]
    fn malformed_record_rejected(registry: InvestorRegistry, mut ledger: MemoryLedger) {
        ledger.put_state("inv1", b"not json").unwrap();

        assert!(registry.investor_exists(&ledger, "inv1").unwrap());

        let res = registry.view_investor(&ledger, "inv1");
        assert!(matches!(res, Err(RegistryError::Decoding(..))));
    }

    #[rstest]
    fn empty_value_counts_as_absent(registry: InvestorRegistry, mut ledger: MemoryLedger) {
        ledger.put_state("inv1", b"").unwrap();

        assert!(!registry.investor_exists(&ledger, "inv1").unwrap());
        let res = registry.view_investor(&ledger, "inv1");
        assert!(matches!(res, Err(RegistryError::NotFound(..))));
    }
}
