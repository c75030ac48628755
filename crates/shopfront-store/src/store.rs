//! # Local Store
//!
//! Slot-based persistence over the platform data directory.
//!
//! ## Corruption Policy
//! The original storefront kept these payloads in browser local storage and
//! died at startup on a malformed cart. Here a bad payload is a warning and
//! an empty slot, never a crash: the user loses a cart, not the app.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::envelope::Envelope;
use crate::error::{StoreError, StoreResult};
use shopfront_core::CartLine;

/// Slot file for the persisted cart.
const CART_SLOT: &str = "cart";

/// Slot file for the persisted auth token.
const AUTH_SLOT: &str = "auth";

// =============================================================================
// Local Store
// =============================================================================

/// Persistent key-value slots under one directory.
///
/// Cheap to clone; holds only the directory path.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Opens a store rooted at the given directory, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(?dir, "local store opened");
        Ok(LocalStore { dir })
    }

    /// Opens the store in the platform application data directory.
    ///
    /// - Linux:   ~/.local/share/shopfront
    /// - macOS:   ~/Library/Application Support/com.shopfront.app
    /// - Windows: %APPDATA%/shopfront/app/data
    pub fn open_default() -> StoreResult<Self> {
        let dirs = ProjectDirs::from("com", "shopfront", "shopfront").ok_or(StoreError::NoDataDir)?;
        Self::new(dirs.data_dir())
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }

    // =========================================================================
    // Generic slot operations
    // =========================================================================

    /// Loads a slot, falling back to the default value.
    ///
    /// ## Fallback Policy
    /// - missing file: default (first run)
    /// - unreadable file, corrupt JSON, wrong envelope version, or payload
    ///   shape mismatch: default, with a warning in the log
    ///
    /// Loads never fail the caller.
    pub fn load<T: DeserializeOwned + Default>(&self, slot: &str) -> T {
        let path = self.slot_path(slot);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                warn!(?path, error = %e, "could not read slot, starting empty");
                return T::default();
            }
        };

        match serde_json::from_str::<Envelope<T>>(&raw) {
            Ok(envelope) if envelope.is_compatible() => envelope.data,
            Ok(envelope) => {
                warn!(
                    ?path,
                    version = envelope.version,
                    "incompatible slot version, starting empty"
                );
                T::default()
            }
            Err(e) => {
                warn!(?path, error = %e, "corrupt slot payload, starting empty");
                T::default()
            }
        }
    }

    /// Saves a slot atomically: write to a temp file, then rename over the
    /// slot so a crash mid-write cannot leave a truncated payload.
    pub fn save<T: Serialize>(&self, slot: &str, value: &T) -> StoreResult<()> {
        let path = self.slot_path(slot);
        let tmp = self.dir.join(format!("{}.json.tmp", slot));

        let body = serde_json::to_string_pretty(&Envelope::new(value))?;
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &path)?;

        debug!(?path, "slot saved");
        Ok(())
    }

    /// Removes a slot. Idempotent: clearing an absent slot is a no-op.
    pub fn clear(&self, slot: &str) -> StoreResult<()> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    // =========================================================================
    // Typed slots
    // =========================================================================

    /// Loads the persisted cart lines (empty on first run or corruption).
    pub fn load_cart(&self) -> Vec<CartLine> {
        self.load(CART_SLOT)
    }

    /// Persists the full cart; called after every cart mutation.
    pub fn save_cart(&self, lines: &[CartLine]) -> StoreResult<()> {
        self.save(CART_SLOT, &lines)
    }

    /// Loads the persisted auth token, if any.
    pub fn load_token(&self) -> Option<String> {
        self.load(AUTH_SLOT)
    }

    /// Persists the auth token.
    pub fn save_token(&self, token: &str) -> StoreResult<()> {
        self.save(AUTH_SLOT, &Some(token.to_string()))
    }

    /// Removes the persisted auth token. Idempotent.
    pub fn clear_token(&self) -> StoreResult<()> {
        self.clear(AUTH_SLOT)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{Price, Product, Rating};

    fn line(id: u64, quantity: u32) -> CartLine {
        CartLine {
            product: Product {
                id,
                title: format!("Product {}", id),
                price: Price::from_cents(999),
                description: "test".to_string(),
                category: "test".to_string(),
                image: "https://example.com/p.jpg".to_string(),
                rating: Rating { rate: 4.0, count: 3 },
            },
            quantity,
        }
    }

    fn temp_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_cart_round_trip_preserves_order_and_quantities() {
        let (_dir, store) = temp_store();
        let lines = vec![line(3, 2), line(1, 5), line(2, 1)];

        store.save_cart(&lines).unwrap();
        let restored = store.load_cart();

        assert_eq!(restored, lines);
    }

    #[test]
    fn test_missing_cart_loads_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load_cart().is_empty());
    }

    #[test]
    fn test_corrupt_cart_falls_back_to_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.dir().join("cart.json"), "{not json at all").unwrap();

        assert!(store.load_cart().is_empty());
    }

    #[test]
    fn test_incompatible_version_falls_back_to_empty() {
        let (_dir, store) = temp_store();
        fs::write(
            store.dir().join("cart.json"),
            r#"{"version":99,"savedAt":"2024-01-01T00:00:00Z","data":[]}"#,
        )
        .unwrap();

        assert!(store.load_cart().is_empty());
    }

    #[test]
    fn test_token_round_trip() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load_token(), None);

        store.save_token("abc123").unwrap();
        assert_eq!(store.load_token(), Some("abc123".to_string()));
    }

    #[test]
    fn test_clear_token_is_idempotent() {
        let (_dir, store) = temp_store();
        store.save_token("abc123").unwrap();

        store.clear_token().unwrap();
        assert_eq!(store.load_token(), None);

        // Second clear is a no-op, not an error
        store.clear_token().unwrap();
    }

    #[test]
    fn test_save_overwrites_previous_payload() {
        let (_dir, store) = temp_store();
        store.save_cart(&[line(1, 1), line(2, 1)]).unwrap();
        store.save_cart(&[line(2, 7)]).unwrap();

        let restored = store.load_cart();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].quantity, 7);
    }
}
