//! Maintenance of the well-known id index entry.

use tracing::debug;

use crate::codec;
use crate::constants::EVENT_INDEX_KEY;
use crate::error::Result;
use crate::ledger::EventLedger;
use crate::store::RemoteStore;

impl<S: RemoteStore> EventLedger<S> {
    /// Read the ordered set of known event ids.
    ///
    /// An absent or malformed index blob reads as the empty set; the ledger
    /// may simply never have been written to.
    pub async fn read_index(&self) -> Result<Vec<String>> {
        let raw = self.store.get_data(EVENT_INDEX_KEY).await?;
        Ok(codec::decode_index(&raw))
    }

    /// Append `id` to the index unless already present.
    ///
    /// Read-modify-write over the whole set. The store interface offers no
    /// compare-and-swap, so two concurrent appends race: whichever write
    /// lands second overwrites the first and silently drops its id, leaving
    /// an orphaned (invisible) record blob. Last write wins.
    pub(crate) async fn append_index(&self, id: &str) -> Result<()> {
        let mut ids = self.read_index().await?;
        if ids.iter().any(|existing| existing == id) {
            debug!(id, "id already indexed; skipping append");
            return Ok(());
        }
        ids.push(id.to_string());
        self.store
            .set_data(EVENT_INDEX_KEY, codec::encode_index(&ids)?)
            .await?;
        Ok(())
    }
}
