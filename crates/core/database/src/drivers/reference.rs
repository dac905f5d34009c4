use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::Event;

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub events: Arc<Mutex<HashMap<String, Event>>>,
    }
);

impl ReferenceDb {
    /// Forget every stored document
    pub async fn clear(&self) {
        self.events.lock().await.clear();
    }
}
