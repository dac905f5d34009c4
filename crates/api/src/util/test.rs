use std::ops::Deref;

use fether_database::{Database, DatabaseInfo};
use rand::distributions::Alphanumeric;
use rand::Rng;
use rocket::local::asynchronous::Client;

pub struct TestHarness {
    pub db: Database,
    pub client: Client,
}

impl TestHarness {
    pub async fn new() -> TestHarness {
        dotenv::dotenv().ok();

        let db = DatabaseInfo::Reference
            .connect()
            .await
            .expect("Database connection failed.");

        let client = Client::tracked(crate::web(db.clone()).await)
            .await
            .expect("valid rocket instance");

        TestHarness { db, client }
    }

    pub fn rand_string() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(20)
            .map(char::from)
            .collect()
    }
}

impl Deref for TestHarness {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}
