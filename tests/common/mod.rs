use std::sync::Arc;
use sample_api::db::{memory_service::MemoryService, UserStore};
use sample_api::utils::upload::{CollisionPolicy, UploadStore};
use uuid::Uuid;

pub mod client;

pub struct TestContext {
    pub db: UserStore,
    pub uploads: UploadStore,
}

impl TestContext {
    pub async fn new() -> TestContext {
        Self::with_policy(CollisionPolicy::Overwrite).await
    }

    pub async fn with_policy(policy: CollisionPolicy) -> TestContext {
        let root = std::env::temp_dir().join(format!("sample-api-static-{}", Uuid::new_v4()));
        let uploads = UploadStore::new(root, policy);
        uploads.ensure_root().await.expect("Failed to create static dir");

        TestContext {
            db: Arc::new(MemoryService::with_fixture_users()),
            uploads,
        }
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(self.uploads.root());
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use sample_api::types::item::Item;
    use sample_api::types::user::RUserRegister;

    pub fn sample_item(tax: Option<f64>) -> Item {
        Item {
            name: "Foo".to_string(),
            description: Some("A very nice Item".to_string()),
            price: 10.0,
            tax,
        }
    }

    pub fn sample_registration() -> RUserRegister {
        RUserRegister {
            name: "Test User".to_string(),
            password: "hunter2".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    pub fn login_form<'a>(username: &'a str, password: &'a str) -> Vec<(&'static str, &'a str)> {
        vec![("username", username), ("password", password)]
    }
}
