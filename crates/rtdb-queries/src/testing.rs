//! Test doubles

use mockall::mock;
use serde_json::Value;
use url::Url;

use rtdb_core::{ApiClient, RtdbResult};

mock! {
    pub Client {}

    impl ApiClient for Client {
        fn get(&self, uri: &Url) -> RtdbResult<Value>;
    }
}
