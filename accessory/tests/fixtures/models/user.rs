//! A model whose accessors are generated into `user_accessor.rs` by the
//! `generated_accessors_compile` test.

use super::common::ids;
use accessory::Accessors;
use std::time as t;

#[path = "user_accessor.rs"]
mod user_accessor;

#[derive(Accessors, Debug)]
pub struct User {
    #[accessor(getter)]
    id: ids::UserId,
    #[accessor(getter, setter)]
    name: String,
    #[accessor(getter = "ttl", setter = "extend")]
    timeout: t::Duration,
    password_hash: String,
}

impl User {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id: ids::UserId(id),
            name: name.to_string(),
            timeout: t::Duration::from_secs(30),
            password_hash: String::new(),
        }
    }

    pub fn has_password(&self) -> bool {
        !self.password_hash.is_empty()
    }
}
