//! Code generated by accessory; DO NOT EDIT.
//!
//! Accessors for `User` in module `models`.
#![allow(unused_imports)]
use super::*;
use super::super::common::ids;
use std::time as t;
impl User {
    /// Returns a reference to `id`.
    pub fn id(&self) -> &ids::UserId {
        let u = self;
        &u.id
    }
    /// Returns a reference to `name`.
    pub fn name(&self) -> &String {
        let u = self;
        &u.name
    }
    /// Sets `name`.
    pub fn set_name(&mut self, val: String) {
        let u = self;
        u.name = val;
    }
    /// Returns a reference to `timeout`.
    pub fn ttl(&self) -> &t::Duration {
        let u = self;
        &u.timeout
    }
    /// Sets `timeout`.
    pub fn extend(&mut self, val: t::Duration) {
        let u = self;
        u.timeout = val;
    }
}
