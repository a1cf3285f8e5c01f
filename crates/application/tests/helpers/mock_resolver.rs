#![allow(dead_code)]

use async_trait::async_trait;
use dnslookup_application::ports::RecordLookup;
use dnslookup_domain::{LookupError, MxRecord};
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ============================================================================
// Mock RecordLookup
// ============================================================================

/// Canned resolver that records how many calls it received.
pub struct MockResolver {
    ip: Mutex<Result<Vec<IpAddr>, LookupError>>,
    mx: Mutex<Result<Vec<MxRecord>, LookupError>>,
    cname: Mutex<Result<String, LookupError>>,
    ip_calls: AtomicUsize,
    mx_calls: AtomicUsize,
    cname_calls: AtomicUsize,
}

impl MockResolver {
    pub fn new() -> Self {
        Self {
            ip: Mutex::new(Ok(Vec::new())),
            mx: Mutex::new(Ok(Vec::new())),
            cname: Mutex::new(Err(LookupError::NoData("unset".to_string()))),
            ip_calls: AtomicUsize::new(0),
            mx_calls: AtomicUsize::new(0),
            cname_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_ips(self, ips: &[&str]) -> Self {
        *self.ip.lock().unwrap() = Ok(ips.iter().map(|ip| ip.parse().unwrap()).collect());
        self
    }

    pub fn with_ip_error(self, error: LookupError) -> Self {
        *self.ip.lock().unwrap() = Err(error);
        self
    }

    pub fn with_mx(self, records: &[(&str, u16)]) -> Self {
        *self.mx.lock().unwrap() = Ok(records
            .iter()
            .map(|(host, pref)| MxRecord::new(*host, *pref))
            .collect());
        self
    }

    pub fn with_mx_error(self, error: LookupError) -> Self {
        *self.mx.lock().unwrap() = Err(error);
        self
    }

    pub fn with_cname(self, target: &str) -> Self {
        *self.cname.lock().unwrap() = Ok(target.to_string());
        self
    }

    pub fn with_cname_error(self, error: LookupError) -> Self {
        *self.cname.lock().unwrap() = Err(error);
        self
    }

    pub fn ip_calls(&self) -> usize {
        self.ip_calls.load(Ordering::SeqCst)
    }

    pub fn mx_calls(&self) -> usize {
        self.mx_calls.load(Ordering::SeqCst)
    }

    pub fn cname_calls(&self) -> usize {
        self.cname_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.ip_calls() + self.mx_calls() + self.cname_calls()
    }
}

impl Default for MockResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordLookup for MockResolver {
    async fn lookup_ip(&self, _domain: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.ip_calls.fetch_add(1, Ordering::SeqCst);
        self.ip.lock().unwrap().clone()
    }

    async fn lookup_mx(&self, _domain: &str) -> Result<Vec<MxRecord>, LookupError> {
        self.mx_calls.fetch_add(1, Ordering::SeqCst);
        self.mx.lock().unwrap().clone()
    }

    async fn lookup_cname(&self, _domain: &str) -> Result<String, LookupError> {
        self.cname_calls.fetch_add(1, Ordering::SeqCst);
        self.cname.lock().unwrap().clone()
    }
}
