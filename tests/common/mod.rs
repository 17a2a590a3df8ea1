//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use oriel::{
    HostContext, NavigationError, RectPx, SessionRecord, SessionStore, SizePx, StoreError,
    WindowManager,
};

pub const VIEWPORT: SizePx = SizePx {
    width: 1280.0,
    height: 800.0,
};

pub const INITIAL: RectPx = RectPx {
    left: 96.0,
    top: 72.0,
    width: 720.0,
    height: 480.0,
};

/// Store backend whose record can be inspected from outside the
/// manager, and shared between "processes" in restore tests.
#[derive(Clone, Default)]
pub struct SharedStore {
    record: Arc<Mutex<Option<SessionRecord>>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> Option<SessionRecord> {
        self.record.lock().unwrap().clone()
    }
}

impl SessionStore for SharedStore {
    fn load(&mut self) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.record.lock().unwrap().clone())
    }

    fn save(&mut self, record: &SessionRecord) -> Result<(), StoreError> {
        *self.record.lock().unwrap() = Some(record.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        *self.record.lock().unwrap() = None;
        Ok(())
    }
}

/// Host context spy: scriptable embedding flag, recorded navigations.
#[derive(Clone, Default)]
pub struct SpyHost {
    pub embedded: bool,
    pub block_top: bool,
    top: Arc<Mutex<Vec<String>>>,
    here: Arc<Mutex<Vec<String>>>,
}

impl SpyHost {
    pub fn embedded() -> Self {
        Self {
            embedded: true,
            ..Self::default()
        }
    }

    pub fn embedded_with_blocked_top() -> Self {
        Self {
            embedded: true,
            block_top: true,
            ..Self::default()
        }
    }

    pub fn top_navigations(&self) -> Vec<String> {
        self.top.lock().unwrap().clone()
    }

    pub fn here_navigations(&self) -> Vec<String> {
        self.here.lock().unwrap().clone()
    }
}

impl HostContext for SpyHost {
    fn is_embedded(&self) -> bool {
        self.embedded
    }

    fn navigate_top(&self, path: &str) -> Result<(), NavigationError> {
        if self.block_top {
            return Err(NavigationError::Blocked("cross-origin frame".to_string()));
        }
        self.top.lock().unwrap().push(path.to_string());
        Ok(())
    }

    fn navigate_here(&self, path: &str) {
        self.here.lock().unwrap().push(path.to_string());
    }
}

pub fn manager_with(store: SharedStore, host: SpyHost) -> WindowManager {
    WindowManager::new("view", VIEWPORT, INITIAL, Box::new(store), Box::new(host))
}

pub fn manager() -> WindowManager {
    manager_with(SharedStore::new(), SpyHost::default())
}
