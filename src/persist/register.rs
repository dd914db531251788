use crate::errors::Result;
use crate::persist::StateStore;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedStateStoreFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn StateStore>>> + Send>>;
pub type StateStoreConstructor = Arc<dyn Fn() -> BoxedStateStoreFuture + Send + Sync>;

static STATE_STORE_REGISTRY: Lazy<RwLock<HashMap<String, StateStoreConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_state_store_plugin<S: Into<String>>(name: S, constructor: StateStoreConstructor) {
    let name = name.into();
    let mut registry = STATE_STORE_REGISTRY
        .write()
        .expect("State store registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_state_store_plugin(name: &str) -> Option<StateStoreConstructor> {
    STATE_STORE_REGISTRY
        .read()
        .expect("State store registry lock poisoned")
        .get(name)
        .cloned()
}

pub fn debug_state_store_registry() {
    let registry = STATE_STORE_REGISTRY
        .read()
        .expect("State store registry lock poisoned");
    if registry.is_empty() {
        tracing::debug!("No state store plugins registered.");
    } else {
        tracing::debug!("Registered state store plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}

/// 声明并自动注册一个持久化后端插件
///
/// 后端类型需提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_state_store_plugin {
    ($name:literal, $ty:ty) => {
        #[ctor::ctor]
        fn __register_state_store_plugin() {
            $crate::persist::register::register_state_store_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let store = <$ty>::new()
                            .map_err($crate::errors::StrideError::store_operation)?;
                        Ok(Box::new(store) as Box<dyn $crate::persist::StateStore>)
                    }) as $crate::persist::register::BoxedStateStoreFuture
                }),
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_backends_registered() {
        // ctor 在测试进程启动时注册内置后端
        assert!(get_state_store_plugin("json_file").is_some());
        assert!(get_state_store_plugin("memory").is_some());
        assert!(get_state_store_plugin("sqlite").is_none());
    }
}
