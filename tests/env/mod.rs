// Tests that mutate process environment variables.
// They live in their own binary and take ENV_LOCK so no other thread reads the
// environment while a variable is being set.

use std::sync::{Mutex, MutexGuard};


static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
