use crate::Error;
use futures::future::BoxFuture;
use futures::future::Shared;
use futures::FutureExt;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::Mutex;

type Flight<V> = Shared<BoxFuture<'static, Result<V, Error>>>;

enum Entry<V> {
    Pending(Flight<V>),
    Ready(V),
}

/// Single-flight memo table.
///
/// A request for a key either returns the finished value, joins the
/// computation already in flight for that key, or spawns a new one on the
/// current tokio runtime. Each key is computed at most once and moves from
/// pending to ready exactly once. Entries are never evicted.
///
/// A failed computation stays pending with its error, so every waiter and
/// every later request for the key sees the same error.
pub struct Memo<K, V> {
    entries: Mutex<HashMap<K, Entry<V>>>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<K, V> Memo<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Number of keys ever requested, pending or ready.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|map| map.len()).unwrap_or_default()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Number of keys whose value is known.
    pub fn ready(&self) -> usize {
        self.entries
            .lock()
            .map(|map| {
                map.values()
                    .filter(|e| matches!(e, Entry::Ready(_)))
                    .count()
            })
            .unwrap_or_default()
    }

    /// Resolves `key`, running `compute` only if nobody has asked before.
    ///
    /// Must be called from within a tokio runtime. `compute` only builds the
    /// future; the work itself runs on a spawned task.
    pub fn fetch<F>(self: &Arc<Self>, key: K, compute: F) -> BoxFuture<'static, Result<V, Error>>
    where
        F: FnOnce() -> BoxFuture<'static, Result<V, Error>>,
    {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(_) => return futures::future::ready(Err(Error::illegal("memo lock poisoned"))).boxed(),
        };
        match entries.get(&key) {
            Some(Entry::Ready(value)) => return futures::future::ready(Ok(value.clone())).boxed(),
            Some(Entry::Pending(flight)) => return flight.clone().boxed(),
            None => {}
        }
        let memo = Arc::clone(self);
        let settled = key.clone();
        let work = compute();
        let flight = tokio::spawn(async move {
            let result = work.await;
            if let Ok(value) = &result {
                memo.settle(settled, value.clone());
            }
            result
        })
        .map(|joined| match joined {
            Ok(result) => result,
            Err(e) => Err(Error::illegal(format!("evaluation task failed: {}", e))),
        })
        .boxed()
        .shared();
        entries.insert(key, Entry::Pending(flight.clone()));
        flight.boxed()
    }

    fn settle(&self, key: K, value: V) {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.insert(key, Entry::Ready(value));
            }
            Err(_) => log::warn!("memo lock poisoned, result left pending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    fn square(calls: Arc<AtomicUsize>, n: u64) -> BoxFuture<'static, Result<u64, Error>> {
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            Ok(n * n)
        }
        .boxed()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_requests_compute_once() {
        let memo = Arc::new(Memo::<u64, u64>::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let requests = (0..16)
            .map(|_| {
                let calls = Arc::clone(&calls);
                memo.fetch(7, move || square(calls, 7))
            })
            .collect::<Vec<_>>();
        let results = futures::future::join_all(requests).await;
        assert!(results.into_iter().all(|r| r == Ok(49)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(memo.len(), 1);
        assert_eq!(memo.ready(), 1);
    }

    #[tokio::test]
    async fn finished_values_are_reused() {
        let memo = Arc::new(Memo::<u64, u64>::default());
        let calls = Arc::new(AtomicUsize::new(0));
        for n in [3, 4, 3, 4, 3] {
            let calls = Arc::clone(&calls);
            assert_eq!(memo.fetch(n, move || square(calls, n)).await, Ok(n * n));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(memo.len(), 2);
    }

    #[tokio::test]
    async fn errors_are_shared() {
        let memo = Arc::new(Memo::<u64, u64>::default());
        let fail = || futures::future::ready(Err(Error::ExhaustedDeck)).boxed();
        assert_eq!(memo.fetch(1, fail).await, Err(Error::ExhaustedDeck));
        assert_eq!(memo.fetch(1, fail).await, Err(Error::ExhaustedDeck));
        assert_eq!(memo.ready(), 0);
    }
}
