//! The article repository: three indices under fine-grained per-key locking.

use crate::article::Article;
use crate::config::Config;
use crate::error::{RepoError, RepoResult};
use crate::locks::{IdLockTable, KeyLockTable};
use crate::stats::RepoStats;
use crate::types::ArticleId;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A key index: author name or keyword to the articles listing that key,
/// in per-key insertion order.
type KeyIndex = RwLock<HashMap<String, Vec<Arc<Article>>>>;

/// Concurrent in-memory repository of articles, indexed by id, by author
/// name, and by keyword.
///
/// Mutation is serialized per key rather than globally: every operation
/// holds the lock for the article's id slot for its whole duration, and
/// touches author/keyword buckets under that key's own lock, one at a time.
/// Operations on unrelated keys never contend.
///
/// # Lock ordering
///
/// A call acquires at most one id lock (held for the call's duration) and
/// then author/keyword locks strictly one at a time, so no thread ever
/// waits for a non-id lock while holding another. The map-level `RwLock`s
/// guard only the hash tables' structure; they are acquired last and held
/// only for the individual map touch, never across a key-lock acquisition.
///
/// # Relaxed-consistency windows
///
/// Index updates are not atomic across the three indices. During an insert
/// an article becomes visible under its author and keyword keys before it
/// is visible by id; during a removal it disappears from the id index
/// first. Each per-key bucket is always internally consistent, and
/// [`Repository::validate`] holds once all mutators have returned.
pub struct Repository {
    by_id: RwLock<HashMap<ArticleId, Arc<Article>>>,
    by_author: KeyIndex,
    by_keyword: KeyIndex,
    id_locks: IdLockTable,
    author_locks: KeyLockTable,
    keyword_locks: KeyLockTable,
}

impl Repository {
    /// Creates a repository accepting ids in `[0, capacity)`.
    pub fn new(capacity: usize) -> RepoResult<Self> {
        Self::with_config(Config::new().capacity(capacity))
    }

    /// Creates a repository from a configuration.
    pub fn with_config(config: Config) -> RepoResult<Self> {
        if config.capacity == 0 {
            return Err(RepoError::ZeroCapacity);
        }
        Ok(Self {
            by_id: RwLock::new(HashMap::with_capacity(config.table_capacity)),
            by_author: RwLock::new(HashMap::with_capacity(config.table_capacity)),
            by_keyword: RwLock::new(HashMap::with_capacity(config.table_capacity)),
            id_locks: IdLockTable::new(config.capacity),
            author_locks: KeyLockTable::with_capacity(config.table_capacity),
            keyword_locks: KeyLockTable::with_capacity(config.table_capacity),
        })
    }

    /// Inserts an article under its id and every author/keyword it lists.
    ///
    /// Returns `Ok(false)` without touching any index if the id is already
    /// present; the id stays immutable until removed. Ids outside the
    /// configured capacity are a contract violation and yield
    /// [`RepoError::IdOutOfCapacity`].
    pub fn insert_article(&self, article: Article) -> RepoResult<bool> {
        let slot = self.id_locks.lock_for(article.id())?;
        let _id_guard = slot.lock();

        if self.by_id.read().contains_key(&article.id()) {
            debug!(id = %article.id(), "insert rejected: duplicate id");
            return Ok(false);
        }

        let article = Arc::new(article);

        for name in article.authors() {
            let key_lock = self.author_locks.get_or_create(name);
            let _guard = key_lock.lock();
            self.by_author
                .write()
                .entry(name.clone())
                .or_default()
                .push(Arc::clone(&article));
        }

        for keyword in article.keywords() {
            let key_lock = self.keyword_locks.get_or_create(keyword);
            let _guard = key_lock.lock();
            self.by_keyword
                .write()
                .entry(keyword.clone())
                .or_default()
                .push(Arc::clone(&article));
        }

        // Published by id last: the article is findable by author/keyword
        // slightly before it is findable by id.
        let id = article.id();
        self.by_id.write().insert(id, article);
        trace!(%id, "article inserted");
        Ok(true)
    }

    /// Removes the article with the given id from all three indices.
    ///
    /// Returns `Ok(false)` if the id is not present. Buckets emptied by the
    /// removal are pruned from their index.
    pub fn remove_article(&self, id: ArticleId) -> RepoResult<bool> {
        let slot = self.id_locks.lock_for(id)?;
        let _id_guard = slot.lock();

        // Dropped from the id index first: the inverse of the insert
        // ordering, and the same relaxed window in the other direction.
        let Some(article) = self.by_id.write().remove(&id) else {
            debug!(%id, "remove rejected: not present");
            return Ok(false);
        };

        for keyword in article.keywords() {
            let key_lock = self.keyword_locks.get_or_create(keyword);
            let _guard = key_lock.lock();
            unlink(&self.by_keyword, keyword, &article);
        }

        for name in article.authors() {
            let key_lock = self.author_locks.get_or_create(name);
            let _guard = key_lock.lock();
            unlink(&self.by_author, name, &article);
        }

        trace!(%id, "article removed");
        Ok(true)
    }

    /// Returns every article listed under each of the given author names,
    /// concatenated in input order.
    ///
    /// Duplicate names yield duplicate results. Each name's segment is
    /// internally consistent, but there is no snapshot across names: a
    /// concurrent mutator may be reflected in one segment and not another.
    pub fn find_article_by_author<S: AsRef<str>>(&self, names: &[S]) -> Vec<Arc<Article>> {
        collect(&self.by_author, &self.author_locks, names)
    }

    /// Returns every article listed under each of the given keywords,
    /// concatenated in input order. Same semantics as
    /// [`Repository::find_article_by_author`].
    pub fn find_article_by_keyword<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<Arc<Article>> {
        collect(&self.by_keyword, &self.keyword_locks, keywords)
    }

    /// Checks cross-index consistency.
    ///
    /// Verifies that every article in the id index appears in the bucket of
    /// every author and keyword it lists, that every bucket entry is the
    /// same allocation as the id index's entry for its id (no stale
    /// references to removed articles), and that no id occurs twice.
    ///
    /// # Contract
    ///
    /// Must be called with no concurrent insert, remove, or find in flight.
    /// It takes no per-key locks of its own and is a diagnostic hook: a
    /// `false` result indicates a logic defect, not a recoverable runtime
    /// condition.
    pub fn validate(&self) -> bool {
        let by_id = self.by_id.read();
        let by_author = self.by_author.read();
        let by_keyword = self.by_keyword.read();

        let mut seen_ids = HashSet::with_capacity(by_id.len());
        let mut visited = 0usize;

        for article in by_id.values() {
            seen_ids.insert(article.id());
            visited += 1;

            for name in article.authors() {
                if !bucket_contains(&by_author, name, article) {
                    warn!(id = %article.id(), key = %name, "article missing from author index");
                    return false;
                }
            }
            for keyword in article.keywords() {
                if !bucket_contains(&by_keyword, keyword, article) {
                    warn!(id = %article.id(), key = %keyword, "article missing from keyword index");
                    return false;
                }
            }
        }

        for (name, bucket) in by_author.iter() {
            if !bucket_backed_by_id(&by_id, bucket) {
                warn!(key = %name, "stale article in author index");
                return false;
            }
        }
        for (keyword, bucket) in by_keyword.iter() {
            if !bucket_backed_by_id(&by_id, bucket) {
                warn!(key = %keyword, "stale article in keyword index");
                return false;
            }
        }

        if visited != seen_ids.len() {
            warn!(visited, distinct = seen_ids.len(), "duplicate id in id index");
            return false;
        }
        true
    }

    /// Returns the number of articles currently present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.read().len()
    }

    /// Returns `true` if no articles are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.read().is_empty()
    }

    /// Returns `true` if an article with the given id is present.
    #[must_use]
    pub fn contains(&self, id: ArticleId) -> bool {
        self.by_id.read().contains_key(&id)
    }

    /// Returns the configured id capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.id_locks.capacity()
    }

    /// Returns point-in-time counters for the repository.
    #[must_use]
    pub fn stats(&self) -> RepoStats {
        RepoStats {
            articles: self.by_id.read().len(),
            authors: self.by_author.read().len(),
            keywords: self.by_keyword.read().len(),
            author_locks: self.author_locks.len(),
            keyword_locks: self.keyword_locks.len(),
        }
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("capacity", &self.capacity())
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// Removes the bucket entry identical to `article` and prunes the bucket if
/// it becomes empty. Caller must hold the key's lock.
fn unlink(index: &KeyIndex, key: &str, article: &Arc<Article>) {
    let mut map = index.write();
    if let Some(bucket) = map.get_mut(key) {
        if let Some(pos) = bucket.iter().position(|entry| Arc::ptr_eq(entry, article)) {
            bucket.remove(pos);
        }
        if bucket.is_empty() {
            map.remove(key);
        }
    }
}

/// Copies the bucket for each key, under that key's lock, into one result.
fn collect<S: AsRef<str>>(index: &KeyIndex, locks: &KeyLockTable, keys: &[S]) -> Vec<Arc<Article>> {
    let mut results = Vec::new();
    for key in keys {
        let key = key.as_ref();
        // No lock means the key has never been written: nothing to read,
        // and reading without a lock is safe precisely because bucket
        // creation is the first write under a fresh key's lock.
        let Some(key_lock) = locks.get(key) else {
            continue;
        };
        let _guard = key_lock.lock();
        if let Some(bucket) = index.read().get(key) {
            results.extend(bucket.iter().cloned());
        }
    }
    results
}

fn bucket_contains(
    index: &HashMap<String, Vec<Arc<Article>>>,
    key: &str,
    article: &Arc<Article>,
) -> bool {
    index
        .get(key)
        .is_some_and(|bucket| bucket.iter().any(|entry| Arc::ptr_eq(entry, article)))
}

fn bucket_backed_by_id(
    by_id: &HashMap<ArticleId, Arc<Article>>,
    bucket: &[Arc<Article>],
) -> bool {
    bucket.iter().all(|entry| {
        by_id
            .get(&entry.id())
            .is_some_and(|current| Arc::ptr_eq(current, entry))
    })
}
