//! Stress utilities for concurrent workloads.
//!
//! Drives N threads of inserts/removes with disjoint id ranges but shared
//! author/keyword pools, then reports throughput. Callers are expected to
//! run `validate()` once all workers have joined.

use articlerep_core::{Article, ArticleId, Repository};
use rand::Rng;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Result of a stress run.
#[derive(Debug, Clone)]
pub struct StressResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Operations that reported success (`Ok(true)` or a completed find).
    pub successful_ops: usize,
    /// Operations that reported `Ok(false)` or an error.
    pub failed_ops: usize,
    /// Total duration.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_second: f64,
}

impl StressResult {
    /// Creates a new result.
    #[must_use]
    pub fn new(successful: usize, failed: usize, duration: Duration) -> Self {
        let total = successful + failed;
        let ops_per_second = if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Self {
            total_ops: total,
            successful_ops: successful,
            failed_ops: failed,
            duration,
            ops_per_second,
        }
    }

    /// Prints a summary of the run.
    pub fn print_summary(&self, name: &str) {
        println!("\n=== {} ===", name);
        println!("Total operations: {}", self.total_ops);
        println!("Successful: {}", self.successful_ops);
        println!("Failed: {}", self.failed_ops);
        println!("Duration: {:?}", self.duration);
        println!("Throughput: {:.2} ops/sec", self.ops_per_second);
    }
}

/// Configuration for stress runs.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Number of concurrent worker threads.
    pub threads: usize,
    /// Articles inserted per thread (ids are disjoint across threads).
    pub articles_per_thread: usize,
    /// Size of the shared author-name pool.
    pub author_pool: usize,
    /// Size of the shared keyword pool.
    pub keyword_pool: usize,
    /// Author names listed by each article.
    pub authors_per_article: usize,
    /// Keywords listed by each article.
    pub keywords_per_article: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            threads: 4,
            articles_per_thread: 1_000,
            author_pool: 16,
            keyword_pool: 8,
            authors_per_article: 2,
            keywords_per_article: 2,
        }
    }
}

impl StressConfig {
    /// Id capacity a repository needs for this configuration.
    #[must_use]
    pub fn required_capacity(&self) -> usize {
        self.threads * self.articles_per_thread
    }
}

/// Builds an article whose keys are drawn from the shared pools.
///
/// Key picks start at a rotating offset so concurrent workers overlap on
/// the same names without every article listing the same ones.
fn pooled_article(id: u32, config: &StressConfig) -> Article {
    let authors: Vec<String> = (0..config.authors_per_article)
        .map(|i| format!("author-{}", (id as usize + i) % config.author_pool))
        .collect();
    let keywords: Vec<String> = (0..config.keywords_per_article)
        .map(|i| format!("keyword-{}", (id as usize + i) % config.keyword_pool))
        .collect();
    Article::new(ArticleId::new(id), authors, keywords)
}

/// Runs concurrent inserts with disjoint ids and overlapping keys.
///
/// After the run, the repository holds exactly
/// `threads * articles_per_thread` articles and must validate.
pub fn stress_concurrent_inserts(repo: &Arc<Repository>, config: &StressConfig) -> StressResult {
    assert!(
        repo.capacity() >= config.required_capacity(),
        "repository too small for stress configuration"
    );

    let start = Instant::now();
    let handles: Vec<_> = (0..config.threads)
        .map(|t| {
            let repo = Arc::clone(repo);
            let config = config.clone();
            thread::spawn(move || {
                let mut successful = 0usize;
                let mut failed = 0usize;
                for i in 0..config.articles_per_thread {
                    let id = (t * config.articles_per_thread + i) as u32;
                    match repo.insert_article(pooled_article(id, &config)) {
                        Ok(true) => successful += 1,
                        Ok(false) | Err(_) => failed += 1,
                    }
                }
                (successful, failed)
            })
        })
        .collect();

    let mut successful = 0usize;
    let mut failed = 0usize;
    for handle in handles {
        let (s, f) = handle.join().expect("stress worker panicked");
        successful += s;
        failed += f;
    }

    StressResult::new(successful, failed, start.elapsed())
}

/// Runs a mixed insert/remove/find workload.
///
/// Each worker inserts its own id range, randomly removes some of what it
/// inserted, and interleaves lookups on the shared pools. Ids remain
/// disjoint across threads, so every insert and every first remove of an
/// id must succeed.
pub fn stress_mixed_operations(repo: &Arc<Repository>, config: &StressConfig) -> StressResult {
    assert!(
        repo.capacity() >= config.required_capacity(),
        "repository too small for stress configuration"
    );

    let start = Instant::now();
    let handles: Vec<_> = (0..config.threads)
        .map(|t| {
            let repo = Arc::clone(repo);
            let config = config.clone();
            thread::spawn(move || {
                let mut rng = rand::thread_rng();
                let mut successful = 0usize;
                let mut failed = 0usize;
                for i in 0..config.articles_per_thread {
                    let id = (t * config.articles_per_thread + i) as u32;
                    match repo.insert_article(pooled_article(id, &config)) {
                        Ok(true) => successful += 1,
                        Ok(false) | Err(_) => failed += 1,
                    }

                    if rng.gen_bool(0.5) {
                        match repo.remove_article(ArticleId::new(id)) {
                            Ok(true) => successful += 1,
                            Ok(false) | Err(_) => failed += 1,
                        }
                    }

                    if rng.gen_bool(0.25) {
                        let author = format!("author-{}", rng.gen_range(0..config.author_pool));
                        repo.find_article_by_author(&[author]);
                        successful += 1;
                    }
                }
                (successful, failed)
            })
        })
        .collect();

    let mut successful = 0usize;
    let mut failed = 0usize;
    for handle in handles {
        let (s, f) = handle.join().expect("stress worker panicked");
        successful += s;
        failed += f;
    }

    StressResult::new(successful, failed, start.elapsed())
}
