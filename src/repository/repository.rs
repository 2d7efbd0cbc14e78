use std::collections::BTreeSet;

use thiserror::Error;

use crate::config::StoreConfig;
use crate::post::{DraftError, Post, PostDraft};
use crate::repository::dataset::bundled_posts;
use crate::repository::versioning::PostsPayload;
use crate::search::related_posts;
use crate::storage::{KeyValueStore, StorageError};
use crate::types::identifiers::{Clock, IdGenerator, PostId, SystemClock};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Invalid post: {0}")]
    Validation(#[from] DraftError),
    #[error("No unused post id left")]
    IdsExhausted,
}

/// Result of a write. The in-memory list is already updated; `warning` is
/// set when the store refused the write and the change lives only for this
/// session.
#[derive(Debug)]
pub struct Saved<T> {
    pub value: T,
    pub warning: Option<StorageError>,
}

impl<T> Saved<T> {
    pub fn is_durable(&self) -> bool {
        self.warning.is_none()
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Persisted,
    Bundled,
}

/// Single source of truth for the post list.
///
/// Single-threaded: every operation runs to completion inside one UI event,
/// so there is no locking. Every mutation rewrites the full list under
/// `config.posts_key`.
pub struct ContentRepository<S, C = SystemClock> {
    store: S,
    clock: C,
    config: StoreConfig,
    defaults: Vec<Post>,
    posts: Vec<Post>,
    ids: IdGenerator,
    source: LoadSource,
}

impl<S: KeyValueStore> ContentRepository<S, SystemClock> {
    /// Open with the wall clock, default config and the bundled dataset.
    pub fn open(store: S) -> Self {
        Self::with_parts(store, SystemClock, StoreConfig::default(), bundled_posts())
    }
}

impl<S, C> ContentRepository<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    pub fn with_parts(store: S, clock: C, config: StoreConfig, defaults: Vec<Post>) -> Self {
        let mut repo = Self {
            store,
            clock,
            config,
            defaults,
            posts: Vec::new(),
            ids: IdGenerator::new(),
            source: LoadSource::Bundled,
        };
        repo.load();
        repo
    }

    /// Re-read the persisted list, falling back to the bundled dataset.
    ///
    /// Never fails: a missing, unreadable or corrupt entry is logged and
    /// treated as absent.
    pub fn load(&mut self) -> &[Post] {
        let persisted = match self.store.get(&self.config.posts_key) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("reading persisted posts failed, using bundled dataset: {e}");
                None
            }
        };

        let (posts, source) = match persisted.as_deref().map(PostsPayload::decode) {
            Some(Ok(posts)) => (posts, LoadSource::Persisted),
            Some(Err(e)) => {
                log::warn!("persisted posts are unusable, using bundled dataset: {e}");
                (self.defaults.clone(), LoadSource::Bundled)
            }
            None => (self.defaults.clone(), LoadSource::Bundled),
        };

        self.posts = dedupe_ids(posts);
        self.source = source;
        if let Some(max) = self.posts.iter().map(|p| p.id).max() {
            self.ids.observe(max);
        }

        log::debug!("loaded {} posts from {:?}", self.posts.len(), self.source);
        &self.posts
    }

    pub fn source(&self) -> LoadSource {
        self.source
    }

    /// Stored order. Not sorted; see [`crate::search::sort_most_recent`].
    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Detail-view lookup from the raw route segment.
    pub fn find_by_route(&self, raw: &str) -> Option<&Post> {
        PostId::parse_route(raw).and_then(|id| self.get(id))
    }

    /// Posts sharing a tag with `id`, capped at `config.related_limit`.
    pub fn related(&self, id: PostId) -> Vec<&Post> {
        related_posts(&self.posts, id, self.config.related_limit)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create(&mut self, draft: PostDraft) -> Result<Saved<Post>, RepositoryError> {
        let posts = &self.posts;
        let id = self
            .ids
            .next_id(&self.clock, |candidate| posts.iter().any(|p| p.id == candidate))
            .ok_or(RepositoryError::IdsExhausted)?;

        let post = Post::from_draft(id, draft, &self.config, self.clock.today())?;
        self.posts.insert(0, post.clone());
        log::debug!("created post {id}");

        let warning = self.persist();
        Ok(Saved { value: post, warning })
    }

    /// Replace every field of post `id` with the draft as given; no defaults
    /// apply, and a draft without a date keeps the post's date. Returns `None`
    /// (and writes nothing) when no such post exists.
    pub fn update(
        &mut self,
        id: PostId,
        draft: PostDraft,
    ) -> Result<Saved<Option<Post>>, RepositoryError> {
        draft.validate()?;

        let Some(slot) = self.posts.iter_mut().find(|p| p.id == id) else {
            log::debug!("update of unknown post {id} ignored");
            return Ok(Saved { value: None, warning: None });
        };
        let post = slot.replaced_by(draft)?;
        *slot = post.clone();
        log::debug!("updated post {id}");

        let warning = self.persist();
        Ok(Saved { value: Some(post), warning })
    }

    /// Remove post `id`, returning it. Deleting an unknown id is a no-op.
    pub fn delete(&mut self, id: PostId) -> Saved<Option<Post>> {
        let Some(index) = self.posts.iter().position(|p| p.id == id) else {
            log::debug!("delete of unknown post {id} ignored");
            return Saved { value: None, warning: None };
        };
        let removed = self.posts.remove(index);
        log::debug!("deleted post {id}");

        let warning = self.persist();
        Saved { value: Some(removed), warning }
    }

    /// Drop local edits and return to the bundled dataset.
    pub fn reset(&mut self) -> Saved<()> {
        let warning = self.store.remove(&self.config.posts_key).err();
        if let Some(e) = &warning {
            log::warn!("clearing persisted posts failed: {e}");
        }
        self.posts = dedupe_ids(self.defaults.clone());
        self.source = LoadSource::Bundled;
        Saved { value: (), warning }
    }

    fn persist(&mut self) -> Option<StorageError> {
        let encoded = match PostsPayload::encode(&self.posts) {
            Ok(encoded) => encoded,
            Err(e) => {
                log::error!("encoding posts failed, keeping in-memory list only: {e}");
                return Some(StorageError::Encode(e));
            }
        };

        match self.store.set(&self.config.posts_key, &encoded) {
            Ok(()) => {
                self.source = LoadSource::Persisted;
                None
            }
            Err(e) => {
                log::warn!("persisting posts failed, keeping in-memory list only: {e}");
                Some(e)
            }
        }
    }
}

// Keeps the first occurrence of each id.
fn dedupe_ids(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = BTreeSet::new();
    let before = posts.len();
    let unique: Vec<Post> = posts.into_iter().filter(|p| seen.insert(p.id)).collect();
    if unique.len() != before {
        log::warn!("dropped {} posts with duplicate ids", before - unique.len());
    }
    unique
}
