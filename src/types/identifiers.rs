use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Numeric post identifier. Assigned once at creation, never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    pub fn new(raw: i64) -> Self {
        PostId(raw)
    }

    /// Parse the id segment of a detail route (`/blog/<id>`).
    pub fn parse_route(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().map(PostId)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PostId {
    fn from(raw: i64) -> Self {
        PostId(raw)
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Issues timestamp-derived ids that never repeat.
///
/// The candidate is the clock's millisecond timestamp. If that is not above
/// the last issued id (two calls in the same millisecond, or a clock that went
/// backwards) the next integer is used instead. Candidates already taken by an
/// existing post are skipped.
///
/// Once the ids above the last issued one run out at `i64::MAX`, the highest
/// free id below is handed out instead. Uniqueness holds; ordering by creation
/// time no longer does.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_issued: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { last_issued: None }
    }

    /// Seed the generator so it issues ids above `floor` while any remain.
    pub fn observe(&mut self, floor: PostId) {
        if self.last_issued.map_or(true, |last| floor.0 > last) {
            self.last_issued = Some(floor.0);
        }
    }

    /// `None` only when every `i64` is taken.
    pub fn next_id<C, F>(&mut self, clock: &C, taken: F) -> Option<PostId>
    where
        C: Clock + ?Sized,
        F: Fn(PostId) -> bool,
    {
        let millis = clock.now().timestamp_millis();
        let mut candidate = match self.last_issued {
            Some(last) if millis <= last => last.checked_add(1),
            _ => Some(millis),
        };

        while let Some(c) = candidate {
            if !taken(PostId(c)) {
                self.last_issued = Some(c);
                return Some(PostId(c));
            }
            candidate = c.checked_add(1);
        }

        log::warn!("post ids exhausted at i64::MAX, reusing a lower free id");
        (i64::MIN..=i64::MAX)
            .rev()
            .map(PostId)
            .find(|id| !taken(*id))
    }
}
