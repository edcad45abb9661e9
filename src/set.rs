//! An interning token set assigning stable ids to unique strings.

use indexmap::map::Entry;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::{Error, Result};

/// Insertion-ordered token storage keyed with the Fx hasher.
type TokenMap = IndexMap<Token, TokenId, FxBuildHasher>;

/// `TokenSet` of unique strings with stable integer ids.
///
/// Tokens are interned: the first insertion of a string assigns the next free
/// id, and every later insertion of the same string returns that id again.
/// Ids grow monotonically and are never reassigned while the set lives, even
/// after removals; only [`reset`](TokenSet::reset) rewinds the counter.
///
/// ## Examples
///
/// ### Intern some tokens and look them up.
/// ```rust
/// use tokenset::prelude::*;
///
/// let mut set = TokenSet::new();
///
/// assert_eq!(set.add("jim"), 0);
/// assert_eq!(set.add("james"), 1);
/// assert_eq!(set.add("jim"), 0);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.token_to_id("james"), Some(1));
/// assert_eq!(set.id_to_token(1), Some("james"));
/// ```
///
/// ### Removal retires ids instead of recycling them.
/// ```rust
/// use tokenset::prelude::*;
///
/// let mut set = TokenSet::new();
/// set.add("jim");
/// set.add("james");
///
/// set.remove("james");
/// assert!(!set.contains("james"));
/// assert_eq!(set.add("jimmy"), 2);
/// ```
///
/// ### Sort the iteration order without touching ids.
/// ```rust
/// use tokenset::prelude::*;
///
/// let mut set: TokenSet = ["dog", "cat", "mouse"].into_iter().collect();
/// assert_eq!(set.snapshot(), ["dog", "cat", "mouse"]);
///
/// set.sort();
/// assert_eq!(set.snapshot(), ["cat", "dog", "mouse"]);
/// assert_eq!(set.token_to_id("dog"), Some(0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTokenSet")]
pub struct TokenSet {
    /// Present tokens and their assigned ids, in iteration order.
    tokens: TokenMap,
    /// Id the next newly interned token receives; never decremented by
    /// removals, only rewound by `reset`.
    next_id: TokenId,
}

impl TokenSet {
    /// Creates an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty token set with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: TokenMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            next_id: 0,
        }
    }

    /// Interns a token and returns its id.
    ///
    /// A token already in the set keeps the id it was first assigned, and the
    /// call changes nothing else. A new token receives the next free id; ids
    /// count up from 0 in first-insertion order. The argument is stored by
    /// value, the set never borrows from the caller.
    ///
    /// # Panics
    ///
    /// Panics if the id space is exhausted. Ids end at `u32::MAX - 1`; the
    /// top value stays free so the counter can always stand one past the
    /// highest assigned id.
    pub fn add(&mut self, token: impl Into<Token>) -> TokenId {
        match self.tokens.entry(token.into()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id = self.next_id;
                self.next_id = id.checked_add(1).expect("token id space exhausted");
                entry.insert(id);
                id
            }
        }
    }

    /// Inserts a token under an explicitly chosen id.
    ///
    /// Meant for rebuilding a set from previously assigned pairs; fresh
    /// interning goes through [`add`](TokenSet::add). Re-inserting an
    /// identical pair is an `Ok` no-op, while a token already held under a
    /// different id or an id already held by a different token is rejected.
    /// On success the id counter moves past `id`, so later `add` calls cannot
    /// collide with it; `u32::MAX` itself is rejected as out of range, since
    /// the counter has to stand one past the highest assigned id. The
    /// duplicate-id check walks the entries, same as
    /// [`id_to_token`](TokenSet::id_to_token).
    pub fn try_insert(&mut self, token: impl Into<Token>, id: TokenId) -> Result<()> {
        let token = token.into();
        if let Some(&existing) = self.tokens.get(&token) {
            if existing == id {
                return Ok(());
            }
            return Err(Error::TokenAlreadyInterned { token, existing });
        }
        if let Some(holder) = self.id_to_token(id) {
            return Err(Error::TokenIdAlreadyAssigned {
                id,
                token: holder.to_string(),
            });
        }
        let follower = id.checked_add(1).ok_or(Error::TokenIdOutOfRange { id })?;
        self.tokens.insert(token, id);
        self.next_id = self.next_id.max(follower);
        Ok(())
    }

    /// Returns true if `token` is currently in the set.
    pub fn contains(&self, token: impl AsRef<str>) -> bool {
        self.tokens.contains_key(token.as_ref())
    }

    /// Returns the id of `token` if it is currently in the set.
    pub fn token_to_id(&self, token: impl AsRef<str>) -> Option<TokenId> {
        self.tokens.get(token.as_ref()).copied()
    }

    /// Returns the token currently holding `id`.
    ///
    /// Walks the entries, so this is O(n) in the number of present tokens. An
    /// id whose token was removed answers `None` exactly like an id that was
    /// never assigned.
    pub fn id_to_token(&self, id: TokenId) -> Option<&str> {
        self.tokens
            .iter()
            .find_map(|(token, &tid)| (tid == id).then_some(token.as_str()))
    }

    /// Removes `token` from the set, returning the id it held.
    ///
    /// Removing an absent token is a quiet no-op. The remaining tokens keep
    /// their relative iteration order, and the freed id is not handed out
    /// again until [`reset`](TokenSet::reset).
    pub fn remove(&mut self, token: impl AsRef<str>) -> Option<TokenId> {
        self.tokens.shift_remove(token.as_ref())
    }

    /// Returns owned copies of all tokens in the current iteration order.
    ///
    /// The snapshot is independent of the set: mutating or dropping the set
    /// afterwards leaves it untouched.
    pub fn snapshot(&self) -> Vec<Token> {
        self.tokens.keys().cloned().collect()
    }

    /// Sorts the iteration order into ascending lexicographic token order.
    ///
    /// Comparison is byte-wise (`Ord` on `str`), not locale-aware collation.
    /// Only the iteration order moves; ids and membership stay as they are,
    /// and sorting an already sorted set changes nothing.
    pub fn sort(&mut self) {
        self.tokens.sort_unstable_keys();
    }

    /// Removes all tokens and rewinds the id counter to 0.
    ///
    /// The set stays usable; the next interned token receives id 0 again.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.next_id = 0;
    }

    /// Returns an iterator over `(token, id)` pairs in the set's current
    /// iteration order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.tokens.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "TokenSet with next id {} and the following tokens to ids:",
            self.next_id
        )?;
        for (token, id) in self.tokens.iter() {
            writeln!(f, "{:?} -> {:?}", token, id)?;
        }
        Ok(())
    }
}

/// Iterator over a set's `(token, id)` pairs in its current iteration order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, Token, TokenId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, TokenId);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(token, &id)| (token.as_str(), id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = (&'a str, TokenId);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<Token>> FromIterator<S> for TokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<Token>> Extend<S> for TokenSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for token in iter {
            self.add(token);
        }
    }
}

impl TryFrom<Vec<(Token, TokenId)>> for TokenSet {
    type Error = Error;

    fn try_from(pairs: Vec<(Token, TokenId)>) -> Result<Self, Self::Error> {
        let mut set = TokenSet::with_capacity(pairs.len());
        for (token, id) in pairs {
            set.try_insert(token, id)?;
        }
        Ok(set)
    }
}

impl TryFrom<&[(&str, TokenId)]> for TokenSet {
    type Error = Error;

    fn try_from(pairs: &[(&str, TokenId)]) -> Result<Self, Self::Error> {
        let mut set = TokenSet::with_capacity(pairs.len());
        for &(token, id) in pairs {
            set.try_insert(token, id)?;
        }
        Ok(set)
    }
}

/// Wire shape of a set before validation.
///
/// Decoded payloads land here and are rebuilt through
/// [`try_insert`](TokenSet::try_insert), so duplicate or out-of-range ids are
/// rejected. A counter lagging behind its ids is brought forward; one ahead
/// of them is kept, since removals legitimately leave gaps below it.
#[derive(Deserialize)]
struct RawTokenSet {
    tokens: TokenMap,
    next_id: TokenId,
}

impl TryFrom<RawTokenSet> for TokenSet {
    type Error = Error;

    fn try_from(raw: RawTokenSet) -> Result<Self, Self::Error> {
        let mut set = TokenSet::with_capacity(raw.tokens.len());
        for (token, id) in raw.tokens {
            set.try_insert(token, id)?;
        }
        set.next_id = set.next_id.max(raw.next_id);
        Ok(set)
    }
}
