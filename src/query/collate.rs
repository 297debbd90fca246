//! Locale-aware string ordering for the name column.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

/// Root-locale (CLDR) collator, loaded once per [`QueryEngine`](super::QueryEngine).
///
/// Accented letters sort next to their base letter, and case only breaks
/// ties between otherwise equal names (lowercase first). Falls back to
/// code-point order if the collation data fails to load.
#[derive(Clone)]
pub struct NameCollator {
    inner: Option<Rc<CollatorBorrowed<'static>>>,
}

impl NameCollator {
    pub fn root() -> Self {
        match Collator::try_new(Default::default(), CollatorOptions::default()) {
            Ok(collator) => Self {
                inner: Some(Rc::new(collator)),
            },
            Err(err) => {
                tracing::warn!(error = %err, "Collation data unavailable, using code-point order");
                Self { inner: None }
            }
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.inner {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameCollator")
            .field("locale_data", &self.inner.is_some())
            .finish()
    }
}
