use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// A finite collection whose emptiness can be decided in O(1).
///
/// Lazy iterators do not implement this; `precond::is_not_empty_iter`
/// peeks them instead.
pub trait Sequence {
    /// `true` when the sequence holds no elements.
    fn has_no_elements(&self) -> bool;
}

impl Sequence for str {
    fn has_no_elements(&self) -> bool {
        self.is_empty()
    }
}

impl Sequence for String {
    fn has_no_elements(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Sequence for [T] {
    fn has_no_elements(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    fn has_no_elements(&self) -> bool {
        N == 0
    }
}

impl<T> Sequence for Vec<T> {
    fn has_no_elements(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Sequence for VecDeque<T> {
    fn has_no_elements(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Sequence for LinkedList<T> {
    fn has_no_elements(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Sequence for HashMap<K, V, S> {
    fn has_no_elements(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Sequence for HashSet<T, S> {
    fn has_no_elements(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Sequence for BTreeMap<K, V> {
    fn has_no_elements(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Sequence for BTreeSet<T> {
    fn has_no_elements(&self) -> bool {
        self.is_empty()
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    fn has_no_elements(&self) -> bool {
        (**self).has_no_elements()
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    fn has_no_elements(&self) -> bool {
        (**self).has_no_elements()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    fn has_no_elements(&self) -> bool {
        (**self).has_no_elements()
    }
}

impl<S: Sequence + ?Sized> Sequence for Rc<S> {
    fn has_no_elements(&self) -> bool {
        (**self).has_no_elements()
    }
}

impl<S: Sequence + ?Sized> Sequence for Arc<S> {
    fn has_no_elements(&self) -> bool {
        (**self).has_no_elements()
    }
}

impl<B: Sequence + ToOwned + ?Sized> Sequence for Cow<'_, B> {
    fn has_no_elements(&self) -> bool {
        (**self).has_no_elements()
    }
}
